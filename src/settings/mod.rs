//! The editor's own configuration, separate from the Waybar document it
//! edits.
//!
//! Settings live in `~/.config/barforge/config.toml`; a missing file means
//! defaults. The UI preference subset (theme, collapsed sidebar) is
//! persisted here too, deliberately outside the editable document and its
//! undo history.

mod log_level;
mod paths;

pub use log_level::LogLevel;
pub use paths::AppPaths;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::editor::StoreOptions;
use crate::gateway::{GatewayError, WaybarPaths};
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::{BarforgeError, Result};

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralSettings {
    /// Logging verbosity.
    pub log_level: LogLevel,
}

/// Undo history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undo snapshots retained.
    pub limit: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Automatic validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Delay in milliseconds between the last mutation and the automatic
    /// validation pass.
    pub debounce_ms: u64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

/// Overrides for the Waybar file locations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WaybarSettings {
    /// Configuration directory override.
    pub config_dir: Option<PathBuf>,
    /// Native configuration file override.
    pub config_file: Option<PathBuf>,
    /// Stylesheet override.
    pub style_file: Option<PathBuf>,
}

/// Editor UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the desktop.
    #[default]
    System,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

/// Small persisted UI preference subset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiPreferences {
    /// Color theme.
    pub theme: Theme,
    /// Whether the module sidebar is collapsed.
    pub sidebar_collapsed: bool,
}

/// Complete editor settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// General application settings.
    pub general: GeneralSettings,

    /// Undo history settings.
    pub history: HistorySettings,

    /// Automatic validation settings.
    pub validation: ValidationSettings,

    /// Waybar path overrides.
    pub waybar: WaybarSettings,

    /// Persisted UI preferences.
    pub ui: UiPreferences,
}

impl Settings {
    /// Loads settings from the default location; a missing file yields
    /// defaults.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::settings_file()?)
    }

    /// Loads settings from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BarforgeError::Settings {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }

    /// Writes settings to an explicit path.
    ///
    /// # Errors
    /// Returns an error on serialization or write failure.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| BarforgeError::Settings {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Store options derived from these settings.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            history_limit: self.history.limit,
            validation_debounce: Duration::from_millis(self.validation.debounce_ms),
        }
    }

    /// Waybar paths with any configured overrides applied.
    ///
    /// # Errors
    /// Returns [`GatewayError::Environment`] when no base path can be
    /// resolved and no override covers it.
    pub fn waybar_paths(&self) -> std::result::Result<WaybarPaths, GatewayError> {
        let mut paths = match &self.waybar.config_dir {
            Some(dir) => WaybarPaths {
                config_dir: dir.clone(),
                config_file: dir.join("config.jsonc"),
                style_file: dir.join("style.css"),
            },
            None => WaybarPaths::defaults()?,
        };

        if let Some(config_file) = &self.waybar.config_file {
            paths.config_file = config_file.clone();
        }
        if let Some(style_file) = &self.waybar.style_file {
            paths.style_file = style_file.clone();
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests;
