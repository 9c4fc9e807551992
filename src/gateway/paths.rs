use std::env;
use std::path::{Path, PathBuf};

use super::GatewayError;

/// Locations of the Waybar configuration files.
///
/// Resolution follows the XDG Base Directory specification: the directory is
/// `$XDG_CONFIG_HOME/waybar`, falling back to `$HOME/.config/waybar`. Waybar
/// accepts either `config.jsonc` or a bare `config` file; detection prefers
/// the former.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaybarPaths {
    /// Directory containing the Waybar configuration.
    pub config_dir: PathBuf,
    /// Path to the native configuration file.
    pub config_file: PathBuf,
    /// Path to the stylesheet.
    pub style_file: PathBuf,
}

impl WaybarPaths {
    /// The default paths for this environment, without touching the disk.
    ///
    /// # Errors
    /// Returns [`GatewayError::Environment`] if neither `XDG_CONFIG_HOME`
    /// nor `HOME` is set.
    pub fn defaults() -> Result<Self, GatewayError> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| GatewayError::Environment {
                details: "neither XDG_CONFIG_HOME nor HOME is set".to_string(),
            })?;

        let config_dir = PathBuf::from(config_home).join("waybar");
        Ok(Self {
            config_file: config_dir.join("config.jsonc"),
            style_file: config_dir.join("style.css"),
            config_dir,
        })
    }

    /// Picks the configuration file that actually exists in a directory,
    /// trying `config.jsonc` before `config`.
    pub fn detect_config_file(config_dir: &Path) -> Option<PathBuf> {
        ["config.jsonc", "config"]
            .into_iter()
            .map(|candidate| config_dir.join(candidate))
            .find(|path| path.exists())
    }

    /// Whether the configuration directory exists.
    pub fn config_dir_exists(&self) -> bool {
        self.config_dir.exists()
    }
}
