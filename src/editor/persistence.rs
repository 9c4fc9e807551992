//! Load, save, import/export, and session continuity.

use std::path::Path;

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::gateway::WaybarPaths;
use crate::model::{ConfigMetadata, WaybarConfig};
use crate::transform::{
    TransformError, TransformWarning, config_to_native, merge_imported_bar, native_to_bars,
    parse_jsonc, parse_stylesheet, serialize_styles, with_generated_header,
};
use crate::validate::{ValidationReport, validate_config};

use super::store::EditorStore;
use super::{EditorError, StoreEvent};

/// Options controlling a load.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Load a well-formed but invalid document anyway. Parse errors still
    /// abort regardless.
    pub ignore_validation_errors: bool,
}

/// What a load brought back besides the document itself.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Non-fatal findings from the transformation.
    pub warnings: Vec<TransformWarning>,
    /// Why the stylesheet could not be read, when it could not; reading the
    /// main configuration failing aborts the load instead.
    pub stylesheet_error: Option<String>,
    /// Validation result for the loaded document.
    pub validation: ValidationReport,
}

/// Non-fatal problems during an otherwise successful save.
#[derive(Debug, Clone, Error)]
pub enum SaveWarning {
    /// The configuration was written but the stylesheet was not.
    #[error("stylesheet write failed: {0}")]
    Stylesheet(String),
    /// Everything was written but Waybar could not be signalled.
    #[error("saved, but reloading waybar failed: {0}")]
    Reload(String),
}

/// Result of a successful save.
///
/// "Saved but the renderer was not reloaded" is a valid terminal state
/// distinct from both full success and failure; callers inspect `warnings`
/// to tell the difference.
#[derive(Debug, Default)]
pub struct SaveOutcome {
    /// Non-fatal problems encountered after the configuration was written.
    pub warnings: Vec<SaveWarning>,
}

impl SaveOutcome {
    /// Whether the save completed without any warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Result of importing native configuration text.
#[derive(Debug)]
pub struct ImportOutcome {
    /// Ids of the bars now present in the document, in imported order.
    pub bar_ids: Vec<String>,
    /// Non-fatal findings from the transformation.
    pub warnings: Vec<TransformWarning>,
}

impl EditorStore {
    /// Loads the native files, replacing the document wholesale.
    ///
    /// The main configuration is required: a read or parse failure aborts
    /// the load. The stylesheet is optional: a read failure is downgraded to
    /// a warning and the document loads without styles. History is cleared,
    /// since snapshots of the previous document no longer apply.
    ///
    /// # Errors
    /// Returns [`EditorError::Gateway`] when the configuration cannot be
    /// read, [`EditorError::Transform`] when it cannot be parsed, and
    /// [`EditorError::Validation`] when the result is invalid and
    /// `options.ignore_validation_errors` is not set.
    #[instrument(skip(self, paths))]
    pub async fn load(
        &self,
        paths: &WaybarPaths,
        options: LoadOptions,
    ) -> Result<LoadOutcome, EditorError> {
        let content = self.gateway.load_config(&paths.config_file).await?;
        let value = parse_jsonc(&content)?;
        let (bars, mut warnings) = native_to_bars(&value, None)?;

        let mut stylesheet_error = None;
        let styles = match self.gateway.load_style(&paths.style_file).await {
            Ok(css) => {
                let (styles, css_warnings) = parse_stylesheet(&css);
                warnings.extend(css_warnings);
                styles
            }
            Err(error) => {
                warn!(%error, "stylesheet unavailable, loading without styles");
                stylesheet_error = Some(error.to_string());
                Vec::new()
            }
        };

        let document = WaybarConfig {
            bars,
            styles,
            metadata: ConfigMetadata::now(),
        };

        let validation = validate_config(&document);
        if !validation.success() && !options.ignore_validation_errors {
            return Err(EditorError::Validation { report: validation });
        }

        self.replace(document)?;
        info!(
            warnings = warnings.len(),
            errors = validation.message_count(),
            "loaded configuration"
        );

        Ok(LoadOutcome {
            warnings,
            stylesheet_error,
            validation,
        })
    }

    /// Validates and writes the document to the native files, then signals
    /// Waybar to reload.
    ///
    /// Validation runs strictly first: any error aborts before any I/O. The
    /// configuration write is fatal on failure; stylesheet write and
    /// renderer reload failures are downgraded to warnings on the outcome.
    ///
    /// # Errors
    /// Returns [`EditorError::Validation`] with the full report when the
    /// document is invalid, and [`EditorError::Gateway`] when the
    /// configuration write fails.
    #[instrument(skip(self, paths))]
    pub async fn save(&self, paths: &WaybarPaths) -> Result<SaveOutcome, EditorError> {
        let document = self.current();

        let report = validate_config(&document);
        if !report.success() {
            return Err(EditorError::Validation { report });
        }

        let native = config_to_native(&document)?;
        let json = serde_json::to_string_pretty(&native).map_err(|e| {
            EditorError::Transform(TransformError::Serialize {
                what: "native configuration".to_string(),
                details: e.to_string(),
            })
        })?;
        let config_text = with_generated_header(&json);
        let stylesheet = serialize_styles(&document.styles);

        self.gateway
            .save_config(&paths.config_file, &config_text)
            .await?;

        let mut outcome = SaveOutcome::default();

        if let Err(error) = self.gateway.save_style(&paths.style_file, &stylesheet).await {
            warn!(%error, "stylesheet write failed after config write");
            outcome.warnings.push(SaveWarning::Stylesheet(error.to_string()));
        }

        if let Err(error) = self.gateway.reload_renderer().await {
            warn!(%error, "renderer reload failed after save");
            outcome.warnings.push(SaveWarning::Reload(error.to_string()));
        }

        self.touch_metadata()?;
        let _ = self.events.send(StoreEvent::Saved {
            warnings: outcome.warnings.len(),
        });
        info!(warnings = outcome.warnings.len(), "saved configuration");

        Ok(outcome)
    }

    /// Imports native configuration text, merging each contained bar into
    /// the document (matching by name, then id; otherwise appending). The
    /// whole import is captured as a single undo step.
    ///
    /// # Errors
    /// Returns [`EditorError::Transform`] when the text cannot be parsed.
    pub fn import_native(&self, content: &str) -> Result<ImportOutcome, EditorError> {
        let value = parse_jsonc(content)?;
        let (bars, warnings) = native_to_bars(&value, None)?;

        let bar_ids = self.mutate("import_native", move |config| {
            Ok(bars
                .into_iter()
                .map(|bar| merge_imported_bar(config, bar))
                .collect())
        })?;

        Ok(ImportOutcome { bar_ids, warnings })
    }

    /// The document in native JSON form, for preview and export.
    ///
    /// # Errors
    /// Returns [`EditorError::Transform`] if serialization fails.
    pub fn export_native(&self) -> Result<String, EditorError> {
        let native = config_to_native(&self.current())?;
        serde_json::to_string_pretty(&native).map_err(|e| {
            EditorError::Transform(TransformError::Serialize {
                what: "native configuration".to_string(),
                details: e.to_string(),
            })
        })
    }

    /// The document's stylesheet in CSS form.
    pub fn export_stylesheet(&self) -> String {
        serialize_styles(&self.current().styles)
    }

    /// Replaces the document with an empty one and clears history.
    ///
    /// # Errors
    /// Returns [`EditorError::Lock`] if the state lock is unavailable.
    pub fn reset(&self) -> Result<(), EditorError> {
        self.replace(WaybarConfig::default())
    }

    /// Writes the live document to the local session file.
    ///
    /// # Errors
    /// Returns [`EditorError::Session`] on serialization or write failure.
    pub fn persist_session(&self, path: &Path) -> Result<(), EditorError> {
        let document = self.current();
        let json = serde_json::to_string_pretty(&document).map_err(|e| EditorError::Session {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EditorError::Session {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        }
        std::fs::write(path, json).map_err(|e| EditorError::Session {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }

    /// Restores the document from the local session file, if one exists.
    ///
    /// Returns whether a session was restored. A missing file is not an
    /// error; a corrupt one is.
    ///
    /// # Errors
    /// Returns [`EditorError::Session`] when the file exists but cannot be
    /// read or decoded.
    pub fn restore_session(&self, path: &Path) -> Result<bool, EditorError> {
        if !path.exists() {
            return Ok(false);
        }

        let json = std::fs::read_to_string(path).map_err(|e| EditorError::Session {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        let document: WaybarConfig =
            serde_json::from_str(&json).map_err(|e| EditorError::Session {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        self.replace(document)?;
        Ok(true)
    }

    fn touch_metadata(&self) -> Result<(), EditorError> {
        let mut state = self.write_state()?;
        state.touch();
        Ok(())
    }
}
