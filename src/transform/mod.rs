//! Bidirectional transformation between the domain model and Waybar's
//! native file formats.
//!
//! The native configuration is a JSONC object whose top-level keys are either
//! bar-level settings, the three `modules-left/center/right` id arrays, or a
//! module's configuration keyed by its native id. The stylesheet is plain
//! CSS. Both directions share one native id codec so ids always round-trip.
//!
//! Problems that do not make the input unusable (orphaned module configs,
//! unparsable declarations) are reported as [`TransformWarning`]s instead of
//! errors; callers surface them without aborting.

mod bar;
mod css;
mod import;
mod jsonc;
mod native_id;

pub use bar::{KNOWN_BAR_KEYS, bar_to_native, config_to_native, native_to_bars};
pub use css::{parse_stylesheet, serialize_styles};
pub use import::merge_imported_bar;
pub use jsonc::{parse_jsonc, strip_jsonc_comments, with_generated_header};
pub use native_id::{NativeId, decode_native_id, encode_native_id, module_native_id};

use thiserror::Error;

/// Errors that abort a transformation.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The domain model could not be serialized to native JSON.
    #[error("failed to serialize {what}: {details}")]
    Serialize {
        /// What was being serialized (e.g. "bar config").
        what: String,
        /// Serializer error details.
        details: String,
    },

    /// The native configuration is not valid JSON (after comment stripping).
    #[error("failed to parse configuration JSON: {details}")]
    Parse {
        /// Parser error details.
        details: String,
    },

    /// A known bar-level key holds a value of the wrong shape.
    #[error("invalid value for bar key '{key}': {details}")]
    BarField {
        /// The offending native key.
        key: String,
        /// Deserializer error details.
        details: String,
    },
}

/// Non-fatal findings produced while transforming.
///
/// Warnings never prevent a load or save; they exist so the caller can show
/// the user what was dropped or skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformWarning {
    /// A top-level config key is neither a bar-level key nor referenced by
    /// any module id list.
    #[error("module configuration '{key}' is not referenced by any module list")]
    OrphanModuleConfig {
        /// The unreferenced native key.
        key: String,
    },

    /// A module id list entry uses a type tag outside the known vocabulary.
    #[error("module id '{id}' uses an unknown type and was skipped")]
    UnknownModuleType {
        /// The native id that could not be decoded.
        id: String,
    },

    /// A module id list entry is not a string.
    #[error("ignored a non-string entry in '{key}'")]
    InvalidModuleListEntry {
        /// The id-array key containing the entry.
        key: String,
    },

    /// A module's configuration value is not an object; an empty config is
    /// used instead.
    #[error("configuration for '{id}' is not an object and was ignored")]
    InvalidModuleConfig {
        /// The native id whose config was ignored.
        id: String,
    },

    /// A stylesheet declaration had no `:` separator.
    #[error("stylesheet declaration '{segment}' has no ':' and was skipped")]
    CssMissingColon {
        /// The declaration text that was skipped.
        segment: String,
    },

    /// A block opened without any selector text before the brace.
    #[error("style block at offset {offset} has no selector and was skipped")]
    CssMissingSelector {
        /// Character offset of the opening brace.
        offset: usize,
    },

    /// A style block contained no usable declarations.
    #[error("style block '{selector}' contains no declarations")]
    CssEmptyBlock {
        /// The selector of the empty block.
        selector: String,
    },

    /// A style block contains nested blocks, which the structured style
    /// model cannot represent.
    #[error("style block '{selector}' contains nested blocks and was skipped")]
    CssNestedBlock {
        /// The selector of the skipped block.
        selector: String,
    },

    /// The stylesheet was non-empty but produced no styles at all.
    #[error("stylesheet contained no parsable style blocks")]
    CssNothingParsed,
}
