//! Coordinating store owning the live configuration document.
//!
//! The [`EditorStore`] is the only place entities are created or mutated: it
//! maintains `order` sequences, wires every mutation through the history
//! engine, broadcasts change events, debounces automatic validation, and
//! orchestrates transformation + validation + the injected [`Gateway`] on
//! load and save. The presentation layer sees this narrow surface and
//! nothing else.

mod bars;
mod debounce;
mod modules;
mod persistence;
mod store;
mod styles;

pub use debounce::DEFAULT_VALIDATION_DEBOUNCE;
pub use persistence::{ImportOutcome, LoadOptions, LoadOutcome, SaveOutcome, SaveWarning};
pub use store::{EditorStore, StoreOptions};

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::model::ModulePosition;
use crate::transform::TransformError;
use crate::validate::ValidationReport;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// No bar with the given id exists.
    #[error("unknown bar '{id}'")]
    UnknownBar {
        /// The id that failed to resolve.
        id: String,
    },

    /// No module with the given id exists in the addressed bar.
    #[error("unknown module '{id}'")]
    UnknownModule {
        /// The id that failed to resolve.
        id: String,
    },

    /// No style with the given id exists.
    #[error("unknown style '{id}'")]
    UnknownStyle {
        /// The id that failed to resolve.
        id: String,
    },

    /// A reorder request does not list exactly the entities it permutes.
    #[error("reorder list does not match the {position} modules of bar '{bar_id}'")]
    ReorderMismatch {
        /// The addressed bar.
        bar_id: String,
        /// The zone being reordered.
        position: ModulePosition,
    },

    /// A reorder request does not list exactly the existing styles.
    #[error("reorder list does not match the existing styles")]
    StyleReorderMismatch,

    /// The document failed validation; the full report is attached.
    #[error("validation failed with {} error(s)", .report.message_count())]
    Validation {
        /// Every finding, keyed by field path.
        report: ValidationReport,
    },

    /// A transformation to or from the native format failed.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// A gateway call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Reading or writing the local session file failed.
    #[error("session persistence failed at '{path}': {details}")]
    Session {
        /// The session file path.
        path: std::path::PathBuf,
        /// Error details.
        details: String,
    },

    /// The state lock could not be acquired.
    #[error("failed to acquire {lock_type} lock on editor state")]
    Lock {
        /// Which lock failed (read or write).
        lock_type: &'static str,
    },
}

/// Events broadcast to store subscribers.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// A mutation was applied to the document.
    Mutated {
        /// Name of the operation, e.g. `add_module`.
        operation: &'static str,
    },

    /// A debounced validation pass finished.
    Validated {
        /// The resulting report.
        report: ValidationReport,
    },

    /// The document was replaced by a load, reset, or session restore.
    Replaced,

    /// A save completed (possibly with warnings).
    Saved {
        /// Number of non-fatal warnings the save produced.
        warnings: usize,
    },
}

#[cfg(test)]
mod tests;
