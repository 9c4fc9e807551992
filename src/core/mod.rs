//! Crate-level error type and result alias.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::editor::EditorError;
use crate::gateway::GatewayError;

/// Top-level error for application entry points.
///
/// Subsystems keep their own error enums; this type exists so binaries and
/// embedders get one conversion target.
#[derive(Error, Debug)]
pub enum BarforgeError {
    /// The editor settings file is unreadable or malformed.
    #[error("invalid settings at '{path}': {details}")]
    Settings {
        /// Settings file path.
        path: PathBuf,
        /// What went wrong.
        details: String,
    },

    /// Standard I/O operation error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A store operation failed.
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// A gateway operation failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// A specialized `Result` type for barforge operations.
pub type Result<T> = std::result::Result<T, BarforgeError>;
