//! File and process gateway between the editor and the system.
//!
//! Everything the editor needs from the outside world goes through the
//! [`Gateway`] trait: reading and writing the Waybar files, managing
//! timestamped backups, signalling the Waybar process, and detecting the
//! environment. The store receives a gateway by injection, so tests swap in
//! a scripted double and never touch the filesystem.

mod compositor;
mod fs;
mod paths;
mod process;
mod watcher;

pub use compositor::Compositor;
pub use fs::FsGateway;
pub use paths::WaybarPaths;
pub use watcher::{FileEvent, FileEventKind, FileWatcher};

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required file does not exist.
    #[error("file not found: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The Waybar configuration directory is absent.
    #[error("waybar configuration directory not found at '{path}'")]
    ConfigDirMissing {
        /// The expected directory.
        path: PathBuf,
    },

    /// The operating system denied access.
    #[error("permission denied for '{path}'")]
    PermissionDenied {
        /// The inaccessible path.
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// Path the operation targeted.
        path: PathBuf,
        /// Error details.
        details: String,
    },

    /// Controlling or querying the Waybar process failed.
    #[error("renderer control failed: {details}")]
    Process {
        /// Error details from the process operation.
        details: String,
    },

    /// The environment gives no usable configuration location.
    #[error("cannot determine configuration paths: {details}")]
    Environment {
        /// What was missing.
        details: String,
    },
}

impl GatewayError {
    fn from_io(path: &Path, error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                details: error.to_string(),
            },
        }
    }
}

/// Asynchronous boundary to the filesystem and the Waybar process.
///
/// Every call is fallible and may suspend the caller; none of them carry a
/// timeout, so a hung implementation blocks the operation that invoked it.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Detects the standard Waybar configuration paths.
    async fn detect_paths(&self) -> Result<WaybarPaths, GatewayError>;

    /// Reads the native configuration file.
    async fn load_config(&self, path: &Path) -> Result<String, GatewayError>;

    /// Writes the native configuration file, creating a backup first.
    async fn save_config(&self, path: &Path, content: &str) -> Result<(), GatewayError>;

    /// Reads the stylesheet.
    async fn load_style(&self, path: &Path) -> Result<String, GatewayError>;

    /// Writes the stylesheet, creating a backup first.
    async fn save_style(&self, path: &Path, content: &str) -> Result<(), GatewayError>;

    /// Lists backup file names in a configuration directory, newest first.
    async fn list_backups(&self, dir: &Path) -> Result<Vec<String>, GatewayError>;

    /// Restores a backup over a target file, backing up the target first.
    async fn restore_backup(&self, backup: &Path, target: &Path) -> Result<(), GatewayError>;

    /// Signals the running Waybar to reload its configuration.
    async fn reload_renderer(&self) -> Result<(), GatewayError>;

    /// Starts Waybar if it is not already running.
    async fn start_renderer(&self) -> Result<(), GatewayError>;

    /// Stops Waybar if it is running.
    async fn stop_renderer(&self) -> Result<(), GatewayError>;

    /// Restarts Waybar.
    async fn restart_renderer(&self) -> Result<(), GatewayError>;

    /// Whether a Waybar process is currently running.
    async fn renderer_running(&self) -> Result<bool, GatewayError>;

    /// Detects the active Wayland compositor.
    async fn detect_compositor(&self) -> Result<Compositor, GatewayError>;
}

#[cfg(test)]
mod tests;
