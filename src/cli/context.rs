use std::sync::Arc;

use crate::editor::EditorStore;
use crate::gateway::{Gateway, WaybarPaths};

/// Shared dependencies handed to every CLI command.
pub struct CliContext {
    /// The editor store, starting from an empty document.
    pub store: EditorStore,
    /// Direct gateway access for process and backup commands.
    pub gateway: Arc<dyn Gateway>,
    /// Resolved Waybar file locations.
    pub paths: WaybarPaths,
}

impl CliContext {
    /// Bundles the store, its gateway, and the resolved paths.
    pub fn new(store: EditorStore, gateway: Arc<dyn Gateway>, paths: WaybarPaths) -> Self {
        Self {
            store,
            gateway,
            paths,
        }
    }
}
