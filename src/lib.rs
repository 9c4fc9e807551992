//! Barforge - configuration studio core for the Waybar status bar.
//!
//! Barforge models a Waybar setup as an editable document: bars, the modules
//! placed in their left/center/right zones, and structured stylesheet rules.
//! The main pieces are:
//!
//! - A typed domain model with a closed module vocabulary
//! - Bidirectional transformation to Waybar's native JSONC + CSS files
//! - A schema-driven validation engine that collects every finding
//! - Snapshot-based undo/redo history
//! - A coordinating store orchestrating all of it around an injected
//!   filesystem/process gateway
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use barforge::editor::EditorStore;
//! use barforge::gateway::FsGateway;
//! use barforge::model::{ModuleKind, ModulePosition};
//!
//! let store = EditorStore::new(Arc::new(FsGateway::new()));
//! let bar = store.add_bar(Some("main".to_string()))?;
//! store.add_module(&bar, ModuleKind::Clock, ModulePosition::Center)?;
//! assert!(store.validate().success());
//! # Ok::<(), barforge::editor::EditorError>(())
//! ```

/// Domain model: bars, modules, styles, and document metadata.
pub mod model;

/// Transformation between the domain model and the native file formats.
pub mod transform;

/// Schema-driven validation of the domain model.
pub mod validate;

/// Snapshot-based undo/redo history.
pub mod history;

/// Coordinating store owning the live document.
pub mod editor;

/// Filesystem and process gateway.
pub mod gateway;

/// The editor's own settings.
pub mod settings;

/// Command-line interface for the editor core.
pub mod cli;

/// Core error types and result aliases.
pub mod core;

/// Logging bootstrap.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{BarforgeError, Result};
