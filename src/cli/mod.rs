//! Command-line interface for the editor core.
//!
//! Provides a hierarchical command system over the editor store and gateway.
//! Commands are organized by category and automatically generate help text
//! from metadata.

mod commands;
mod context;
pub mod formatting;
mod registry;
mod service;
mod types;

pub use context::CliContext;
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};

#[cfg(test)]
mod tests;
