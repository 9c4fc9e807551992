//! Commands operating on the Waybar configuration document.

mod export;
mod import;
mod validate;

pub use export::ExportCommand;
pub use import::ImportCommand;
pub use validate::ValidateCommand;

use std::sync::Arc;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the `config` category commands.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    registry.register_command("config", Box::new(ValidateCommand::new(Arc::clone(&context))));
    registry.register_command("config", Box::new(ExportCommand::new(Arc::clone(&context))));
    registry.register_command("config", Box::new(ImportCommand::new(context)));
}
