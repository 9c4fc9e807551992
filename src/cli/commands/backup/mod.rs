//! Commands managing the timestamped configuration backups.

mod list;
mod restore;

pub use list::ListCommand;
pub use restore::RestoreCommand;

use std::sync::Arc;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the `backup` category commands.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    registry.register_command("backup", Box::new(ListCommand::new(Arc::clone(&context))));
    registry.register_command("backup", Box::new(RestoreCommand::new(context)));
}
