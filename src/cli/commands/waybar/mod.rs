//! Commands controlling the Waybar process.

mod reload;
mod restart;
mod start;
mod status;
mod stop;

pub use reload::ReloadCommand;
pub use restart::RestartCommand;
pub use start::StartCommand;
pub use status::StatusCommand;
pub use stop::StopCommand;

use std::sync::Arc;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the `waybar` category commands.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    registry.register_command("waybar", Box::new(StatusCommand::new(Arc::clone(&context))));
    registry.register_command("waybar", Box::new(ReloadCommand::new(Arc::clone(&context))));
    registry.register_command("waybar", Box::new(StartCommand::new(Arc::clone(&context))));
    registry.register_command("waybar", Box::new(StopCommand::new(Arc::clone(&context))));
    registry.register_command("waybar", Box::new(RestartCommand::new(context)));
}
