//! Commands exploring the module vocabulary and its schemas.

mod describe;
mod list;

pub use describe::DescribeCommand;
pub use list::ListCommand;

use crate::cli::CommandRegistry;

/// Registers the `modules` category commands.
///
/// These read the static schema registry and need no shared context.
pub fn register_commands(registry: &mut CommandRegistry) {
    registry.register_command("modules", Box::new(ListCommand));
    registry.register_command("modules", Box::new(DescribeCommand));
}
