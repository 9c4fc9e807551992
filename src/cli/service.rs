use std::sync::Arc;

use super::formatting::{format_category, format_command, format_description, format_header};
use super::{CliContext, CliError, CommandRegistry};

/// High-level service for managing and executing CLI commands.
///
/// Provides a unified interface for command registration, discovery, and
/// execution. Commands are organized by category and can be listed or
/// executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a CLI service with all built-in commands registered.
    pub fn new(context: CliContext) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(context));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// The pseudo-category `help` (or an empty invocation) renders the
    /// command overview instead.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in
    /// the category, or whatever the command itself fails with.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if category == "help" || category.is_empty() {
            return Ok(self.help_text());
        }

        self.registry.execute(category, command_name, args).await
    }

    /// Renders the full command overview.
    pub fn help_text(&self) -> String {
        let mut lines = vec![
            format_header("barforge - Waybar configuration studio"),
            String::new(),
            "Usage: barforge <category> <command> [args...]".to_string(),
            String::new(),
        ];

        for (category, commands) in self.registry.list_commands() {
            lines.push(format_category(&category));
            for metadata in commands {
                let args: Vec<String> = metadata
                    .args
                    .iter()
                    .map(|arg| {
                        if arg.required {
                            format!("<{}>", arg.name)
                        } else {
                            format!("[{}]", arg.name)
                        }
                    })
                    .collect();
                lines.push(format!(
                    "  {} {}  {}",
                    format_command(&metadata.name),
                    args.join(" "),
                    format_description(&metadata.description),
                ));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}
