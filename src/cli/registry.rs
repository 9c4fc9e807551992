use std::{collections::HashMap, sync::Arc};

use super::{
    CliContext, CliError, Command,
    commands::{backup, config, modules, waybar},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// Commands are grouped by logical categories (`config`, `waybar`,
/// `backup`, `modules`) instead of one giant match statement, so adding a
/// command means registering it in its module and nothing else.
pub struct CommandRegistry {
    /// Nested map: category name -> (command name -> implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    context: Arc<CliContext>,
}

impl CommandRegistry {
    /// Creates an empty registry over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self {
            categories: HashMap::new(),
            context,
        }
    }

    /// Registers a command under a category, replacing any command with the
    /// same name.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` when the category or command does
    /// not exist; other errors come from the command itself.
    pub async fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args).await
    }

    /// Lists all registered commands organized by category, both sorted
    /// alphabetically.
    pub fn list_commands(&self) -> Vec<(String, Vec<CommandMetadata>)> {
        let mut categories: Vec<(String, Vec<CommandMetadata>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut metadata: Vec<CommandMetadata> =
                    commands.values().map(|command| command.metadata()).collect();
                metadata.sort_by(|a, b| a.name.cmp(&b.name));

                (category.clone(), metadata)
            })
            .collect();

        categories.sort_by(|a, b| a.0.cmp(&b.0));

        categories
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        let context = Arc::clone(&self.context);
        config::register_commands(self, Arc::clone(&context));
        waybar::register_commands(self, Arc::clone(&context));
        backup::register_commands(self, context);
        modules::register_commands(self);
    }
}
