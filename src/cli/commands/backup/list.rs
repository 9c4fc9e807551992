use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{CliContext, Command, CommandMetadata, CommandResult};

/// Lists backup files in the Waybar configuration directory, newest first.
pub struct ListCommand {
    context: Arc<CliContext>,
}

impl ListCommand {
    /// Creates the command over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let backups = self
            .context
            .gateway
            .list_backups(&self.context.paths.config_dir)
            .await?;

        if backups.is_empty() {
            return Ok("No backups found".to_string());
        }

        Ok(backups.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List configuration backups, newest first".to_string(),
            category: "backup".to_string(),
            args: vec![],
            examples: vec!["barforge backup list".to_string()],
        }
    }
}
