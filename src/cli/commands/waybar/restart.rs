use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{CliContext, Command, CommandMetadata, CommandResult};

/// Restarts Waybar, for changes a reload signal cannot apply.
pub struct RestartCommand {
    context: Arc<CliContext>,
}

impl RestartCommand {
    /// Creates the command over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for RestartCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.context.gateway.restart_renderer().await?;
        Ok("Restarted waybar".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "restart".to_string(),
            description: "Restart Waybar".to_string(),
            category: "waybar".to_string(),
            args: vec![],
            examples: vec!["barforge waybar restart".to_string()],
        }
    }
}
