use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{CliContext, Command, CommandMetadata, CommandResult};

/// Signals the running Waybar to reload its configuration and stylesheet.
pub struct ReloadCommand {
    context: Arc<CliContext>,
}

impl ReloadCommand {
    /// Creates the command over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ReloadCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.context.gateway.reload_renderer().await?;
        Ok("Sent reload signal to waybar".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "reload".to_string(),
            description: "Reload the running Waybar without restarting it".to_string(),
            category: "waybar".to_string(),
            args: vec![],
            examples: vec!["barforge waybar reload".to_string()],
        }
    }
}
