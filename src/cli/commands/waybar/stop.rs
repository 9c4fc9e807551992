use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{CliContext, Command, CommandMetadata, CommandResult};

/// Stops the running Waybar.
pub struct StopCommand {
    context: Arc<CliContext>,
}

impl StopCommand {
    /// Creates the command over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for StopCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.context.gateway.stop_renderer().await?;
        Ok("Stopped waybar".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "stop".to_string(),
            description: "Stop Waybar".to_string(),
            category: "waybar".to_string(),
            args: vec![],
            examples: vec!["barforge waybar stop".to_string()],
        }
    }
}
