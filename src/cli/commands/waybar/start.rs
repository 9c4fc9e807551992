use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{CliContext, Command, CommandMetadata, CommandResult};

/// Starts Waybar if it is not already running.
pub struct StartCommand {
    context: Arc<CliContext>,
}

impl StartCommand {
    /// Creates the command over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for StartCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.context.gateway.start_renderer().await?;
        Ok("Started waybar".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "start".to_string(),
            description: "Start Waybar".to_string(),
            category: "waybar".to_string(),
            args: vec![],
            examples: vec!["barforge waybar start".to_string()],
        }
    }
}
