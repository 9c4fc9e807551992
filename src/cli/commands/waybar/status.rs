use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{CliContext, Command, CommandMetadata, CommandResult};

/// Reports whether Waybar is running, the detected compositor, and the
/// resolved file locations.
pub struct StatusCommand {
    context: Arc<CliContext>,
}

impl StatusCommand {
    /// Creates the command over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let running = self.context.gateway.renderer_running().await?;
        let compositor = self.context.gateway.detect_compositor().await?;

        Ok(format!(
            "waybar: {}\ncompositor: {compositor}\nconfig: {}\nstyle: {}",
            if running { "running" } else { "not running" },
            self.context.paths.config_file.display(),
            self.context.paths.style_file.display(),
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show Waybar process and environment status".to_string(),
            category: "waybar".to_string(),
            args: vec![],
            examples: vec!["barforge waybar status".to_string()],
        }
    }
}
