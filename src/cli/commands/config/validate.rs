use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::formatting::{format_report, format_warning};
use crate::cli::{CliContext, Command, CommandMetadata, CommandResult};
use crate::editor::LoadOptions;

/// Validates the on-disk Waybar configuration and prints every finding.
pub struct ValidateCommand {
    context: Arc<CliContext>,
}

impl ValidateCommand {
    /// Creates the command over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ValidateCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let outcome = self
            .context
            .store
            .load(
                &self.context.paths,
                LoadOptions {
                    ignore_validation_errors: true,
                },
            )
            .await?;

        let mut lines = Vec::new();
        for warning in &outcome.warnings {
            lines.push(format_warning(&format!("warning: {warning}")));
        }
        if let Some(error) = &outcome.stylesheet_error {
            lines.push(format_warning(&format!("warning: {error}")));
        }
        lines.push(format_report(&outcome.validation));

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "validate".to_string(),
            description: "Validate the Waybar configuration and stylesheet".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["barforge config validate".to_string()],
        }
    }
}
