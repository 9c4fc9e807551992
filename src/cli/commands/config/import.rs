use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::formatting::{format_success, format_warning};
use crate::cli::{ArgType, CliContext, CliError, Command, CommandArg, CommandMetadata, CommandResult};
use crate::editor::{EditorError, LoadOptions};
use crate::gateway::GatewayError;

/// Imports bars from a native JSON file and saves the merged document.
pub struct ImportCommand {
    context: Arc<CliContext>,
}

impl ImportCommand {
    /// Creates the command over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ImportCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let file = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <file> argument for 'import'".to_string())
        })?;
        let content = std::fs::read_to_string(file)?;

        // Merge into the existing document when there is one; a missing
        // config file just means the import starts from scratch.
        match self
            .context
            .store
            .load(
                &self.context.paths,
                LoadOptions {
                    ignore_validation_errors: true,
                },
            )
            .await
        {
            Ok(_) | Err(EditorError::Gateway(GatewayError::NotFound { .. })) => {}
            Err(error) => return Err(error.into()),
        }

        let outcome = self.context.store.import_native(&content)?;
        let saved = self.context.store.save(&self.context.paths).await?;

        let mut lines = Vec::new();
        for warning in &outcome.warnings {
            lines.push(format_warning(&format!("warning: {warning}")));
        }
        for warning in &saved.warnings {
            lines.push(format_warning(&format!("warning: {warning}")));
        }
        lines.push(format_success(&format!(
            "Imported {} bar(s) from {file}",
            outcome.bar_ids.len()
        )));

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "import".to_string(),
            description: "Import bars from a native JSON file and save".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "file".to_string(),
                description: "Native JSON file to import".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec!["barforge config import shared-bar.json".to_string()],
        }
    }
}
