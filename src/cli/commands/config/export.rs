use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{ArgType, CliContext, Command, CommandArg, CommandMetadata, CommandResult};
use crate::editor::LoadOptions;

/// Prints the document in native JSON form, or writes it to a file.
pub struct ExportCommand {
    context: Arc<CliContext>,
}

impl ExportCommand {
    /// Creates the command over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ExportCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        self.context
            .store
            .load(
                &self.context.paths,
                LoadOptions {
                    ignore_validation_errors: true,
                },
            )
            .await?;

        let native = self.context.store.export_native()?;

        match args.first() {
            Some(file) => {
                std::fs::write(file, &native)?;
                Ok(format!("Exported configuration to {file}"))
            }
            None => Ok(native),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "export".to_string(),
            description: "Export the configuration as native JSON".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "file".to_string(),
                description: "Write to this file instead of stdout".to_string(),
                required: false,
                value_type: ArgType::Path,
            }],
            examples: vec![
                "barforge config export".to_string(),
                "barforge config export backup.json".to_string(),
            ],
        }
    }
}
