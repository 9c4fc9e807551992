use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::formatting::format_success;
use crate::cli::{ArgType, CliContext, CliError, Command, CommandArg, CommandMetadata, CommandResult};

/// Restores a backup over the file it was taken from.
pub struct RestoreCommand {
    context: Arc<CliContext>,
}

impl RestoreCommand {
    /// Creates the command over the shared context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for RestoreCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let name = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <backup> argument for 'restore'".to_string())
        })?;

        // Backups are named "<original>.backup.<timestamp>".
        let Some((original, _)) = name.split_once(".backup.") else {
            return Err(CliError::InvalidArguments(format!(
                "'{name}' is not a backup file name"
            )));
        };

        let backup = self.context.paths.config_dir.join(name);
        let target = self.context.paths.config_dir.join(original);
        self.context.gateway.restore_backup(&backup, &target).await?;

        Ok(format_success(&format!(
            "Restored {} from {name}",
            target.display()
        )))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "restore".to_string(),
            description: "Restore a backup over its original file".to_string(),
            category: "backup".to_string(),
            args: vec![CommandArg {
                name: "backup".to_string(),
                description: "Backup file name, as printed by 'backup list'".to_string(),
                required: true,
                value_type: ArgType::String,
            }],
            examples: vec![
                "barforge backup restore config.jsonc.backup.20250610-141355".to_string(),
            ],
        }
    }
}
