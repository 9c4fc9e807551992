use async_trait::async_trait;

use crate::cli::formatting::format_category;
use crate::cli::{Command, CommandMetadata, CommandResult};
use crate::model::{ModuleCategory, ModuleKind};

/// Lists every known module type, grouped by category.
pub struct ListCommand;

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let categories = [
            ModuleCategory::System,
            ModuleCategory::Hardware,
            ModuleCategory::WindowManager,
            ModuleCategory::Media,
            ModuleCategory::Utility,
        ];

        let mut lines = Vec::new();
        for category in categories {
            lines.push(format_category(category.label()));
            for kind in ModuleKind::ALL {
                if kind.category() == category {
                    lines.push(format!("  {}", kind.tag()));
                }
            }
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List all known module types".to_string(),
            category: "modules".to_string(),
            args: vec![],
            examples: vec!["barforge modules list".to_string()],
        }
    }
}
