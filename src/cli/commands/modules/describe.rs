use async_trait::async_trait;

use crate::cli::formatting::{format_description, format_header};
use crate::cli::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
use crate::model::ModuleKind;
use crate::validate::{FieldType, module_schema};

/// Prints the configuration schema of one module type.
pub struct DescribeCommand;

#[async_trait]
impl Command for DescribeCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let tag = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <type> argument for 'describe'".to_string())
        })?;
        let kind = ModuleKind::from_tag(tag)
            .ok_or_else(|| CliError::InvalidArguments(format!("unknown module type '{tag}'")))?;

        let schema = module_schema(kind);
        let mut lines = vec![format_header(&format!(
            "{} ({})",
            kind.tag(),
            kind.category().label()
        ))];

        for spec in schema.all_fields() {
            let default = spec
                .default
                .map(|value| format!(" (default: {})", value.to_json()))
                .unwrap_or_default();
            lines.push(format!(
                "  {}  {}{default}",
                spec.key,
                format_description(&describe_type(spec.ty)),
            ));
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "describe".to_string(),
            description: "Show the configuration schema of a module type".to_string(),
            category: "modules".to_string(),
            args: vec![CommandArg {
                name: "type".to_string(),
                description: "Module type tag, e.g. battery or hyprland/workspaces".to_string(),
                required: true,
                value_type: ArgType::String,
            }],
            examples: vec!["barforge modules describe battery".to_string()],
        }
    }
}

fn describe_type(ty: FieldType) -> String {
    match ty {
        FieldType::Bool => "boolean".to_string(),
        FieldType::Integer { min, max } => match (min, max) {
            (Some(min), Some(max)) => format!("integer {min}..={max}"),
            (Some(min), None) => format!("integer >= {min}"),
            (None, Some(max)) => format!("integer <= {max}"),
            (None, None) => "integer".to_string(),
        },
        FieldType::Float => "number".to_string(),
        FieldType::Str => "string".to_string(),
        FieldType::Keyword(keywords) => format!("one of: {}", keywords.join(", ")),
        FieldType::IntegerOrKeyword { min, keywords } => {
            let bound = min.map(|m| format!("integer >= {m}")).unwrap_or_else(|| "integer".to_string());
            format!("{bound} or one of: {}", keywords.join(", "))
        }
        FieldType::StringList => "list of strings".to_string(),
        FieldType::List => "list".to_string(),
        FieldType::Icons => "list of icons or map of named icons".to_string(),
        FieldType::Object => "object".to_string(),
    }
}
