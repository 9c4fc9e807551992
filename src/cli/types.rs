use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred in the editor core.
    ///
    /// This wraps errors from the store and its collaborators: failed
    /// loads, blocked saves, gateway failures.
    #[error("{0}")]
    EditorError(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<crate::editor::EditorError> for CliError {
    fn from(error: crate::editor::EditorError) -> Self {
        Self::EditorError(error.to_string())
    }
}

impl From<crate::gateway::GatewayError> for CliError {
    fn from(error: crate::gateway::GatewayError) -> Self {
        Self::EditorError(error.to_string())
    }
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either output text or a
/// [`CliError`] describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "file", "id").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for validation and help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
///
/// Helps with argument validation and provides hints in help text about
/// what kind of value is expected.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A file system path.
    Path,
}

/// Complete metadata for a CLI command.
///
/// The single source of truth for a command's identity, arguments, usage
/// examples, and categorization; used for help generation, argument
/// validation, and command discovery.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "validate", "reload").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "config", "waybar").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through constructors and execute
/// asynchronously because most of them drive the store's gateway-facing
/// pipelines.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry performs basic argument-count validation against the
    /// command's metadata before this is called.
    ///
    /// # Errors
    /// Returns `CliError` for any execution failure.
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns this command's metadata.
    fn metadata(&self) -> CommandMetadata;
}
