// Error types for Tools module

use crate::docs::DocsError;
use crate::runner::RunnerError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong inside a tool call.
/// Converted to a `success: false` result at the tool boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid input for tool '{0}': {1}")]
    InvalidInput(String, String),

    #[error("Command timed out after {0} seconds")]
    CommandTimeout(u64),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Failed to launch command: {0}")]
    CommandFailed(String),

    #[error("Command '{command}' exited with code {exit_code}: {output}")]
    CommandExited {
        command: String,
        exit_code: i32,
        output: String,
    },

    #[error("Required file not found: {}", .0.display())]
    MissingPrerequisiteFile(PathBuf),

    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Config file does not exist: {}; run `openclaw onboard` first", .0.display())]
    ConfigFileAbsent(PathBuf),

    #[error("Config file is not valid JSON: {}: {}", .0.display(), .1)]
    ConfigMalformed(PathBuf, String),

    #[error("Failed to read config file {}: {}", .0.display(), .1)]
    ConfigRead(PathBuf, String),

    #[error("Document not found: {topic}")]
    DocumentNotFound { topic: String, available: Vec<String> },

    #[error("Failed to read document {}: {}", .0.display(), .1)]
    DocumentRead(PathBuf, String),

    #[error("Unsupported method for {tool}: {method}")]
    UnsupportedMethod { tool: &'static str, method: String },

    #[error("Unsupported action for {tool}: {action}")]
    UnsupportedAction { tool: &'static str, action: String },
}

impl ToolError {
    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::UnknownTool(_) => "unknown_tool",
            ToolError::InvalidInput(..) => "invalid_input",
            ToolError::CommandTimeout(_) => "command_timeout",
            ToolError::CommandNotFound(_) => "command_not_found",
            ToolError::CommandFailed(_) => "command_failed",
            ToolError::CommandExited { .. } => "command_exited",
            ToolError::MissingPrerequisiteFile(_) => "missing_prerequisite_file",
            ToolError::MissingParameter(_) => "missing_parameter",
            ToolError::ConfigFileAbsent(_) => "config_file_absent",
            ToolError::ConfigMalformed(..) => "config_malformed",
            ToolError::ConfigRead(..) => "config_read",
            ToolError::DocumentNotFound { .. } => "document_not_found",
            ToolError::DocumentRead(..) => "document_read",
            ToolError::UnsupportedMethod { .. } => "unsupported_method",
            ToolError::UnsupportedAction { .. } => "unsupported_action",
        }
    }
}

impl From<RunnerError> for ToolError {
    fn from(e: RunnerError) -> Self {
        match e {
            RunnerError::Timeout(secs) => ToolError::CommandTimeout(secs),
            RunnerError::NotFound(program) => ToolError::CommandNotFound(program),
            RunnerError::Other(message) => ToolError::CommandFailed(message),
        }
    }
}

impl From<DocsError> for ToolError {
    fn from(e: DocsError) -> Self {
        match e {
            DocsError::NotFound { topic, available } => {
                ToolError::DocumentNotFound { topic, available }
            }
            DocsError::Read(path, message) => ToolError::DocumentRead(path, message),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
