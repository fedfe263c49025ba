// Error types for Runner module

use thiserror::Error;

/// Abnormal command outcomes. A non-zero exit is not one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunnerError {
    #[error("Command timed out after {0} seconds")]
    Timeout(u64),

    #[error("Command not found: {0}")]
    NotFound(String),

    #[error("Failed to launch command: {0}")]
    Other(String),
}

impl RunnerError {
    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            RunnerError::Timeout(_) => "timeout",
            RunnerError::NotFound(_) => "not_found",
            RunnerError::Other(_) => "other",
        }
    }
}
