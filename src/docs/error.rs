// Error types for Docs module

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("Document not found: {topic}")]
    NotFound {
        topic: String,
        /// Every known alias, offered as a hint
        available: Vec<String>,
    },

    #[error("Failed to read document {0}: {1}")]
    Read(PathBuf, String),
}

pub type Result<T> = std::result::Result<T, DocsError>;
