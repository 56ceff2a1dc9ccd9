//! Error types shared across VeriCap crates.

use std::path::PathBuf;

/// Top-level error type for VeriCap operations.
#[derive(Debug, thiserror::Error)]
pub enum VericapError {
    /// A row in a recorded table failed to parse as numeric data.
    #[error("Malformed input in {path} at line {line}: {message}")]
    MalformedInput {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Too few aligned samples remain for a statistically meaningful score.
    #[error("Insufficient data: needed {needed} aligned samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Flow extraction error: {message}")]
    FlowExtraction { message: String },

    #[error("Processing error: {message}")]
    Processing { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using VericapError.
pub type VericapResult<T> = Result<T, VericapError>;

impl VericapError {
    pub fn flow_extraction(msg: impl Into<String>) -> Self {
        Self::FlowExtraction {
            message: msg.into(),
        }
    }

    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
