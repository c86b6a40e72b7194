//! Error types for the JSONL sink.

use thiserror::Error;

/// Errors that can occur while writing or reading a JSONL file.
#[derive(Error, Debug)]
pub enum JsonlError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
