//! Error types for sl-output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when writing chunk files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output directory could not be cleared or created.
    #[error("cannot prepare output directory {}: {source}", .path.display())]
    PrepareDir {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
