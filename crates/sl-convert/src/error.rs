//! Error types for sl-convert.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The survey lacks its records container or a record lacks a field.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
