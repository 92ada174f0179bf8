use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// A field is missing or cannot be coerced to its declared type.
    #[error("invalid field `{field}`: {reason}")]
    Validation { field: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    pub(crate) fn missing(field: &str) -> Self {
        SchemaError::Validation {
            field:  field.to_owned(),
            reason: "field required".to_owned(),
        }
    }

    pub(crate) fn invalid(field: &str, expected: &str) -> Self {
        SchemaError::Validation {
            field:  field.to_owned(),
            reason: format!("expected {expected}"),
        }
    }

    /// Prefix the offending field path, e.g. `bssid` → `wifi[3].bssid`.
    pub fn at(self, prefix: &str) -> Self {
        match self {
            SchemaError::Validation { field, reason } => SchemaError::Validation {
                field: format!("{prefix}.{field}"),
                reason,
            },
            other => other,
        }
    }
}

pub type SchemaResult<T> = Result<T, SchemaError>;
