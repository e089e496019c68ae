use super::StorageError;

/// Top-level error for the review system.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("item not found: {id}")]
    ItemNotFound { id: String },

    #[error("validation failed on {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("invalid claim pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("candidate pool unavailable: {reason}")]
    CandidatePoolUnavailable { reason: String },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),
}

impl ReviewError {
    /// Shorthand for a field-level validation failure.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for ReviewError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}
