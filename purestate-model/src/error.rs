//! Error types raised by entity descriptors.

use thiserror::Error;

/// Result type for descriptor operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Failures reported by a descriptor while it is constructed, exercised or
/// fetched.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The supplied data cannot build an instance.
    #[error("construction failed: {0}")]
    Construction(String),

    /// An attribute was rejected by the descriptor's validation.
    #[error("invalid attribute '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// A method resolved but refused to run with the given arguments or state.
    #[error("method '{method}' failed: {reason}")]
    Method { method: String, reason: String },

    /// The remote fetch was rejected.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    /// Shorthand for a [`ModelError::Method`] failure.
    pub fn method(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Method {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`ModelError::Validation`] failure.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
