//! Error types for the facades.

use purestate_model::ModelError;
use thiserror::Error;

/// Result type for facade operations.
pub type FacadeResult<T> = Result<T, FacadeError>;

/// Errors surfaced by facade operations.
#[derive(Debug, Error)]
pub enum FacadeError {
    /// The named method or mutation is not defined on the descriptor.
    #[error("'{method}' is not a method of {descriptor}")]
    Invocation {
        descriptor: &'static str,
        method: String,
    },

    /// Failure reported by the descriptor itself (construction, validation,
    /// method or fetch), passed through unchanged.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl FacadeError {
    pub(crate) fn invocation(descriptor: &'static str, method: impl Into<String>) -> Self {
        Self::Invocation {
            descriptor,
            method: method.into(),
        }
    }

    pub fn is_invocation(&self) -> bool {
        matches!(self, Self::Invocation { .. })
    }

    /// The descriptor's own error, if this is one.
    pub fn model_error(&self) -> Option<&ModelError> {
        match self {
            Self::Model(e) => Some(e),
            Self::Invocation { .. } => None,
        }
    }
}
