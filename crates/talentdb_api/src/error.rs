//! Error types for the API layer.

use talentdb_core::CoreError;
use thiserror::Error;

/// Result type for handler operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can produce.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input, rejected before reaching the entity store.
    #[error("{0}")]
    Validation(String),

    /// An entity-layer failure (not-found, conflict, storage, codec).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code the transport should map this error to.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Core(core) => match core {
                CoreError::NotFound { .. } => 404,
                CoreError::Conflict { .. } => 409,
                CoreError::Validation { .. } => 400,
                CoreError::Storage(_) | CoreError::Codec(_) => 500,
            },
        }
    }

    /// Returns true if the caller is at fault (4xx).
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
