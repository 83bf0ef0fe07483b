//! Error types for TalentDB core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core entity operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Backing store error. Always propagated, never retried here.
    #[error("storage error: {0}")]
    Storage(#[from] talentdb_storage::StorageError),

    /// Record codec error.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Entity not found. An expected outcome, not exceptional control flow.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind name.
        kind: &'static str,
        /// The id that was not found.
        id: String,
    },

    /// Create targeted an id that already exists.
    #[error("{kind} already exists: {id}")]
    Conflict {
        /// Entity kind name.
        kind: &'static str,
        /// The conflicting id.
        id: String,
    },

    /// Malformed input rejected before reaching the store.
    #[error("validation failed: {message}")]
    Validation {
        /// Description of the rejection.
        message: String,
    },
}

impl CoreError {
    /// Creates a not-found error.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Creates a conflict error.
    pub fn conflict(kind: &'static str, id: impl Into<String>) -> Self {
        Self::Conflict {
            kind,
            id: id.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns true for the structured, expected outcomes (4xx-shaped).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::NotFound { .. } | CoreError::Conflict { .. } | CoreError::Validation { .. }
        )
    }
}
