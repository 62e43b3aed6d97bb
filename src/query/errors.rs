//! Query engine error types
//!
//! Two failure classes, kept separate so the transport layer can map
//! them to different statuses:
//! - `Validation`: the raw request could not be normalized into a
//!   `QuerySpec` (caller error)
//! - `Storage`: a Log Store call failed (adapter error, carried as-is)

use thiserror::Error;

use crate::store::StoreError;

/// Result type for query engine operations
pub type EngineResult<T> = Result<T, QueryError>;

/// Query engine errors
#[derive(Debug, Error)]
pub enum QueryError {
    /// Raw request parameters failed validation
    #[error("{0}")]
    Validation(String),

    /// A Log Store call failed; the engine performs no retry
    #[error("log store failure: {0}")]
    Storage(#[from] StoreError),
}

impl QueryError {
    /// Validation error with a descriptive message
    pub fn validation(msg: impl Into<String>) -> Self {
        QueryError::Validation(msg.into())
    }

    /// Returns true if the caller sent an invalid request
    pub fn is_validation(&self) -> bool {
        matches!(self, QueryError::Validation(_))
    }
}
