//! Log Store error types
//!
//! Corruption is never ignored: a record that fails its checksum or
//! does not decode makes the open fail, naming the offending line.

use thiserror::Error;

/// Result type for Log Store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Log Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed
    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored record failed checksum or decode validation
    #[error("corrupt record at {path}:{line}: {reason}")]
    Corruption {
        path: String,
        line: usize,
        reason: String,
    },
}

impl StoreError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corruption(path: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        StoreError::Corruption {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Returns true for data corruption (as opposed to plain I/O).
    pub fn is_corruption(&self) -> bool {
        matches!(self, StoreError::Corruption { .. })
    }
}
