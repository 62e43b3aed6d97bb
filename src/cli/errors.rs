//! CLI error types

use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors; all terminate the process with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file present but unusable
    #[error("config error: {0}")]
    Config(String),

    /// init refuses to overwrite an existing configuration
    #[error("already initialized: {0}")]
    AlreadyInitialized(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
