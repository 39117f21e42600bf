use std::io;

use thiserror::Error;

/// Errors returned by dataset stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no dataset stored under key '{0}'")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
