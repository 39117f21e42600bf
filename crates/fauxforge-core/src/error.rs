use thiserror::Error;

/// Core error type shared across fauxforge crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The request envelope is missing required fields or carries bad values.
    #[error("{0}")]
    InvalidRequest(String),
    /// The schema cannot be normalized into a generation tree.
    #[error("invalid schema at {path}: {message}")]
    InvalidSchema { path: String, message: String },
    /// The schema nests deeper than the configured limit.
    #[error("schema at {path} nests deeper than {limit} levels")]
    TooDeep { path: String, limit: usize },
}

/// Convenience alias for results returned by fauxforge crates.
pub type Result<T> = std::result::Result<T, Error>;
