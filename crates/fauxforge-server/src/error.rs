use thiserror::Error;

/// Failures of the server loop itself, as opposed to per-request errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
