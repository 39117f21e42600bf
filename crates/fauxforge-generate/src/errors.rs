use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("schema nests deeper than {limit} levels")]
    DepthExceeded { limit: usize },
    #[error("array at {path} allows {max_size} elements, above the limit of {limit}")]
    ArrayTooLarge {
        path: String,
        max_size: usize,
        limit: usize,
    },
    #[error("generation would produce more than {limit} values")]
    ValueBudgetExceeded { limit: usize },
    #[error("generation cancelled after {records_done} records")]
    Cancelled { records_done: usize },
}
