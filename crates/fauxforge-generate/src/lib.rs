//! Schema interpreter for fauxforge.
//!
//! Walks a normalized [`fauxforge_core::SchemaNode`] tree and emits records
//! with randomized array cardinality and randomized scalar content. All
//! randomness comes from the caller's `RngCore`, so tests can pass a seeded
//! generator while production draws from a thread-local one.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use generators::{GeneratorRegistry, ScalarGenerator};
pub use model::{GenerateOptions, GenerationReport};
