//! Dataset persistence for fauxforge.
//!
//! Datasets are stored whole under a freshly generated key and never
//! modified afterwards. Two backends are provided: a directory of JSON
//! documents and a process-local map.

mod atomic;
pub mod error;
pub mod file;
pub mod key;
pub mod memory;

use async_trait::async_trait;

use fauxforge_core::Dataset;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use key::{is_valid_key, new_key};
pub use memory::MemoryStore;

/// Key/value persistence for generated datasets.
///
/// A dataset becomes visible to `get` and `list` only once it is fully
/// written; readers never observe a partial dataset.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Persist a dataset under a new key and return the key.
    async fn put(&self, records: &Dataset) -> StoreResult<String>;

    /// Load the dataset stored under `key`.
    async fn get(&self, key: &str) -> StoreResult<Dataset>;

    /// Keys of every stored dataset, sorted.
    async fn list(&self) -> StoreResult<Vec<String>>;

    /// Remove the dataset stored under `key`.
    async fn delete(&self, key: &str) -> StoreResult<()>;
}
