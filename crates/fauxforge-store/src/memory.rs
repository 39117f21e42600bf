use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::info;

use fauxforge_core::Dataset;

use crate::DatasetStore;
use crate::error::{StoreError, StoreResult};
use crate::key::new_key;

/// Process-local store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    datasets: RwLock<BTreeMap<String, Dataset>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.datasets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.read().is_empty()
    }
}

#[async_trait]
impl DatasetStore for MemoryStore {
    async fn put(&self, records: &Dataset) -> StoreResult<String> {
        let key = new_key();
        self.datasets.write().insert(key.clone(), records.clone());
        info!(key = %key, records = records.len(), "dataset stored in memory");
        Ok(key)
    }

    async fn get(&self, key: &str) -> StoreResult<Dataset> {
        self.datasets
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn list(&self) -> StoreResult<Vec<String>> {
        Ok(self.datasets.read().keys().cloned().collect())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        match self.datasets.write().remove(key) {
            Some(_) => {
                info!(key = %key, "dataset deleted from memory");
                Ok(())
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }
}
