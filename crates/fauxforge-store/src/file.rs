use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use fauxforge_core::Dataset;

use crate::DatasetStore;
use crate::atomic::{TEMP_SUFFIX, write_bytes_atomic};
use crate::error::{StoreError, StoreResult};
use crate::key::{is_valid_key, new_key};

const EXTENSION: &str = "json";

/// Directory-backed store: one pretty-printed JSON document per dataset,
/// named `<key>.json`.
///
/// Writes go through a temporary file and a rename, and are serialized
/// with reads by an async lock so `list` never races a half-finished
/// `delete`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    lock: RwLock<()>,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory when missing.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        info!(dir = %dir.display(), "file store opened");
        Ok(Self {
            dir,
            lock: RwLock::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{EXTENSION}"))
    }
}

#[async_trait]
impl DatasetStore for FileStore {
    async fn put(&self, records: &Dataset) -> StoreResult<String> {
        let key = new_key();
        let bytes = serde_json::to_vec_pretty(records)?;
        let path = self.path_for(&key);

        let _guard = self.lock.write().await;
        let size = bytes.len();
        tokio::task::spawn_blocking(move || write_bytes_atomic(&path, &bytes))
            .await
            .map_err(io::Error::other)??;

        info!(key = %key, records = records.len(), bytes = size, "dataset stored");
        Ok(key)
    }

    async fn get(&self, key: &str) -> StoreResult<Dataset> {
        if !is_valid_key(key) {
            return Err(StoreError::NotFound(key.to_string()));
        }
        let _guard = self.lock.read().await;
        let bytes = match tokio::fs::read(self.path_for(key)).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(key.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        let records: Dataset = serde_json::from_slice(&bytes)?;
        debug!(key = %key, records = records.len(), "dataset loaded");
        Ok(records)
    }

    async fn list(&self) -> StoreResult<Vec<String>> {
        let _guard = self.lock.read().await;
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.ends_with(TEMP_SUFFIX) {
                continue;
            }
            let Some(stem) = name.strip_suffix(&format!(".{EXTENSION}")) else {
                continue;
            };
            if is_valid_key(stem) && entry.file_type().await?.is_file() {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        if !is_valid_key(key) {
            return Err(StoreError::NotFound(key.to_string()));
        }
        let _guard = self.lock.write().await;
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => {
                info!(key = %key, "dataset deleted");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
