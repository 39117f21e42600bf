use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fauxforge_generate::GenerateOptions;
use fauxforge_generate::model::{
    DEFAULT_IMAGE_BASE_URL, DEFAULT_MAX_ARRAY_LEN, DEFAULT_MAX_DEPTH, DEFAULT_MAX_VALUES,
};
use fauxforge_server::{DEFAULT_GENERATION_TIMEOUT, DEFAULT_MAX_COUNT, ServerConfig};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Where generated datasets are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// One JSON file per dataset under `data_dir`.
    File,
    /// Process memory; lost on exit.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub listen_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub storage: StorageKind,
    pub max_count: usize,
    pub max_depth: usize,
    pub max_array_len: usize,
    pub max_values: usize,
    pub image_base_url: String,
    pub generation_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_dir: PathBuf::from("data"),
            storage: StorageKind::File,
            max_count: DEFAULT_MAX_COUNT,
            max_depth: DEFAULT_MAX_DEPTH,
            max_array_len: DEFAULT_MAX_ARRAY_LEN,
            max_values: DEFAULT_MAX_VALUES,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            generation_timeout_secs: DEFAULT_GENERATION_TIMEOUT.as_secs(),
        }
    }
}

impl ServerSettings {
    /// Load settings from a TOML file, or defaults when no path is given.
    /// Missing keys take their default values.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_count == 0 {
            return Err(SettingsError::Invalid("max_count must be positive".into()));
        }
        if self.max_depth == 0 {
            return Err(SettingsError::Invalid("max_depth must be positive".into()));
        }
        if self.max_array_len == 0 {
            return Err(SettingsError::Invalid("max_array_len must be positive".into()));
        }
        if self.max_values == 0 {
            return Err(SettingsError::Invalid("max_values must be positive".into()));
        }
        if self.generation_timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "generation_timeout_secs must be positive".into(),
            ));
        }
        if self.image_base_url.trim().is_empty() {
            return Err(SettingsError::Invalid("image_base_url must not be empty".into()));
        }
        Ok(())
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            max_depth: self.max_depth,
            max_array_len: self.max_array_len,
            max_values: self.max_values,
            image_base_url: self.image_base_url.clone(),
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            max_count: self.max_count,
            generation_timeout: Duration::from_secs(self.generation_timeout_secs),
        }
    }
}
