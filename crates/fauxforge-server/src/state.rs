use std::sync::Arc;
use std::time::Duration;

use fauxforge_generate::GenerationEngine;
use fauxforge_store::DatasetStore;

/// Largest `count` accepted by default.
pub const DEFAULT_MAX_COUNT: usize = 100_000;
/// Default wall-clock budget for one generation request.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Request limits applied by the handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub max_count: usize,
    pub generation_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<GenerationEngine>,
    pub store: Arc<dyn DatasetStore>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(
        engine: Arc<GenerationEngine>,
        store: Arc<dyn DatasetStore>,
        config: ServerConfig,
    ) -> Self {
        Self {
            engine,
            store,
            config,
        }
    }
}
