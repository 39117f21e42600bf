use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default maximum schema depth accepted by the engine.
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Default ceiling on the upper bound of any single array node.
pub const DEFAULT_MAX_ARRAY_LEN: usize = 10_000;
/// Default ceiling on the number of values produced by one run.
pub const DEFAULT_MAX_VALUES: usize = 10_000_000;
/// Default base URL for image nodes.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://picsum.photos";

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Deepest node level the interpreter will descend into.
    pub max_depth: usize,
    /// Largest `maxSize` an array node may declare.
    pub max_array_len: usize,
    /// Most values (leaves, objects and arrays) one run may produce.
    pub max_values: usize,
    /// Image service prefix; `/<width>/<height>?random=<n>` is appended.
    pub image_base_url: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_array_len: DEFAULT_MAX_ARRAY_LEN,
            max_values: DEFAULT_MAX_VALUES,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub records_requested: u64,
    pub records_generated: u64,
    pub generator_usage: BTreeMap<String, u64>,
    pub fallback_count: u64,
    pub fallback_tags: BTreeMap<String, u64>,
    pub images_generated: u64,
    pub array_elements: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, records_requested: u64) -> Self {
        Self {
            run_id,
            records_requested,
            ..Self::default()
        }
    }

    pub fn record_generator_usage(&mut self, tag: &str) {
        *self.generator_usage.entry(tag.to_string()).or_insert(0) += 1;
    }

    pub fn record_fallback(&mut self, tag: &str) {
        self.fallback_count += 1;
        *self.fallback_tags.entry(tag.to_string()).or_insert(0) += 1;
    }

    pub fn record_image(&mut self) {
        self.images_generated += 1;
    }

    pub fn record_array(&mut self, len: usize) {
        let len = u64::try_from(len).unwrap_or(u64::MAX);
        self.array_elements = self.array_elements.saturating_add(len);
    }
}
