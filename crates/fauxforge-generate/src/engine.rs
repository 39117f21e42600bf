use std::time::Instant;

use rand::{Rng, RngCore};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use fauxforge_core::{ArraySpec, Dataset, Field, ImageSpec, Record, SchemaNode};

use crate::errors::GenerationError;
use crate::generators::GeneratorRegistry;
use crate::generators::image::image_url;
use crate::model::{GenerateOptions, GenerationReport};

/// Upper bound on eager `Vec` reservations; sizes come from callers.
const PREALLOC_LIMIT: usize = 1024;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub records: Dataset,
    pub report: GenerationReport,
}

/// Entry point for turning a schema into records.
///
/// The engine holds no per-run state, so one instance can serve concurrent
/// runs as long as each run brings its own random source.
#[derive(Debug)]
pub struct GenerationEngine {
    options: GenerateOptions,
    registry: GeneratorRegistry,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self::with_registry(options, GeneratorRegistry::new())
    }

    pub fn with_registry(options: GenerateOptions, registry: GeneratorRegistry) -> Self {
        Self { options, registry }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Generate a single record.
    pub fn generate(
        &self,
        schema: &SchemaNode,
        rng: &mut dyn RngCore,
    ) -> Result<Record, GenerationError> {
        self.check_limits(schema)?;
        let mut report = GenerationReport::default();
        let mut walker = Walker::new(self, &mut report, None);
        walker.node(schema, rng)
    }

    /// Generate `count` independent records from the same schema.
    ///
    /// Either every record is produced or an error is returned; partial
    /// datasets never escape. The cancellation token is polled between
    /// records and between array elements.
    pub fn run(
        &self,
        schema: &SchemaNode,
        count: usize,
        rng: &mut dyn RngCore,
        cancel: Option<&CancellationToken>,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report =
            GenerationReport::new(run_id.clone(), u64::try_from(count).unwrap_or(u64::MAX));

        info!(
            run_id = %run_id,
            records = count,
            depth = schema.depth(),
            "generation started"
        );

        let mut records = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        let outcome = self.check_limits(schema).and_then(|()| {
            Walker::new(self, &mut report, cancel).fill(schema, count, rng, &mut records)
        });

        report.records_generated = u64::try_from(records.len()).unwrap_or(u64::MAX);
        report.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(()) => {
                info!(
                    run_id = %run_id,
                    records = report.records_generated,
                    fallbacks = report.fallback_count,
                    images = report.images_generated,
                    array_elements = report.array_elements,
                    duration_ms = report.duration_ms,
                    "generation completed"
                );
                Ok(GenerationResult { records, report })
            }
            Err(err) => {
                warn!(run_id = %run_id, error = %err, "generation failed");
                Err(err)
            }
        }
    }

    /// Reject schemas that nest too deep or declare oversized arrays before
    /// any value is generated.
    fn check_limits(&self, schema: &SchemaNode) -> Result<(), GenerationError> {
        self.check_node(schema, "schema", 1)
    }

    fn check_node(
        &self,
        node: &SchemaNode,
        path: &str,
        depth: usize,
    ) -> Result<(), GenerationError> {
        let limit = self.options.max_depth;
        if depth > limit {
            return Err(GenerationError::DepthExceeded { limit });
        }
        match node {
            SchemaNode::Scalar(_) | SchemaNode::Image(_) => Ok(()),
            SchemaNode::Object(fields) => fields.iter().try_for_each(|field| {
                self.check_node(&field.node, &format!("{path}.{}", field.name), depth + 1)
            }),
            SchemaNode::Array(spec) => {
                let limit = self.options.max_array_len;
                if spec.max_size > limit {
                    return Err(GenerationError::ArrayTooLarge {
                        path: path.to_string(),
                        max_size: spec.max_size,
                        limit,
                    });
                }
                self.check_node(&spec.element, &format!("{path}[]"), depth + 1)
            }
        }
    }
}

/// Per-run traversal state.
struct Walker<'a> {
    engine: &'a GenerationEngine,
    report: &'a mut GenerationReport,
    cancel: Option<&'a CancellationToken>,
    records_done: usize,
    values: usize,
}

impl<'a> Walker<'a> {
    fn new(
        engine: &'a GenerationEngine,
        report: &'a mut GenerationReport,
        cancel: Option<&'a CancellationToken>,
    ) -> Self {
        Self {
            engine,
            report,
            cancel,
            records_done: 0,
            values: 0,
        }
    }

    fn fill(
        &mut self,
        schema: &SchemaNode,
        count: usize,
        rng: &mut dyn RngCore,
        records: &mut Dataset,
    ) -> Result<(), GenerationError> {
        for _ in 0..count {
            self.check_cancelled()?;
            records.push(self.node(schema, rng)?);
            self.records_done += 1;
        }
        Ok(())
    }

    fn node(&mut self, node: &SchemaNode, rng: &mut dyn RngCore) -> Result<Value, GenerationError> {
        let limit = self.engine.options.max_values;
        if self.values >= limit {
            return Err(GenerationError::ValueBudgetExceeded { limit });
        }
        self.values += 1;

        match node {
            SchemaNode::Object(fields) => self.object(fields, rng),
            SchemaNode::Array(spec) => self.array(spec, rng),
            SchemaNode::Image(spec) => Ok(Value::String(self.image(spec, rng))),
            SchemaNode::Scalar(tag) => Ok(Value::String(self.scalar(tag, rng))),
        }
    }

    fn object(
        &mut self,
        fields: &[Field],
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        let mut record = Map::with_capacity(fields.len());
        for field in fields {
            let value = self.node(&field.node, rng)?;
            record.insert(field.name.clone(), value);
        }
        Ok(Value::Object(record))
    }

    fn array(
        &mut self,
        spec: &ArraySpec,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        let len = rng.random_range(spec.min_size..=spec.max_size);
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            self.check_cancelled()?;
            items.push(self.node(&spec.element, rng)?);
        }
        self.report.record_array(len);
        Ok(Value::Array(items))
    }

    fn image(&mut self, spec: &ImageSpec, rng: &mut dyn RngCore) -> String {
        self.report.record_image();
        image_url(&self.engine.options.image_base_url, spec, rng)
    }

    fn scalar(&mut self, tag: &str, rng: &mut dyn RngCore) -> String {
        let registry = &self.engine.registry;
        match registry.generator(tag) {
            Some(generator) => {
                self.report.record_generator_usage(generator.tag());
                generator.generate(rng)
            }
            None => {
                if !self.report.fallback_tags.contains_key(tag) {
                    debug!(tag = %tag, "unknown scalar tag, using fallback");
                }
                self.report.record_fallback(tag);
                registry.fallback().generate(rng)
            }
        }
    }

    fn check_cancelled(&self) -> Result<(), GenerationError> {
        match self.cancel {
            Some(token) if token.is_cancelled() => Err(GenerationError::Cancelled {
                records_done: self.records_done,
            }),
            _ => Ok(()),
        }
    }
}
