use std::collections::BTreeMap;

use rand::RngCore;

pub mod faker;
pub mod image;

/// Produces one kind of fake scalar value, selected by tag.
pub trait ScalarGenerator: Send + Sync {
    /// Tag that selects this generator in a schema.
    fn tag(&self) -> &'static str;

    /// Produce a fresh value. Implementations must not return an empty string.
    fn generate(&self, rng: &mut dyn RngCore) -> String;
}

/// Lookup table from scalar tags to generators, plus the fallback used for
/// tags nobody registered.
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn ScalarGenerator>>,
    fallback: Box<dyn ScalarGenerator>,
}

impl GeneratorRegistry {
    /// Registry with every built-in tag.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        faker::register(&mut registry);
        registry
    }

    /// Registry with no tags; every lookup hits the fallback.
    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
            fallback: Box::new(faker::LoremWordGenerator),
        }
    }

    /// Add or replace the generator for its tag.
    pub fn register_generator(&mut self, generator: Box<dyn ScalarGenerator>) {
        self.generators.insert(generator.tag(), generator);
    }

    pub fn generator(&self, tag: &str) -> Option<&dyn ScalarGenerator> {
        self.generators.get(tag).map(|generator| generator.as_ref())
    }

    pub fn fallback(&self) -> &dyn ScalarGenerator {
        self.fallback.as_ref()
    }

    /// Known tags, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("tags", &self.tags())
            .field("fallback", &self.fallback.tag())
            .finish()
    }
}
