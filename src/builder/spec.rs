//! Top-level builder assembling type specs into one registry.

use crate::builder::error::SpecError;
use crate::builder::type_spec::TypeSpecBuilder;
use crate::engine::{EngineConfig, TypeSpec, ValidationSpec};
use std::any::{type_name, TypeId};
use std::collections::HashMap;

/// Builder for a [`ValidationSpec`] with a fluent API.
pub struct ValidationSpecBuilder {
    specs: HashMap<TypeId, TypeSpec>,
    config: EngineConfig,
}

impl ValidationSpecBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
            config: EngineConfig::default(),
        }
    }

    /// Declare constraints for `T`.
    ///
    /// Several blocks for the same type add to one another; a property name
    /// may still be registered only once per type across all blocks.
    pub fn constraints<T: 'static>(
        mut self,
        declare: impl FnOnce(&mut TypeSpecBuilder<T>) -> Result<(), SpecError>,
    ) -> Result<Self, SpecError> {
        let type_id = TypeId::of::<T>();
        let spec = self
            .specs
            .remove(&type_id)
            .unwrap_or_else(|| TypeSpec::new(type_name::<T>()));

        let mut builder = TypeSpecBuilder::extend(spec);
        declare(&mut builder)?;
        self.specs.insert(type_id, builder.finish());
        Ok(self)
    }

    /// Replace the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the nesting depth limit.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Freeze the declarations into an immutable registry.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<ValidationSpec, SpecError> {
        self.config.check()?;
        tracing::debug!(
            types = self.specs.len(),
            max_depth = self.config.max_depth,
            "validation spec built"
        );
        Ok(ValidationSpec::new(self.specs, self.config))
    }
}

impl Default for ValidationSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationSpec {
    /// Start declaring a new registry.
    pub fn builder() -> ValidationSpecBuilder {
        ValidationSpecBuilder::new()
    }
}
