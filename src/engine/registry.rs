//! The immutable registry and its `validate` operation.

use crate::builder::SpecError;
use crate::core::{Validated, Violation};
use crate::engine::config::EngineConfig;
use crate::engine::type_spec::TypeSpec;
use crate::engine::walk;
use std::any::{type_name, TypeId};
use std::collections::HashMap;

/// Immutable mapping from declared type to its constraints.
///
/// Built once with [`ValidationSpecBuilder`](crate::builder::ValidationSpecBuilder)
/// and shared freely afterwards: it is `Send + Sync`, never mutated, and
/// every call to [`validate`](Self::validate) is independent of the others.
///
/// Lookup is by exact type. A value whose type has no registered spec is a
/// configuration error at the top level and silently skipped when reached
/// through a nested marker.
pub struct ValidationSpec {
    specs: HashMap<TypeId, TypeSpec>,
    config: EngineConfig,
}

impl ValidationSpec {
    pub(crate) fn new(specs: HashMap<TypeId, TypeSpec>, config: EngineConfig) -> Self {
        Self { specs, config }
    }

    /// Validate `instance`, handing it back unchanged when every rule passes.
    pub fn validate<T: 'static>(&self, instance: T) -> Result<Validated<T>, SpecError> {
        let violations = self.violations(&instance)?;
        Ok(Validated::from_violations(instance, violations))
    }

    /// Like [`validate`](Self::validate) for a borrowed instance.
    pub fn validate_ref<'v, T: 'static>(
        &self,
        instance: &'v T,
    ) -> Result<Validated<&'v T>, SpecError> {
        let violations = self.violations(instance)?;
        Ok(Validated::from_violations(instance, violations))
    }

    /// Every violation of `instance`, in property, rule, element order.
    pub fn violations<T: 'static>(&self, instance: &T) -> Result<Vec<Violation>, SpecError> {
        let type_name = type_name::<T>();
        if !self.is_registered::<T>() {
            return Err(SpecError::UnregisteredType { type_name });
        }

        let violations = walk::run(self, instance, TypeId::of::<T>(), type_name)?;
        tracing::debug!(type_name, violations = violations.len(), "validated instance");
        Ok(violations)
    }

    pub fn is_registered<T: 'static>(&self) -> bool {
        self.specs.contains_key(&TypeId::of::<T>())
    }

    pub fn type_spec<T: 'static>(&self) -> Option<&TypeSpec> {
        self.type_spec_by_id(TypeId::of::<T>())
    }

    pub(crate) fn type_spec_by_id(&self, type_id: TypeId) -> Option<&TypeSpec> {
        self.specs.get(&type_id)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl std::fmt::Debug for ValidationSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<&str> = self.specs.values().map(TypeSpec::type_name).collect();
        types.sort_unstable();
        f.debug_struct("ValidationSpec")
            .field("types", &types)
            .field("config", &self.config)
            .finish()
    }
}
