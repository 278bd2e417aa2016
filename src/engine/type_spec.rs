//! Frozen constraints for one declared type.

use crate::builder::SpecError;
use crate::core::FieldPath;
use crate::engine::checks::Checks;
use crate::engine::walk::Cursor;
use std::any::{type_name, Any};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A declared property with its owner and field types erased.
pub(crate) trait PropertyCheck: Send + Sync {
    fn name(&self) -> &str;

    /// Extract the field from `owner` and apply its checks at `path`.
    fn inspect<'s, 'a>(
        &'s self,
        owner: &'a dyn Any,
        path: &FieldPath,
        cursor: &mut Cursor<'s, 'a>,
    ) -> Result<(), SpecError>;
}

/// `(name, accessor)` pair together with the field's checks.
pub(crate) struct Property<T, U, A> {
    name: String,
    accessor: A,
    checks: Checks<U>,
    _owner: PhantomData<fn(&T)>,
}

impl<T, U, A> Property<T, U, A> {
    pub(crate) fn new(name: String, accessor: A, checks: Checks<U>) -> Self {
        Self {
            name,
            accessor,
            checks,
            _owner: PhantomData,
        }
    }
}

impl<T, U, A> PropertyCheck for Property<T, U, A>
where
    T: 'static,
    U: Debug + 'static,
    A: Fn(&T) -> &U + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn inspect<'s, 'a>(
        &'s self,
        owner: &'a dyn Any,
        path: &FieldPath,
        cursor: &mut Cursor<'s, 'a>,
    ) -> Result<(), SpecError> {
        let owner: &'a T = owner
            .downcast_ref::<T>()
            .ok_or_else(|| SpecError::TypeMismatch {
                expected: type_name::<T>(),
                path: path.to_string(),
            })?;
        let value: &'a U = catch_unwind(AssertUnwindSafe(|| (self.accessor)(owner))).map_err(
            |_| SpecError::AccessorPanicked {
                type_name: type_name::<T>(),
                property: self.name.clone(),
            },
        )?;

        tracing::trace!(path = %path, rules = self.checks.rules.len(), "checking property");
        self.checks.apply(value, path, cursor);
        Ok(())
    }
}

/// Ordered properties of exactly one type.
pub struct TypeSpec {
    type_name: &'static str,
    properties: Vec<Box<dyn PropertyCheck>>,
}

impl TypeSpec {
    pub(crate) fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            properties: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Property names in declaration order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name() == name)
    }

    pub(crate) fn push(&mut self, property: Box<dyn PropertyCheck>) {
        self.properties.push(property);
    }

    pub(crate) fn properties(&self) -> impl DoubleEndedIterator<Item = &dyn PropertyCheck> {
        self.properties.iter().map(|p| p.as_ref())
    }
}

impl std::fmt::Debug for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeSpec")
            .field("type_name", &self.type_name)
            .field("properties", &self.property_names())
            .finish()
    }
}
