//! Builder registering the properties of one declared type.

use crate::builder::constraint::Constraint;
use crate::builder::error::SpecError;
use crate::engine::{Property, TypeSpec};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Collects the properties of `T` inside a `constraints::<T>` block.
pub struct TypeSpecBuilder<T> {
    spec: TypeSpec,
    _owner: PhantomData<fn(&T)>,
}

impl<T: 'static> TypeSpecBuilder<T> {
    pub(crate) fn extend(spec: TypeSpec) -> Self {
        Self {
            spec,
            _owner: PhantomData,
        }
    }

    /// Register the constraints of one property.
    ///
    /// `name` is the stable key reported in violation paths and `accessor`
    /// reads the field. Registering a name twice for the same type fails
    /// and leaves the first registration in place.
    pub fn property<U, A, F>(
        &mut self,
        name: impl Into<String>,
        accessor: A,
        declare: F,
    ) -> Result<&mut Self, SpecError>
    where
        U: Debug + 'static,
        A: Fn(&T) -> &U + Send + Sync + 'static,
        F: FnOnce(&mut Constraint<T, U>) -> Result<(), SpecError>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(SpecError::EmptyPropertyName {
                type_name: self.spec.type_name(),
            });
        }
        if self.spec.contains(&name) {
            return Err(SpecError::DuplicateProperty {
                type_name: self.spec.type_name(),
                property: name,
            });
        }

        let mut constraint = Constraint::new();
        declare(&mut constraint)?;
        self.spec
            .push(Box::new(Property::new(name, accessor, constraint.into_checks())));
        Ok(self)
    }

    pub(crate) fn finish(self) -> TypeSpec {
        self.spec
    }
}
