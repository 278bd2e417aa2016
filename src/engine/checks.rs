//! Frozen per-value checks: rules plus nested and element recursion markers.
//!
//! The same `Checks<V>` backs a declared property and the elements of a
//! collection property, so collections of collections work the same way as
//! a single level.

use crate::builder::SpecError;
use crate::core::{FieldPath, Rule};
use crate::engine::walk::{Cursor, Task};
use std::any::{type_name, Any, TypeId};
use std::fmt::Debug;
use std::marker::PhantomData;
use stillwater::validation::Validation;

/// Where the engine descends from a value into a registered type.
pub(crate) trait Descend<V>: Send + Sync {
    fn descend<'s, 'a>(&'s self, value: &'a V, path: &FieldPath) -> Option<Task<'s, 'a>>;
}

/// Yields one element task per member of a collection value.
pub(crate) trait ElementSource<V>: Send + Sync {
    fn elements<'s, 'a>(&'s self, value: &'a V, path: &FieldPath, out: &mut Vec<Task<'s, 'a>>);
}

/// Type-erased checks run against a single collection element.
pub(crate) trait ElementCheck: Send + Sync {
    fn inspect<'s, 'a>(
        &'s self,
        value: &'a dyn Any,
        path: &FieldPath,
        cursor: &mut Cursor<'s, 'a>,
    ) -> Result<(), SpecError>;
}

pub(crate) struct Checks<V> {
    pub(crate) rules: Vec<Rule<V>>,
    pub(crate) nested: Option<Box<dyn Descend<V>>>,
    pub(crate) each: Option<Box<dyn ElementSource<V>>>,
}

impl<V> Default for Checks<V> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            nested: None,
            each: None,
        }
    }
}

impl<V: Debug + 'static> Checks<V> {
    /// Run every rule in order, then queue nested and element recursion.
    pub(crate) fn apply<'s, 'a>(
        &'s self,
        value: &'a V,
        path: &FieldPath,
        cursor: &mut Cursor<'s, 'a>,
    ) {
        let outcomes: Vec<_> = self.rules.iter().map(|rule| rule.check(value, path)).collect();
        if let Validation::Failure(violations) = Validation::all_vec(outcomes) {
            cursor.violations.extend(violations.into_vec());
        }

        if let Some(task) = self.nested.as_ref().and_then(|nested| nested.descend(value, path)) {
            cursor.pending.push(task);
        }

        if let Some(each) = &self.each {
            each.elements(value, path, &mut cursor.pending);
        }
    }
}

impl<E: Debug + 'static> ElementCheck for Checks<E> {
    fn inspect<'s, 'a>(
        &'s self,
        value: &'a dyn Any,
        path: &FieldPath,
        cursor: &mut Cursor<'s, 'a>,
    ) -> Result<(), SpecError> {
        let element = value
            .downcast_ref::<E>()
            .ok_or_else(|| SpecError::TypeMismatch {
                expected: type_name::<E>(),
                path: path.to_string(),
            })?;
        self.apply(element, path, cursor);
        Ok(())
    }
}

/// Nested recursion through a projection `&V -> Option<&W>`.
pub(crate) struct Projection<P, W> {
    project: P,
    _target: PhantomData<fn() -> W>,
}

impl<P, W> Projection<P, W> {
    pub(crate) fn new(project: P) -> Self {
        Self {
            project,
            _target: PhantomData,
        }
    }
}

impl<V, W, P> Descend<V> for Projection<P, W>
where
    W: 'static,
    P: Fn(&V) -> Option<&W> + Send + Sync,
{
    fn descend<'s, 'a>(&'s self, value: &'a V, path: &FieldPath) -> Option<Task<'s, 'a>> {
        let target: &'a W = (self.project)(value)?;
        Some(Task::Object {
            value: target,
            type_id: TypeId::of::<W>(),
            type_name: type_name::<W>(),
            path: path.clone(),
        })
    }
}

/// Element recursion over any collection iterable by reference.
pub(crate) struct EachElement<E> {
    checks: Checks<E>,
}

impl<E> EachElement<E> {
    pub(crate) fn new(checks: Checks<E>) -> Self {
        Self { checks }
    }
}

impl<V, E> ElementSource<V> for EachElement<E>
where
    for<'x> &'x V: IntoIterator<Item = &'x E>,
    E: Debug + 'static,
{
    fn elements<'s, 'a>(&'s self, value: &'a V, path: &FieldPath, out: &mut Vec<Task<'s, 'a>>) {
        for (index, element) in value.into_iter().enumerate() {
            out.push(Task::Element {
                checks: &self.checks,
                value: element,
                path: path.element(index),
            });
        }
    }
}

/// Identity projection used by `nested()`.
pub(crate) fn itself<V>(value: &V) -> Option<&V> {
    Some(value)
}
