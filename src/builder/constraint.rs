//! Per-field rule accumulators used inside declaration closures.

use crate::builder::error::SpecError;
use crate::core::Rule;
use crate::engine::{itself, Checks, EachElement, Projection};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Rules for one field `U` of owner type `T`, in declaration order.
///
/// Only reachable from [`TypeSpecBuilder::property`](crate::builder::TypeSpecBuilder::property);
/// it is frozen into the registry when the declaration closure returns.
pub struct Constraint<T, U> {
    checks: Checks<U>,
    _owner: PhantomData<fn(&T)>,
}

impl<T, U: Debug + 'static> Constraint<T, U> {
    pub(crate) fn new() -> Self {
        Self {
            checks: Checks::default(),
            _owner: PhantomData,
        }
    }

    /// Append a rule after the ones already declared.
    pub fn add(&mut self, rule: Rule<U>) -> &mut Self {
        self.checks.rules.push(rule);
        self
    }

    /// Validate the field's value with the spec registered for `U`.
    pub fn nested(&mut self) -> &mut Self {
        self.checks.nested = Some(Box::new(Projection::<_, U>::new(itself::<U>)));
        self
    }

    /// Validate whatever `project` yields with the spec registered for `W`.
    ///
    /// `None` from the projection skips recursion, e.g.
    /// `nested_with(Option::as_ref)` for an optional child.
    pub fn nested_with<W, P>(&mut self, project: P) -> &mut Self
    where
        W: 'static,
        P: Fn(&U) -> Option<&W> + Send + Sync + 'static,
    {
        self.checks.nested = Some(Box::new(Projection::<P, W>::new(project)));
        self
    }

    /// Declare rules applied to every element of a collection field.
    pub fn each<E, F>(&mut self, declare: F) -> Result<&mut Self, SpecError>
    where
        for<'x> &'x U: IntoIterator<Item = &'x E>,
        E: Debug + 'static,
        F: FnOnce(&mut ElementConstraint<E>) -> Result<(), SpecError>,
    {
        let mut elements = ElementConstraint::new();
        declare(&mut elements)?;
        self.checks.each = Some(Box::new(EachElement::new(elements.checks)));
        Ok(self)
    }

    pub(crate) fn into_checks(self) -> Checks<U> {
        self.checks
    }
}

/// Rules for every element `E` of a collection field.
pub struct ElementConstraint<E> {
    checks: Checks<E>,
}

impl<E: Debug + 'static> ElementConstraint<E> {
    fn new() -> Self {
        Self {
            checks: Checks::default(),
        }
    }

    pub fn add(&mut self, rule: Rule<E>) -> &mut Self {
        self.checks.rules.push(rule);
        self
    }

    /// Validate each element with the spec registered for `E`.
    pub fn nested(&mut self) -> &mut Self {
        self.checks.nested = Some(Box::new(Projection::<_, E>::new(itself::<E>)));
        self
    }

    /// Validate the projection of each element, e.g. `Option::as_ref` to
    /// skip `None` elements.
    pub fn nested_with<W, P>(&mut self, project: P) -> &mut Self
    where
        W: 'static,
        P: Fn(&E) -> Option<&W> + Send + Sync + 'static,
    {
        self.checks.nested = Some(Box::new(Projection::<P, W>::new(project)));
        self
    }

    /// Elements that are themselves collections.
    pub fn each<I, F>(&mut self, declare: F) -> Result<&mut Self, SpecError>
    where
        for<'x> &'x E: IntoIterator<Item = &'x I>,
        I: Debug + 'static,
        F: FnOnce(&mut ElementConstraint<I>) -> Result<(), SpecError>,
    {
        let mut inner = ElementConstraint::new();
        declare(&mut inner)?;
        self.checks.each = Some(Box::new(EachElement::new(inner.checks)));
        Ok(self)
    }
}
