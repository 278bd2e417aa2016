//! The two-armed outcome of validating an instance.

use crate::core::violation::{Violation, Violations};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Either the validated value or every violation found, in order.
///
/// Data problems always land in [`Validated::Invalid`]; configuration
/// problems are reported separately as [`SpecError`](crate::builder::SpecError).
#[derive(Clone, Debug, PartialEq)]
pub enum Validated<T> {
    Valid(T),
    Invalid(Violations),
}

impl<T> Validated<T> {
    /// `Valid(value)` when nothing was collected, `Invalid` otherwise.
    pub fn from_violations(value: T, violations: Vec<Violation>) -> Self {
        match Violations::from_vec(violations) {
            Some(violations) => Self::Invalid(violations),
            None => Self::Valid(value),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Branch on the outcome, handling violations first and the value second.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldcheck::core::Validated;
    ///
    /// let outcome: Validated<u32> = Validated::Valid(7);
    /// let text = outcome.fold(|violations| violations.to_string(), |n| format!("ok {n}"));
    /// assert_eq!(text, "ok 7");
    /// ```
    pub fn fold<R>(
        self,
        on_invalid: impl FnOnce(Violations) -> R,
        on_valid: impl FnOnce(T) -> R,
    ) -> R {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(violations) => on_invalid(violations),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validated<U> {
        match self {
            Self::Valid(value) => Validated::Valid(f(value)),
            Self::Invalid(violations) => Validated::Invalid(violations),
        }
    }

    pub fn valid(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(violations) => Some(violations),
        }
    }

    pub fn into_result(self) -> Result<T, Violations> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(violations) => Err(violations),
        }
    }

    /// Convert into a stillwater [`Validation`] for applicative composition.
    pub fn into_validation(self) -> Validation<T, NonEmptyVec<Violation>> {
        match self {
            Self::Valid(value) => Validation::Success(value),
            Self::Invalid(violations) => Validation::Failure(violations.into_inner()),
        }
    }
}

impl<T> From<Validation<T, NonEmptyVec<Violation>>> for Validated<T> {
    fn from(validation: Validation<T, NonEmptyVec<Violation>>) -> Self {
        match validation {
            Validation::Success(value) => Self::Valid(value),
            Validation::Failure(violations) => Self::Invalid(violations.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_violations_are_valid() {
        let outcome = Validated::from_violations("x", Vec::new());
        assert!(outcome.is_valid());
        assert_eq!(outcome.valid(), Some(&"x"));
    }

    #[test]
    fn collected_violations_are_invalid() {
        let outcome = Validated::from_violations(
            1,
            vec![Violation::new("name", "not_blank", "must not be blank")],
        );

        assert!(outcome.is_invalid());
        assert_eq!(outcome.violations().map(Violations::len), Some(1));
    }

    #[test]
    fn fold_takes_invalid_branch() {
        let outcome = Validated::from_violations(
            (),
            vec![Violation::new("name", "not_blank", "must not be blank")],
        );

        let paths = outcome.fold(
            |violations| violations.field_paths().join(","),
            |_| panic!("The validation should not be valid"),
        );
        assert_eq!(paths, "name");
    }

    #[test]
    fn stillwater_roundtrip_keeps_outcome() {
        let outcome: Validated<i32> = Validated::from_violations(
            3,
            vec![Violation::new("n", "negative", "must be negative")],
        );

        let back: Validated<i32> = outcome.clone().into_validation().into();
        assert_eq!(back, outcome);

        let valid: Validated<i32> = Validated::Valid(3).into_validation().into();
        assert_eq!(valid, Validated::Valid(3));
    }
}
