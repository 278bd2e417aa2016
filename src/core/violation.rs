//! Field-level violations and their non-empty collection.

use crate::builder::SpecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::NonEmptyVec;

/// One failed rule on one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dot-joined path from the validated root, e.g. `items.<element:2>`.
    pub field_path: String,

    /// Rendered message of the failing rule.
    pub message: String,

    /// `Debug` rendering of the value the rule rejected.
    pub rejected_value: Option<String>,

    /// Code of the failing rule, e.g. `size` or `not_null`.
    pub constraint: String,
}

impl Violation {
    pub fn new(
        field_path: impl Into<String>,
        constraint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            message: message.into(),
            rejected_value: None,
            constraint: constraint.into(),
        }
    }

    pub fn with_rejected_value(mut self, value: impl Into<String>) -> Self {
        self.rejected_value = Some(value.into());
        self
    }

    pub fn field_path(&self) -> &str {
        &self.field_path
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

/// Ordered, never-empty sequence of violations.
#[derive(Clone, Debug, PartialEq)]
pub struct Violations(NonEmptyVec<Violation>);

impl Violations {
    /// Wraps collected violations; `None` when nothing was collected.
    pub fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        NonEmptyVec::from_vec(violations).map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Field paths in violation order.
    pub fn field_paths(&self) -> Vec<&str> {
        self.iter().map(|v| v.field_path.as_str()).collect()
    }

    pub fn into_inner(self) -> NonEmptyVec<Violation> {
        self.0
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0.into_vec()
    }

    /// JSON array of the violations, in order.
    pub fn to_json(&self) -> Result<String, SpecError> {
        let all: Vec<&Violation> = self.iter().collect();
        serde_json::to_string(&all).map_err(|e| SpecError::SerializationFailed(e.to_string()))
    }
}

impl From<NonEmptyVec<Violation>> for Violations {
    fn from(violations: NonEmptyVec<Violation>) -> Self {
        Self(violations)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
