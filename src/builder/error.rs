//! Configuration errors raised while declaring or using a validation spec.

use thiserror::Error;

/// Errors caused by a defect in the declared spec rather than by bad data.
///
/// Data problems never show up here; they are reported through
/// [`Validated::Invalid`](crate::core::Validated::Invalid).
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Property `{property}` is already registered for `{type_name}`")]
    DuplicateProperty {
        type_name: &'static str,
        property: String,
    },

    #[error("Property name for `{type_name}` must not be empty")]
    EmptyPropertyName { type_name: &'static str },

    #[error("Rule `{rule}` has invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds {
        rule: &'static str,
        min: String,
        max: String,
    },

    #[error("Rule `pattern` has an invalid regular expression `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule `{rule}` needs at least one allowed value")]
    EmptyValueSet { rule: &'static str },

    #[error("No constraints are registered for `{type_name}`")]
    UnregisteredType { type_name: &'static str },

    #[error("Accessor for `{type_name}.{property}` panicked")]
    AccessorPanicked {
        type_name: &'static str,
        property: String,
    },

    #[error("Value at `{path}` is not a `{expected}`")]
    TypeMismatch {
        expected: &'static str,
        path: String,
    },

    #[error("Nesting depth limit ({limit}) exceeded at `{path}`; is the spec cyclic?")]
    DepthExceeded { limit: usize, path: String },

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}
