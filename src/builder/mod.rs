//! Builder API for declaring validation specs.
//!
//! This module provides fluent builders for attaching rules to the fields of
//! a type and for assembling several types into one immutable
//! [`ValidationSpec`]. Declarations are closures, so field types are checked
//! by the compiler without any reflection.

pub mod constraint;
pub mod error;
pub mod spec;
pub mod type_spec;

pub use constraint::{Constraint, ElementConstraint};
pub use error::SpecError;
pub use spec::ValidationSpecBuilder;
pub use type_spec::TypeSpecBuilder;

use crate::engine::ValidationSpec;

/// Declare and build a registry in one expression.
///
/// # Example
///
/// ```
/// use fieldcheck::builder::validation_spec;
/// use fieldcheck::rules;
///
/// #[derive(Debug)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let spec = validation_spec(|spec| {
///     spec.constraints::<User>(|c| {
///         c.property("name", |u: &User| &u.name, |p| {
///             p.add(rules::not_blank()).add(rules::length(1, 40)?);
///             Ok(())
///         })?
///         .property("age", |u: &User| &u.age, |p| {
///             p.add(rules::range(18, 130)?);
///             Ok(())
///         })?;
///         Ok(())
///     })
/// })
/// .unwrap();
///
/// let outcome = spec
///     .validate(User { name: " ".into(), age: 12 })
///     .unwrap();
/// let paths = outcome.fold(|v| v.field_paths().join(","), |_| String::new());
/// assert_eq!(paths, "name,age");
/// ```
pub fn validation_spec<F>(declare: F) -> Result<ValidationSpec, SpecError>
where
    F: FnOnce(ValidationSpecBuilder) -> Result<ValidationSpecBuilder, SpecError>,
{
    declare(ValidationSpecBuilder::new())?.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    #[derive(Debug)]
    struct Flag {
        enabled: bool,
    }

    #[test]
    fn validation_spec_builds_registry() {
        let spec = validation_spec(|spec| {
            spec.constraints::<Flag>(|c| {
                c.property("enabled", |f: &Flag| &f.enabled, |p| {
                    p.add(rules::assert_true());
                    Ok(())
                })?;
                Ok(())
            })
        })
        .unwrap();

        assert!(spec.validate(Flag { enabled: true }).unwrap().is_valid());
    }

    #[test]
    fn validation_spec_propagates_declaration_errors() {
        let result = validation_spec(|spec| {
            spec.constraints::<Flag>(|c| {
                c.property("enabled", |f: &Flag| &f.enabled, |_| Ok(()))?
                    .property("enabled", |f: &Flag| &f.enabled, |_| Ok(()))?;
                Ok(())
            })
        });

        assert!(matches!(result, Err(SpecError::DuplicateProperty { .. })));
    }
}
