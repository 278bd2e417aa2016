//! Fieldcheck: declarative, type-checked field validation
//!
//! Fieldcheck separates a one-time declaration phase from any number of
//! evaluations. Rules are attached to the fields of a type through builder
//! closures, frozen into an immutable registry, and evaluated against
//! instances without ever raising for bad data: every failing rule becomes a
//! [`Violation`], and all of them are reported together.
//!
//! # Core Concepts
//!
//! - **Rule**: a pure predicate with a message template
//! - **Constraint**: the ordered rules of one field of one type
//! - **TypeSpec**: every declared property of one type
//! - **ValidationSpec**: the immutable registry; its only job is `validate`
//! - **Validated**: `Valid(value)` or `Invalid(violations)`
//!
//! Configuration mistakes (duplicate properties, inverted bounds, validating
//! an unregistered type) are a separate tier reported as [`SpecError`].
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{rules, validation_spec, Validated};
//!
//! #[derive(Debug)]
//! struct Address {
//!     city: String,
//! }
//!
//! #[derive(Debug)]
//! struct Customer {
//!     emails: Vec<Option<String>>,
//!     address: Address,
//! }
//!
//! let spec = validation_spec(|spec| {
//!     spec.constraints::<Address>(|c| {
//!         c.property("city", |a: &Address| &a.city, |p| {
//!             p.add(rules::not_blank());
//!             Ok(())
//!         })?;
//!         Ok(())
//!     })?
//!     .constraints::<Customer>(|c| {
//!         c.property("emails", |cu: &Customer| &cu.emails, |p| {
//!             p.each(|e| {
//!                 e.add(rules::not_null());
//!                 Ok(())
//!             })?;
//!             Ok(())
//!         })?
//!         .property("address", |cu: &Customer| &cu.address, |p| {
//!             p.nested();
//!             Ok(())
//!         })?;
//!         Ok(())
//!     })
//! })
//! .unwrap();
//!
//! let customer = Customer {
//!     emails: vec![Some("ok@domain.com".into()), None],
//!     address: Address { city: String::new() },
//! };
//!
//! match spec.validate(customer).unwrap() {
//!     Validated::Invalid(violations) => {
//!         assert_eq!(
//!             violations.field_paths(),
//!             vec!["emails.<element:1>", "address.city"]
//!         );
//!     }
//!     Validated::Valid(_) => unreachable!(),
//! }
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use builder::{validation_spec, SpecError, ValidationSpecBuilder};
pub use crate::core::{FieldPath, Rule, Validated, Violation, Violations};
pub use engine::{EngineConfig, ValidationSpec};
