//! Core validation types.
//!
//! This module contains the leaf building blocks shared by the builder and
//! the engine:
//! - `Rule`: a pure predicate with a message template
//! - `FieldPath`: where in the object graph a value lives
//! - `Violation` / `Violations`: recorded rule failures
//! - `Validated`: the `Valid` / `Invalid` outcome
//!
//! Nothing here performs I/O or keeps shared state.

mod path;
mod rule;
mod validated;
mod violation;

pub use path::{FieldPath, PathSegment};
pub use rule::Rule;
pub use validated::Validated;
pub use violation::{Violation, Violations};
