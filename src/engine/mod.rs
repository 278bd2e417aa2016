//! Evaluation side: the frozen registry and the traversal that applies it.
//!
//! Everything here is read-only after the builder hands over a
//! [`ValidationSpec`]. The traversal keeps its state in a per-call work
//! stack, so one registry can serve any number of threads at once.

mod checks;
mod config;
mod registry;
mod type_spec;
mod walk;

pub use config::{EngineConfig, DEFAULT_MAX_DEPTH};
pub use registry::ValidationSpec;
pub use type_spec::TypeSpec;

pub(crate) use checks::{itself, Checks, EachElement, Projection};
pub(crate) use type_spec::Property;
