//! Iterative traversal of an instance against the registry.
//!
//! The walk keeps an explicit LIFO work stack instead of recursing, so deep
//! object graphs cost heap, not call stack. Children produced by one step are
//! pushed in reverse, which keeps the output in depth-first pre-order:
//! a field's own violations, then everything below it, then the next field.

use crate::builder::SpecError;
use crate::core::{FieldPath, Violation};
use crate::engine::checks::ElementCheck;
use crate::engine::registry::ValidationSpec;
use crate::engine::type_spec::PropertyCheck;
use std::any::{Any, TypeId};

/// One unit of pending work. `'s` borrows the registry, `'a` the instance.
pub(crate) enum Task<'s, 'a> {
    /// A value to validate against its registered type spec, if any.
    Object {
        value: &'a dyn Any,
        type_id: TypeId,
        type_name: &'static str,
        path: FieldPath,
    },
    /// One declared property of an owner value.
    Property {
        property: &'s dyn PropertyCheck,
        owner: &'a dyn Any,
        path: FieldPath,
    },
    /// One member of a collection property.
    Element {
        checks: &'s dyn ElementCheck,
        value: &'a dyn Any,
        path: FieldPath,
    },
}

/// Output of a single step: violations found and follow-up work.
pub(crate) struct Cursor<'s, 'a> {
    pub(crate) violations: Vec<Violation>,
    pub(crate) pending: Vec<Task<'s, 'a>>,
}

impl<'s, 'a> Cursor<'s, 'a> {
    fn new() -> Self {
        Self {
            violations: Vec::new(),
            pending: Vec::new(),
        }
    }
}

/// Validate `root` and every value reachable through nested/element markers.
pub(crate) fn run<'s, 'a>(
    spec: &'s ValidationSpec,
    root: &'a dyn Any,
    type_id: TypeId,
    type_name: &'static str,
) -> Result<Vec<Violation>, SpecError> {
    let max_depth = spec.config().max_depth;
    let mut cursor = Cursor::new();
    let mut stack = vec![Task::Object {
        value: root,
        type_id,
        type_name,
        path: FieldPath::root(),
    }];

    while let Some(task) = stack.pop() {
        match task {
            Task::Object {
                value,
                type_id,
                type_name,
                path,
            } => {
                let Some(type_spec) = spec.type_spec_by_id(type_id) else {
                    tracing::trace!(path = %path, type_name, "no constraints for nested value");
                    continue;
                };
                if path.depth() > max_depth {
                    return Err(SpecError::DepthExceeded {
                        limit: max_depth,
                        path: path.to_string(),
                    });
                }
                for property in type_spec.properties().rev() {
                    stack.push(Task::Property {
                        property,
                        owner: value,
                        path: path.clone(),
                    });
                }
            }
            Task::Property {
                property,
                owner,
                path,
            } => {
                property.inspect(owner, &path.field(property.name()), &mut cursor)?;
            }
            Task::Element {
                checks,
                value,
                path,
            } => {
                checks.inspect(value, &path, &mut cursor)?;
            }
        }
        stack.extend(cursor.pending.drain(..).rev());
    }

    Ok(cursor.violations)
}
