//! Size and membership rules for collections.

use crate::builder::SpecError;
use crate::core::Rule;
use crate::rules::ensure_bounds;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;

/// Collections whose element count the size rules can inspect.
pub trait Length {
    fn length(&self) -> usize;
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<L: Length> Length for Option<L> {
    fn length(&self) -> usize {
        self.as_ref().map_or(0, Length::length)
    }
}

/// Must contain at least one element.
pub fn not_empty<C: Length + Debug>() -> Rule<C> {
    Rule::new("not_empty", |value: &C| value.length() > 0).with_message("must not be empty")
}

/// Element count within `[min, max]`.
pub fn size<C: Length + Debug>(min: usize, max: usize) -> Result<Rule<C>, SpecError> {
    ensure_bounds("size", &min, &max)?;
    Ok(Rule::new("size", move |value: &C| {
        let len = value.length();
        len >= min && len <= max
    })
    .with_message("size must be between {min} and {max}")
    .with_param("min", min)
    .with_param("max", max))
}

/// The value itself must equal one of `allowed`.
pub fn one_of<V, A>(allowed: impl IntoIterator<Item = A>) -> Result<Rule<V>, SpecError>
where
    V: Debug,
    A: PartialEq<V> + Debug + Send + Sync + 'static,
{
    let allowed: Vec<A> = allowed.into_iter().collect();
    if allowed.is_empty() {
        return Err(SpecError::EmptyValueSet { rule: "one_of" });
    }
    let listed = format!("{allowed:?}");
    Ok(
        Rule::new("one_of", move |value: &V| allowed.iter().any(|a| a == value))
            .with_message("must be one of {values}")
            .with_param("values", listed),
    )
}

/// Every element of the collection must be one of `allowed`.
pub fn subset<C, E, A>(allowed: impl IntoIterator<Item = A>) -> Result<Rule<C>, SpecError>
where
    C: Debug,
    for<'a> &'a C: IntoIterator<Item = &'a E>,
    A: PartialEq<E> + Debug + Send + Sync + 'static,
{
    let allowed: Vec<A> = allowed.into_iter().collect();
    if allowed.is_empty() {
        return Err(SpecError::EmptyValueSet { rule: "subset" });
    }
    let listed = format!("{allowed:?}");
    Ok(Rule::new("subset", move |values: &C| {
        values
            .into_iter()
            .all(|value| allowed.iter().any(|a| a == value))
    })
    .with_message("must be a subset of {values}")
    .with_param("values", listed))
}
