//! Numeric sign and bound rules.

use crate::builder::SpecError;
use crate::core::Rule;
use crate::rules::ensure_bounds;
use std::fmt::{Debug, Display};

/// Primitive numbers the numeric rules accept. Zero is `Default::default()`.
pub trait Number: PartialOrd + Default + Copy + Debug + Display + Send + Sync + 'static {}

macro_rules! impl_number {
    ($($ty:ty),* $(,)?) => {
        $(impl Number for $ty {})*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

pub fn positive<N: Number>() -> Rule<N> {
    Rule::new("positive", |value: &N| *value > N::default()).with_message("must be greater than 0")
}

pub fn positive_or_zero<N: Number>() -> Rule<N> {
    Rule::new("positive_or_zero", |value: &N| *value >= N::default())
        .with_message("must be greater than or equal to 0")
}

pub fn negative<N: Number>() -> Rule<N> {
    Rule::new("negative", |value: &N| *value < N::default()).with_message("must be less than 0")
}

pub fn negative_or_zero<N: Number>() -> Rule<N> {
    Rule::new("negative_or_zero", |value: &N| *value <= N::default())
        .with_message("must be less than or equal to 0")
}

pub fn min<N: Number>(bound: N) -> Rule<N> {
    Rule::new("min", move |value: &N| *value >= bound)
        .with_message("must be greater than or equal to {min}")
        .with_param("min", bound)
}

pub fn max<N: Number>(bound: N) -> Rule<N> {
    Rule::new("max", move |value: &N| *value <= bound)
        .with_message("must be less than or equal to {max}")
        .with_param("max", bound)
}

/// Inclusive range; fails to build when `min > max`.
pub fn range<N: Number>(min: N, max: N) -> Result<Rule<N>, SpecError> {
    ensure_bounds("range", &min, &max)?;
    Ok(Rule::new("range", move |value: &N| *value >= min && *value <= max)
        .with_message("must be between {min} and {max}")
        .with_param("min", min)
        .with_param("max", max))
}
