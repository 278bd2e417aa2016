//! Library of leaf rules.
//!
//! Every constructor returns a [`Rule`] ready to be attached with
//! [`Constraint::add`](crate::builder::Constraint::add). Constructors whose
//! parameters can be malformed (bounds, patterns, value sets) return
//! `Result` and reject the bad configuration immediately:
//!
//! ```rust
//! use fieldcheck::rules;
//!
//! assert!(rules::text::length::<String>(5, 2).is_err());
//! ```
//!
//! Rules other than the presence checks treat an absent value as valid when
//! wrapped with [`optional`].

pub mod boolean;
pub mod collection;
mod decimal;
pub mod numeric;
pub mod presence;
pub mod temporal;
pub mod text;

pub use boolean::{assert_false, assert_true};
pub use collection::{not_empty, one_of, size, subset, Length};
pub use numeric::{
    max, min, negative, negative_or_zero, positive, positive_or_zero, range, Number,
};
pub use presence::{is_null, not_null};
pub use temporal::{future, future_or_present, past, past_or_present};
pub use text::{
    cs_negative, cs_positive, cs_range, email, length, not_blank, not_empty_text, pattern,
};

use crate::builder::SpecError;
use crate::core::Rule;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Make `rule` apply to `Option<V>`, passing when the value is absent.
pub fn optional<V: Debug + 'static>(rule: Rule<V>) -> Rule<Option<V>> {
    rule.optional()
}

/// User-supplied predicate with a fixed message.
pub fn custom<V, F>(code: &'static str, message: &'static str, predicate: F) -> Rule<V>
where
    V: Debug,
    F: Fn(&V) -> bool + Send + Sync + 'static,
{
    Rule::new(code, predicate).with_message(message)
}

/// User-supplied fallible predicate; `Err` is reported as a violation.
pub fn try_custom<V, F, E>(code: &'static str, message: &'static str, predicate: F) -> Rule<V>
where
    V: Debug,
    F: Fn(&V) -> Result<bool, E> + Send + Sync + 'static,
    E: Debug + 'static,
{
    Rule::try_new(code, predicate).with_message(message)
}

/// Reject bounds that are out of order or not comparable (`NaN`).
pub(crate) fn ensure_bounds<B>(rule: &'static str, min: &B, max: &B) -> Result<(), SpecError>
where
    B: PartialOrd + Display,
{
    match min.partial_cmp(max) {
        Some(Ordering::Less | Ordering::Equal) => Ok(()),
        _ => Err(SpecError::InvalidBounds {
            rule,
            min: min.to_string(),
            max: max.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_passes_on_absent_value() {
        let rule = optional(positive::<i32>());

        assert!(rule.evaluate(&None));
        assert!(!rule.evaluate(&Some(-1)));
    }

    #[test]
    fn custom_rule_uses_given_message() {
        let rule = custom("even", "must be even", |n: &u32| n % 2 == 0);

        assert!(!rule.evaluate(&3));
        assert_eq!(rule.message(&3), "must be even");
        assert_eq!(rule.code(), "even");
    }

    #[test]
    fn try_custom_maps_errors_to_failure() {
        let rule = try_custom("port", "must be a port number", |s: &String| {
            s.parse::<u16>().map(|port| port > 0)
        });

        assert!(rule.evaluate(&"8080".to_string()));
        assert!(!rule.evaluate(&"99999".to_string()));
        assert!(!rule.evaluate(&"http".to_string()));
    }

    #[test]
    fn bounds_check_rejects_inverted_range() {
        let err = ensure_bounds("size", &10, &2).unwrap_err();
        assert!(matches!(err, SpecError::InvalidBounds { rule: "size", .. }));
        assert!(ensure_bounds("size", &2, &2).is_ok());
    }

    #[test]
    fn bounds_check_rejects_nan() {
        assert!(ensure_bounds("range", &f64::NAN, &1.0).is_err());
        assert!(ensure_bounds("range", &0.0, &f64::NAN).is_err());
        assert!(matches!(
            range(f64::NAN, 1.0),
            Err(SpecError::InvalidBounds { rule: "range", .. })
        ));
        assert!(range(0.5f64, 0.5).is_ok());
    }
}
