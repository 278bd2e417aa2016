//! Presence rules over optional values.

use crate::core::Rule;
use std::fmt::Debug;

/// The value must be present.
pub fn not_null<V: Debug>() -> Rule<Option<V>> {
    Rule::new("not_null", |value: &Option<V>| value.is_some()).with_message("must not be null")
}

/// The value must be absent.
pub fn is_null<V: Debug>() -> Rule<Option<V>> {
    Rule::new("is_null", |value: &Option<V>| value.is_none()).with_message("must be null")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_null_requires_some() {
        let rule = not_null::<String>();

        assert!(rule.evaluate(&Some("x".to_string())));
        assert!(!rule.evaluate(&None));
        assert_eq!(rule.message(&None), "must not be null");
    }

    #[test]
    fn is_null_requires_none() {
        let rule = is_null::<u8>();

        assert!(rule.evaluate(&None));
        assert!(!rule.evaluate(&Some(1)));
    }
}
