//! Rules over text values (`String`, `&'static str`, `Cow<str>`, ...).

use crate::builder::SpecError;
use crate::core::Rule;
use crate::rules::decimal::{decimal_bound, DecimalText};
use crate::rules::ensure_bounds;
use regex::Regex;
use std::fmt::Debug;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$";

/// Must contain at least one non-whitespace character.
pub fn not_blank<V: AsRef<str> + Debug>() -> Rule<V> {
    Rule::new("not_blank", |value: &V| !value.as_ref().trim().is_empty())
        .with_message("must not be blank")
}

pub fn not_empty_text<V: AsRef<str> + Debug>() -> Rule<V> {
    Rule::new("not_empty", |value: &V| !value.as_ref().is_empty()).with_message("must not be empty")
}

/// Length in characters, inclusive on both ends.
pub fn length<V: AsRef<str> + Debug>(min: usize, max: usize) -> Result<Rule<V>, SpecError> {
    ensure_bounds("length", &min, &max)?;
    Ok(Rule::new("length", move |value: &V| {
        let len = value.as_ref().chars().count();
        len >= min && len <= max
    })
    .with_message("length must be between {min} and {max}")
    .with_param("min", min)
    .with_param("max", max))
}

/// The whole value must match `pattern`.
pub fn pattern<V: AsRef<str> + Debug>(pattern: &str) -> Result<Rule<V>, SpecError> {
    let anchored = format!("^(?:{pattern})$");
    let regex = Regex::new(&anchored).map_err(|source| SpecError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(Rule::new("pattern", move |value: &V| regex.is_match(value.as_ref()))
        .with_message("must match \"{pattern}\"")
        .with_param("pattern", pattern))
}

/// Well-formed e-mail address. An empty string is not an address.
pub fn email<V: AsRef<str> + Debug>() -> Rule<V> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();

    Rule::new("email", |value: &V| {
        EMAIL
            .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
            .as_ref()
            .is_some_and(|regex| regex.is_match(value.as_ref()))
    })
    .with_message("must be a well-formed email address")
}

/// Text that is a strictly positive decimal number, compared exactly.
pub fn cs_positive<V: AsRef<str> + Debug>() -> Rule<V> {
    Rule::try_new("cs_positive", |value: &V| {
        DecimalText::parse(value.as_ref()).map(|n| n.signum().is_gt())
    })
    .with_message("must be a number greater than 0")
}

/// Text that is a strictly negative decimal number, compared exactly.
pub fn cs_negative<V: AsRef<str> + Debug>() -> Rule<V> {
    Rule::try_new("cs_negative", |value: &V| {
        DecimalText::parse(value.as_ref()).map(|n| n.signum().is_lt())
    })
    .with_message("must be a number less than 0")
}

/// Text that is a decimal number within `[min, max]`.
///
/// Bounds are taken at their shortest decimal rendering, so `0.1` means
/// exactly one tenth. Bounds with no exact `Decimal` form are rejected.
pub fn cs_range<V: AsRef<str> + Debug>(min: f64, max: f64) -> Result<Rule<V>, SpecError> {
    ensure_bounds("cs_range", &min, &max)?;
    let (Some(low), Some(high)) = (decimal_bound(min), decimal_bound(max)) else {
        return Err(SpecError::InvalidBounds {
            rule: "cs_range",
            min: min.to_string(),
            max: max.to_string(),
        });
    };

    Ok(Rule::try_new("cs_range", move |value: &V| {
        DecimalText::parse(value.as_ref())
            .map(|n| n.cmp_to(&low).is_ge() && n.cmp_to(&high).is_le())
    })
    .with_message("must be a number between {min} and {max}")
    .with_param("min", min)
    .with_param("max", max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_empty_differ() {
        let blank = not_blank::<String>();
        let empty = not_empty_text::<String>();

        assert!(!blank.evaluate(&"   ".to_string()));
        assert!(empty.evaluate(&"   ".to_string()));
        assert!(!empty.evaluate(&String::new()));
    }

    #[test]
    fn length_counts_characters() {
        let rule = length::<String>(2, 3).unwrap();

        assert!(rule.evaluate(&"éé".to_string()));
        assert!(!rule.evaluate(&"a".to_string()));
        assert!(!rule.evaluate(&"abcd".to_string()));
        assert_eq!(rule.message(&"a".to_string()), "length must be between 2 and 3");
    }

    #[test]
    fn pattern_matches_whole_value() {
        let rule = pattern::<&str>("[a-z]+").unwrap();

        assert!(rule.evaluate(&"abc"));
        assert!(!rule.evaluate(&"abc1"));
        assert_eq!(rule.message(&"abc1"), "must match \"[a-z]+\"");
    }

    #[test]
    fn invalid_pattern_is_configuration_error() {
        assert!(matches!(
            pattern::<String>("(unclosed"),
            Err(SpecError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn email_accepts_addresses_only() {
        let rule = email::<String>();

        assert!(rule.evaluate(&"ok@domain.com".to_string()));
        assert!(!rule.evaluate(&"plain".to_string()));
        assert!(!rule.evaluate(&String::new()));
    }

    #[test]
    fn numeric_text_sign() {
        assert!(cs_negative::<&str>().evaluate(&"-12.5"));
        assert!(!cs_negative::<&str>().evaluate(&"0"));
        assert!(!cs_negative::<&str>().evaluate(&"minus one"));
        assert!(cs_positive::<&str>().evaluate(&" 3 "));
        assert!(!cs_positive::<&str>().evaluate(&"inf"));
    }

    #[test]
    fn numeric_text_sign_survives_underflow() {
        assert!(cs_negative::<&str>().evaluate(&"-1e-400"));
        assert!(!cs_positive::<&str>().evaluate(&"-1e-400"));
        assert!(cs_positive::<&str>().evaluate(&"1E-400"));
        assert!(!cs_negative::<&str>().evaluate(&"-0.0"));
    }

    #[test]
    fn numeric_text_range() {
        let rule = cs_range::<String>(0.0, 1.0).unwrap();

        assert!(rule.evaluate(&"0.5".to_string()));
        assert!(!rule.evaluate(&"1.5".to_string()));
        assert!(cs_range::<String>(2.0, 1.0).is_err());
    }

    #[test]
    fn numeric_text_range_is_exact_at_the_bounds() {
        let rule = cs_range::<&str>(0.0, 100.0).unwrap();

        assert!(rule.evaluate(&"100"));
        assert!(rule.evaluate(&"1e2"));
        assert!(!rule.evaluate(&"100.00000000000000001"));
        assert!(!rule.evaluate(&"-1e-400"));
        assert!(rule.evaluate(&"1e-400"));

        let rule = cs_range::<&str>(0.1, 0.3).unwrap();
        assert!(rule.evaluate(&"0.1"));
        assert!(rule.evaluate(&"0.3"));
        assert!(!rule.evaluate(&"0.30000000000000001"));
    }

    #[test]
    fn numeric_text_range_rejects_unusable_bounds() {
        assert!(matches!(
            cs_range::<&str>(f64::NAN, 1.0),
            Err(SpecError::InvalidBounds { rule: "cs_range", .. })
        ));
        assert!(cs_range::<&str>(0.0, f64::NAN).is_err());
        assert!(cs_range::<&str>(0.0, f64::INFINITY).is_err());
        assert!(cs_range::<&str>(0.0, 1e300).is_err());
    }
}
