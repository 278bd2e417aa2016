//! Boolean assertions.

use crate::core::Rule;

pub fn assert_true() -> Rule<bool> {
    Rule::new("assert_true", |value: &bool| *value).with_message("must be true")
}

pub fn assert_false() -> Rule<bool> {
    Rule::new("assert_false", |value: &bool| !*value).with_message("must be false")
}
