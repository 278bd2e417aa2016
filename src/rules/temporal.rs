//! Rules comparing timestamps against the current instant.
//!
//! "Now" is read once per evaluation, so the outcome of these rules depends
//! on when `validate` runs.

use crate::core::Rule;
use chrono::{DateTime, Utc};

pub fn past() -> Rule<DateTime<Utc>> {
    Rule::new("past", |value: &DateTime<Utc>| *value < Utc::now())
        .with_message("must be in the past")
}

pub fn past_or_present() -> Rule<DateTime<Utc>> {
    Rule::new("past_or_present", |value: &DateTime<Utc>| *value <= Utc::now())
        .with_message("must be in the past or present")
}

pub fn future() -> Rule<DateTime<Utc>> {
    Rule::new("future", |value: &DateTime<Utc>| *value > Utc::now())
        .with_message("must be in the future")
}

pub fn future_or_present() -> Rule<DateTime<Utc>> {
    Rule::new("future_or_present", |value: &DateTime<Utc>| *value >= Utc::now())
        .with_message("must be in the future or present")
}
