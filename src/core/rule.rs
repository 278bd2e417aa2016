//! Rules: pure predicates paired with message templates.
//!
//! A rule never raises for failing data. Predicates that return `Err` or
//! panic are treated as failing evaluations, so a defect inside a custom
//! predicate surfaces as a [`Violation`] instead of unwinding through the
//! engine.

use crate::core::path::FieldPath;
use crate::core::violation::Violation;
use std::borrow::Cow;
use std::fmt::Debug;
use std::panic::{catch_unwind, AssertUnwindSafe};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Predicate<V> = Box<dyn Fn(&V) -> bool + Send + Sync>;

/// A single pass/fail predicate over `V` with a message template.
///
/// Templates may reference `{value}` (the rejected value) and any named
/// parameter added with [`Rule::with_param`].
///
/// # Example
///
/// ```rust
/// use fieldcheck::core::Rule;
///
/// let even = Rule::new("even", |n: &i32| n % 2 == 0).with_message("{value} is not even");
///
/// assert!(even.evaluate(&4));
/// assert!(!even.evaluate(&3));
/// assert_eq!(even.message(&3), "3 is not even");
/// ```
pub struct Rule<V> {
    code: &'static str,
    predicate: Predicate<V>,
    template: Cow<'static, str>,
    params: Vec<(&'static str, String)>,
}

impl<V: Debug> Rule<V> {
    /// Create a rule from an infallible predicate.
    pub fn new<F>(code: &'static str, predicate: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self {
            code,
            predicate: Box::new(predicate),
            template: Cow::Borrowed("is invalid"),
            params: Vec::new(),
        }
    }

    /// Create a rule from a fallible predicate. `Err` counts as a failure.
    pub fn try_new<F, E>(code: &'static str, predicate: F) -> Self
    where
        F: Fn(&V) -> Result<bool, E> + Send + Sync + 'static,
        E: Debug + 'static,
    {
        Self::new(code, move |value| match predicate(value) {
            Ok(passed) => passed,
            Err(error) => {
                tracing::trace!(rule = code, ?error, "rule predicate returned an error");
                false
            }
        })
    }

    pub fn with_message(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Evaluate the predicate. A panicking predicate evaluates to `false`.
    pub fn evaluate(&self, value: &V) -> bool {
        match catch_unwind(AssertUnwindSafe(|| (self.predicate)(value))) {
            Ok(passed) => passed,
            Err(_) => {
                tracing::warn!(rule = self.code, "rule predicate panicked; treating as failure");
                false
            }
        }
    }

    /// Render the message template for a rejected value.
    ///
    /// Placeholders are resolved in a single pass over the template, so
    /// substituted text is never scanned again. Unknown placeholders are kept.
    pub fn message(&self, value: &V) -> String {
        let mut rendered = String::with_capacity(self.template.len());
        let mut rest: &str = &self.template;

        while let Some(open) = rest.find('{') {
            rendered.push_str(&rest[..open]);
            let tail = &rest[open..];
            let Some(close) = tail.find('}') else {
                rest = tail;
                break;
            };

            let name = &tail[1..close];
            if name.contains('{') {
                rendered.push('{');
                rest = &tail[1..];
                continue;
            }
            match self.placeholder(name, value) {
                Some(text) => rendered.push_str(&text),
                None => rendered.push_str(&tail[..=close]),
            }
            rest = &tail[close + 1..];
        }

        rendered.push_str(rest);
        rendered
    }

    fn placeholder(&self, name: &str, value: &V) -> Option<String> {
        self.params
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, text)| text.clone())
            .or_else(|| (name == "value").then(|| format!("{value:?}")))
    }

    /// Check one value at `path`, producing at most one violation.
    pub fn check(&self, value: &V, path: &FieldPath) -> Validation<(), NonEmptyVec<Violation>> {
        if self.evaluate(value) {
            Validation::success(())
        } else {
            Validation::fail(
                Violation::new(path.to_string(), self.code, self.message(value))
                    .with_rejected_value(format!("{value:?}")),
            )
        }
    }
}

impl<V: Debug + 'static> Rule<V> {
    /// Lift into a rule over `Option<V>` that passes on `None`.
    pub fn optional(self) -> Rule<Option<V>> {
        let Rule {
            code,
            predicate,
            template,
            params,
        } = self;
        Rule {
            code,
            predicate: Box::new(move |value: &Option<V>| {
                value.as_ref().map_or(true, |v| predicate(v))
            }),
            template,
            params,
        }
    }
}

impl<V> Debug for Rule<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("code", &self.code)
            .field("template", &self.template)
            .field("params", &self.params)
            .field("predicate", &"<function>")
            .finish()
    }
}
