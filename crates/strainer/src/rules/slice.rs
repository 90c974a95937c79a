//! Element-wise slice rules

use serde_json::Value;
use strainer_check::{IntCheck, StrCheck};

use crate::coerce;
use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

/// Coerces the value to an integer array and applies every configured
/// check to every element. The first failing element fails the rule.
#[derive(Default)]
pub struct IntSliceRule {
    checks: Vec<IntCheck>,
    message: Option<String>,
}

impl IntSliceRule {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            message: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Add an element check, e.g. `strainer_check::between(1, 10)`.
    pub fn check(mut self, check: IntCheck) -> Self {
        self.checks.push(check);
        self
    }
}

impl std::fmt::Debug for IntSliceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntSliceRule")
            .field("checks", &self.checks.len())
            .field("message", &self.message)
            .finish()
    }
}

impl Rule for IntSliceRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        let items = match coerce::to_i64_slice(&field.value) {
            Some(items) => items,
            None => return Outcome::fail_with(&self.message),
        };
        for item in &items {
            if self.checks.iter().any(|check| !check(*item)) {
                return Outcome::fail_with(&self.message);
            }
        }
        field.value = Value::Array(items.into_iter().map(Value::from).collect());
        Outcome::Success
    }

    fn name(&self) -> &'static str {
        "int_slice"
    }
}

/// Coerces the value to a string array and applies every configured check
/// to every element.
#[derive(Default)]
pub struct StringSliceRule {
    checks: Vec<StrCheck>,
    message: Option<String>,
}

impl StringSliceRule {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            message: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Add an element check, e.g. `strainer_check::length(1, 8)`.
    pub fn check(mut self, check: StrCheck) -> Self {
        self.checks.push(check);
        self
    }
}

impl std::fmt::Debug for StringSliceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringSliceRule")
            .field("checks", &self.checks.len())
            .field("message", &self.message)
            .finish()
    }
}

impl Rule for StringSliceRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        let items = match coerce::to_string_slice(&field.value) {
            Some(items) => items,
            None => return Outcome::fail_with(&self.message),
        };
        for item in &items {
            if self.checks.iter().any(|check| !check(item)) {
                return Outcome::fail_with(&self.message);
            }
        }
        field.value = Value::Array(items.into_iter().map(Value::String).collect());
        Outcome::Success
    }

    fn name(&self) -> &'static str {
        "string_slice"
    }
}
