//! Emptiness rules

use serde_json::Value;

use crate::coerce;
use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

/// Stops the chain when the value coerces to a zero-length string; the
/// empty string stays in the result.
#[derive(Debug, Clone, Default)]
pub struct EmptyStringRule;

impl EmptyStringRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for EmptyStringRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        match coerce::to_string(&field.value) {
            Some(s) if s.is_empty() => Outcome::Break,
            _ => Outcome::Success,
        }
    }

    fn name(&self) -> &'static str {
        "empty_string"
    }
}

/// Stops the chain when the value is the zero-equivalent of its kind
/// (absent, 0, empty string, `false`, empty sequence). The field is
/// dropped from the result, unlike [`EmptyStringRule`] which retains the
/// empty string.
#[derive(Debug, Clone, Default)]
pub struct OmitEmptyRule;

impl OmitEmptyRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for OmitEmptyRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        if coerce::is_zero(&field.value) {
            field.value = Value::Null;
            Outcome::Break
        } else {
            Outcome::Success
        }
    }

    fn name(&self) -> &'static str {
        "omit_empty"
    }
}
