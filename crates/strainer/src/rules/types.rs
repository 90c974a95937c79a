//! Type-coercion rules
//!
//! Each rule delegates to the coercion layer and, on success, overwrites
//! the scratch value with the canonical typed value, so downstream rules
//! and the final result see the normalized form.

use serde_json::Value;

use crate::coerce;
use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

/// Coerces the value to a canonical integer.
#[derive(Debug, Clone, Default)]
pub struct IntRule {
    message: Option<String>,
}

impl IntRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for IntRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        match coerce::to_i64(&field.value) {
            Some(n) => {
                field.value = Value::from(n);
                Outcome::Success
            }
            None => Outcome::fail_with(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "int"
    }
}

/// Coerces the value to a canonical finite float.
#[derive(Debug, Clone, Default)]
pub struct FloatRule {
    message: Option<String>,
}

impl FloatRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for FloatRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        let parsed = coerce::to_f64(&field.value).filter(|f| f.is_finite());
        match parsed.and_then(serde_json::Number::from_f64) {
            Some(n) => {
                field.value = Value::Number(n);
                Outcome::Success
            }
            None => Outcome::fail_with(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "float"
    }
}

/// Coerces the value to a canonical boolean.
#[derive(Debug, Clone, Default)]
pub struct BooleanRule {
    message: Option<String>,
}

impl BooleanRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for BooleanRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        match coerce::to_bool(&field.value) {
            Some(b) => {
                field.value = Value::Bool(b);
                Outcome::Success
            }
            None => Outcome::fail_with(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "boolean"
    }
}

/// Coerces the value to a canonical string.
#[derive(Debug, Clone, Default)]
pub struct StringRule {
    message: Option<String>,
}

impl StringRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for StringRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        match coerce::to_string(&field.value) {
            Some(s) => {
                field.value = Value::String(s);
                Outcome::Success
            }
            None => Outcome::fail_with(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "string"
    }
}
