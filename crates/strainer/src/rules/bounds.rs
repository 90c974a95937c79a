//! Bounds rules

use crate::coerce;
use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

/// Inclusive character-count bounds on the coerced string. Counts Unicode
/// scalar values, not bytes.
#[derive(Debug, Clone)]
pub struct LengthRule {
    min: usize,
    max: usize,
    message: Option<String>,
}

impl LengthRule {
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            message: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for LengthRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        match coerce::to_string(&field.value) {
            Some(s) => {
                let l = s.chars().count();
                if l < self.min || l > self.max {
                    Outcome::fail_with(&self.message)
                } else {
                    Outcome::Success
                }
            }
            None => Outcome::fail_with(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

/// Inclusive numeric bounds on the coerced integer.
#[derive(Debug, Clone)]
pub struct BetweenRule {
    min: i64,
    max: i64,
    message: Option<String>,
}

impl BetweenRule {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            message: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for BetweenRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        match coerce::to_i64(&field.value) {
            Some(n) if n >= self.min && n <= self.max => Outcome::Success,
            _ => Outcome::fail_with(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "between"
    }
}
