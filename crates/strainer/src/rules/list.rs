//! Comma-joined integer list rules

use serde_json::Value;

use crate::coerce;
use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

/// Validates a comma-joined sequence of integer tokens, e.g. `1,2,3`.
#[derive(Debug, Clone, Default)]
pub struct DotIntRule {
    message: Option<String>,
}

impl DotIntRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for DotIntRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        match coerce::to_string(&field.value) {
            Some(s) if strainer_check::dot_int(&s) => Outcome::Success,
            _ => Outcome::fail_with(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "dot_int"
    }
}

/// Bounds the token count of a comma-joined list (separator count + 1)
/// without re-parsing the tokens.
#[derive(Debug, Clone)]
pub struct MaxdotRule {
    max: usize,
    message: Option<String>,
}

impl MaxdotRule {
    pub fn new(max: usize) -> Self {
        Self { max, message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for MaxdotRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        match coerce::to_string(&field.value) {
            Some(s) => {
                let count = s.matches(',').count() + 1;
                if count > self.max {
                    Outcome::fail_with(&self.message)
                } else {
                    Outcome::Success
                }
            }
            None => Outcome::fail_with(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "maxdot"
    }
}

/// Splits a comma-joined list into an integer array value.
///
/// Performs no error reporting of its own; run it after [`DotIntRule`] has
/// vouched for the tokens. Unparseable tokens degrade to 0.
#[derive(Debug, Clone, Default)]
pub struct DotIntToSliceRule;

impl DotIntToSliceRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DotIntToSliceRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        let s = coerce::to_string(&field.value).unwrap_or_default();
        let ids: Vec<Value> = s
            .split(',')
            .map(|token| Value::from(token.parse::<i64>().unwrap_or(0)))
            .collect();
        field.value = Value::Array(ids);
        Outcome::Success
    }

    fn name(&self) -> &'static str {
        "dot_int_to_slice"
    }
}
