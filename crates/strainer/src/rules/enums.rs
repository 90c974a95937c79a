//! Enumeration rules

use crate::coerce;
use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

/// Membership test against a fixed set of integers.
#[derive(Debug, Clone)]
pub struct EnumIntRule {
    enums: Vec<i64>,
    message: Option<String>,
}

impl EnumIntRule {
    pub fn new(enums: Vec<i64>) -> Self {
        Self {
            enums,
            message: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for EnumIntRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        match coerce::to_i64(&field.value) {
            Some(n) if self.enums.contains(&n) => Outcome::Success,
            _ => Outcome::fail_with(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "enum_int"
    }
}

/// Membership test against a fixed set of strings.
#[derive(Debug, Clone)]
pub struct EnumStringRule {
    enums: Vec<String>,
    message: Option<String>,
}

impl EnumStringRule {
    pub fn new<I, S>(enums: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enums: enums.into_iter().map(Into::into).collect(),
            message: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for EnumStringRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        match coerce::to_string(&field.value) {
            Some(s) if self.enums.iter().any(|e| *e == s) => Outcome::Success,
            _ => Outcome::fail_with(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "enum_string"
    }
}
