//! Regular-expression rule

use regex::Regex;

use crate::coerce;
use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

/// Matches the coerced string against a pattern compiled once at
/// construction.
///
/// An unparseable pattern degrades to a rule that fails every invocation
/// instead of panicking at build time.
#[derive(Debug, Clone)]
pub struct RegexRule {
    pattern: Option<Regex>,
    message: Option<String>,
}

impl RegexRule {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).ok(),
            message: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for RegexRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        let matched = match (&self.pattern, coerce::to_string(&field.value)) {
            (Some(re), Some(s)) => re.is_match(&s),
            _ => false,
        };
        if matched {
            Outcome::Success
        } else {
            Outcome::fail_with(&self.message)
        }
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
