//! Format rules
//!
//! Thin wrappers over the stateless predicates in `strainer-check`: coerce
//! the value to a string, apply the predicate, fail on false.

use crate::coerce;
use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

fn check_str(
    field: &FieldScratch<'_>,
    predicate: fn(&str) -> bool,
    message: &Option<String>,
) -> Outcome {
    match coerce::to_string(&field.value) {
        Some(s) if predicate(&s) => Outcome::Success,
        _ => Outcome::fail_with(message),
    }
}

/// Validates an email address.
#[derive(Debug, Clone, Default)]
pub struct EmailRule {
    message: Option<String>,
}

impl EmailRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for EmailRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        check_str(field, strainer_check::email, &self.message)
    }

    fn name(&self) -> &'static str {
        "email"
    }
}

/// Validates a URL with a scheme; any fragment is ignored.
#[derive(Debug, Clone, Default)]
pub struct UrlRule {
    message: Option<String>,
}

impl UrlRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for UrlRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        check_str(field, strainer_check::url, &self.message)
    }

    fn name(&self) -> &'static str {
        "url"
    }
}

/// Validates a mobile phone number.
#[derive(Debug, Clone, Default)]
pub struct PhoneRule {
    message: Option<String>,
}

impl PhoneRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for PhoneRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        check_str(field, strainer_check::phone, &self.message)
    }

    fn name(&self) -> &'static str {
        "phone"
    }
}

/// Validates a dotted-quad IPv4 address.
#[derive(Debug, Clone, Default)]
pub struct Ipv4Rule {
    message: Option<String>,
}

impl Ipv4Rule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for Ipv4Rule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        check_str(field, strainer_check::ipv4, &self.message)
    }

    fn name(&self) -> &'static str {
        "ipv4"
    }
}

/// Validates a calendar date, format `2006-01-02`.
#[derive(Debug, Clone, Default)]
pub struct DateRule {
    message: Option<String>,
}

impl DateRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for DateRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        check_str(field, strainer_check::date, &self.message)
    }

    fn name(&self) -> &'static str {
        "date"
    }
}

/// Validates a timestamp, format `2006-01-02 15:04:05`.
#[derive(Debug, Clone, Default)]
pub struct DatetimeRule {
    message: Option<String>,
}

impl DatetimeRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for DatetimeRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        check_str(field, strainer_check::datetime, &self.message)
    }

    fn name(&self) -> &'static str {
        "datetime"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn run(rule: &dyn Rule, value: Value) -> Outcome {
        let params = Map::new();
        let mut scratch = FieldScratch::new("x", value, &params);
        rule.apply(&mut scratch)
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(run(&EmailRule::new(), json!("liumurong1@tal.com")), Outcome::Success);
        assert_eq!(
            run(&EmailRule::new().message("bad email"), json!("@tal.com")),
            Outcome::Failure(Some("bad email".to_string()))
        );
        // Non-string-coercible input fails rather than panics.
        assert_eq!(run(&EmailRule::new(), json!(null)), Outcome::Failure(None));
    }

    #[test]
    fn test_url_rule() {
        assert_eq!(run(&UrlRule::new(), json!("https://baidu.com")), Outcome::Success);
        assert_eq!(run(&UrlRule::new(), json!("https://www.baidu.com#de")), Outcome::Success);
        assert_eq!(run(&UrlRule::new(), json!("not a url")), Outcome::Failure(None));
    }

    #[test]
    fn test_phone_rule() {
        assert_eq!(run(&PhoneRule::new(), json!("15810562936")), Outcome::Success);
        assert_eq!(run(&PhoneRule::new(), json!("12810562936")), Outcome::Failure(None));
        // Numbers coerce to their digit string first.
        assert_eq!(run(&PhoneRule::new(), json!(15810562936_i64)), Outcome::Success);
    }

    #[test]
    fn test_ipv4_rule() {
        assert_eq!(run(&Ipv4Rule::new(), json!("127.127.127.127")), Outcome::Success);
        assert_eq!(run(&Ipv4Rule::new(), json!("127.333.1.1")), Outcome::Failure(None));
    }

    #[test]
    fn test_date_rules() {
        assert_eq!(run(&DateRule::new(), json!("2021-10-11")), Outcome::Success);
        assert_eq!(run(&DateRule::new(), json!("2021-1-11")), Outcome::Failure(None));
        assert_eq!(
            run(&DatetimeRule::new(), json!("2021-10-11 15:33:21")),
            Outcome::Success
        );
        assert_eq!(
            run(&DatetimeRule::new(), json!("2021-1-11 15:33:21")),
            Outcome::Failure(None)
        );
    }
}
