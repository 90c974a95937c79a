//! Presence rules

use serde_json::Value;

use crate::coerce;
use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

/// Fails when the field was never supplied.
#[derive(Debug, Clone, Default)]
pub struct RequiredRule {
    message: Option<String>,
}

impl RequiredRule {
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Override the error message used when the field is absent.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for RequiredRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        if field.value.is_null() {
            Outcome::fail_with(&self.message)
        } else {
            Outcome::Success
        }
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

/// Treats an absent-or-zero value as "not supplied" and stops the chain.
///
/// With a default, the default is substituted before the break so later
/// type rules never re-validate it; without one the field drops out of
/// the result entirely.
#[derive(Debug, Clone, Default)]
pub struct OptionalRule {
    default: Option<Value>,
}

impl OptionalRule {
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Value substituted when the field is not supplied.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl Rule for OptionalRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        if coerce::is_zero(&field.value) {
            field.value = match &self.default {
                Some(default) => default.clone(),
                None => Value::Null,
            };
            return Outcome::Break;
        }
        Outcome::Success
    }

    fn name(&self) -> &'static str {
        "optional"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn test_required_fails_on_absent_value() {
        let params = Map::new();
        let mut scratch = FieldScratch::new("name", Value::Null, &params);

        assert_eq!(
            RequiredRule::new().apply(&mut scratch),
            Outcome::Failure(None)
        );
        assert_eq!(
            RequiredRule::new().message("name must be given").apply(&mut scratch),
            Outcome::Failure(Some("name must be given".to_string()))
        );
    }

    #[test]
    fn test_required_passes_on_any_present_value() {
        let params = Map::new();
        for value in [json!(0), json!(""), json!(false), json!("x")] {
            let mut scratch = FieldScratch::new("name", value, &params);
            assert_eq!(RequiredRule::new().apply(&mut scratch), Outcome::Success);
        }
    }

    #[test]
    fn test_optional_substitutes_default_and_breaks() {
        let params = Map::new();
        let mut scratch = FieldScratch::new("grade", Value::Null, &params);

        let rule = OptionalRule::new().default_value("primary");
        assert_eq!(rule.apply(&mut scratch), Outcome::Break);
        assert_eq!(scratch.value, json!("primary"));
    }

    #[test]
    fn test_optional_without_default_drops_the_field() {
        let params = Map::new();
        let mut scratch = FieldScratch::new("grade", Value::Null, &params);
        assert_eq!(OptionalRule::new().apply(&mut scratch), Outcome::Break);
        assert!(scratch.value.is_null());

        // A present-but-zero value is dropped too.
        let mut scratch = FieldScratch::new("grade", json!(""), &params);
        assert_eq!(OptionalRule::new().apply(&mut scratch), Outcome::Break);
        assert!(scratch.value.is_null());
    }

    #[test]
    fn test_optional_passes_through_supplied_value() {
        let params = Map::new();
        let mut scratch = FieldScratch::new("grade", json!(3), &params);

        let rule = OptionalRule::new().default_value(1);
        assert_eq!(rule.apply(&mut scratch), Outcome::Success);
        assert_eq!(scratch.value, json!(3));
    }

    #[test]
    fn test_optional_treats_zero_as_not_supplied() {
        let params = Map::new();
        let mut scratch = FieldScratch::new("perpage", json!(0), &params);

        let rule = OptionalRule::new().default_value(10);
        assert_eq!(rule.apply(&mut scratch), Outcome::Break);
        assert_eq!(scratch.value, json!(10));
    }
}
