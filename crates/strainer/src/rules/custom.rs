//! User-defined closure rules

use std::sync::Arc;

use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

/// Rule backed by a caller-supplied closure.
///
/// The closure has the full rule contract: it may rewrite the scratch
/// record's key and value, add extend entries, and return any outcome.
#[derive(Clone)]
pub struct CustomRule {
    label: String,
    func: Arc<dyn Fn(&mut FieldScratch<'_>) -> Outcome + Send + Sync>,
}

impl CustomRule {
    pub fn new<F>(label: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut FieldScratch<'_>) -> Outcome + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            func: Arc::new(func),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomRule").field("label", &self.label).finish()
    }
}

impl Rule for CustomRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        (self.func)(field)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce;
    use serde_json::{json, Map, Value};

    #[test]
    fn test_custom_rule_runs_closure() {
        let rule = CustomRule::new("double", |field| {
            match coerce::to_i64(&field.value) {
                Some(n) => {
                    field.value = Value::from(n * 2);
                    Outcome::Success
                }
                None => Outcome::Failure(Some("not a number".to_string())),
            }
        });

        let params = Map::new();
        let mut scratch = FieldScratch::new("n", json!(21), &params);
        assert_eq!(rule.apply(&mut scratch), Outcome::Success);
        assert_eq!(scratch.value, json!(42));
        assert_eq!(rule.label(), "double");

        let mut scratch = FieldScratch::new("n", json!("x"), &params);
        assert_eq!(
            rule.apply(&mut scratch),
            Outcome::Failure(Some("not a number".to_string()))
        );
    }
}
