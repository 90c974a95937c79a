//! Pagination side-effect rule

use serde_json::Value;

use crate::coerce;
use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

/// Derives a pagination offset from two sibling fields and injects it into
/// the result as `offset`.
///
/// Reads `curpage`/`perpage` (or the configured keys) from the raw input
/// map, defaulting to page 1 and 10 items when a field is absent or
/// non-numeric, and computes `offset = (curpage - 1) * perpage`. The field
/// this rule is attached to is excluded from the result; the rule exists
/// purely to inject the derived value.
#[derive(Debug, Clone)]
pub struct PaginateRule {
    cur_key: String,
    per_key: String,
}

impl Default for PaginateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginateRule {
    pub fn new() -> Self {
        Self {
            cur_key: "curpage".to_string(),
            per_key: "perpage".to_string(),
        }
    }

    /// Key of the current-page sibling field.
    pub fn cur_key(mut self, key: impl Into<String>) -> Self {
        self.cur_key = key.into();
        self
    }

    /// Key of the page-size sibling field.
    pub fn per_key(mut self, key: impl Into<String>) -> Self {
        self.per_key = key.into();
        self
    }
}

impl Rule for PaginateRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        let curpage = coerce::int_from_map(&self.cur_key, field.params()).unwrap_or(1);
        let perpage = coerce::int_from_map(&self.per_key, field.params()).unwrap_or(10);
        field
            .extend
            .insert("offset".to_string(), Value::from((curpage - 1) * perpage));
        field.exclude();
        Outcome::Success
    }

    fn name(&self) -> &'static str {
        "paginate"
    }
}
