//! Per-field scratch state threaded through a rule chain

use serde_json::{Map, Value};

/// Sentinel key marking a field as excluded from the result map.
pub const EXCLUDED_KEY: &str = "-";

/// Mutable state for one field while its chain runs.
///
/// Created fresh per field per validation call and discarded when the chain
/// finishes. Rules may rewrite `key` (to redirect or exclude the field),
/// overwrite `value`, and add derived entries to `extend`; the full input
/// map is readable through [`FieldScratch::params`] but never mutable.
#[derive(Debug)]
pub struct FieldScratch<'p> {
    /// Key the final value will be stored under; `"-"` excludes the field.
    pub key: String,
    /// Current value. `Value::Null` models an absent parameter.
    pub value: Value,
    /// Derived side-channel entries merged into the result unconditionally.
    pub extend: Map<String, Value>,
    params: &'p Map<String, Value>,
}

impl<'p> FieldScratch<'p> {
    pub fn new(key: impl Into<String>, value: Value, params: &'p Map<String, Value>) -> Self {
        Self {
            key: key.into(),
            value,
            extend: Map::new(),
            params,
        }
    }

    /// Read-only view of the entire input map, for rules that need sibling
    /// fields.
    pub fn params(&self) -> &Map<String, Value> {
        self.params
    }

    /// Look up a sibling field in the input map.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Redirect this field to the exclusion sentinel; only `extend` entries
    /// will reach the result.
    pub fn exclude(&mut self) {
        self.key = EXCLUDED_KEY.to_string();
    }

    pub fn is_excluded(&self) -> bool {
        self.key == EXCLUDED_KEY
    }

    /// Tear down into the pieces the engine records: final key, final
    /// value, derived extend entries.
    pub fn into_parts(self) -> (String, Value, Map<String, Value>) {
        (self.key, self.value, self.extend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params() -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("age".to_string(), json!(7));
        m.insert("name".to_string(), json!("li"));
        m
    }

    #[test]
    fn test_param_lookup() {
        let p = params();
        let scratch = FieldScratch::new("age", json!(7), &p);
        assert_eq!(scratch.param("name"), Some(&json!("li")));
        assert_eq!(scratch.param("missing"), None);
    }

    #[test]
    fn test_exclude() {
        let p = params();
        let mut scratch = FieldScratch::new("age", json!(7), &p);
        assert!(!scratch.is_excluded());
        scratch.exclude();
        assert!(scratch.is_excluded());
        assert_eq!(scratch.key, EXCLUDED_KEY);
    }
}
