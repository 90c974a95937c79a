//! Transform-only rules
//!
//! These never fail: they mutate the scratch record and return success.
//! The string transforms are no-ops on non-string values.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::field::FieldScratch;
use crate::outcome::Outcome;
use crate::traits::Rule;

fn script_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("script pattern"))
}

fn is_emoji(c: char) -> bool {
    matches!(c,
        '\u{1F000}'..='\u{1FAFF}'   // pictographs, emoticons, supplemental symbols
        | '\u{2600}'..='\u{27BF}'   // misc symbols, dingbats
        | '\u{2B00}'..='\u{2BFF}'   // misc symbols and arrows
        | '\u{FE00}'..='\u{FE0F}'   // variation selectors
        | '\u{200D}'                // zero-width joiner
    )
}

/// Strips emoji and their joiners from a string value.
#[derive(Debug, Clone, Default)]
pub struct RemoveEmojiRule;

impl RemoveEmojiRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RemoveEmojiRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        if let Value::String(s) = &field.value {
            let cleaned: String = s.chars().filter(|c| !is_emoji(*c)).collect();
            field.value = Value::String(cleaned);
        }
        Outcome::Success
    }

    fn name(&self) -> &'static str {
        "remove_emoji"
    }
}

/// Neutralizes markup in a string value: `<script>` blocks are removed,
/// the remainder is HTML-encoded.
#[derive(Debug, Clone, Default)]
pub struct XssRule;

impl XssRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for XssRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        if let Value::String(s) = &field.value {
            let stripped = script_block_re().replace_all(s, "");
            field.value = Value::String(html_escape::encode_text(&stripped).to_string());
        }
        Outcome::Success
    }

    fn name(&self) -> &'static str {
        "xss"
    }
}

/// Redirects where the field's value is stored in the result map.
#[derive(Debug, Clone)]
pub struct ResetKeyRule {
    new_key: String,
}

impl ResetKeyRule {
    pub fn new(new_key: impl Into<String>) -> Self {
        Self {
            new_key: new_key.into(),
        }
    }
}

impl Rule for ResetKeyRule {
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome {
        if !self.new_key.is_empty() {
            field.key = self.new_key.clone();
        }
        Outcome::Success
    }

    fn name(&self) -> &'static str {
        "reset_key"
    }
}
