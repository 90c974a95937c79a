//! Field chains: ordered rules bound to one input key

use std::sync::Arc;

use crate::traits::Rule;

/// An ordered list of rules bound to one field key, with the default error
/// message and numeric code used when a failing rule supplies none.
///
/// Immutable once handed to the engine; rules execute exactly once per run,
/// top to bottom.
#[derive(Clone)]
pub struct Chain {
    key: String,
    rules: Vec<Arc<dyn Rule>>,
    message: Option<String>,
    code: i32,
    localized: bool,
}

impl Chain {
    /// Start a chain for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rules: Vec::new(),
            message: None,
            code: 0,
            localized: false,
        }
    }

    /// Append a rule. Order is significant.
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Default error message for failures that carry none of their own.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Numeric error code returned alongside a failure.
    pub fn code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// Numeric error code parsed from a string; malformed input parses to 0
    /// rather than failing construction.
    pub fn code_str(mut self, code: &str) -> Self {
        self.code = code.parse().unwrap_or(0);
        self
    }

    /// Mark this chain's messages as identifiers to resolve through the
    /// context-bound localizer.
    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    pub fn error_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error_code(&self) -> i32 {
        self.code
    }

    pub fn is_localized(&self) -> bool {
        self.localized
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("key", &self.key)
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("message", &self.message)
            .field("code", &self.code)
            .field("localized", &self.localized)
            .finish()
    }
}
