//! Validation error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidateError>;

/// The single error a failed validation run produces.
///
/// The engine is fail-fast: the first failing rule anywhere aborts the whole
/// call, so one run yields at most one error, scoped to the chain whose rule
/// failed and carrying that chain's numeric code (0 when unset).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Error)]
#[error("{message}")]
pub struct ValidateError {
    /// Key of the chain whose rule failed
    pub field: String,
    /// Resolved, human-readable error message
    pub message: String,
    /// Caller-supplied numeric code attached to the chain
    pub code: i32,
}

impl ValidateError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: i32) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_message_only() {
        let err = ValidateError::new("age", "age must be an integer", 10086);
        assert_eq!(err.to_string(), "age must be an integer");
        assert_eq!(err.field, "age");
        assert_eq!(err.code, 10086);
    }

    #[test]
    fn test_error_serializes() {
        let err = ValidateError::new("age", "bad", 7);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "age");
        assert_eq!(json["code"], 7);
    }
}
