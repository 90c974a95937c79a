//! Rule outcome model

/// Result of applying one rule to one field.
///
/// `Break` ends the field's chain without failing the run; `Failure` aborts
/// the entire validation call. Failures are not collected across chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Continue with the next rule in the chain.
    Success,
    /// Stop this chain, keep the accumulated value and extend entries.
    Break,
    /// Abort the whole run; the optional message overrides the chain default.
    Failure(Option<String>),
}

impl Outcome {
    /// Failure carrying the rule's configured message override, if any.
    pub fn fail_with(message: &Option<String>) -> Self {
        Outcome::Failure(message.clone())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Outcome::Break)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        assert!(Outcome::Success.is_success());
        assert!(Outcome::Break.is_break());
        assert!(Outcome::Failure(None).is_failure());
        assert!(!Outcome::Break.is_failure());
    }

    #[test]
    fn test_fail_with_clones_override() {
        let msg = Some("boom".to_string());
        assert_eq!(
            Outcome::fail_with(&msg),
            Outcome::Failure(Some("boom".to_string()))
        );
        assert_eq!(Outcome::fail_with(&None), Outcome::Failure(None));
    }
}
