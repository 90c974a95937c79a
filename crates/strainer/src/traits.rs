//! Core rule trait

use crate::field::FieldScratch;
use crate::outcome::Outcome;

/// One unit of work over a field's current value.
///
/// Rules run synchronously, in chain order, exactly once per validation
/// call. A rule may mutate the scratch record's `key`, `value` and `extend`;
/// the input map itself is off limits.
pub trait Rule: Send + Sync {
    /// Apply the rule to the field's scratch state.
    fn apply(&self, field: &mut FieldScratch<'_>) -> Outcome;

    /// Rule name, for logging.
    fn name(&self) -> &'static str;
}
