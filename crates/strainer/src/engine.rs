//! Chain execution engine

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::chain::Chain;
use crate::coerce;
use crate::context::Context;
use crate::error::{ValidateError, ValidationResult};
use crate::field::FieldScratch;
use crate::outcome::Outcome;

/// Engine status for a completed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Status {
    /// No chains were given; nothing ran.
    Skipped = 0,
    /// Every chain completed.
    Validated = 1,
}

impl Status {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// The cleaned, typed output of a successful validation call.
#[derive(Debug, Clone)]
pub struct Validated {
    /// Final values keyed by (possibly redirected) field key and extend
    /// keys, in chain-processing order.
    pub values: Map<String, Value>,
    pub status: Status,
}

impl Validated {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Read a result entry as an integer.
    pub fn int(&self, key: &str) -> Option<i64> {
        coerce::int_from_map(key, &self.values)
    }

    /// Read a result entry as a string.
    pub fn str(&self, key: &str) -> Option<String> {
        coerce::str_from_map(key, &self.values)
    }

    pub fn into_values(self) -> Map<String, Value> {
        self.values
    }
}

/// Validate `params` against `chains` with an empty context.
pub fn validate(params: &Map<String, Value>, chains: &[Chain]) -> ValidationResult<Validated> {
    validate_with_context(&Context::new(), params, chains)
}

/// Validate `params` against `chains`. The context is consulted only for
/// the localizer lookup of localized chains.
///
/// Chains run in order; within a chain, rules run in order. A `Break`
/// outcome stops the current chain and keeps what it accumulated. A
/// `Failure` outcome aborts the whole call: the error carries the first
/// available message (outcome, then chain default, then a generated
/// `field <key> error`) and the chain's numeric code. Values accumulated
/// for earlier chains are discarded on failure.
pub fn validate_with_context(
    ctx: &Context,
    params: &Map<String, Value>,
    chains: &[Chain],
) -> ValidationResult<Validated> {
    if chains.is_empty() {
        return Ok(Validated {
            values: Map::new(),
            status: Status::Skipped,
        });
    }

    let mut values = Map::new();
    for chain in chains {
        let raw = params.get(chain.key()).cloned().unwrap_or(Value::Null);
        let mut scratch = FieldScratch::new(chain.key(), raw, params);

        for rule in chain.rules() {
            match rule.apply(&mut scratch) {
                Outcome::Success => {}
                Outcome::Break => {
                    trace!(field = chain.key(), rule = rule.name(), "chain stopped early");
                    break;
                }
                Outcome::Failure(message) => {
                    let resolved = resolve_message(ctx, chain, message);
                    debug!(
                        field = chain.key(),
                        rule = rule.name(),
                        code = chain.error_code(),
                        "validation failed: {resolved}"
                    );
                    return Err(ValidateError::new(chain.key(), resolved, chain.error_code()));
                }
            }
        }

        let (key, value, extend) = scratch.into_parts();
        if key != crate::field::EXCLUDED_KEY && !value.is_null() {
            values.insert(key, value);
        }
        for (ek, ev) in extend {
            values.insert(ek, ev);
        }
    }

    Ok(Validated {
        values,
        status: Status::Validated,
    })
}

fn resolve_message(ctx: &Context, chain: &Chain, outcome_message: Option<String>) -> String {
    let message = outcome_message.or_else(|| chain.error_message().map(str::to_string));
    match message {
        Some(m) if chain.is_localized() => ctx.localize(&m),
        Some(m) => m,
        None => format!("field {} error", chain.key()),
    }
}
