//! # strainer
//!
//! Declarative rule-chain validation for untyped request parameters.
//! Callers bind ordered rule chains to field keys, hand the chains and the
//! decoded input map to the engine, and get back a cleaned, typed result
//! map, or a single field-scoped error with an optional numeric code.
//!
//! ```
//! use serde_json::{json, Map};
//! use strainer::{validate, Chain, IntRule, OptionalRule, RequiredRule};
//!
//! let mut params = Map::new();
//! params.insert("age".to_string(), json!("42"));
//!
//! let chains = vec![
//!     Chain::new("age").rule(RequiredRule::new()).rule(IntRule::new()),
//!     Chain::new("grade").rule(OptionalRule::new().default_value(1)),
//! ];
//!
//! let res = validate(&params, &chains).unwrap();
//! assert_eq!(res.int("age"), Some(42));
//! assert_eq!(res.int("grade"), Some(1));
//! ```

pub mod chain;
pub mod coerce;
pub mod context;
pub mod engine;
pub mod error;
pub mod field;
pub mod outcome;
pub mod rules;
pub mod traits;

// Re-exports for easy access
pub use chain::Chain;
pub use context::{init_localizer_key, localizer_key, Context, Localizer, DEFAULT_LOCALIZER_KEY};
pub use engine::{validate, validate_with_context, Status, Validated};
pub use error::{ValidateError, ValidationResult};
pub use field::{FieldScratch, EXCLUDED_KEY};
pub use outcome::Outcome;
pub use traits::Rule;

// Built-in rules
pub use rules::{
    BetweenRule, BooleanRule, CustomRule, DateRule, DatetimeRule, DotIntRule, DotIntToSliceRule,
    EmailRule, EmptyStringRule, EnumIntRule, EnumStringRule, FloatRule, IntRule, IntSliceRule,
    Ipv4Rule, LengthRule, MaxdotRule, OmitEmptyRule, OptionalRule, PaginateRule, PhoneRule,
    RegexRule, RemoveEmojiRule, RequiredRule, ResetKeyRule, StringRule, StringSliceRule, UrlRule,
    XssRule,
};
