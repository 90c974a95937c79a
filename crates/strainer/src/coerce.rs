//! Canonical-type coercion over decoded parameter values
//!
//! Every conversion answers with `Option<T>`: `None` means the value cannot
//! be interpreted as the target type. Policy held throughout the crate: the
//! empty string never coerces to a number, and float-shaped values never
//! coerce to an integer.

use serde_json::{Map, Value};

/// Coerce to an integer. Accepts any JSON integer and strings that parse
/// as `i64`.
pub fn to_i64(val: &Value) -> Option<i64> {
    match val {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => {
            if s.is_empty() {
                return None;
            }
            s.parse::<i64>().ok()
        }
        _ => None,
    }
}

/// Coerce to a float. Accepts any JSON number and strings that parse as
/// `f64`.
pub fn to_f64(val: &Value) -> Option<f64> {
    match val {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()
        }
        _ => None,
    }
}

/// Coerce to a string. Strings pass through, numbers are formatted;
/// booleans, nulls and containers do not coerce.
pub fn to_string(val: &Value) -> Option<String> {
    match val {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce to a boolean. Accepts native bools, the token set
/// `1 t T TRUE true True 0 f F FALSE false False`, and the integers 1/0.
pub fn to_bool(val: &Value) -> Option<bool> {
    match val {
        Value::Bool(b) => Some(*b),
        Value::String(s) => parse_bool_token(s),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn parse_bool_token(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Coerce a JSON array to integers, element by element. Any element that
/// fails integer coercion fails the whole slice.
pub fn to_i64_slice(val: &Value) -> Option<Vec<i64>> {
    match val {
        Value::Array(items) => items.iter().map(to_i64).collect(),
        _ => None,
    }
}

/// Coerce a JSON array to strings, element by element.
pub fn to_string_slice(val: &Value) -> Option<Vec<String>> {
    match val {
        Value::Array(items) => items.iter().map(to_string).collect(),
        _ => None,
    }
}

/// Look up `key` in a parameter map and coerce it to an integer.
pub fn int_from_map(key: &str, vals: &Map<String, Value>) -> Option<i64> {
    vals.get(key).and_then(to_i64)
}

/// Look up `key` in a parameter map and coerce it to a string.
pub fn str_from_map(key: &str, vals: &Map<String, Value>) -> Option<String> {
    vals.get(key).and_then(to_string)
}

/// Zero test over the closed set of canonical kinds: null, 0, empty
/// string, `false`, empty array, empty object.
pub fn is_zero(val: &Value) -> bool {
    match val {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}
