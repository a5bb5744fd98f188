//! Scalar type coercion and transient-key stripping for request configs.

use regex::Regex;
use serde_json::{Map, Value};

/// URL parameters the mtop client computes on every call (signature and
/// timestamp). Reproducing captured values in a snippet would be wrong,
/// so they are stripped before rendering.
const TRANSIENT_KEYS: &[&str] = &["sign", "t"];

/// Coerce string-valued entries of a flat config object to typed values.
///
/// Captured URL parameters arrive as strings. Values that are unambiguously
/// integers or booleans are rewritten so the rendered JSON carries real
/// types. Floats like `"1.0"` are intentionally left as strings (ambiguous:
/// could be a version string). Non-object values, including arrays, are
/// skipped entirely; nested values are never recursed into.
pub fn coerce_scalar_types(value: &mut Value) {
    if let Value::Object(config) = value {
        coerce_config_types(config);
    }
}

/// Object-level coercion, for configs already known to be mappings.
pub fn coerce_config_types(config: &mut Map<String, Value>) {
    let int_pattern = Regex::new(r"^[-+]?(\d+|Infinity)$").expect("valid pattern");

    for entry in config.values_mut() {
        let Value::String(s) = entry else { continue };

        if int_pattern.is_match(s) {
            *entry = integer_value(s);
        } else if s == "true" {
            *entry = Value::Bool(true);
        } else if s == "false" {
            *entry = Value::Bool(false);
        }
    }
}

/// Parse a string already matched against the integer pattern.
///
/// `Infinity` has no JSON representation; it renders as `null`, the same
/// thing `JSON.stringify` emits for a non-finite number.
fn integer_value(s: &str) -> Value {
    if let Ok(n) = s.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(n) = s.parse::<u64>() {
        return Value::from(n);
    }
    // Out-of-range digits still coerce, at f64 precision.
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// Remove auto-generated transient parameters from the config.
///
/// Idempotent; missing keys are a no-op.
pub fn strip_transient_keys(config: &mut Map<String, Value>) {
    for key in TRANSIENT_KEYS {
        config.remove(*key);
    }
}
