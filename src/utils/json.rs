//! JSON Parsing Utilities
//!
//! Safe JSON parsing with proper error handling.

use crate::error::{QrError, QrResult};
use serde_json::{Map, Value};

/// Parse a non-empty JSON document into a value
pub fn parse_json_value(json_str: &str) -> QrResult<Value> {
    if json_str.is_empty() {
        return Err(QrError::EmptyJson);
    }
    Ok(serde_json::from_str(json_str)?)
}

/// Borrow a value as a JSON object
pub fn as_json_object<'a>(value: &'a Value, what: &'static str) -> QrResult<&'a Map<String, Value>> {
    value.as_object().ok_or(QrError::NotAnObject(what))
}

/// Extract a mandatory string field
pub fn require_json_string(value: &Value, field: &'static str) -> QrResult<String> {
    match value.get(field) {
        None | Some(Value::Null) => Err(QrError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(QrError::invalid_field(
            field,
            format!("expected a string, got {}", other),
        )),
    }
}

/// Extract a mandatory field of any shape
pub fn require_json_field<'a>(value: &'a Value, field: &'static str) -> QrResult<&'a Value> {
    value.get(field).ok_or(QrError::MissingField(field))
}

/// Non-negative integer, also accepting floats with no fractional part
pub fn as_integral_u64(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
        .map(|f| f as u64)
}

/// Whether a JSON value counts as "set" (not null, false, 0 or "")
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
