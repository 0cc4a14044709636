//! Field-level coercion helpers shared by the record normalizers.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// View a value as an object, or `None` for any other shape.
pub(crate) fn as_object(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object()
}

/// First key whose value is present and non-null, in priority order.
pub(crate) fn pick<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

/// Coerce to a count. Accepts numbers and numeric strings; anything
/// non-finite or non-numeric yields the fallback. Negative input clamps to
/// zero since every counter in the model is a tally.
pub(crate) fn coerce_count(value: Option<&Value>, fallback: u64) -> u64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => n.max(0.0) as u64,
        _ => fallback,
    }
}

/// Coerce to a string, substituting the fallback for non-string input.
pub(crate) fn coerce_string(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => fallback.to_string(),
    }
}

/// Coerce to an optional string; empty and non-string input become `None`.
pub(crate) fn coerce_opt_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Coerce to a string list, keeping only string elements.
pub(crate) fn coerce_string_array(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Coerce to a timestamp. Only RFC 3339 strings are accepted; anything else
/// is `None`.
pub(crate) fn coerce_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    }
}

/// View a payload as a record list: either a bare array or a wrapper object
/// with an `items` array. Neither shape means the slice is unusable.
pub(crate) fn as_list(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(obj) => match obj.get("items") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pick_skips_nulls() {
        let obj = json!({ "a": null, "b": "x" });
        let obj = obj.as_object().unwrap();
        assert_eq!(pick(obj, &["a", "b"]), Some(&json!("x")));
        assert_eq!(pick(obj, &["a", "missing"]), None);
    }

    #[test]
    fn count_accepts_numeric_strings() {
        assert_eq!(coerce_count(Some(&json!("42")), 0), 42);
        assert_eq!(coerce_count(Some(&json!(7.9)), 0), 7);
        assert_eq!(coerce_count(Some(&json!("not a number")), 3), 3);
        assert_eq!(coerce_count(Some(&json!(-5)), 0), 0);
        assert_eq!(coerce_count(None, 9), 9);
    }

    #[test]
    fn timestamp_rejects_garbage() {
        assert!(coerce_timestamp(Some(&json!("soon"))).is_none());
        assert!(coerce_timestamp(Some(&json!(12345))).is_none());
        assert!(coerce_timestamp(Some(&json!("2026-03-01T12:00:00Z"))).is_some());
    }

    #[test]
    fn list_accepts_items_wrapper() {
        let wrapped = json!({ "items": [1, 2] });
        assert_eq!(as_list(&wrapped).unwrap().len(), 2);
        assert_eq!(as_list(&json!([1])).unwrap().len(), 1);
        assert!(as_list(&json!({ "rows": [] })).is_none());
        assert!(as_list(&json!("nope")).is_none());
    }
}
