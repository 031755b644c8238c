//! JSON text helpers.
//!
//! `deserialize` is positional: it ignores the object's key names and feeds
//! the values, in the order they appear in the text, to the target type's
//! fields in declaration order. It only works when the two orders agree.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    /// Malformed text, or values that don't fit the target's fields.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Positional construction needs a top-level object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Encode `value` as standard JSON text.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse `json` as an object and return its values in key order.
pub fn deserialize_values(json: &str) -> Result<Vec<Value>, JsonError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => Ok(map.into_iter().map(|(_, value)| value).collect()),
        other => Err(JsonError::NotAnObject(value_kind(&other))),
    }
}

/// Build a `T` by passing the object's values to it positionally.
///
/// # Arguments
///
/// * `json` - Text of a JSON object.
///
/// # Returns
///
/// The constructed value, or the parser's error when the text is malformed or
/// the number or types of values don't match `T`'s fields.
pub fn deserialize<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    let values = deserialize_values(json)?;
    log::trace!("constructing from {} positional values", values.len());
    // Derived `Deserialize` impls accept a sequence, filling fields in order.
    Ok(serde_json::from_value(Value::Array(values))?)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_serialize_keeps_field_order() {
        let text = serialize(&Point { x: 1, y: -2 }).unwrap();
        assert_eq!(text, r#"{"x":1,"y":-2}"#);
    }

    #[test]
    fn test_values_follow_document_order() {
        let values = deserialize_values(r#"{"b":2,"a":1,"c":[3]}"#).unwrap();
        assert_eq!(values, vec![Value::from(2), Value::from(1), serde_json::json!([3])]);
    }

    #[test]
    fn test_positional_round_trip() {
        let text = serialize(&Point { x: 4, y: 9 }).unwrap();
        let point: Point = deserialize(&text).unwrap();
        assert_eq!(point, Point { x: 4, y: 9 });
    }

    #[test]
    fn test_names_are_ignored() {
        // Keys in the opposite order land in the wrong fields.
        let point: Point = deserialize(r#"{"y":9,"x":4}"#).unwrap();
        assert_eq!(point, Point { x: 9, y: 4 });
    }

    #[test]
    fn test_arity_mismatch() {
        assert!(matches!(
            deserialize::<Point>(r#"{"x":1}"#),
            Err(JsonError::Json(_))
        ));
        assert!(matches!(
            deserialize::<Point>(r#"{"x":1,"y":2,"z":3}"#),
            Err(JsonError::Json(_))
        ));
    }

    #[test]
    fn test_not_an_object() {
        let err = deserialize::<Point>("[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "expected a JSON object, found an array");
    }

    #[test]
    fn test_malformed_text() {
        assert!(matches!(
            deserialize_values("{\"x\": "),
            Err(JsonError::Json(_))
        ));
    }
}
