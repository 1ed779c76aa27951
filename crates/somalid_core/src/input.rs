//! Untyped input representation.
//!
//! Records arriving from files, other processes or interactive prompts are
//! not yet known to have the right shape. [`InputValue`] models that
//! boundary; the guarded validation entry point lifts it into a
//! [`RawRecord`](crate::RawRecord) or rejects it.

use crate::record::{RawRecord, keys};
use std::collections::HashMap;

/// A value in an untrusted input document.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    /// Null/missing value
    Null,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Map/object value
    Map(InputRecord),
    /// List/array value
    List(Vec<InputValue>),
}

/// A single structured record: key to value.
pub type InputRecord = HashMap<String, InputValue>;

impl InputValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, InputValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            InputValue::Null => "null",
            InputValue::String(_) => "string",
            InputValue::Int(_) => "integer",
            InputValue::Float(_) => "float",
            InputValue::Bool(_) => "boolean",
            InputValue::Map(_) => "map",
            InputValue::List(_) => "list",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            InputValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as a map.
    pub fn as_map(&self) -> Option<&InputRecord> {
        match self {
            InputValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Renders a scalar as text. Null becomes the empty string; maps and
    /// lists have no text form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            InputValue::Null => Some(String::new()),
            InputValue::String(s) => Some(s.clone()),
            InputValue::Int(i) => Some(i.to_string()),
            InputValue::Float(f) => Some(f.to_string()),
            InputValue::Bool(b) => Some(b.to_string()),
            InputValue::Map(_) | InputValue::List(_) => None,
        }
    }

    /// Returns true for null, the empty string, empty maps and empty lists.
    pub fn is_empty(&self) -> bool {
        match self {
            InputValue::Null => true,
            InputValue::String(s) => s.is_empty(),
            InputValue::Map(m) => m.is_empty(),
            InputValue::List(l) => l.is_empty(),
            _ => false,
        }
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::String(s)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::String(s.to_string())
    }
}

impl From<i64> for InputValue {
    fn from(i: i64) -> Self {
        InputValue::Int(i)
    }
}

impl From<f64> for InputValue {
    fn from(f: f64) -> Self {
        InputValue::Float(f)
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        InputValue::Bool(b)
    }
}

impl From<InputRecord> for InputValue {
    fn from(m: InputRecord) -> Self {
        InputValue::Map(m)
    }
}

impl From<&RawRecord> for InputValue {
    fn from(record: &RawRecord) -> Self {
        let fields = [
            (keys::ID_NUMBER, &record.id_number),
            (keys::NAME, &record.name),
            (keys::SEX, &record.sex),
            (keys::DATE_OF_BIRTH, &record.date_of_birth),
            (keys::DATE_OF_ISSUE, &record.date_of_issue),
            (keys::DATE_OF_EXPIRY, &record.date_of_expiry),
        ];
        InputValue::Map(
            fields
                .into_iter()
                .map(|(key, value)| (key.to_string(), InputValue::String(value.clone())))
                .collect(),
        )
    }
}

impl From<RawRecord> for InputValue {
    fn from(record: RawRecord) -> Self {
        InputValue::from(&record)
    }
}

impl From<serde_json::Value> for InputValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => InputValue::Null,
            Value::Bool(b) => InputValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => InputValue::Int(i),
                None => InputValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => InputValue::String(s),
            Value::Array(items) => InputValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                InputValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<InputValue> for serde_json::Value {
    fn from(value: InputValue) -> Self {
        use serde_json::Value;

        match value {
            InputValue::Null => Value::Null,
            InputValue::Bool(b) => Value::Bool(b),
            InputValue::Int(i) => Value::from(i),
            InputValue::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
            InputValue::String(s) => Value::String(s),
            InputValue::List(items) => Value::Array(items.into_iter().map(Into::into).collect()),
            InputValue::Map(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_input_value_types() {
        assert_eq!(InputValue::Null.type_name(), "null");
        assert_eq!(InputValue::from("x").type_name(), "string");
        assert_eq!(InputValue::from(42_i64).type_name(), "integer");
        assert_eq!(InputValue::Map(HashMap::new()).type_name(), "map");
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(InputValue::Null.to_text().as_deref(), Some(""));
        assert_eq!(InputValue::Int(934265782412).to_text().as_deref(), Some("934265782412"));
        assert_eq!(InputValue::Bool(true).to_text().as_deref(), Some("true"));
        assert_eq!(InputValue::List(vec![]).to_text(), None);
    }

    #[test]
    fn test_from_json() {
        let value = InputValue::from(json!({"idNumber": 934265782412_i64, "name": "Omar", "tags": [1, 2.5]}));
        let map = value.as_map().unwrap();

        assert_eq!(map.get("idNumber"), Some(&InputValue::Int(934265782412)));
        assert_eq!(map.get("name").and_then(InputValue::as_string), Some("Omar"));
        assert_eq!(
            map.get("tags"),
            Some(&InputValue::List(vec![InputValue::Int(1), InputValue::Float(2.5)]))
        );
    }

    #[test]
    fn test_raw_record_to_input() {
        let record = RawRecord::new("934265782412", "Omar", "M", "1990-03-15", "01/01/2020", "01.01.2030");
        let value = InputValue::from(&record);
        let map = value.as_map().unwrap();

        assert_eq!(map.len(), keys::REQUIRED.len());
        assert_eq!(map.get(keys::DATE_OF_ISSUE).and_then(InputValue::as_string), Some("01/01/2020"));
    }

    #[test]
    fn test_json_round_trip_of_map() {
        let original = json!({"name": "Fatima", "sex": "F"});
        let back: serde_json::Value = InputValue::from(original.clone()).into();
        assert_eq!(back, original);
    }
}
