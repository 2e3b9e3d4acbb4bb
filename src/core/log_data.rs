//! Structured payload attached to generic log records
//!
//! This module provides:
//! - `FieldValue`: the closed set of serializable payload values
//! - `LogData`: an ordered string-keyed mapping of `FieldValue`s

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for structured logging fields
///
/// Nested mappings are allowed; anything else must be one of the scalar
/// variants so that serialization is always well defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Map(LogData),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Map(m) => write!(f, "{}", m),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Map(m) => m.to_json_value(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u16> for FieldValue {
    fn from(i: u16) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(i: u64) -> Self {
        match i64::try_from(i) {
            Ok(v) => FieldValue::Int(v),
            Err(_) => FieldValue::Float(i as f64),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<LogData> for FieldValue {
    fn from(m: LogData) -> Self {
        FieldValue::Map(m)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Key-value payload of a generic log record
///
/// Keys are kept sorted so rendered output is stable.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::LogData;
///
/// let data = LogData::new()
///     .with_field("code", 123)
///     .with_field("detail", "disk almost full");
/// assert_eq!(data.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogData {
    fields: BTreeMap<String, FieldValue>,
}

impl LogData {
    /// Create a new empty payload
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add a field to the payload
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the payload (mutable version)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json_value()))
                .collect(),
        )
    }

    /// Compact JSON form, as appended to console lines
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for LogData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json_value())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for LogData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_data_creation() {
        let data = LogData::new();
        assert!(data.is_empty());
    }

    #[test]
    fn test_log_data_with_fields() {
        let data = LogData::new()
            .with_field("user_id", 123)
            .with_field("username", "john_doe")
            .with_field("active", true)
            .with_field("ratio", 0.5)
            .with_field("missing", None::<String>);

        assert_eq!(data.len(), 5);
        assert_eq!(data.get("user_id"), Some(&FieldValue::Int(123)));
        assert_eq!(data.get("missing"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_json_is_sorted_and_compact() {
        let data = LogData::new()
            .with_field("b", 2)
            .with_field("a", "x")
            .with_field("nested", LogData::new().with_field("ok", false));

        assert_eq!(
            data.to_json().unwrap(),
            r#"{"a":"x","b":2,"nested":{"ok":false}}"#
        );
        assert_eq!(data.to_string(), data.to_json().unwrap());
    }

    #[test]
    fn test_untagged_deserialization_picks_variants() {
        let data: LogData =
            serde_json::from_str(r#"{"i":7,"f":1.5,"s":"str","b":true,"n":null,"m":{"x":1}}"#)
                .unwrap();

        assert_eq!(data.get("i"), Some(&FieldValue::Int(7)));
        assert_eq!(data.get("f"), Some(&FieldValue::Float(1.5)));
        assert_eq!(data.get("s"), Some(&FieldValue::String("str".into())));
        assert_eq!(data.get("b"), Some(&FieldValue::Bool(true)));
        assert_eq!(data.get("n"), Some(&FieldValue::Null));
        assert_eq!(
            data.get("m"),
            Some(&FieldValue::Map(LogData::new().with_field("x", 1)))
        );
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        let value = FieldValue::Float(f64::NAN);
        assert_eq!(value.to_json_value(), serde_json::Value::Null);
    }

    #[test]
    fn test_large_u64_falls_back_to_float() {
        assert_eq!(FieldValue::from(5u64), FieldValue::Int(5));
        assert!(matches!(FieldValue::from(u64::MAX), FieldValue::Float(_)));
    }

    #[test]
    fn test_collect_from_pairs() {
        let data: LogData = vec![("k1", "v1"), ("k2", "v2")].into_iter().collect();
        assert_eq!(data.len(), 2);
    }
}
