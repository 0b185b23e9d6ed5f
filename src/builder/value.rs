//! # Dynamically-shaped values for map fragments.
//!
//! [`Value`] is a closed tagged union covering what a JSON-like document can
//! hold: null, booleans, numbers (integer or float), strings, lists and nested
//! maps. A nested [`Map`] is an ordinary leaf value: builders never merge into
//! it, they replace it as a whole.
//!
//! ## Example
//! ```rust
//! use blockfold::{map, Value};
//!
//! let address = map! { "city" => "Boston", "zipcode" => "10001" };
//! let person = Value::from(map! {
//!     "name" => "Jon",
//!     "age" => 30,
//!     "address" => address,
//! });
//!
//! assert_eq!(person.get("age").and_then(Value::as_i64), Some(30));
//! assert_eq!(
//!     person.to_string(),
//!     r#"{"name":"Jon","age":30,"address":{"city":"Boston","zipcode":"10001"}}"#
//! );
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::ValueError;

/// Insertion-ordered string-keyed map of [`Value`]s.
pub type Map = IndexMap<String, Value>;

/// Tagged union of everything a map fragment can carry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value (default).
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer number.
    Int(i64),
    /// Floating-point number; may be non-finite.
    Float(f64),
    /// UTF-8 text.
    String(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Nested map, treated as an opaque leaf by builders.
    Map(Map),
}

impl Value {
    /// Short name of the variant (`"null"`, `"bool"`, `"number"`, `"string"`, `"list"`, `"map"`).
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Boolean view.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer view; floats are not truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view; integers are widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Text view.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// List view.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Map view.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Strict JSON encoding; fails on NaN or infinite floats.
    pub fn to_json_string(&self) -> Result<String, ValueError> {
        let json = serde_json::Value::try_from(self)?;
        Ok(serde_json::to_string(&json)?)
    }

    /// Strict, pretty-printed JSON encoding.
    pub fn to_json_string_pretty(&self) -> Result<String, ValueError> {
        let json = serde_json::Value::try_from(self)?;
        Ok(serde_json::to_string_pretty(&json)?)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items),
            Value::Map(map) => serializer.collect_map(map),
        }
    }
}

/// Lenient JSON text; non-finite floats render as `null`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    /// Values beyond `i64::MAX` fall back to `Float`.
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(n as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or(ValueError::NonFiniteNumber { value: *f })?,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Map(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (key, item) in map {
                    out.insert(key.clone(), serde_json::Value::try_from(item)?);
                }
                serde_json::Value::Object(out)
            }
        })
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_pick_expected_variant() {
        assert_eq!(Value::from(30), Value::Int(30));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from("Jon"), Value::String("Jon".into()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
        assert_eq!(Value::from(u64::MAX).kind(), "number");
        assert!(Value::from(u64::MAX).as_i64().is_none());
    }

    #[test]
    fn test_accessors() {
        let v = Value::from(crate::map! { "zip" => "10001", "n" => 3 });
        assert_eq!(v.kind(), "map");
        assert_eq!(v.get("zip").and_then(Value::as_str), Some("10001"));
        assert_eq!(v.get("n").and_then(Value::as_f64), Some(3.0));
        assert!(v.get("missing").is_none());
        assert!(Value::Int(1).get("zip").is_none());
        assert!(Value::default().is_null());
    }

    #[test]
    fn test_display_renders_json_text() {
        let v = Value::List(vec![Value::Null, Value::Bool(false), Value::Float(1.5)]);
        assert_eq!(v.to_string(), "[null,false,1.5]");
    }

    #[test]
    fn test_strict_encoding_rejects_nan() {
        let v = Value::from(crate::map! { "bad" => f64::NAN });
        match v.to_json_string() {
            Err(ValueError::NonFiniteNumber { value }) => assert!(value.is_nan()),
            other => panic!("expected non-finite error, got {other:?}"),
        }
        assert_eq!(v.to_string(), r#"{"bad":null}"#);
    }

    #[test]
    fn test_serde_json_interop() {
        let text = r#"{"name":"Jon","age":30,"tags":["a"],"score":0.5}"#;
        let json: serde_json::Value = serde_json::from_str(text).unwrap();
        let v = Value::from(json.clone());

        assert_eq!(v.get("age"), Some(&Value::Int(30)));
        assert_eq!(v.get("score"), Some(&Value::Float(0.5)));
        assert_eq!(serde_json::Value::try_from(&v).unwrap(), json);
    }
}
