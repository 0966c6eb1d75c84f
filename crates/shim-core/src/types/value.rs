//! Unified value representation for proxy calls.
//!
//! The `Value` enum carries every argument and result that crosses the
//! proxy boundary, so strategies and backends can route calls uniformly
//! without knowing the concrete capability types involved.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Number, ProxyId, TypeTag};

/// A value crossing the proxy boundary.
///
/// Covers primitives, structured values, and the in-process proxy
/// reference used by the identity methods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// Null value (no data).
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value (integer or float).
    Number(Number),
    /// String value.
    String(String),
    /// Array of values.
    Array(Vec<Value>),
    /// Object/map of string keys to values.
    Object(HashMap<String, Value>),
    /// Proxy reference (by id). Not serializable to JSON.
    Proxy(ProxyId),
}

impl Value {
    /// Checks if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get the value as a number reference.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get the value as an array reference.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to get the value as an object reference.
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Attempts to get the value as a proxy id.
    pub fn as_proxy_id(&self) -> Option<ProxyId> {
        match self {
            Value::Proxy(id) => Some(*id),
            _ => None,
        }
    }

    /// The type tag this value carries at runtime.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Unit,
            Value::Bool(_) => TypeTag::Bool,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
            Value::Proxy(_) => TypeTag::Proxy,
        }
    }

    /// Converts the value to a JSON value.
    ///
    /// Proxy references are in-process handles and cannot be serialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the value contains a Proxy variant or a float
    /// outside the JSON number range.
    pub fn to_json(&self) -> Result<serde_json::Value, String> {
        match self {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Number(n) => {
                let json_num = match n {
                    Number::Integer(i) => serde_json::Number::from(*i).into(),
                    Number::Float(f) => serde_json::Number::from_f64(*f)
                        .ok_or_else(|| "Invalid float value".to_string())?
                        .into(),
                };
                Ok(json_num)
            }
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Array(a) => {
                let json_array: Result<Vec<_>, _> = a.iter().map(|v| v.to_json()).collect();
                Ok(serde_json::Value::Array(json_array?))
            }
            Value::Object(o) => {
                let mut map = serde_json::Map::new();
                for (k, v) in o {
                    map.insert(k.clone(), v.to_json()?);
                }
                Ok(serde_json::Value::Object(map))
            }
            Value::Proxy(_) => Err("Cannot serialize proxy reference to JSON".to_string()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(value: HashMap<String, Value>) -> Self {
        Value::Object(value)
    }
}
