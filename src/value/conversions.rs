//! Conversion between template values and host values.
//!
//! The host contract is JSON-shaped: `serde_json::Value` converts losslessly
//! into the value model (`preserve_order` keeps map insertion order), and
//! every non-function value serializes back out through `serde::Serialize`,
//! which is what the `tojson` filter relies on.

use super::{Object, RcString, Value};
use crate::builtins::function::Function;
use crate::error::RuntimeError;
use crate::Result;
use indexmap::IndexMap;
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

impl Value {
    /// Converts a host JSON value into a template value.
    ///
    /// Integral numbers become `int`, everything else numeric becomes
    /// `float`; integral numbers outside the `i64` range fail with a
    /// conversion error.
    pub fn from_json(json: serde_json::Value) -> Result<Value> {
        match json {
            serde_json::Value::Null => Ok(Self::null()),
            serde_json::Value::Bool(b) => Ok(Self::boolean(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::float(f))
                } else {
                    Err(RuntimeError::new(format!(
                        "number {} does not fit the value model",
                        n
                    ))
                    .into())
                }
            }
            serde_json::Value::String(s) => Ok(Self::string(s)),
            serde_json::Value::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(Self::from_json(element)?);
                }
                Ok(Self::array(values))
            }
            serde_json::Value::Object(entries) => {
                let mut properties = IndexMap::with_capacity(entries.len());
                for (key, element) in entries {
                    properties.insert(key, Self::from_json(element)?);
                }
                Ok(Self::object(Object::with_properties(properties)))
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null | Self::Undefined => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for element in values.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Self::Object(object) => {
                let entries = object.entries();
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, element) in &entries {
                    map.serialize_entry(key, element)?;
                }
                map.end()
            }
            Self::Function(_) => Err(S::Error::custom("function values cannot be serialized")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<RcString> for Value {
    fn from(value: RcString) -> Self {
        Self::String(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::string(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::integer(i64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::integer(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::array(values)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::object(object)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::function(function)
    }
}
