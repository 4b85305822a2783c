//! Hashing of values.
//!
//! Every variant except `function` hashes; filters that deduplicate (such as
//! `unique`) key their seen-sets on these hashes. Hashing a function is a
//! runtime error, matching the "functions are not hashable" rule.

use super::Value;
use crate::error::RuntimeError;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

impl Value {
    /// Computes a structural hash of this value.
    ///
    /// Equal values hash equally; `1` and `1.0` are unequal values and may
    /// hash differently.
    pub fn hash_value(&self) -> Result<u64, RuntimeError> {
        let mut hasher = DefaultHasher::new();
        hash_into(self, &mut hasher)?;
        Ok(hasher.finish())
    }
}

fn hash_into<H: Hasher>(value: &Value, state: &mut H) -> Result<(), RuntimeError> {
    std::mem::discriminant(value).hash(state);
    match value {
        Value::Null | Value::Undefined => {}
        Value::Boolean(b) => b.hash(state),
        Value::Integer(i) => i.hash(state),
        Value::Float(f) => f.to_bits().hash(state),
        Value::String(s) => s.hash(state),
        Value::Array(values) => {
            values.len().hash(state);
            for element in values.iter() {
                hash_into(element, state)?;
            }
        }
        Value::Object(object) => {
            let entries = object.entries();
            entries.len().hash(state);
            for (key, element) in &entries {
                key.hash(state);
                hash_into(element, state)?;
            }
        }
        Value::Function(_) => {
            return Err(RuntimeError::new("function values are not hashable"));
        }
    }
    Ok(())
}
