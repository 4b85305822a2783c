//! Structural equality and identity for values.

use super::Value;

impl PartialEq for Value {
    /// Deep structural equality.
    ///
    /// Mismatched variants compare unequal; in particular there is no
    /// cross-variant numeric equality, so `1 == 1.0` is `false`. Two function
    /// values are never equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) | (Self::Undefined, Self::Undefined) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a.properties_eq(b),
            _ => false,
        }
    }
}

impl Value {
    /// Identity comparison, the `sameas` test.
    ///
    /// Heap values are the same only when they share an allocation; immediate
    /// values fall back to structural equality. Functions are identical only
    /// to themselves.
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a.ptr_eq(b),
            (Self::Array(a), Self::Array(b)) => std::rc::Rc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => std::rc::Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => std::rc::Rc::ptr_eq(a, b),
            (Self::Null, _)
            | (Self::Undefined, _)
            | (Self::Boolean(_), _)
            | (Self::Integer(_), _)
            | (Self::Float(_), _) => self == other,
            _ => false,
        }
    }
}
