//! Object literals.

use crate::syntax::ast::node::Node;
use std::fmt;

/// A `{"key": value}` literal.
///
/// Keys must be string literals at parse time; entries evaluate and are
/// inserted in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDecl {
    properties: Box<[(Box<str>, Node)]>,
}

impl ObjectDecl {
    /// The key/value entries.
    pub fn properties(&self) -> &[(Box<str>, Node)] {
        &self.properties
    }
}

impl<T> From<T> for ObjectDecl
where
    T: Into<Box<[(Box<str>, Node)]>>,
{
    fn from(properties: T) -> Self {
        Self {
            properties: properties.into(),
        }
    }
}

impl fmt::Display for ObjectDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for (key, value) in self.properties.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "\"{}\": {}", key, value)?;
        }
        f.write_str("}")
    }
}
