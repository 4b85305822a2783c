//! Bare name references.

use std::fmt;

/// A name resolved against the environment chain at evaluation time.
///
/// An unbound identifier evaluates to `undefined`, never to an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    ident: Box<str>,
}

impl Identifier {
    /// The referenced name.
    pub fn as_ref(&self) -> &str {
        &self.ident
    }
}

impl<T> From<T> for Identifier
where
    T: Into<Box<str>>,
{
    fn from(stm: T) -> Self {
        Self { ident: stm.into() }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ident)
    }
}
