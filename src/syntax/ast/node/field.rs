//! Member access and slicing.

use crate::syntax::ast::node::Node;
use std::fmt;

/// Dotted access `obj.field` with a literal field name.
///
/// On objects this looks the key up (and exposes the `items`/`get` methods);
/// on strings it exposes the fixed method set. A miss is `undefined`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetConstField {
    obj: Box<Node>,
    field: Box<str>,
}

impl GetConstField {
    /// Creates a new constant field access.
    pub fn new<O, F>(obj: O, field: F) -> Self
    where
        O: Into<Node>,
        F: Into<Box<str>>,
    {
        Self {
            obj: Box::new(obj.into()),
            field: field.into(),
        }
    }

    /// The accessed expression.
    pub fn obj(&self) -> &Node {
        &self.obj
    }

    /// The field name.
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl fmt::Display for GetConstField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.obj, self.field)
    }
}

/// Computed access `obj[expr]`.
///
/// Defined on `array[int]` and `string[int]` (negative indices count from the
/// end, out of range is `undefined`) and `object[string]` (a miss is
/// `undefined`).
#[derive(Debug, Clone, PartialEq)]
pub struct GetField {
    obj: Box<Node>,
    field: Box<Node>,
}

impl GetField {
    /// Creates a new computed field access.
    pub fn new<O, F>(obj: O, field: F) -> Self
    where
        O: Into<Node>,
        F: Into<Node>,
    {
        Self {
            obj: Box::new(obj.into()),
            field: Box::new(field.into()),
        }
    }

    /// The accessed expression.
    pub fn obj(&self) -> &Node {
        &self.obj
    }

    /// The index expression.
    pub fn field(&self) -> &Node {
        &self.field
    }
}

impl fmt::Display for GetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.obj, self.field)
    }
}

/// A slice `obj[start:stop:step]` over an array or string.
///
/// Python semantics: negative indices normalise against the length, omitted
/// bounds default per the step's sign, and a zero step fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    obj: Box<Node>,
    start: Option<Box<Node>>,
    stop: Option<Box<Node>>,
    step: Option<Box<Node>>,
}

impl Slice {
    /// Creates a new slice expression.
    pub fn new<O>(
        obj: O,
        start: Option<Node>,
        stop: Option<Node>,
        step: Option<Node>,
    ) -> Self
    where
        O: Into<Node>,
    {
        Self {
            obj: Box::new(obj.into()),
            start: start.map(Box::new),
            stop: stop.map(Box::new),
            step: step.map(Box::new),
        }
    }

    /// The sliced expression.
    pub fn obj(&self) -> &Node {
        &self.obj
    }

    /// The start bound, if present.
    pub fn start(&self) -> Option<&Node> {
        self.start.as_deref()
    }

    /// The stop bound, if present.
    pub fn stop(&self) -> Option<&Node> {
        self.stop.as_deref()
    }

    /// The step, if present.
    pub fn step(&self) -> Option<&Node> {
        self.step.as_deref()
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.obj)?;
        if let Some(start) = &self.start {
            fmt::Display::fmt(start, f)?;
        }
        f.write_str(":")?;
        if let Some(stop) = &self.stop {
            fmt::Display::fmt(stop, f)?;
        }
        if let Some(step) = &self.step {
            write!(f, ":{}", step)?;
        }
        f.write_str("]")
    }
}
