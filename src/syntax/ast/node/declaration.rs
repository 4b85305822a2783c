//! The `set` statement and macro parameters.

use crate::syntax::ast::node::{Node, StatementList};
use std::fmt;

/// The assignable left-hand side of a `set`.
#[derive(Debug, Clone, PartialEq)]
pub enum SetTarget {
    /// `{% set name = ... %}`
    Ident(Box<str>),
    /// `{% set a, b = ... %}`; unpacks an array of matching length.
    Tuple(Box<[Box<str>]>),
    /// `{% set ns.attr = ... %}`; mutates a namespace in place.
    Attribute {
        /// The name bound to the namespace.
        object: Box<str>,
        /// The assigned attribute.
        field: Box<str>,
    },
}

impl fmt::Display for SetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => f.write_str(name),
            Self::Tuple(names) => {
                let mut first = true;
                for name in names.iter() {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    f.write_str(name)?;
                }
                Ok(())
            }
            Self::Attribute { object, field } => write!(f, "{}.{}", object, field),
        }
    }
}

/// A `{% set %}` statement, inline or block form.
///
/// Exactly one of `value` (inline) and `body` (block) is present; the block
/// form renders its body to a string and assigns that.
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    target: SetTarget,
    value: Option<Box<Node>>,
    body: Option<StatementList>,
}

impl Set {
    /// Creates an inline `set`.
    pub fn new<V>(target: SetTarget, value: V) -> Self
    where
        V: Into<Node>,
    {
        Self {
            target,
            value: Some(Box::new(value.into())),
            body: None,
        }
    }

    /// Creates a block `set ... endset`.
    pub fn new_block(target: SetTarget, body: StatementList) -> Self {
        Self {
            target,
            value: None,
            body: Some(body),
        }
    }

    /// The assignment target.
    pub fn target(&self) -> &SetTarget {
        &self.target
    }

    /// The assigned expression for the inline form.
    pub fn value(&self) -> Option<&Node> {
        self.value.as_deref()
    }

    /// The rendered body for the block form.
    pub fn body(&self) -> Option<&StatementList> {
        self.body.as_ref()
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, &self.body) {
            (Some(value), _) => write!(f, "{{% set {} = {} %}}", self.target, value),
            (None, Some(body)) => {
                write!(f, "{{% set {} %}}{}{{% endset %}}", self.target, body)
            }
            (None, None) => write!(f, "{{% set {} %}}", self.target),
        }
    }
}

/// One declared macro parameter with an optional default expression.
///
/// Defaults are evaluated in the macro's defining environment at call time.
#[derive(Debug, Clone, PartialEq)]
pub struct FormalParameter {
    name: Box<str>,
    init: Option<Node>,
}

impl FormalParameter {
    /// Creates a new parameter.
    pub fn new<N>(name: N, init: Option<Node>) -> Self
    where
        N: Into<Box<str>>,
    {
        Self {
            name: name.into(),
            init,
        }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default expression, if declared.
    pub fn init(&self) -> Option<&Node> {
        self.init.as_ref()
    }
}

impl fmt::Display for FormalParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(init) = &self.init {
            write!(f, "={}", init)?;
        }
        Ok(())
    }
}
