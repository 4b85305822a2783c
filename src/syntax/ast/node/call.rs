//! Call expressions and argument spreading.

use crate::syntax::ast::node::{array::join_nodes, Node};
use std::fmt;

/// A call `callee(a, b, *rest, key=value)`.
///
/// Positional arguments evaluate left to right, then keyword arguments in
/// declared order. The callee must evaluate to a function value.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    expr: Box<Node>,
    args: Box<[Node]>,
    kwargs: Box<[(Box<str>, Node)]>,
}

impl Call {
    /// Creates a new call node.
    pub fn new<E>(expr: E, args: Vec<Node>, kwargs: Vec<(Box<str>, Node)>) -> Self
    where
        E: Into<Node>,
    {
        Self {
            expr: Box::new(expr.into()),
            args: args.into_boxed_slice(),
            kwargs: kwargs.into_boxed_slice(),
        }
    }

    /// The callee expression.
    pub fn expr(&self) -> &Node {
        &self.expr
    }

    /// The positional arguments; a [`Node::Spread`] element unpacks an array.
    pub fn args(&self) -> &[Node] {
        &self.args
    }

    /// The keyword arguments in declared order.
    pub fn kwargs(&self) -> &[(Box<str>, Node)] {
        &self.kwargs
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.expr)?;
        join_nodes(f, &self.args)?;
        let mut first = self.args.is_empty();
        for (name, value) in self.kwargs.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}={}", name, value)?;
        }
        f.write_str(")")
    }
}

/// The `*iterable` spread marker inside an argument list.
///
/// Valid only as a positional argument; evaluating it anywhere else is a
/// runtime error.
#[derive(Debug, Clone, PartialEq)]
pub struct Spread {
    target: Box<Node>,
}

impl Spread {
    /// Creates a new spread node.
    pub fn new<T>(target: T) -> Self
    where
        T: Into<Node>,
    {
        Self {
            target: Box::new(target.into()),
        }
    }

    /// The spread expression; must evaluate to an array.
    pub fn target(&self) -> &Node {
        &self.target
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{}", self.target)
    }
}
