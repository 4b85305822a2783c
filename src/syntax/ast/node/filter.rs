//! Filter application and `is` tests.

use crate::syntax::ast::node::{array::join_nodes, Node};
use std::fmt;

/// One step of a filter chain: a name plus extra arguments.
///
/// Shared by `value | name(args)` expressions and `{% filter name %}` blocks;
/// the subject is prepended as the first argument at dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCall {
    name: Box<str>,
    args: Box<[Node]>,
    kwargs: Box<[(Box<str>, Node)]>,
}

impl FilterCall {
    /// Creates a new filter call.
    pub fn new<N>(name: N, args: Vec<Node>, kwargs: Vec<(Box<str>, Node)>) -> Self
    where
        N: Into<Box<str>>,
    {
        Self {
            name: name.into(),
            args: args.into_boxed_slice(),
            kwargs: kwargs.into_boxed_slice(),
        }
    }

    /// The filter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The extra positional arguments.
    pub fn args(&self) -> &[Node] {
        &self.args
    }

    /// The keyword arguments.
    pub fn kwargs(&self) -> &[(Box<str>, Node)] {
        &self.kwargs
    }
}

impl fmt::Display for FilterCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() || !self.kwargs.is_empty() {
            f.write_str("(")?;
            join_nodes(f, &self.args)?;
            let mut first = self.args.is_empty();
            for (name, value) in self.kwargs.iter() {
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                write!(f, "{}={}", name, value)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A `subject | filter` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpr {
    subject: Box<Node>,
    call: FilterCall,
}

impl FilterExpr {
    /// Creates a new filter expression.
    pub fn new<S>(subject: S, call: FilterCall) -> Self
    where
        S: Into<Node>,
    {
        Self {
            subject: Box::new(subject.into()),
            call,
        }
    }

    /// The filtered expression.
    pub fn subject(&self) -> &Node {
        &self.subject
    }

    /// The applied filter.
    pub fn call(&self) -> &FilterCall {
        &self.call
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.subject, self.call)
    }
}

/// A `subject is [not] test(args)` expression; always yields a boolean.
#[derive(Debug, Clone, PartialEq)]
pub struct TestExpr {
    subject: Box<Node>,
    name: Box<str>,
    args: Box<[Node]>,
    negated: bool,
}

impl TestExpr {
    /// Creates a new test expression.
    pub fn new<S, N>(subject: S, name: N, args: Vec<Node>, negated: bool) -> Self
    where
        S: Into<Node>,
        N: Into<Box<str>>,
    {
        Self {
            subject: Box::new(subject.into()),
            name: name.into(),
            args: args.into_boxed_slice(),
            negated,
        }
    }

    /// The tested expression.
    pub fn subject(&self) -> &Node {
        &self.subject
    }

    /// The test name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The extra arguments.
    pub fn args(&self) -> &[Node] {
        &self.args
    }

    /// Whether the result is inverted (`is not`).
    pub fn negated(&self) -> bool {
        self.negated
    }
}

impl fmt::Display for TestExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is ", self.subject)?;
        if self.negated {
            f.write_str("not ")?;
        }
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("(")?;
            join_nodes(f, &self.args)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}
