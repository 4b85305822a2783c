//! Macro definitions, `call` blocks and `filter` blocks.

use crate::syntax::ast::node::{
    declaration::FormalParameter, filter::FilterCall, Call, RcStatementList, StatementList,
};
use std::fmt;

/// A `{% macro name(params) %}` definition.
///
/// Defining a macro installs a callable under its name in the current frame.
/// The callable renders the body in a child of the *defining* environment
/// (static scope) and returns the rendered string.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroDecl {
    name: Box<str>,
    parameters: Box<[FormalParameter]>,
    body: RcStatementList,
}

impl MacroDecl {
    /// Creates a new macro declaration.
    pub fn new<N>(name: N, parameters: Vec<FormalParameter>, body: StatementList) -> Self
    where
        N: Into<Box<str>>,
    {
        Self {
            name: name.into(),
            parameters: parameters.into_boxed_slice(),
            body: body.into(),
        }
    }

    /// The macro name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared parameters.
    pub fn parameters(&self) -> &[FormalParameter] {
        &self.parameters
    }

    /// The macro body.
    pub fn body(&self) -> &RcStatementList {
        &self.body
    }
}

impl fmt::Display for MacroDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{% macro {}(", self.name)?;
        let mut first = true;
        for parameter in self.parameters.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            fmt::Display::fmt(parameter, f)?;
        }
        write!(f, ") %}}{}{{% endmacro %}}", self.body)
    }
}

/// A `{% call [(params)] callee(args) %}` block.
///
/// Invokes the callee with a `caller` closure bound; the callee reaches the
/// block body by calling `caller(...)`, whose arguments bind to `params`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallBlock {
    caller_parameters: Box<[Box<str>]>,
    call: Call,
    body: RcStatementList,
}

impl CallBlock {
    /// Creates a new `call` block.
    pub fn new(caller_parameters: Vec<Box<str>>, call: Call, body: StatementList) -> Self {
        Self {
            caller_parameters: caller_parameters.into_boxed_slice(),
            call,
            body: body.into(),
        }
    }

    /// The parameters of the `caller` closure.
    pub fn caller_parameters(&self) -> &[Box<str>] {
        &self.caller_parameters
    }

    /// The invoked call.
    pub fn call(&self) -> &Call {
        &self.call
    }

    /// The block body rendered by `caller`.
    pub fn body(&self) -> &RcStatementList {
        &self.body
    }
}

impl fmt::Display for CallBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{% call")?;
        if !self.caller_parameters.is_empty() {
            f.write_str("(")?;
            let mut first = true;
            for parameter in self.caller_parameters.iter() {
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                f.write_str(parameter)?;
            }
            f.write_str(")")?;
        }
        write!(f, " {} %}}{}{{% endcall %}}", self.call, self.body)
    }
}

/// A `{% filter name | name(args) %}` block.
///
/// Renders the body to a string, then applies each filter of the chain in
/// order with the accumulated string as subject, and writes the result.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBlock {
    filters: Box<[FilterCall]>,
    body: StatementList,
}

impl FilterBlock {
    /// Creates a new `filter` block.
    pub fn new(filters: Vec<FilterCall>, body: StatementList) -> Self {
        Self {
            filters: filters.into_boxed_slice(),
            body,
        }
    }

    /// The applied filter chain.
    pub fn filters(&self) -> &[FilterCall] {
        &self.filters
    }

    /// The block body.
    pub fn body(&self) -> &StatementList {
        &self.body
    }
}

impl fmt::Display for FilterBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{% filter ")?;
        let mut first = true;
        for filter in self.filters.iter() {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            fmt::Display::fmt(filter, f)?;
        }
        write!(f, " %}}{}{{% endfilter %}}", self.body)
    }
}
