//! Function value representations.
//!
//! Three kinds of callable live behind the `function` value variant: plain
//! `fn` pointers for the built-in filters/tests/globals, reference-counted
//! closures for bound methods and stateful helpers (`caller`, `cycler`,
//! `joiner`), and user macros carrying their body and defining environment.

use crate::environment::Environment;
use crate::exec::Context;
use crate::syntax::ast::node::{FormalParameter, RcStatementList};
use crate::value::Value;
use crate::Result;
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// Ordered keyword arguments of a call.
pub type Keywords = IndexMap<String, Value>;

/// The signature shared by every callable: positional arguments, keyword
/// arguments in declared order, and the call-site context.
pub type NativeFunctionData = fn(&[Value], &Keywords, &mut Context) -> Result<Value>;

/// A boxed closure callable.
#[derive(Clone)]
pub struct ClosureFunction(
    pub Rc<dyn Fn(&[Value], &Keywords, &mut Context) -> Result<Value>>,
);

impl fmt::Debug for ClosureFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClosureFunction")
    }
}

/// A user-defined macro.
///
/// The captured environment is the frame the macro was defined in; invoking
/// the macro executes its body in a fresh child of that frame (static scope),
/// no matter where the call happens.
#[derive(Debug, Clone)]
pub struct Macro {
    name: Box<str>,
    parameters: Box<[FormalParameter]>,
    body: RcStatementList,
    environment: Environment,
}

impl Macro {
    /// Creates a new macro value.
    pub fn new(
        name: Box<str>,
        parameters: Box<[FormalParameter]>,
        body: RcStatementList,
        environment: Environment,
    ) -> Self {
        Self {
            name,
            parameters,
            body,
            environment,
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

    /// The defining environment.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}

/// A callable value.
#[derive(Debug, Clone)]
pub enum Function {
    /// A built-in function.
    Native(NativeFunctionData),
    /// A closure: a bound method or a stateful helper.
    Closure(ClosureFunction),
    /// A user macro.
    Macro(Macro),
}

impl Function {
    /// Wraps a Rust closure as a function value.
    pub fn closure<F>(f: F) -> Self
    where
        F: Fn(&[Value], &Keywords, &mut Context) -> Result<Value> + 'static,
    {
        Self::Closure(ClosureFunction(Rc::new(f)))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Macro(m) => write!(f, "<macro '{}'>", m.name()),
            _ => f.write_str("<function>"),
        }
    }
}
