//! Execution of the template AST.
//!
//! The interpreter walks the tree: statements run for their effects,
//! expressions produce values, and a statement list writes each expression's
//! display form into the active output buffer. Output buffers form a stack so
//! macro bodies, `set` blocks, `call` bodies and `filter` blocks can capture
//! their output as a string.

#[cfg(test)]
mod tests;

mod call;
mod declaration;
mod expression;
mod field;
mod iteration;
mod macro_def;
mod operator;

pub(crate) use field::{get_attribute, index_sequence};

use crate::builtins::function::{Function, Keywords};
use crate::error::RuntimeError;
use crate::realm::Realm;
use crate::syntax::ast::node::StatementList;
use crate::syntax::ast::Node;
use crate::value::Value;
use crate::Result;
use std::fmt::Write;

/// A tree node that can be executed against a context.
pub trait Executable {
    /// Runs this node, producing its value.
    ///
    /// Statements produce `undefined`; their effect is on the context.
    fn run(&self, context: &mut Context) -> Result<Value>;
}

/// Where control currently flows.
///
/// `break` and `continue` do not unwind; they set the state, statement lists
/// stop executing while it is set, and the innermost `for` loop consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InterpreterState {
    /// Normal execution.
    Executing,
    /// A `break` is propagating to the innermost loop.
    Break,
    /// A `continue` is propagating to the innermost loop.
    Continue,
}

/// The rendering context: environment chain, control-flow state and the
/// output buffer stack.
#[derive(Debug)]
pub struct Context {
    /// Realm holds the scope chain rooted at the built-in globals.
    realm: Realm,
    /// The current control-flow state.
    state: InterpreterState,
    /// A break/continue raised inside a `caller()` body, parked while the
    /// enclosing macro finishes so it can resume bubbling at the call site.
    deferred_state: InterpreterState,
    /// Output buffers; the bottom one is the render result, the rest are
    /// captures in progress.
    buffers: Vec<String>,
}

impl Context {
    /// Creates a context over the given realm.
    pub fn new(realm: Realm) -> Self {
        Self {
            realm,
            state: InterpreterState::Executing,
            deferred_state: InterpreterState::Executing,
            buffers: vec![String::new()],
        }
    }

    /// Gets the realm.
    pub fn realm(&self) -> &Realm {
        &self.realm
    }

    /// Gets a mutable reference to the realm.
    pub fn realm_mut(&mut self) -> &mut Realm {
        &mut self.realm
    }

    pub(crate) fn get_current_state(&self) -> InterpreterState {
        self.state
    }

    pub(crate) fn set_current_state(&mut self, state: InterpreterState) {
        self.state = state;
    }

    /// Parks a loop signal raised inside a `caller()` body.
    ///
    /// The block body of a `{% call %}` is lexical content of the call site,
    /// so its `break`/`continue` targets the loop enclosing the call block —
    /// not the macro body the closure returns into. The signal is held here
    /// until [`take_deferred_state`](Self::take_deferred_state) re-raises it
    /// once the macro call has returned.
    pub(crate) fn defer_state(&mut self, state: InterpreterState) {
        self.deferred_state = state;
    }

    /// Takes a parked loop signal, leaving `Executing` behind.
    pub(crate) fn take_deferred_state(&mut self) -> InterpreterState {
        std::mem::replace(&mut self.deferred_state, InterpreterState::Executing)
    }

    /// Appends a string fragment to the active output buffer.
    pub(crate) fn write_str(&mut self, s: &str) {
        self.buffers
            .last_mut()
            .expect("the buffer stack is never empty")
            .push_str(s);
    }

    /// Appends a value's display form to the active output buffer.
    pub(crate) fn write_value(&mut self, value: &Value) {
        let buffer = self
            .buffers
            .last_mut()
            .expect("the buffer stack is never empty");
        // Writing into a String cannot fail.
        let _ = write!(buffer, "{}", value);
    }

    /// Starts capturing output into a fresh buffer.
    pub(crate) fn push_buffer(&mut self) {
        self.buffers.push(String::new());
    }

    /// Stops the innermost capture and returns it.
    pub(crate) fn pop_buffer(&mut self) -> String {
        debug_assert!(self.buffers.len() > 1, "cannot pop the render buffer");
        self.buffers.pop().expect("the buffer stack is never empty")
    }

    /// Consumes the context, returning the rendered output.
    pub(crate) fn into_output(mut self) -> String {
        self.buffers.swap_remove(0)
    }

    /// Builds a type-mismatch runtime error.
    pub fn throw_type_error<T, M>(&self, message: M) -> Result<T>
    where
        M: Into<Box<str>>,
    {
        Err(RuntimeError::new(message).into())
    }

    /// Builds a value-range runtime error.
    pub fn throw_range_error<T, M>(&self, message: M) -> Result<T>
    where
        M: Into<Box<str>>,
    {
        Err(RuntimeError::new(message).into())
    }

    /// Calls a callable value.
    pub fn call(&mut self, function: &Value, args: &[Value], kwargs: &Keywords) -> Result<Value> {
        match function {
            Value::Function(f) => match f.as_ref() {
                Function::Native(native) => native(args, kwargs, self),
                Function::Closure(closure) => (closure.0)(args, kwargs, self),
                Function::Macro(m) => {
                    let m = m.clone();
                    self.call_macro(&m, args, kwargs, None)
                }
            },
            other => self.throw_type_error(format!("{} is not callable", other.get_type())),
        }
    }
}

impl Executable for StatementList {
    fn run(&self, context: &mut Context) -> Result<Value> {
        for item in self.items() {
            if item.is_statement() {
                item.run(context)?;
            } else {
                let value = item.run(context)?;
                context.write_value(&value);
            }
            // A pending break/continue stops the rest of this list.
            if context.get_current_state() != InterpreterState::Executing {
                break;
            }
        }
        Ok(Value::undefined())
    }
}

impl Executable for Node {
    fn run(&self, context: &mut Context) -> Result<Value> {
        match self {
            Self::Text(node) => node.run(context),
            Self::Const(node) => node.run(context),
            Self::Identifier(node) => node.run(context),
            Self::ArrayDecl(node) => node.run(context),
            Self::ObjectDecl(node) => node.run(context),
            Self::BinOp(node) => node.run(context),
            Self::UnaryOp(node) => node.run(context),
            Self::ConditionalOp(node) => node.run(context),
            Self::Call(node) => node.run(context),
            Self::Spread(node) => node.run(context),
            Self::GetConstField(node) => node.run(context),
            Self::GetField(node) => node.run(context),
            Self::Slice(node) => node.run(context),
            Self::FilterExpr(node) => node.run(context),
            Self::TestExpr(node) => node.run(context),
            Self::If(node) => node.run(context),
            Self::ForLoop(node) => node.run(context),
            Self::Break(node) => node.run(context),
            Self::Continue(node) => node.run(context),
            Self::Set(node) => node.run(context),
            Self::MacroDecl(node) => node.run(context),
            Self::CallBlock(node) => node.run(context),
            Self::FilterBlock(node) => node.run(context),
            Self::StatementList(node) => node.run(context),
        }
    }
}
