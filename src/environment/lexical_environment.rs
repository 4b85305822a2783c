//! The interpreter's view of the scope chain.
//!
//! Holds the frame execution currently runs in. Entering a `for` body or a
//! `call` block pushes a child frame; invoking a macro swaps to a frame rooted
//! in the macro's defining environment and swaps back afterwards.

use super::scope::{Environment, Scope};
use crate::value::Value;

/// The mutable current-frame handle used during a render.
#[derive(Debug)]
pub struct LexicalEnvironment {
    current: Environment,
}

impl LexicalEnvironment {
    /// Creates an environment positioned at the given frame.
    pub fn new(root: Environment) -> Self {
        Self { current: root }
    }

    /// The frame execution currently runs in.
    pub fn current(&self) -> &Environment {
        &self.current
    }

    /// Enters a fresh child frame.
    pub fn push_scope(&mut self) {
        self.current = Scope::child(self.current.clone());
    }

    /// Leaves the current frame.
    ///
    /// # Panics
    ///
    /// Panics if called on the root frame; scope pushes and pops are always
    /// paired by the interpreter.
    pub fn pop_scope(&mut self) {
        let parent = self
            .current
            .parent()
            .expect("cannot pop the root scope")
            .clone();
        self.current = parent;
    }

    /// Swaps the current frame for `environment`, returning the previous one.
    ///
    /// Used by macro invocation, which executes in a frame rooted at the
    /// macro's defining environment rather than the call site.
    pub fn swap(&mut self, environment: Environment) -> Environment {
        std::mem::replace(&mut self.current, environment)
    }

    /// Resolves a name; unbound names are `undefined`.
    pub fn get_binding_value(&self, name: &str) -> Value {
        self.current.lookup(name)
    }

    /// Binds a name in the current frame.
    pub fn create_binding(&self, name: &str, value: Value) {
        self.current.define(name, value);
    }
}
