//! A single frame in the environment chain.

use crate::builtins::function::Function;
use crate::value::Value;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Frames are shared: a macro closure keeps its defining frame alive past the
/// block that created it.
pub type Environment = Rc<Scope>;

/// One lexical frame: an insertion-ordered name table plus the macros defined
/// in this frame.
///
/// The two tables are separate so a plain `set` can shadow a macro without
/// destroying its definition; lookup consults bindings first.
#[derive(Debug)]
pub struct Scope {
    bindings: RefCell<IndexMap<String, Value>>,
    macros: RefCell<IndexMap<String, Rc<Function>>>,
    parent: Option<Environment>,
}

impl Scope {
    /// Creates a parentless root frame.
    pub fn root() -> Environment {
        Rc::new(Self {
            bindings: RefCell::new(IndexMap::new()),
            macros: RefCell::new(IndexMap::new()),
            parent: None,
        })
    }

    /// Creates a child frame of `parent`.
    pub fn child(parent: Environment) -> Environment {
        Rc::new(Self {
            bindings: RefCell::new(IndexMap::new()),
            macros: RefCell::new(IndexMap::new()),
            parent: Some(parent),
        })
    }

    /// Gets a name from this frame only.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.macros
            .borrow()
            .get(name)
            .map(|f| Value::Function(f.clone()))
    }

    /// Resolves a name against this frame and its ancestors.
    ///
    /// Never fails; an unbound name is `undefined`.
    pub fn lookup(&self, name: &str) -> Value {
        let mut scope = self;
        loop {
            if let Some(value) = scope.get(name) {
                return value;
            }
            match &scope.parent {
                Some(parent) => scope = parent,
                None => return Value::undefined(),
            }
        }
    }

    /// Binds a name in this frame, shadowing any outer binding.
    ///
    /// Re-binding keeps the name's original position, so iteration order over
    /// a frame is the order of first assignment.
    pub fn define(&self, name: &str, value: Value) {
        self.bindings.borrow_mut().insert(name.to_string(), value);
    }

    /// Records a macro definition in this frame.
    pub fn define_macro(&self, name: &str, function: Rc<Function>) {
        self.macros.borrow_mut().insert(name.to_string(), function);
    }

    /// The parent frame, if any.
    pub fn parent(&self) -> Option<&Environment> {
        self.parent.as_ref()
    }
}
