//! The ordered-map object value.

use super::Value;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Reference-counted handle to an [`Object`].
pub type RcObject = Rc<Object>;

/// Distinguishes plain mappings from `namespace()` objects.
///
/// Ordinary objects are never mutated after construction, which gives them
/// value semantics even though they are shared behind an `Rc`. Namespaces are
/// the one kind of value with reference semantics: `{% set ns.attr = x %}`
/// writes through every handle to the same namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// A plain mapping literal or converted host map.
    Ordinary,
    /// A `namespace()` object accepting attribute assignment.
    Namespace,
}

/// An insertion-ordered mapping from string keys to values.
#[derive(Debug)]
pub struct Object {
    kind: ObjectKind,
    properties: RefCell<IndexMap<String, Value>>,
}

impl Object {
    /// Creates an empty ordinary object.
    pub fn ordinary() -> Self {
        Self::with_properties(IndexMap::new())
    }

    /// Creates an ordinary object from the given properties.
    pub fn with_properties(properties: IndexMap<String, Value>) -> Self {
        Self {
            kind: ObjectKind::Ordinary,
            properties: RefCell::new(properties),
        }
    }

    /// Creates a namespace object from the given properties.
    pub fn namespace(properties: IndexMap<String, Value>) -> Self {
        Self {
            kind: ObjectKind::Namespace,
            properties: RefCell::new(properties),
        }
    }

    /// Gets the object kind.
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Checks whether this object accepts attribute assignment.
    pub fn is_namespace(&self) -> bool {
        self.kind == ObjectKind::Namespace
    }

    /// Looks a property up by key.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.properties.borrow().get(key).cloned()
    }

    /// Checks whether the given key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.borrow().contains_key(key)
    }

    /// Inserts or replaces a property.
    ///
    /// Insertion order of first assignment is preserved; replacing an existing
    /// key keeps its original position.
    pub fn insert(&self, key: String, value: Value) {
        self.properties.borrow_mut().insert(key, value);
    }

    /// The number of properties.
    pub fn len(&self) -> usize {
        self.properties.borrow().len()
    }

    /// Checks whether the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.borrow().is_empty()
    }

    /// Snapshot of the keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.properties.borrow().keys().cloned().collect()
    }

    /// Snapshot of the `(key, value)` pairs in insertion order.
    ///
    /// Iteration always goes through a snapshot so a loop body may mutate a
    /// namespace it is iterating without aliasing the borrow.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.properties
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Structural equality over the property maps.
    pub(crate) fn properties_eq(&self, other: &Self) -> bool {
        *self.properties.borrow() == *other.properties.borrow()
    }
}

impl From<IndexMap<String, Value>> for Object {
    fn from(properties: IndexMap<String, Value>) -> Self {
        Self::with_properties(properties)
    }
}
