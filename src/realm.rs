//! A realm is the root of everything one render can see: the scope chain
//! whose outermost frame carries the built-in globals.
//!
//! Realms are cheap to create and never shared between renders, which is what
//! keeps `set` and `macro` effects from leaking across renders of the same
//! template.

use crate::builtins;
use crate::environment::{LexicalEnvironment, Scope};

/// Representation of a realm.
#[derive(Debug)]
pub struct Realm {
    /// The scope chain, rooted at the global frame.
    pub environment: LexicalEnvironment,
}

impl Realm {
    /// Creates a realm with the built-in globals installed.
    pub fn create() -> Self {
        let global = Scope::root();
        builtins::init(&global);
        Self {
            environment: LexicalEnvironment::new(global),
        }
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::create()
    }
}
