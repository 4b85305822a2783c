//! Scoped name resolution.
//!
//! Bindings live in a chain of frames ([`Scope`]): the root frame holds the
//! built-in globals, and child frames are created per render, per `for` body,
//! per macro invocation and per `call` block body. Lookups walk the chain and
//! never fail; an unbound name is the first-class `undefined` value.

pub mod lexical_environment;
pub mod scope;

pub use lexical_environment::LexicalEnvironment;
pub use scope::{Environment, Scope};
