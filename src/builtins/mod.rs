//! Built-ins live here: the filter and test registries, the global callables
//! and the function value representations.
//!
//! The registries are static name tables consulted *after* the environment,
//! so a template (or host) binding of the same name shadows a built-in.

pub(crate) mod args;
pub mod filters;
pub mod function;
pub mod globals;
pub mod testers;

pub use function::{Function, Keywords, NativeFunctionData};

use crate::environment::Environment;

/// Installs the built-in globals into the root scope.
pub fn init(scope: &Environment) {
    globals::init(scope);
}
