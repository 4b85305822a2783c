//! Argument plumbing shared by built-in callables.
//!
//! Built-ins receive `(&[Value], &Keywords, &mut Context)`; these helpers
//! implement the common "positional or keyword, with defaults" lookups so the
//! filter bodies stay about their own behaviour.

use crate::builtins::function::Keywords;
use crate::exec::Context;
use crate::value::Value;
use crate::Result;

/// The filter subject: the first positional argument.
pub(crate) fn subject<'a>(args: &'a [Value], context: &Context, name: &str) -> Result<&'a Value> {
    match args.first() {
        Some(value) => Ok(value),
        None => context.throw_type_error(format!("'{}' needs a subject value", name)),
    }
}

/// Looks an argument up positionally, falling back to its keyword name.
pub(crate) fn arg_or_kwarg<'a>(
    args: &'a [Value],
    kwargs: &'a Keywords,
    index: usize,
    name: &str,
) -> Option<&'a Value> {
    args.get(index).or_else(|| kwargs.get(name))
}

/// An optional non-negative count argument; `none` counts as absent.
pub(crate) fn optional_count(
    args: &[Value],
    kwargs: &Keywords,
    index: usize,
    name: &str,
    context: &Context,
) -> Result<Option<usize>> {
    match arg_or_kwarg(args, kwargs, index, name) {
        None | Some(Value::Null) | Some(Value::Undefined) => Ok(None),
        Some(Value::Integer(i)) if *i >= 0 => Ok(Some(*i as usize)),
        Some(Value::Integer(_)) => {
            context.throw_range_error(format!("'{}' must not be negative", name))
        }
        Some(other) => context.throw_type_error(format!(
            "'{}' must be an integer, not {}",
            name,
            other.get_type()
        )),
    }
}

/// An optional integer argument; `none` counts as absent.
pub(crate) fn optional_integer(
    args: &[Value],
    kwargs: &Keywords,
    index: usize,
    name: &str,
    context: &Context,
) -> Result<Option<i64>> {
    match arg_or_kwarg(args, kwargs, index, name) {
        None | Some(Value::Null) | Some(Value::Undefined) => Ok(None),
        Some(Value::Integer(i)) => Ok(Some(*i)),
        Some(other) => context.throw_type_error(format!(
            "'{}' must be an integer, not {}",
            name,
            other.get_type()
        )),
    }
}

/// An optional string argument; `none` counts as absent.
pub(crate) fn optional_string(
    args: &[Value],
    kwargs: &Keywords,
    index: usize,
    name: &str,
    context: &Context,
) -> Result<Option<String>> {
    match arg_or_kwarg(args, kwargs, index, name) {
        None | Some(Value::Null) | Some(Value::Undefined) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.to_string())),
        Some(other) => context.throw_type_error(format!(
            "'{}' must be a string, not {}",
            name,
            other.get_type()
        )),
    }
}

/// A boolean option resolved by truthiness, with a default when absent.
pub(crate) fn boolean_option(
    args: &[Value],
    kwargs: &Keywords,
    index: usize,
    name: &str,
    default: bool,
) -> bool {
    arg_or_kwarg(args, kwargs, index, name)
        .map(Value::to_boolean)
        .unwrap_or(default)
}
