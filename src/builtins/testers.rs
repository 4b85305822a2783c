//! The built-in test registry (`value is test`).
//!
//! Tests are predicates; the interpreter coerces their result to a boolean
//! and applies `is not` negation. Like filters, an environment binding of the
//! same name shadows the registry.

use crate::builtins::args::subject;
use crate::builtins::function::{Keywords, NativeFunctionData};
use crate::exec::Context;
use crate::value::Value;
use crate::Result;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

static TESTS: Lazy<FxHashMap<&'static str, NativeFunctionData>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    let mut add = |name: &'static str, f: NativeFunctionData| {
        m.insert(name, f);
    };

    add("boolean", boolean);
    add("callable", callable);
    add("defined", defined);
    add("divisibleby", divisibleby);
    add("eq", eq);
    add("equalto", eq);
    add("==", eq);
    add("escaped", escaped);
    add("even", even);
    add("false", false_);
    add("filter", filter);
    add("float", float);
    add("ge", ge);
    add(">=", ge);
    add("gt", gt);
    add("greaterthan", gt);
    add(">", gt);
    add("in", in_);
    add("integer", integer);
    add("iterable", iterable);
    add("le", le);
    add("<=", le);
    add("lower", lower);
    add("lt", lt);
    add("lessthan", lt);
    add("<", lt);
    add("mapping", mapping);
    add("ne", ne);
    add("!=", ne);
    add("none", none);
    add("number", number);
    add("odd", odd);
    add("sameas", sameas);
    add("sequence", sequence);
    add("string", string);
    add("test", test);
    add("true", true_);
    add("undefined", undefined);
    add("upper", upper);

    m
});

/// Looks a built-in test up by name.
pub fn lookup(name: &str) -> Option<NativeFunctionData> {
    TESTS.get(name).copied()
}

/// Checks whether a built-in test with this name exists (the `test` test).
pub fn contains(name: &str) -> bool {
    TESTS.contains_key(name)
}

fn defined(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(!subject(args, context, "defined")?.is_undefined()))
}

fn undefined(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(subject(args, context, "undefined")?.is_undefined()))
}

fn none(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(subject(args, context, "none")?.is_null()))
}

fn string(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(subject(args, context, "string")?.is_string()))
}

fn number(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(subject(args, context, "number")?.is_number()))
}

fn integer(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(matches!(
        subject(args, context, "integer")?,
        Value::Integer(_)
    )))
}

fn float(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(matches!(
        subject(args, context, "float")?,
        Value::Float(_)
    )))
}

fn boolean(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(matches!(
        subject(args, context, "boolean")?,
        Value::Boolean(_)
    )))
}

fn iterable(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(matches!(
        subject(args, context, "iterable")?,
        Value::String(_) | Value::Array(_) | Value::Object(_)
    )))
}

fn sequence(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(matches!(
        subject(args, context, "sequence")?,
        Value::String(_) | Value::Array(_) | Value::Object(_)
    )))
}

fn mapping(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(matches!(
        subject(args, context, "mapping")?,
        Value::Object(_)
    )))
}

fn callable(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(subject(args, context, "callable")?.is_function()))
}

fn parity(args: &[Value], context: &mut Context, name: &str, want: i64) -> Result<Value> {
    match subject(args, context, name)? {
        Value::Integer(i) => Ok(Value::boolean(i.rem_euclid(2) == want)),
        other => {
            context.throw_type_error(format!("'{}' requires an integer, not {}", name, other.get_type()))
        }
    }
}

fn even(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    parity(args, context, "even", 0)
}

fn odd(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    parity(args, context, "odd", 1)
}

fn divisibleby(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let value = match subject(args, context, "divisibleby")? {
        Value::Integer(i) => *i,
        other => {
            return context.throw_type_error(format!(
                "'divisibleby' requires an integer, not {}",
                other.get_type()
            ))
        }
    };
    match args.get(1) {
        Some(Value::Integer(0)) => context.throw_range_error("'divisibleby' divisor cannot be zero"),
        Some(Value::Integer(n)) => Ok(Value::boolean(value % n == 0)),
        _ => context.throw_type_error("'divisibleby' needs an integer argument"),
    }
}

fn lower(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    match subject(args, context, "lower")? {
        Value::String(s) => Ok(Value::boolean(
            !s.chars().any(|c| c.is_uppercase()),
        )),
        _ => Ok(Value::boolean(false)),
    }
}

fn upper(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    match subject(args, context, "upper")? {
        Value::String(s) => Ok(Value::boolean(
            !s.chars().any(|c| c.is_lowercase()),
        )),
        _ => Ok(Value::boolean(false)),
    }
}

fn true_(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(matches!(
        subject(args, context, "true")?,
        Value::Boolean(true)
    )))
}

fn false_(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::boolean(matches!(
        subject(args, context, "false")?,
        Value::Boolean(false)
    )))
}

/// There is no markup wrapper in this core, so nothing is ever escaped.
fn escaped(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    subject(args, context, "escaped")?;
    Ok(Value::boolean(false))
}

fn filter(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    match subject(args, context, "filter")? {
        Value::String(name) => Ok(Value::boolean(crate::builtins::filters::contains(name))),
        _ => Ok(Value::boolean(false)),
    }
}

fn test(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    match subject(args, context, "test")? {
        Value::String(name) => Ok(Value::boolean(contains(name))),
        _ => Ok(Value::boolean(false)),
    }
}

fn sameas(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "sameas")?;
    match args.get(1) {
        Some(other) => Ok(Value::boolean(value.same_as(other))),
        None => context.throw_type_error("'sameas' needs a comparison value"),
    }
}

fn in_(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "in")?;
    match args.get(1) {
        Some(container) => Ok(Value::boolean(container.contains(value)?)),
        None => context.throw_type_error("'in' needs a container argument"),
    }
}

fn compare_test(
    args: &[Value],
    context: &mut Context,
    name: &str,
    accept: fn(Ordering) -> bool,
) -> Result<Value> {
    let value = subject(args, context, name)?;
    match args.get(1) {
        Some(other) => Ok(Value::boolean(accept(value.compare(other)?))),
        None => context.throw_type_error(format!("'{}' needs a comparison value", name)),
    }
}

fn eq(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "eq")?;
    match args.get(1) {
        Some(other) => Ok(Value::boolean(value == other)),
        None => context.throw_type_error("'eq' needs a comparison value"),
    }
}

fn ne(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "ne")?;
    match args.get(1) {
        Some(other) => Ok(Value::boolean(value != other)),
        None => context.throw_type_error("'ne' needs a comparison value"),
    }
}

fn gt(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    compare_test(args, context, "gt", |o| o == Ordering::Greater)
}

fn ge(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    compare_test(args, context, "ge", |o| o != Ordering::Less)
}

fn lt(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    compare_test(args, context, "lt", |o| o == Ordering::Less)
}

fn le(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    compare_test(args, context, "le", |o| o != Ordering::Greater)
}
