//! Numeric filters.

use crate::builtins::args::{arg_or_kwarg, boolean_option, optional_integer, optional_string, subject};
use crate::builtins::function::Keywords;
use crate::exec::Context;
use crate::value::Value;
use crate::Result;
use num_traits::ToPrimitive;

pub(super) fn abs(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    match subject(args, context, "abs")? {
        Value::Integer(i) => match i.checked_abs() {
            Some(n) => Ok(Value::integer(n)),
            None => context.throw_range_error("integer overflow in abs()"),
        },
        Value::Float(f) => Ok(Value::float(f.abs())),
        other => context.throw_type_error(format!("abs() requires a number, not {}", other.get_type())),
    }
}

pub(super) fn round(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let value = match subject(args, context, "round")?.as_number() {
        Some(value) => value,
        None => {
            return context.throw_type_error("round() requires a number");
        }
    };
    let precision = optional_integer(args, kwargs, 1, "precision", context)?.unwrap_or(0);
    let method =
        optional_string(args, kwargs, 2, "method", context)?.unwrap_or_else(|| "common".to_string());

    let precision = match precision.to_i32() {
        Some(p) => p,
        None => return context.throw_range_error("round() precision out of range"),
    };
    let factor = 10f64.powi(precision);
    let scaled = value * factor;
    let rounded = match method.as_str() {
        "common" => scaled.round(),
        "ceil" => scaled.ceil(),
        "floor" => scaled.floor(),
        _ => {
            return context.throw_range_error(format!(
                "round() method must be 'common', 'ceil' or 'floor', not '{}'",
                method
            ))
        }
    };
    Ok(Value::float(rounded / factor))
}

pub(super) fn int(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let default = arg_or_kwarg(args, kwargs, 1, "default")
        .cloned()
        .unwrap_or(Value::Integer(0));
    let base = optional_integer(args, kwargs, 2, "base", context)?.unwrap_or(10);
    if !(2..=36).contains(&base) {
        return context.throw_range_error("int() base must be between 2 and 36");
    }

    Ok(match subject(args, context, "int")? {
        Value::Integer(i) => Value::integer(*i),
        Value::Float(f) => Value::integer(*f as i64),
        Value::Boolean(b) => Value::integer(i64::from(*b)),
        Value::String(s) => parse_int(s.trim(), base as u32)
            .map(Value::integer)
            .unwrap_or(default),
        _ => default,
    })
}

/// Parses an integer string, accepting a base prefix and, in base 10, a float
/// spelling that truncates.
fn parse_int(s: &str, base: u32) -> Option<i64> {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits = match base {
        16 => digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")).unwrap_or(digits),
        8 => digits.strip_prefix("0o").or_else(|| digits.strip_prefix("0O")).unwrap_or(digits),
        2 => digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")).unwrap_or(digits),
        _ => digits,
    };
    if let Ok(n) = i64::from_str_radix(digits, base) {
        return Some(sign * n);
    }
    if base == 10 {
        if let Ok(f) = digits.parse::<f64>() {
            return Some(sign * (f as i64));
        }
    }
    None
}

pub(super) fn float(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let default = arg_or_kwarg(args, kwargs, 1, "default")
        .cloned()
        .unwrap_or(Value::Float(0.0));
    Ok(match subject(args, context, "float")? {
        Value::Integer(i) => Value::float(*i as f64),
        Value::Float(f) => Value::float(*f),
        Value::Boolean(b) => Value::float(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::float)
            .unwrap_or(default),
        _ => default,
    })
}

pub(super) fn filesizeformat(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let bytes = match subject(args, context, "filesizeformat")?.as_number() {
        Some(bytes) => bytes,
        None => {
            return context.throw_type_error("filesizeformat() requires a number");
        }
    };
    let binary = boolean_option(args, kwargs, 1, "binary", false);

    let base: f64 = if binary { 1024.0 } else { 1000.0 };
    let units: [&str; 8] = if binary {
        ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"]
    } else {
        ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"]
    };

    if (bytes - 1.0).abs() < f64::EPSILON {
        return Ok(Value::string("1 Byte"));
    }
    if bytes < base {
        return Ok(Value::string(format!("{} Bytes", bytes as i64)));
    }
    for (i, unit) in units.iter().enumerate() {
        let limit = base.powi(i as i32 + 2);
        if bytes < limit {
            return Ok(Value::string(format!(
                "{:.1} {}",
                base * bytes / limit,
                unit
            )));
        }
    }
    let last = units[units.len() - 1];
    Ok(Value::string(format!(
        "{:.1} {}",
        bytes / base.powi(units.len() as i32),
        last
    )))
}
