//! Member access, computed indexing and slicing.

use super::{Context, Executable};
use crate::builtins::args::{arg_or_kwarg, optional_count};
use crate::builtins::filters::string::{py_replace, title_case};
use crate::builtins::function::Function;
use crate::syntax::ast::node::{GetConstField, GetField, Slice};
use crate::value::{RcObject, RcString, Value};
use crate::Result;

impl Executable for GetConstField {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let obj = self.obj().run(context)?;
        Ok(get_attribute(&obj, self.field()))
    }
}

/// Resolves dotted access. A miss is `undefined`, never an error, so chains
/// over partially-missing data stay renderable.
pub(crate) fn get_attribute(obj: &Value, field: &str) -> Value {
    match obj {
        Value::Object(object) => object
            .get(field)
            .or_else(|| object_method(object, field))
            .unwrap_or_default(),
        Value::String(s) => string_method(s, field).unwrap_or_default(),
        _ => Value::undefined(),
    }
}

/// The built-in methods exposed on every object value.
fn object_method(object: &RcObject, name: &str) -> Option<Value> {
    match name {
        "items" => {
            let object = object.clone();
            Some(Value::function(Function::closure(move |_, _, _| {
                let pairs = object
                    .entries()
                    .into_iter()
                    .map(|(k, v)| Value::array(vec![Value::string(k), v]))
                    .collect();
                Ok(Value::array(pairs))
            })))
        }
        "get" => {
            let object = object.clone();
            Some(Value::function(Function::closure(move |args, kwargs, context| {
                let key = match arg_or_kwarg(args, kwargs, 0, "key") {
                    Some(Value::String(key)) => key.clone(),
                    Some(other) => {
                        return context.throw_type_error(format!(
                            "get() key must be a string, not {}",
                            other.get_type()
                        ))
                    }
                    None => return context.throw_type_error("get() takes a key argument"),
                };
                Ok(arg_or_kwarg(args, kwargs, 1, "default")
                    .cloned()
                    .map_or_else(
                        || object.get(&key).unwrap_or(Value::Null),
                        |default| object.get(&key).unwrap_or(default),
                    ))
            })))
        }
        _ => None,
    }
}

/// The fixed method set exposed on string values.
fn string_method(subject: &RcString, name: &str) -> Option<Value> {
    let s = subject.clone();
    let function = match name {
        "upper" => Function::closure(move |_, _, _| Ok(Value::string(s.to_uppercase()))),
        "lower" => Function::closure(move |_, _, _| Ok(Value::string(s.to_lowercase()))),
        "title" => Function::closure(move |_, _, _| Ok(Value::string(title_case(&s)))),
        "strip" => Function::closure(move |_, _, _| Ok(Value::string(s.trim()))),
        "lstrip" => Function::closure(move |_, _, _| Ok(Value::string(s.trim_start()))),
        "rstrip" => Function::closure(move |_, _, _| Ok(Value::string(s.trim_end()))),
        "split" => Function::closure(move |args, kwargs, context| {
            let limit = optional_count(args, kwargs, 1, "limit", context)?;
            let parts: Vec<Value> = match arg_or_kwarg(args, kwargs, 0, "sep") {
                None | Some(Value::Null) => match limit {
                    None => s.split_whitespace().map(Value::from).collect(),
                    Some(limit) => {
                        // A bounded whitespace split keeps the tail intact.
                        let mut parts: Vec<Value> = Vec::new();
                        let mut rest = s.trim_start();
                        while parts.len() < limit && !rest.is_empty() {
                            match rest.find(char::is_whitespace) {
                                Some(at) => {
                                    parts.push(Value::string(&rest[..at]));
                                    rest = rest[at..].trim_start();
                                }
                                None => break,
                            }
                        }
                        if !rest.is_empty() {
                            parts.push(Value::string(rest.trim_end()));
                        }
                        parts
                    }
                },
                Some(Value::String(sep)) if !sep.is_empty() => match limit {
                    None => s.split(sep.as_str()).map(Value::from).collect(),
                    Some(limit) => s.splitn(limit + 1, sep.as_str()).map(Value::from).collect(),
                },
                Some(other) => {
                    return context.throw_type_error(format!(
                        "split() separator must be a non-empty string, not {}",
                        other.repr()
                    ))
                }
            };
            Ok(Value::array(parts))
        }),
        "replace" => Function::closure(move |args, kwargs, context| {
            let old = match arg_or_kwarg(args, kwargs, 0, "old") {
                Some(Value::String(old)) => old.clone(),
                _ => return context.throw_type_error("replace() takes two string arguments"),
            };
            let new = match arg_or_kwarg(args, kwargs, 1, "new") {
                Some(Value::String(new)) => new.clone(),
                _ => return context.throw_type_error("replace() takes two string arguments"),
            };
            let count = optional_count(args, kwargs, 2, "count", context)?;
            Ok(Value::string(py_replace(&s, &old, &new, count)))
        }),
        _ => return None,
    };
    Some(Value::function(function))
}

impl Executable for GetField {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let obj = self.obj().run(context)?;
        let field = self.field().run(context)?;
        match (&obj, &field) {
            (Value::Null, _) | (Value::Undefined, _) => Ok(Value::undefined()),
            (Value::Array(values), Value::Integer(i)) => {
                Ok(index_sequence(values.len(), *i)
                    .map(|idx| values[idx].clone())
                    .unwrap_or_default())
            }
            (Value::String(s), Value::Integer(i)) => {
                Ok(s.char_at(*i).map(Value::from).unwrap_or_default())
            }
            (Value::Object(object), Value::String(key)) => {
                Ok(object.get(key).unwrap_or_default())
            }
            (Value::Object(_), _) => Ok(Value::undefined()),
            (Value::Array(_), other) | (Value::String(_), other) => context.throw_type_error(
                format!("indices must be integers, not {}", other.get_type()),
            ),
            (other, _) => context.throw_type_error(format!(
                "{} is not subscriptable",
                other.get_type()
            )),
        }
    }
}

/// Normalises an index against a length; negative counts from the end and
/// out-of-range is `None`.
pub(crate) fn index_sequence(len: usize, index: i64) -> Option<usize> {
    let len = len as i64;
    let index = if index < 0 { index + len } else { index };
    if index < 0 || index >= len {
        None
    } else {
        Some(index as usize)
    }
}

impl Executable for Slice {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let obj = self.obj().run(context)?;
        let start = eval_bound(self.start(), context)?;
        let stop = eval_bound(self.stop(), context)?;
        let step = match eval_bound(self.step(), context)? {
            None => 1,
            Some(0) => return context.throw_range_error("slice step cannot be zero"),
            Some(step) => step,
        };

        match &obj {
            Value::Array(values) => {
                let picked = slice_indices(values.len(), start, stop, step)
                    .into_iter()
                    .map(|i| values[i].clone())
                    .collect();
                Ok(Value::array(picked))
            }
            Value::String(s) => {
                let chars: Vec<char> = s.chars().collect();
                let picked: String = slice_indices(chars.len(), start, stop, step)
                    .into_iter()
                    .map(|i| chars[i])
                    .collect();
                Ok(Value::string(picked))
            }
            other => {
                context.throw_type_error(format!("cannot slice {}", other.get_type()))
            }
        }
    }
}

fn eval_bound(
    bound: Option<&crate::syntax::ast::Node>,
    context: &mut Context,
) -> Result<Option<i64>> {
    match bound {
        None => Ok(None),
        Some(node) => match node.run(context)? {
            Value::Integer(i) => Ok(Some(i)),
            Value::Null => Ok(None),
            other => context.throw_type_error(format!(
                "slice bounds must be integers, not {}",
                other.get_type()
            )),
        },
    }
}

/// Resolves Python slice semantics into the picked indices.
pub(crate) fn slice_indices(
    len: usize,
    start: Option<i64>,
    stop: Option<i64>,
    step: i64,
) -> Vec<usize> {
    let len = len as i64;
    let (start, stop) = if step > 0 {
        let start = match start {
            None => 0,
            Some(i) => clamp(normalise(i, len), 0, len),
        };
        let stop = match stop {
            None => len,
            Some(i) => clamp(normalise(i, len), 0, len),
        };
        (start, stop)
    } else {
        let start = match start {
            None => len - 1,
            Some(i) => clamp(normalise(i, len), -1, len - 1),
        };
        let stop = match stop {
            None => -1,
            Some(i) => clamp(normalise(i, len), -1, len - 1),
        };
        (start, stop)
    };

    let mut indices = Vec::new();
    let mut i = start;
    while (step > 0 && i < stop) || (step < 0 && i > stop) {
        indices.push(i as usize);
        i += step;
    }
    indices
}

fn normalise(index: i64, len: i64) -> i64 {
    if index < 0 {
        index + len
    } else {
        index
    }
}

fn clamp(value: i64, min: i64, max: i64) -> i64 {
    value.max(min).min(max)
}
