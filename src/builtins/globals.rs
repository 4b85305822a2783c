//! The global callables and constants installed in the root scope.

use crate::builtins::args::{arg_or_kwarg, boolean_option, optional_count};
use crate::builtins::function::{Function, Keywords};
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::exec::Context;
use crate::value::{Object, Value};
use crate::Result;
use indexmap::IndexMap;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

/// Iterating a pathological `range` should fail, not exhaust memory.
const MAX_RANGE_LENGTH: i64 = 10_000_000;

/// Installs the built-in globals.
///
/// The word literals are also lexed directly; the bindings here keep the §6
/// contract that they resolve as names too.
pub(super) fn init(scope: &Environment) {
    scope.define("true", Value::boolean(true));
    scope.define("True", Value::boolean(true));
    scope.define("false", Value::boolean(false));
    scope.define("False", Value::boolean(false));
    scope.define("none", Value::null());
    scope.define("None", Value::null());
    scope.define("null", Value::null());

    scope.define("range", Value::function(Function::Native(range)));
    scope.define("namespace", Value::function(Function::Native(namespace)));
    scope.define("dict", Value::function(Function::Native(dict)));
    scope.define("cycler", Value::function(Function::Native(cycler)));
    scope.define("joiner", Value::function(Function::Native(joiner)));
    scope.define("lipsum", Value::function(Function::Native(lipsum)));
    scope.define(
        "raise_exception",
        Value::function(Function::Native(raise_exception)),
    );
}

/// `range(stop)`, `range(start, stop)` or `range(start, stop, step)`.
fn range(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let ints: Vec<i64> = args
        .iter()
        .map(|arg| match arg {
            Value::Integer(i) => Ok(*i),
            other => context.throw_type_error(format!(
                "range() arguments must be integers, not {}",
                other.get_type()
            )),
        })
        .collect::<Result<_>>()?;

    let (start, stop, step) = match ints.as_slice() {
        [stop] => (0, *stop, 1),
        [start, stop] => (*start, *stop, 1),
        [start, stop, step] => (*start, *stop, *step),
        _ => return context.throw_type_error("range() takes one to three arguments"),
    };
    if step == 0 {
        return context.throw_range_error("range() step cannot be zero");
    }

    let span = if step > 0 {
        stop.saturating_sub(start)
    } else {
        start.saturating_sub(stop)
    };
    if span / step.abs() >= MAX_RANGE_LENGTH {
        return context.throw_range_error("range() result is too large");
    }

    let mut values = Vec::new();
    let mut i = start;
    while (step > 0 && i < stop) || (step < 0 && i > stop) {
        values.push(Value::integer(i));
        i = i.saturating_add(step);
    }
    Ok(Value::array(values))
}

/// `namespace(**kwargs)`: the one mutable mapping; `{% set ns.attr = x %}`
/// writes through it.
fn namespace(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    if !args.is_empty() {
        return context.throw_type_error("namespace() takes keyword arguments only");
    }
    let mut properties = IndexMap::new();
    for (name, value) in kwargs {
        properties.insert(name.clone(), value.clone());
    }
    Ok(Value::object(Object::namespace(properties)))
}

/// `dict(**kwargs)`: an ordinary object literal in call form.
fn dict(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    if !args.is_empty() {
        return context.throw_type_error("dict() takes keyword arguments only");
    }
    let mut properties = IndexMap::new();
    for (name, value) in kwargs {
        properties.insert(name.clone(), value.clone());
    }
    Ok(Value::object(Object::with_properties(properties)))
}

/// `cycler(*items)`: an object cycling through its items via `next()`, with
/// `current` tracking the upcoming item and `reset()` rewinding.
fn cycler(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    if args.is_empty() {
        return context.throw_type_error("cycler() needs at least one value");
    }
    let items: Rc<Vec<Value>> = Rc::new(args.to_vec());
    let position = Rc::new(Cell::new(0usize));

    let mut properties = IndexMap::new();
    properties.insert("current".to_string(), items[0].clone());
    let object = Rc::new(Object::namespace(properties));

    // The closures hold the object weakly; a strong handle would make the
    // cycler keep itself alive forever.
    let weak = Rc::downgrade(&object);
    let next_items = items.clone();
    let next_position = position.clone();
    object.insert(
        "next".to_string(),
        Value::function(Function::closure(move |_, _, _| {
            let value = next_items[next_position.get() % next_items.len()].clone();
            next_position.set((next_position.get() + 1) % next_items.len());
            if let Some(object) = weak.upgrade() {
                object.insert(
                    "current".to_string(),
                    next_items[next_position.get()].clone(),
                );
            }
            Ok(value)
        })),
    );

    let weak = Rc::downgrade(&object);
    object.insert(
        "reset".to_string(),
        Value::function(Function::closure(move |_, _, _| {
            position.set(0);
            if let Some(object) = weak.upgrade() {
                object.insert("current".to_string(), items[0].clone());
            }
            Ok(Value::null())
        })),
    );

    Ok(Value::Object(object))
}

/// `joiner(sep=", ")`: returns `""` on its first call and `sep` afterwards.
fn joiner(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let sep = match arg_or_kwarg(args, kwargs, 0, "sep") {
        None => ", ".to_string(),
        Some(Value::String(sep)) => sep.to_string(),
        Some(other) => {
            return context.throw_type_error(format!(
                "joiner() separator must be a string, not {}",
                other.get_type()
            ))
        }
    };

    let used = Cell::new(false);
    Ok(Value::function(Function::closure(move |_, _, _| {
        if used.replace(true) {
            Ok(Value::string(sep.as_str()))
        } else {
            Ok(Value::string(""))
        }
    })))
}

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "eu", "fugiat", "nulla", "pariatur", "excepteur",
    "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia",
    "deserunt", "mollit", "anim", "id", "est", "laborum",
];

/// `lipsum(n=5, html=true, min=20, max=100)`: filler paragraphs.
fn lipsum(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let n = optional_count(args, kwargs, 0, "n", context)?.unwrap_or(5);
    let html = boolean_option(args, kwargs, 1, "html", true);
    let min = optional_count(args, kwargs, 2, "min", context)?.unwrap_or(20);
    let max = optional_count(args, kwargs, 3, "max", context)?.unwrap_or(100);
    if min == 0 || max < min {
        return context.throw_range_error("lipsum() needs 0 < min <= max");
    }

    let mut rng = rand::thread_rng();
    let mut paragraphs = Vec::with_capacity(n);
    for _ in 0..n {
        let words = rng.gen_range(min..=max);
        let mut paragraph = String::new();
        for i in 0..words {
            let word = LOREM_WORDS[rng.gen_range(0..LOREM_WORDS.len())];
            if i == 0 {
                paragraph.extend(word.chars().enumerate().map(|(j, c)| {
                    if j == 0 {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                }));
            } else {
                paragraph.push(' ');
                paragraph.push_str(word);
            }
        }
        paragraph.push('.');
        paragraphs.push(if html {
            format!("<p>{}</p>", paragraph)
        } else {
            paragraph
        });
    }
    Ok(Value::string(paragraphs.join("\n\n")))
}

/// `raise_exception(message?)`: aborts the render with a runtime error.
fn raise_exception(args: &[Value], kwargs: &Keywords, _: &mut Context) -> Result<Value> {
    let message = match arg_or_kwarg(args, kwargs, 0, "message") {
        Some(value) => value.to_display_string(),
        None => "exception raised".to_string(),
    };
    Err(RuntimeError::new(message).into())
}
