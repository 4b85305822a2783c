//! Sequence and mapping filters.

use crate::builtins::args::{
    arg_or_kwarg, boolean_option, optional_count, optional_string, subject,
};
use crate::builtins::function::Keywords;
use crate::builtins::testers;
use crate::exec::{get_attribute, index_sequence, Context};
use crate::value::Value;
use crate::Result;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Follows a dotted attribute path (`"user.name"`, `"0"`); a miss anywhere
/// along the way is `undefined`.
pub(super) fn lookup_path(value: &Value, path: &str) -> Value {
    let mut current = value.clone();
    for part in path.split('.') {
        current = match part.parse::<i64>() {
            Ok(index) => match &current {
                Value::Array(values) => index_sequence(values.len(), index)
                    .map(|i| values[i].clone())
                    .unwrap_or_default(),
                _ => Value::undefined(),
            },
            Err(_) => get_attribute(&current, part),
        };
    }
    current
}

/// The items of an iterable subject, or a type error.
fn iterable_items(value: &Value, context: &Context, name: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(values) => Ok(values.as_ref().clone()),
        Value::String(s) => Ok(s.chars().map(Value::from).collect()),
        Value::Object(object) => Ok(object.keys().into_iter().map(Value::string).collect()),
        other => context.throw_type_error(format!(
            "'{}' requires an iterable, not {}",
            name,
            other.get_type()
        )),
    }
}

pub(super) fn length(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "length")?;
    match value.length() {
        Some(len) => Ok(Value::from(len)),
        None => context.throw_type_error(format!(
            "object of type {} has no length",
            value.get_type()
        )),
    }
}

pub(super) fn first(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    match subject(args, context, "first")? {
        Value::Array(values) => Ok(values.first().cloned().unwrap_or_default()),
        Value::String(s) => Ok(s.chars().next().map(Value::from).unwrap_or_default()),
        Value::Object(object) => Ok(object
            .keys()
            .into_iter()
            .next()
            .map(Value::string)
            .unwrap_or_default()),
        other => context.throw_type_error(format!(
            "'first' requires an iterable, not {}",
            other.get_type()
        )),
    }
}

pub(super) fn last(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    match subject(args, context, "last")? {
        Value::Array(values) => Ok(values.last().cloned().unwrap_or_default()),
        Value::String(s) => Ok(s.chars().last().map(Value::from).unwrap_or_default()),
        Value::Object(object) => Ok(object
            .keys()
            .into_iter()
            .last()
            .map(Value::string)
            .unwrap_or_default()),
        other => context.throw_type_error(format!(
            "'last' requires an iterable, not {}",
            other.get_type()
        )),
    }
}

pub(super) fn random(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let items = iterable_items(subject(args, context, "random")?, context, "random")?;
    if items.is_empty() {
        return Ok(Value::undefined());
    }
    let index = rand::thread_rng().gen_range(0..items.len());
    Ok(items[index].clone())
}

pub(super) fn reverse(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    match subject(args, context, "reverse")? {
        Value::Array(values) => Ok(Value::array(values.iter().rev().cloned().collect())),
        Value::String(s) => Ok(Value::string(s.chars().rev().collect::<String>())),
        other => context.throw_type_error(format!(
            "'reverse' requires an array or string, not {}",
            other.get_type()
        )),
    }
}

/// The comparable key used by `sort`, `min`, `max`, `groupby` and
/// `dictsort`. Keys must be homogeneous: all numbers or all strings.
enum SortKey {
    Number(f64),
    Str(String),
}

fn sort_key(value: &Value, case_sensitive: bool, context: &Context) -> Result<SortKey> {
    match value {
        Value::Integer(i) => Ok(SortKey::Number(*i as f64)),
        Value::Float(f) => Ok(SortKey::Number(*f)),
        Value::Boolean(b) => Ok(SortKey::Number(if *b { 1.0 } else { 0.0 })),
        Value::String(s) => Ok(SortKey::Str(if case_sensitive {
            s.to_string()
        } else {
            s.to_lowercase()
        })),
        other => context.throw_type_error(format!("cannot order {} values", other.get_type())),
    }
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (SortKey::Str(x), SortKey::Str(y)) => x.cmp(y),
        (SortKey::Number(_), SortKey::Str(_)) => Ordering::Less,
        (SortKey::Str(_), SortKey::Number(_)) => Ordering::Greater,
    }
}

fn keyed_items(
    items: Vec<Value>,
    attribute: Option<&str>,
    case_sensitive: bool,
    context: &Context,
) -> Result<Vec<(SortKey, Value)>> {
    let mut keyed = Vec::with_capacity(items.len());
    let mut saw_number = false;
    let mut saw_string = false;
    for item in items {
        let key_source = match attribute {
            Some(path) => lookup_path(&item, path),
            None => item.clone(),
        };
        let key = sort_key(&key_source, case_sensitive, context)?;
        match key {
            SortKey::Number(_) => saw_number = true,
            SortKey::Str(_) => saw_string = true,
        }
        keyed.push((key, item));
    }
    if saw_number && saw_string {
        return context.throw_type_error("cannot order numbers against strings");
    }
    Ok(keyed)
}

pub(super) fn sort(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "sort")?;
    let items = match value.as_array() {
        Some(items) => items.to_vec(),
        // Neutral result on a non-array subject.
        None => return Ok(value.clone()),
    };
    let reverse = boolean_option(args, kwargs, 1, "reverse", false);
    let case_sensitive = boolean_option(args, kwargs, 2, "case_sensitive", false);
    let attribute = optional_string(args, kwargs, 3, "attribute", context)?;

    let mut keyed = keyed_items(items, attribute.as_deref(), case_sensitive, context)?;
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    if reverse {
        keyed.reverse();
    }
    Ok(Value::array(keyed.into_iter().map(|(_, v)| v).collect()))
}

pub(super) fn unique(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let items = iterable_items(subject(args, context, "unique")?, context, "unique")?;
    let case_sensitive = boolean_option(args, kwargs, 1, "case_sensitive", false);
    let attribute = optional_string(args, kwargs, 2, "attribute", context)?;

    let mut seen: FxHashMap<u64, Vec<Value>> = FxHashMap::default();
    let mut out = Vec::new();
    for item in items {
        let mut key = match attribute.as_deref() {
            Some(path) => lookup_path(&item, path),
            None => item.clone(),
        };
        if !case_sensitive {
            if let Value::String(s) = &key {
                key = Value::string(s.to_lowercase());
            }
        }
        let hash = key.hash_value()?;
        let bucket = seen.entry(hash).or_default();
        if bucket.iter().any(|previous| *previous == key) {
            continue;
        }
        bucket.push(key);
        out.push(item);
    }
    Ok(Value::array(out))
}

pub(super) fn join(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let items = iterable_items(subject(args, context, "join")?, context, "join")?;
    let sep = optional_string(args, kwargs, 1, "d", context)?.unwrap_or_default();
    let attribute = optional_string(args, kwargs, 2, "attribute", context)?;

    let parts: Vec<String> = items
        .iter()
        .map(|item| match attribute.as_deref() {
            Some(path) => lookup_path(item, path).to_display_string(),
            None => item.to_display_string(),
        })
        .collect();
    Ok(Value::string(parts.join(&sep)))
}

pub(super) fn slice(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let items = iterable_items(subject(args, context, "slice")?, context, "slice")?;
    let slices = match optional_count(args, kwargs, 1, "slices", context)? {
        Some(n) if n > 0 => n,
        _ => return context.throw_range_error("slice() needs a positive slice count"),
    };
    let fill_with = arg_or_kwarg(args, kwargs, 2, "fill_with").cloned();

    let per_slice = items.len() / slices;
    let with_extra = items.len() % slices;
    let mut out = Vec::with_capacity(slices);
    let mut offset = 0;
    for i in 0..slices {
        let size = per_slice + usize::from(i < with_extra);
        let mut chunk: Vec<Value> = items[offset..offset + size].to_vec();
        offset += size;
        if let Some(fill) = &fill_with {
            if with_extra > 0 && i >= with_extra {
                chunk.push(fill.clone());
            }
        }
        out.push(Value::array(chunk));
    }
    Ok(Value::array(out))
}

pub(super) fn batch(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let items = iterable_items(subject(args, context, "batch")?, context, "batch")?;
    let linecount = match optional_count(args, kwargs, 1, "linecount", context)? {
        Some(n) if n > 0 => n,
        _ => return context.throw_range_error("batch() needs a positive line count"),
    };
    let fill_with = arg_or_kwarg(args, kwargs, 2, "fill_with").cloned();

    let mut out = Vec::new();
    for chunk in items.chunks(linecount) {
        let mut batch: Vec<Value> = chunk.to_vec();
        if let Some(fill) = &fill_with {
            while batch.len() < linecount {
                batch.push(fill.clone());
            }
        }
        out.push(Value::array(batch));
    }
    Ok(Value::array(out))
}

pub(super) fn list(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    match subject(args, context, "list")? {
        Value::Null | Value::Undefined => Ok(Value::array(Vec::new())),
        value => Ok(Value::array(iterable_items(value, context, "list")?)),
    }
}

pub(super) fn items(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    match subject(args, context, "items")? {
        Value::Object(object) => Ok(Value::array(
            object
                .entries()
                .into_iter()
                .map(|(k, v)| Value::array(vec![Value::string(k), v]))
                .collect(),
        )),
        Value::Null | Value::Undefined => Ok(Value::array(Vec::new())),
        other => context.throw_type_error(format!(
            "'items' requires a mapping, not {}",
            other.get_type()
        )),
    }
}

pub(super) fn map(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let items = iterable_items(subject(args, context, "map")?, context, "map")?;

    if let Some(attribute) = kwargs.get("attribute") {
        let path = match attribute {
            Value::String(path) => path.to_string(),
            other => {
                return context.throw_type_error(format!(
                    "map() attribute must be a string, not {}",
                    other.get_type()
                ))
            }
        };
        let default = kwargs.get("default").cloned();
        let mapped = items
            .into_iter()
            .map(|item| {
                let value = lookup_path(&item, &path);
                match (&value, &default) {
                    (Value::Undefined, Some(default)) => default.clone(),
                    _ => value,
                }
            })
            .collect();
        return Ok(Value::array(mapped));
    }

    let name = match args.get(1) {
        Some(Value::String(name)) => name.clone(),
        _ => return context.throw_type_error("map() needs a filter name or attribute"),
    };
    let filter = match crate::builtins::filters::lookup(&name) {
        Some(filter) => filter,
        None => return context.throw_type_error(format!("unknown filter '{}'", name)),
    };

    let mut mapped = Vec::with_capacity(items.len());
    for item in items {
        let mut call_args = vec![item];
        call_args.extend(args[2..].iter().cloned());
        mapped.push(filter(&call_args, kwargs, context)?);
    }
    Ok(Value::array(mapped))
}

fn run_test(
    name: Option<&str>,
    value: &Value,
    extra: &[Value],
    context: &mut Context,
) -> Result<bool> {
    match name {
        None => Ok(value.to_boolean()),
        Some(name) => match testers::lookup(name) {
            Some(test) => {
                let mut call_args = vec![value.clone()];
                call_args.extend(extra.iter().cloned());
                Ok(test(&call_args, &Keywords::new(), context)?.to_boolean())
            }
            None => context.throw_type_error(format!("unknown test '{}'", name)),
        },
    }
}

fn select_common(
    args: &[Value],
    context: &mut Context,
    keep_matching: bool,
    filter_name: &str,
) -> Result<Value> {
    let items = iterable_items(subject(args, context, filter_name)?, context, filter_name)?;
    let name = match args.get(1) {
        None => None,
        Some(Value::String(name)) => Some(name.to_string()),
        Some(other) => {
            return context.throw_type_error(format!(
                "'{}' test name must be a string, not {}",
                filter_name,
                other.get_type()
            ))
        }
    };
    let extra: &[Value] = if args.len() > 2 { &args[2..] } else { &[] };

    let mut out = Vec::new();
    for item in items {
        if run_test(name.as_deref(), &item, extra, context)? == keep_matching {
            out.push(item);
        }
    }
    Ok(Value::array(out))
}

pub(super) fn select(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    select_common(args, context, true, "select")
}

pub(super) fn reject(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    select_common(args, context, false, "reject")
}

fn selectattr_common(
    args: &[Value],
    context: &mut Context,
    keep_matching: bool,
    filter_name: &str,
) -> Result<Value> {
    let items = iterable_items(subject(args, context, filter_name)?, context, filter_name)?;
    let path = match args.get(1) {
        Some(Value::String(path)) => path.to_string(),
        _ => {
            return context
                .throw_type_error(format!("'{}' needs an attribute name", filter_name))
        }
    };
    let name = match args.get(2) {
        None => None,
        Some(Value::String(name)) => Some(name.to_string()),
        Some(other) => {
            return context.throw_type_error(format!(
                "'{}' test name must be a string, not {}",
                filter_name,
                other.get_type()
            ))
        }
    };
    let extra: &[Value] = if args.len() > 3 { &args[3..] } else { &[] };

    let mut out = Vec::new();
    for item in items {
        let value = lookup_path(&item, &path);
        if run_test(name.as_deref(), &value, extra, context)? == keep_matching {
            out.push(item);
        }
    }
    Ok(Value::array(out))
}

pub(super) fn selectattr(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    selectattr_common(args, context, true, "selectattr")
}

pub(super) fn rejectattr(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    selectattr_common(args, context, false, "rejectattr")
}

pub(super) fn attr(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "attr")?;
    match arg_or_kwarg(args, kwargs, 1, "name") {
        Some(Value::String(name)) => Ok(get_attribute(value, name)),
        _ => context.throw_type_error("attr() needs an attribute name"),
    }
}

pub(super) fn groupby(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "groupby")?;
    let items = match value.as_array() {
        Some(items) => items.to_vec(),
        None => {
            return context.throw_type_error(format!(
                "'groupby' requires an array, not {}",
                value.get_type()
            ))
        }
    };
    let path = match arg_or_kwarg(args, kwargs, 1, "attribute") {
        Some(Value::String(path)) => path.to_string(),
        _ => return context.throw_type_error("groupby() needs an attribute name"),
    };
    let default = kwargs.get("default").cloned();

    let mut keyed: Vec<(Value, Value)> = items
        .into_iter()
        .map(|item| {
            let mut key = lookup_path(&item, &path);
            if key.is_undefined() {
                if let Some(default) = &default {
                    key = default.clone();
                }
            }
            (key, item)
        })
        .collect();

    let sortable = keyed_items(
        keyed.iter().map(|(k, _)| k.clone()).collect(),
        None,
        false,
        context,
    )?;
    let mut order: Vec<usize> = (0..keyed.len()).collect();
    order.sort_by(|&a, &b| compare_keys(&sortable[a].0, &sortable[b].0));
    keyed = order.into_iter().map(|i| keyed[i].clone()).collect();

    let mut groups: Vec<Value> = Vec::new();
    let mut current: Option<(Value, Vec<Value>)> = None;
    for (key, item) in keyed {
        match &mut current {
            Some((grouper, members)) if *grouper == key => members.push(item),
            _ => {
                if let Some((grouper, members)) = current.take() {
                    groups.push(Value::array(vec![grouper, Value::array(members)]));
                }
                current = Some((key, vec![item]));
            }
        }
    }
    if let Some((grouper, members)) = current {
        groups.push(Value::array(vec![grouper, Value::array(members)]));
    }
    Ok(Value::array(groups))
}

pub(super) fn dictsort(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let entries = match subject(args, context, "dictsort")? {
        Value::Object(object) => object.entries(),
        other => {
            return context.throw_type_error(format!(
                "'dictsort' requires a mapping, not {}",
                other.get_type()
            ))
        }
    };
    let case_sensitive = boolean_option(args, kwargs, 1, "case_sensitive", false);
    let by = optional_string(args, kwargs, 2, "by", context)?.unwrap_or_else(|| "key".to_string());
    let reverse = boolean_option(args, kwargs, 3, "reverse", false);

    let by_value = match by.as_str() {
        "key" => false,
        "value" => true,
        _ => {
            return context
                .throw_range_error("dictsort() 'by' must be either 'key' or 'value'")
        }
    };

    let mut keyed = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let sort_on = if by_value {
            sort_key(&value, case_sensitive, context)?
        } else {
            sort_key(&Value::string(key.as_str()), case_sensitive, context)?
        };
        keyed.push((sort_on, key, value));
    }
    keyed.sort_by(|(a, _, _), (b, _, _)| compare_keys(a, b));
    if reverse {
        keyed.reverse();
    }

    Ok(Value::array(
        keyed
            .into_iter()
            .map(|(_, k, v)| Value::array(vec![Value::string(k), v]))
            .collect(),
    ))
}

fn min_max(args: &[Value], kwargs: &Keywords, context: &mut Context, want_max: bool) -> Result<Value> {
    let filter_name = if want_max { "max" } else { "min" };
    let items = iterable_items(subject(args, context, filter_name)?, context, filter_name)?;
    let case_sensitive = boolean_option(args, kwargs, 1, "case_sensitive", false);
    let attribute = optional_string(args, kwargs, 2, "attribute", context)?;

    let keyed = keyed_items(items, attribute.as_deref(), case_sensitive, context)?;
    let mut best: Option<(SortKey, Value)> = None;
    for (key, item) in keyed {
        let better = match &best {
            None => true,
            Some((best_key, _)) => {
                let ordering = compare_keys(&key, best_key);
                if want_max {
                    ordering == Ordering::Greater
                } else {
                    ordering == Ordering::Less
                }
            }
        };
        if better {
            best = Some((key, item));
        }
    }
    Ok(best.map(|(_, item)| item).unwrap_or_default())
}

pub(super) fn min(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    min_max(args, kwargs, context, false)
}

pub(super) fn max(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    min_max(args, kwargs, context, true)
}

pub(super) fn sum(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "sum")?;
    let items = match value.as_array() {
        Some(items) => items.to_vec(),
        None => {
            return context.throw_type_error(format!(
                "'sum' requires an array, not {}",
                value.get_type()
            ))
        }
    };
    let attribute = optional_string(args, kwargs, 1, "attribute", context)?;
    let mut acc = arg_or_kwarg(args, kwargs, 2, "start")
        .cloned()
        .unwrap_or(Value::Integer(0));

    for item in items {
        let term = match attribute.as_deref() {
            Some(path) => lookup_path(&item, path),
            None => item,
        };
        if !term.is_number() {
            return context.throw_type_error(format!(
                "sum() can only add numbers, not {}",
                term.get_type()
            ));
        }
        acc = acc.add(&term)?;
    }
    Ok(acc)
}

pub(super) fn default(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "default")?;
    let fallback = arg_or_kwarg(args, kwargs, 1, "default_value")
        .cloned()
        .unwrap_or_else(|| Value::string(""));
    let use_truthiness = boolean_option(args, kwargs, 2, "boolean", false);

    let missing = if use_truthiness {
        !value.to_boolean()
    } else {
        value.is_undefined()
    };
    Ok(if missing { fallback } else { value.clone() })
}
