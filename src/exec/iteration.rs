//! `for` loop execution and the `loop` object.

use super::{Context, Executable, InterpreterState};
use crate::builtins::function::Function;
use crate::syntax::ast::node::{Break, Continue, ForLoop};
use crate::value::{Object, Value};
use crate::Result;
use indexmap::IndexMap;

impl Executable for ForLoop {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let iterable = self.iterable().run(context)?;
        let rows = bind_rows(self.vars().len(), &iterable, context)?;

        // One child frame for the whole loop, reused across iterations.
        context.realm_mut().environment.push_scope();
        let result = self.run_rows(rows, context);
        context.realm_mut().environment.pop_scope();
        result?;
        Ok(Value::undefined())
    }
}

impl ForLoop {
    fn run_rows(&self, rows: Vec<Vec<Value>>, context: &mut Context) -> Result<()> {
        let length = rows.len();
        if length == 0 {
            if let Some(else_node) = self.else_node() {
                else_node.run(context)?;
            }
            return Ok(());
        }

        for (index, row) in rows.into_iter().enumerate() {
            for (name, value) in self.vars().iter().zip(row) {
                context.realm().environment.create_binding(name, value);
            }
            context
                .realm()
                .environment
                .create_binding("loop", loop_object(index, length));

            // The per-iteration filter skips the body; the counters above
            // keep describing the raw sequence.
            if let Some(condition) = self.condition() {
                if !condition.run(context)?.to_boolean() {
                    continue;
                }
            }

            self.body().run(context)?;
            match context.get_current_state() {
                InterpreterState::Break => {
                    context.set_current_state(InterpreterState::Executing);
                    break;
                }
                InterpreterState::Continue => {
                    context.set_current_state(InterpreterState::Executing);
                }
                InterpreterState::Executing => {}
            }
        }
        Ok(())
    }
}

/// Materialises the per-iteration variable bindings for an iterable.
///
/// Arrays iterate their elements, strings their chars, objects their keys
/// (or `(key, value)` pairs with a two-name target). With multiple names
/// each element must be an array of matching length.
fn bind_rows(vars: usize, iterable: &Value, context: &mut Context) -> Result<Vec<Vec<Value>>> {
    let items: Vec<Value> = match iterable {
        Value::Array(values) => values.as_ref().clone(),
        Value::String(s) => s.chars().map(Value::from).collect(),
        Value::Object(object) => {
            if vars == 1 {
                return Ok(object
                    .keys()
                    .into_iter()
                    .map(|k| vec![Value::string(k)])
                    .collect());
            }
            if vars == 2 {
                return Ok(object
                    .entries()
                    .into_iter()
                    .map(|(k, v)| vec![Value::string(k), v])
                    .collect());
            }
            return context.throw_type_error("cannot unpack object entries into more than two names");
        }
        other => {
            return context.throw_type_error(format!("{} is not iterable", other.get_type()))
        }
    };

    if vars == 1 {
        return Ok(items.into_iter().map(|item| vec![item]).collect());
    }

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        match item.as_array() {
            Some(values) if values.len() == vars => rows.push(values.to_vec()),
            Some(values) => {
                return context.throw_type_error(format!(
                    "cannot unpack {} values into {} names",
                    values.len(),
                    vars
                ))
            }
            None => {
                return context.throw_type_error(format!(
                    "cannot unpack {} into {} names",
                    item.get_type(),
                    vars
                ))
            }
        }
    }
    Ok(rows)
}

/// Builds the per-iteration `loop` object.
fn loop_object(index: usize, length: usize) -> Value {
    let mut properties = IndexMap::new();
    properties.insert("index".to_string(), Value::from(index + 1));
    properties.insert("index0".to_string(), Value::from(index));
    properties.insert("first".to_string(), Value::boolean(index == 0));
    properties.insert("last".to_string(), Value::boolean(index + 1 == length));
    properties.insert("length".to_string(), Value::from(length));
    properties.insert("revindex".to_string(), Value::from(length - index));
    properties.insert("revindex0".to_string(), Value::from(length - index - 1));
    properties.insert(
        "cycle".to_string(),
        Value::function(Function::closure(move |args, _, context| {
            if args.is_empty() {
                return context.throw_range_error("loop.cycle() needs at least one value");
            }
            Ok(args[index % args.len()].clone())
        })),
    );
    Value::object(Object::with_properties(properties))
}

impl Executable for Break {
    fn run(&self, context: &mut Context) -> Result<Value> {
        context.set_current_state(InterpreterState::Break);
        Ok(Value::undefined())
    }
}

impl Executable for Continue {
    fn run(&self, context: &mut Context) -> Result<Value> {
        context.set_current_state(InterpreterState::Continue);
        Ok(Value::undefined())
    }
}
