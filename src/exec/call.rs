//! Call evaluation, macro invocation and filter/test dispatch.

use super::{Context, Executable, InterpreterState};
use crate::builtins::function::{Keywords, Macro};
use crate::builtins::{filters, testers};
use crate::environment::Scope;
use crate::syntax::ast::node::{Call, FilterCall, FilterExpr, TestExpr};
use crate::syntax::ast::Node;
use crate::value::Value;
use crate::Result;

/// Evaluates positional arguments left to right, unpacking `*array` spreads.
pub(crate) fn evaluate_args(nodes: &[Node], context: &mut Context) -> Result<Vec<Value>> {
    let mut args = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Node::Spread(spread) = node {
            let value = spread.target().run(context)?;
            match value.as_array() {
                Some(values) => args.extend(values.iter().cloned()),
                None => {
                    return context.throw_type_error(format!(
                        "can only spread an array, not {}",
                        value.get_type()
                    ))
                }
            }
        } else {
            args.push(node.run(context)?);
        }
    }
    Ok(args)
}

/// Evaluates keyword arguments in declared order.
pub(crate) fn evaluate_kwargs(
    nodes: &[(Box<str>, Node)],
    context: &mut Context,
) -> Result<Keywords> {
    let mut kwargs = Keywords::with_capacity(nodes.len());
    for (name, node) in nodes {
        let value = node.run(context)?;
        kwargs.insert(name.to_string(), value);
    }
    Ok(kwargs)
}

impl Executable for Call {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let callee = self.expr().run(context)?;
        if !callee.is_function() {
            return context.throw_type_error(format!(
                "'{}' is not callable ({})",
                self.expr(),
                callee.get_type()
            ));
        }
        let args = evaluate_args(self.args(), context)?;
        let kwargs = evaluate_kwargs(self.kwargs(), context)?;
        context.call(&callee, &args, &kwargs)
    }
}

impl Context {
    /// Invokes a macro: binds parameters in a child of the defining
    /// environment, renders the body into a capture buffer and returns the
    /// rendered string.
    pub(crate) fn call_macro(
        &mut self,
        m: &Macro,
        args: &[Value],
        kwargs: &Keywords,
        caller: Option<Value>,
    ) -> Result<Value> {
        let scope = Scope::child(m.environment().clone());
        let previous = self.realm_mut().environment.swap(scope.clone());

        let bind = (|| -> Result<()> {
            let mut kwargs = kwargs.clone();
            for (i, parameter) in m.parameters().iter().enumerate() {
                let value = if let Some(value) = kwargs.shift_remove(parameter.name()) {
                    value
                } else if let Some(value) = args.get(i) {
                    value.clone()
                } else if let Some(init) = parameter.init() {
                    // Defaults evaluate at call time against the defining
                    // environment, which is this scope's parent chain.
                    init.run(self)?
                } else {
                    Value::undefined()
                };
                scope.define(parameter.name(), value);
            }

            // Jinja-style spillover for surplus arguments.
            let surplus: Vec<Value> = args.iter().skip(m.parameters().len()).cloned().collect();
            scope.define("varargs", Value::array(surplus));
            let mut leftover = indexmap::IndexMap::new();
            for (name, value) in &kwargs {
                if !m.parameters().iter().any(|p| p.name() == name.as_str()) {
                    leftover.insert(name.clone(), value.clone());
                }
            }
            scope.define(
                "kwargs",
                Value::object(crate::value::Object::with_properties(leftover)),
            );

            scope.define("caller", caller.unwrap_or_default());
            Ok(())
        })();

        if let Err(e) = bind {
            self.realm_mut().environment.swap(previous);
            return Err(e);
        }

        self.push_buffer();
        let result = m.body().run(self);
        let rendered = self.pop_buffer();
        self.realm_mut().environment.swap(previous);
        result?;

        if self.get_current_state() != InterpreterState::Executing {
            self.set_current_state(InterpreterState::Executing);
            return self.throw_range_error("'break' or 'continue' outside of a loop");
        }
        Ok(Value::string(rendered))
    }
}

/// Applies one filter to an already-evaluated subject.
///
/// An environment binding of the same name shadows the built-in registry, so
/// user callables can override built-in filters.
pub(crate) fn apply_filter(
    subject: Value,
    call: &FilterCall,
    context: &mut Context,
) -> Result<Value> {
    let mut args = Vec::with_capacity(call.args().len() + 1);
    args.push(subject);
    args.extend(evaluate_args(call.args(), context)?);
    let kwargs = evaluate_kwargs(call.kwargs(), context)?;

    let bound = context.realm().environment.get_binding_value(call.name());
    if bound.is_function() {
        return context.call(&bound, &args, &kwargs);
    }
    match filters::lookup(call.name()) {
        Some(filter) => filter(&args, &kwargs, context),
        None => context.throw_type_error(format!("unknown filter '{}'", call.name())),
    }
}

impl Executable for FilterExpr {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let subject = self.subject().run(context)?;
        apply_filter(subject, self.call(), context)
    }
}

impl Executable for TestExpr {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let subject = self.subject().run(context)?;
        let mut args = Vec::with_capacity(self.args().len() + 1);
        args.push(subject);
        args.extend(evaluate_args(self.args(), context)?);
        let kwargs = Keywords::new();

        let bound = context.realm().environment.get_binding_value(self.name());
        let outcome = if bound.is_function() {
            context.call(&bound, &args, &kwargs)?
        } else {
            match testers::lookup(self.name()) {
                Some(test) => test(&args, &kwargs, context)?,
                None => {
                    return context
                        .throw_type_error(format!("unknown test '{}'", self.name()))
                }
            }
        };
        Ok(Value::boolean(outcome.to_boolean() != self.negated()))
    }
}
