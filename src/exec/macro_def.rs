//! Execution of `call` and `filter` blocks.

use super::call::{apply_filter, evaluate_args, evaluate_kwargs};
use super::{Context, Executable, InterpreterState};
use crate::builtins::function::Function;
use crate::environment::Scope;
use crate::syntax::ast::node::{CallBlock, FilterBlock};
use crate::value::Value;
use crate::Result;

impl Executable for CallBlock {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let callee = self.call().expr().run(context)?;
        let m = match callee.as_function().map(|f| f.as_ref()) {
            Some(Function::Macro(m)) => m.clone(),
            Some(_) | None => {
                return context.throw_type_error(format!(
                    "'{}' is not a macro; only macros can receive a caller",
                    self.call().expr()
                ))
            }
        };

        let args = evaluate_args(self.call().args(), context)?;
        let kwargs = evaluate_kwargs(self.call().kwargs(), context)?;

        // The caller closure renders the block body in a fresh child of the
        // call-site environment, with the declared parameters bound to the
        // closure's arguments.
        let body = self.body().clone();
        let parameters: Vec<Box<str>> = self.caller_parameters().to_vec();
        let defining = context.realm().environment.current().clone();
        let caller = Function::closure(move |caller_args, _, context| {
            let scope = Scope::child(defining.clone());
            for (i, name) in parameters.iter().enumerate() {
                scope.define(name, caller_args.get(i).cloned().unwrap_or_default());
            }
            let previous = context.realm_mut().environment.swap(scope);
            context.push_buffer();
            let result = body.run(context);
            let rendered = context.pop_buffer();
            context.realm_mut().environment.swap(previous);
            result?;

            // A break/continue from the block body belongs to the loop
            // enclosing the call site, not to the macro body this closure
            // returns into; park it until the macro call completes.
            let state = context.get_current_state();
            if state != InterpreterState::Executing {
                context.set_current_state(InterpreterState::Executing);
                context.defer_state(state);
            }
            Ok(Value::string(rendered))
        });

        let rendered = context.call_macro(&m, &args, &kwargs, Some(Value::function(caller)))?;
        context.write_value(&rendered);

        let deferred = context.take_deferred_state();
        if deferred != InterpreterState::Executing {
            context.set_current_state(deferred);
        }
        Ok(Value::undefined())
    }
}

impl Executable for FilterBlock {
    fn run(&self, context: &mut Context) -> Result<Value> {
        context.push_buffer();
        let result = self.body().run(context);
        let rendered = context.pop_buffer();
        result?;

        let mut value = Value::string(rendered);
        for call in self.filters() {
            value = apply_filter(value, call, context)?;
        }
        context.write_value(&value);
        Ok(Value::undefined())
    }
}
