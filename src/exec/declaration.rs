//! Execution of `set` statements, conditionals and macro definitions.

use super::{Context, Executable};
use crate::builtins::function::{Function, Macro};
use crate::syntax::ast::node::{If, MacroDecl, Set, SetTarget};
use crate::value::Value;
use crate::Result;
use std::rc::Rc;

impl Executable for If {
    fn run(&self, context: &mut Context) -> Result<Value> {
        if self.cond().run(context)?.to_boolean() {
            self.body().run(context)?;
        } else if let Some(else_node) = self.else_node() {
            else_node.run(context)?;
        }
        Ok(Value::undefined())
    }
}

impl Executable for Set {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let value = match (self.value(), self.body()) {
            (Some(expr), _) => expr.run(context)?,
            (None, Some(body)) => {
                context.push_buffer();
                let result = body.run(context);
                let rendered = context.pop_buffer();
                result?;
                Value::string(rendered)
            }
            (None, None) => Value::undefined(),
        };

        match self.target() {
            SetTarget::Ident(name) => {
                context.realm().environment.create_binding(name, value);
            }
            SetTarget::Tuple(names) => {
                let values = match value.as_array() {
                    Some(values) if values.len() == names.len() => values.to_vec(),
                    Some(values) => {
                        return context.throw_type_error(format!(
                            "cannot unpack {} values into {} names",
                            values.len(),
                            names.len()
                        ))
                    }
                    None => {
                        return context.throw_type_error(format!(
                            "cannot unpack {} into {} names",
                            value.get_type(),
                            names.len()
                        ))
                    }
                };
                for (name, element) in names.iter().zip(values) {
                    context.realm().environment.create_binding(name, element);
                }
            }
            SetTarget::Attribute { object, field } => {
                let target = context.realm().environment.get_binding_value(object);
                match target.as_object() {
                    Some(o) if o.is_namespace() => o.insert(field.to_string(), value),
                    Some(_) => {
                        return context.throw_type_error(format!(
                            "cannot assign attribute '{}': '{}' is not a namespace",
                            field, object
                        ))
                    }
                    None => {
                        return context.throw_type_error(format!(
                            "cannot assign attribute '{}' on {}",
                            field,
                            target.get_type()
                        ))
                    }
                }
            }
        }
        Ok(Value::undefined())
    }
}

impl Executable for MacroDecl {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let environment = context.realm().environment.current().clone();
        let function = Function::Macro(Macro::new(
            self.name().into(),
            self.parameters().to_vec().into_boxed_slice(),
            self.body().clone(),
            environment,
        ));
        context
            .realm()
            .environment
            .current()
            .define_macro(self.name(), Rc::new(function));
        Ok(Value::undefined())
    }
}
