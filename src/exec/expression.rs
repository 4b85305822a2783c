//! Evaluation of literals, identifiers and collection literals.

use super::{Context, Executable};
use crate::syntax::ast::node::{ArrayDecl, Identifier, ObjectDecl, Spread, Text};
use crate::syntax::ast::Const;
use crate::value::{Object, Value};
use crate::Result;
use indexmap::IndexMap;

impl Executable for Text {
    fn run(&self, context: &mut Context) -> Result<Value> {
        context.write_str(self.text());
        Ok(Value::undefined())
    }
}

impl Executable for Const {
    fn run(&self, _context: &mut Context) -> Result<Value> {
        Ok(match self {
            Self::String(s) => Value::string(s.as_ref()),
            Self::Int(i) => Value::integer(*i),
            Self::Float(f) => Value::float(*f),
            Self::Bool(b) => Value::boolean(*b),
            Self::Null => Value::null(),
        })
    }
}

impl Executable for Identifier {
    fn run(&self, context: &mut Context) -> Result<Value> {
        Ok(context.realm().environment.get_binding_value(self.as_ref()))
    }
}

impl Executable for ArrayDecl {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let mut values = Vec::with_capacity(self.as_ref().len());
        for element in self.as_ref() {
            values.push(element.run(context)?);
        }
        Ok(Value::array(values))
    }
}

impl Executable for ObjectDecl {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let mut properties = IndexMap::with_capacity(self.properties().len());
        for (key, value) in self.properties() {
            properties.insert(key.to_string(), value.run(context)?);
        }
        Ok(Value::object(Object::with_properties(properties)))
    }
}

impl Executable for Spread {
    fn run(&self, context: &mut Context) -> Result<Value> {
        // Argument lists unpack spreads before evaluation reaches here.
        context.throw_type_error("'*' spread is only valid inside an argument list")
    }
}
