//! Evaluation of binary, unary and ternary operations.

use super::{Context, Executable};
use crate::syntax::ast::node::operator::{BinOp, ConditionalOp, UnaryOp};
use crate::syntax::ast::op;
use crate::value::Value;
use crate::Result;
use std::cmp::Ordering;

impl Executable for BinOp {
    fn run(&self, context: &mut Context) -> Result<Value> {
        match self.op() {
            // Logical operators short-circuit and yield an operand, not a
            // boolean, so `missing or 'default'` works.
            op::BinOp::Log(op::LogOp::And) => {
                let lhs = self.lhs().run(context)?;
                if !lhs.to_boolean() {
                    return Ok(lhs);
                }
                self.rhs().run(context)
            }
            op::BinOp::Log(op::LogOp::Or) => {
                let lhs = self.lhs().run(context)?;
                if lhs.to_boolean() {
                    return Ok(lhs);
                }
                self.rhs().run(context)
            }
            op::BinOp::Num(num_op) => {
                let lhs = self.lhs().run(context)?;
                let rhs = self.rhs().run(context)?;
                match num_op {
                    op::NumOp::Add => lhs.add(&rhs),
                    op::NumOp::Sub => lhs.sub(&rhs),
                    op::NumOp::Mul => lhs.mul(&rhs),
                    op::NumOp::Div => lhs.div(&rhs),
                    op::NumOp::IntDiv => lhs.int_div(&rhs),
                    op::NumOp::Mod => lhs.rem(&rhs),
                    op::NumOp::Pow => lhs.pow(&rhs),
                }
            }
            op::BinOp::Comp(comp_op) => {
                let lhs = self.lhs().run(context)?;
                let rhs = self.rhs().run(context)?;
                let result = match comp_op {
                    op::CompOp::Equal => lhs == rhs,
                    op::CompOp::NotEqual => lhs != rhs,
                    op::CompOp::LessThan => lhs.compare(&rhs)? == Ordering::Less,
                    op::CompOp::LessThanOrEqual => lhs.compare(&rhs)? != Ordering::Greater,
                    op::CompOp::GreaterThan => lhs.compare(&rhs)? == Ordering::Greater,
                    op::CompOp::GreaterThanOrEqual => lhs.compare(&rhs)? != Ordering::Less,
                    op::CompOp::In => rhs.contains(&lhs)?,
                    op::CompOp::NotIn => !rhs.contains(&lhs)?,
                };
                Ok(Value::boolean(result))
            }
            op::BinOp::Concat => {
                let lhs = self.lhs().run(context)?;
                let rhs = self.rhs().run(context)?;
                lhs.concat(&rhs)
            }
        }
    }
}

impl Executable for UnaryOp {
    fn run(&self, context: &mut Context) -> Result<Value> {
        let value = self.target().run(context)?;
        match self.op() {
            op::UnaryOp::Not => Ok(Value::boolean(!value.to_boolean())),
            op::UnaryOp::Minus => value.neg(),
            op::UnaryOp::Plus => value.pos(),
        }
    }
}

impl Executable for ConditionalOp {
    fn run(&self, context: &mut Context) -> Result<Value> {
        if self.condition().run(context)?.to_boolean() {
            self.if_true().run(context)
        } else {
            match self.if_false() {
                Some(if_false) => if_false.run(context),
                None => Ok(Value::null()),
            }
        }
    }
}
