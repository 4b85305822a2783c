//! Operator kinds used by binary and unary expression nodes.

use std::fmt::{Display, Formatter, Result};

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumOp {
    /// `a + b`; also string and array concatenation.
    Add,
    /// `a - b`
    Sub,
    /// `a * b`; also string repetition.
    Mul,
    /// `a / b`; always produces a float.
    Div,
    /// `a // b`; floor division.
    IntDiv,
    /// `a % b`; ints only, the result takes the divisor's sign.
    Mod,
    /// `a ** b`
    Pow,
}

impl Display for NumOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}",
            match self {
                Self::Add => "+",
                Self::Sub => "-",
                Self::Mul => "*",
                Self::Div => "/",
                Self::IntDiv => "//",
                Self::Mod => "%",
                Self::Pow => "**",
            }
        )
    }
}

/// Comparison and membership operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    /// `a == b`; deep structural equality.
    Equal,
    /// `a != b`
    NotEqual,
    /// `a < b`
    LessThan,
    /// `a <= b`
    LessThanOrEqual,
    /// `a > b`
    GreaterThan,
    /// `a >= b`
    GreaterThanOrEqual,
    /// `a in b`
    In,
    /// `a not in b`
    NotIn,
}

impl Display for CompOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}",
            match self {
                Self::Equal => "==",
                Self::NotEqual => "!=",
                Self::LessThan => "<",
                Self::LessThanOrEqual => "<=",
                Self::GreaterThan => ">",
                Self::GreaterThanOrEqual => ">=",
                Self::In => "in",
                Self::NotIn => "not in",
            }
        )
    }
}

/// Short-circuiting logical operators.
///
/// These return one of their operands, not a boolean, preserving the
/// `x or default` idiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOp {
    /// `a and b`
    And,
    /// `a or b`
    Or,
}

impl Display for LogOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}",
            match self {
                Self::And => "and",
                Self::Or => "or",
            }
        )
    }
}

/// Any binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// An arithmetic operation.
    Num(NumOp),
    /// A comparison or membership operation.
    Comp(CompOp),
    /// A logical operation.
    Log(LogOp),
    /// `a ~ b`: concatenation of the stringified operands.
    Concat,
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Num(op) => Display::fmt(op, f),
            Self::Comp(op) => Display::fmt(op, f),
            Self::Log(op) => Display::fmt(op, f),
            Self::Concat => write!(f, "~"),
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `not a`; negated truthiness.
    Not,
    /// `-a`
    Minus,
    /// `+a`
    Plus,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}",
            match self {
                Self::Not => "not",
                Self::Minus => "-",
                Self::Plus => "+",
            }
        )
    }
}
