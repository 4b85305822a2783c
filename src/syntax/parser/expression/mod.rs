//! Expression parsing.
//!
//! One function per precedence level, lowest binding first:
//! ternary, `or`, `and`, equality, relational/membership, additive and `~`,
//! multiplicative, unary, `**`, then the postfix forms (member access, calls,
//! filters and tests) on top of primaries. Constant subexpressions over
//! literals fold during the parse.

mod left_hand_side;
mod primary;

pub(in crate::syntax::parser) use left_hand_side::parse_filter_call;

use super::cursor::Cursor;
use super::error::ParseResult;
use crate::syntax::ast::node::operator::{BinOp, ConditionalOp, UnaryOp};
use crate::syntax::ast::op::{self, CompOp, LogOp, NumOp};
use crate::syntax::ast::{Const, Keyword, Node, Punctuator};
use crate::syntax::lexer::TokenKind;

/// Parses a full expression, including the right-associative ternary
/// `a if cond else b`.
pub(super) fn parse_expression(cursor: &mut Cursor) -> ParseResult<Node> {
    let expr = parse_or_expression(cursor)?;
    if !cursor.next_if_keyword(Keyword::If) {
        return Ok(expr);
    }

    let condition = parse_or_expression(cursor)?;
    let if_false = if cursor.next_if_keyword(Keyword::Else) {
        Some(parse_expression(cursor)?)
    } else {
        None
    };

    // A literal condition decides the branch at parse time.
    if let Node::Const(Const::Bool(cond)) = condition {
        return Ok(if cond {
            expr
        } else {
            if_false.unwrap_or(Node::Const(Const::Null))
        });
    }

    Ok(Node::ConditionalOp(ConditionalOp::new(
        condition, expr, if_false,
    )))
}

/// Parses an expression without the ternary level.
///
/// The `for` statement head uses this entry so that its trailing
/// `if condition` filter is not swallowed as a conditional expression.
pub(super) fn parse_or_expression(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut lhs = parse_and_expression(cursor)?;
    while cursor.next_if_keyword(Keyword::Or) {
        let rhs = parse_and_expression(cursor)?;
        lhs = Node::BinOp(BinOp::new(op::BinOp::Log(LogOp::Or), lhs, rhs));
    }
    Ok(lhs)
}

fn parse_and_expression(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut lhs = parse_equality(cursor)?;
    while cursor.next_if_keyword(Keyword::And) {
        let rhs = parse_equality(cursor)?;
        lhs = Node::BinOp(BinOp::new(op::BinOp::Log(LogOp::And), lhs, rhs));
    }
    Ok(lhs)
}

fn parse_equality(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut lhs = parse_relational(cursor)?;
    loop {
        let punc = match cursor.peek_kind() {
            Some(TokenKind::Punctuator(p @ Punctuator::Eq))
            | Some(TokenKind::Punctuator(p @ Punctuator::NotEq)) => *p,
            _ => break,
        };
        cursor.next();
        let op = punc.as_binop().expect("equality punctuators are operators");
        let rhs = parse_relational(cursor)?;
        lhs = Node::BinOp(BinOp::new(op, lhs, rhs));
    }
    Ok(lhs)
}

fn parse_relational(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut lhs = parse_additive(cursor)?;
    loop {
        let op = match cursor.peek_kind() {
            Some(TokenKind::Punctuator(Punctuator::LessThan)) => CompOp::LessThan,
            Some(TokenKind::Punctuator(Punctuator::LessThanOrEq)) => CompOp::LessThanOrEqual,
            Some(TokenKind::Punctuator(Punctuator::GreaterThan)) => CompOp::GreaterThan,
            Some(TokenKind::Punctuator(Punctuator::GreaterThanOrEq)) => {
                CompOp::GreaterThanOrEqual
            }
            Some(TokenKind::Keyword(Keyword::In)) => CompOp::In,
            Some(TokenKind::Keyword(Keyword::Not))
                if matches!(
                    cursor.peek_nth(1).map(|t| t.kind()),
                    Some(TokenKind::Keyword(Keyword::In))
                ) =>
            {
                cursor.next();
                CompOp::NotIn
            }
            _ => break,
        };
        cursor.next();
        let rhs = parse_additive(cursor)?;
        lhs = Node::BinOp(BinOp::new(op::BinOp::Comp(op), lhs, rhs));
    }
    Ok(lhs)
}

fn parse_additive(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut lhs = parse_multiplicative(cursor)?;
    loop {
        let punc = match cursor.peek_kind() {
            Some(TokenKind::Punctuator(p @ Punctuator::Add))
            | Some(TokenKind::Punctuator(p @ Punctuator::Sub))
            | Some(TokenKind::Punctuator(p @ Punctuator::Tilde)) => *p,
            _ => break,
        };
        cursor.next();
        let op = punc.as_binop().expect("additive punctuators are operators");
        let rhs = parse_multiplicative(cursor)?;
        lhs = make_binop(op, lhs, rhs);
    }
    Ok(lhs)
}

fn parse_multiplicative(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut lhs = parse_unary(cursor)?;
    loop {
        let punc = match cursor.peek_kind() {
            Some(TokenKind::Punctuator(p @ Punctuator::Mul))
            | Some(TokenKind::Punctuator(p @ Punctuator::Div))
            | Some(TokenKind::Punctuator(p @ Punctuator::IntDiv))
            | Some(TokenKind::Punctuator(p @ Punctuator::Mod)) => *p,
            _ => break,
        };
        cursor.next();
        let op = punc.as_binop().expect("multiplicative punctuators are operators");
        let rhs = parse_unary(cursor)?;
        lhs = make_binop(op, lhs, rhs);
    }
    Ok(lhs)
}

fn parse_unary(cursor: &mut Cursor) -> ParseResult<Node> {
    let op = match cursor.peek_kind() {
        Some(TokenKind::Keyword(Keyword::Not)) => op::UnaryOp::Not,
        Some(TokenKind::Punctuator(Punctuator::Sub)) => op::UnaryOp::Minus,
        Some(TokenKind::Punctuator(Punctuator::Add)) => op::UnaryOp::Plus,
        _ => return parse_pow(cursor),
    };
    cursor.next();
    let target = parse_unary(cursor)?;
    Ok(make_unary(op, target))
}

fn parse_pow(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut lhs = left_hand_side::parse_left_hand_side(cursor)?;
    while cursor.next_if_punc(Punctuator::Pow) {
        // The right side re-enters unary so `2 ** -3` parses, which also
        // makes chained `**` right-associative like Python's.
        let rhs = parse_unary(cursor)?;
        lhs = Node::BinOp(BinOp::new(op::BinOp::Num(NumOp::Pow), lhs, rhs));
    }
    Ok(lhs)
}

/// Builds a binary node, folding literal operands where that cannot change
/// observable behaviour.
fn make_binop(op: op::BinOp, lhs: Node, rhs: Node) -> Node {
    if let (Node::Const(a), Node::Const(b)) = (&lhs, &rhs) {
        if let Some(folded) = fold_constants(op, a, b) {
            return Node::Const(folded);
        }
    }
    Node::BinOp(BinOp::new(op, lhs, rhs))
}

/// Folds `+`, `-`, `*` over same-typed numeric literals and concatenation of
/// string literals. Anything that could fail at runtime (overflow, division)
/// is left to the interpreter.
fn fold_constants(op: op::BinOp, a: &Const, b: &Const) -> Option<Const> {
    match (op, a, b) {
        (op::BinOp::Num(NumOp::Add), Const::Int(x), Const::Int(y)) => {
            x.checked_add(*y).map(Const::Int)
        }
        (op::BinOp::Num(NumOp::Sub), Const::Int(x), Const::Int(y)) => {
            x.checked_sub(*y).map(Const::Int)
        }
        (op::BinOp::Num(NumOp::Mul), Const::Int(x), Const::Int(y)) => {
            x.checked_mul(*y).map(Const::Int)
        }
        (op::BinOp::Num(NumOp::Add), Const::Float(x), Const::Float(y)) => {
            Some(Const::Float(x + y))
        }
        (op::BinOp::Num(NumOp::Sub), Const::Float(x), Const::Float(y)) => {
            Some(Const::Float(x - y))
        }
        (op::BinOp::Num(NumOp::Mul), Const::Float(x), Const::Float(y)) => {
            Some(Const::Float(x * y))
        }
        (op::BinOp::Num(NumOp::Add), Const::String(x), Const::String(y))
        | (op::BinOp::Concat, Const::String(x), Const::String(y)) => {
            Some(Const::String(format!("{}{}", x, y).into()))
        }
        _ => None,
    }
}

/// Builds a unary node, folding `not` over booleans and sign over numerics.
fn make_unary(op: op::UnaryOp, target: Node) -> Node {
    if let Node::Const(c) = &target {
        let folded = match (op, c) {
            (op::UnaryOp::Not, Const::Bool(b)) => Some(Const::Bool(!b)),
            (op::UnaryOp::Minus, Const::Int(i)) => i.checked_neg().map(Const::Int),
            (op::UnaryOp::Minus, Const::Float(f)) => Some(Const::Float(-f)),
            (op::UnaryOp::Plus, Const::Int(i)) => Some(Const::Int(*i)),
            (op::UnaryOp::Plus, Const::Float(f)) => Some(Const::Float(*f)),
            _ => None,
        };
        if let Some(folded) = folded {
            return Node::Const(folded);
        }
    }
    Node::UnaryOp(UnaryOp::new(op, target))
}
