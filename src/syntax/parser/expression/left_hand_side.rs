//! Postfix expressions: member access, indexing, slicing, calls, filters and
//! tests.

use super::super::cursor::Cursor;
use super::super::error::{ParseError, ParseResult};
use super::{parse_expression, primary::parse_primary};
use crate::syntax::ast::node::{
    Call, FilterCall, FilterExpr, GetConstField, GetField, Slice, Spread, TestExpr,
};
use crate::syntax::ast::{Keyword, Node, Punctuator};
use crate::syntax::lexer::TokenKind;

/// Parses a primary expression followed by any chain of postfix forms.
pub(super) fn parse_left_hand_side(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut lhs = parse_primary(cursor)?;

    loop {
        match cursor.peek_kind() {
            Some(TokenKind::Punctuator(Punctuator::Dot)) => {
                cursor.next();
                let field = cursor.expect_identifier("member access")?;
                lhs = Node::GetConstField(GetConstField::new(lhs, field));
            }
            Some(TokenKind::Punctuator(Punctuator::OpenBracket)) => {
                cursor.next();
                lhs = parse_index_or_slice(cursor, lhs)?;
            }
            Some(TokenKind::Punctuator(Punctuator::OpenParen)) => {
                cursor.next();
                let (args, kwargs) = parse_arguments(cursor)?;
                lhs = Node::Call(Call::new(lhs, args, kwargs));
            }
            Some(TokenKind::Punctuator(Punctuator::Pipe)) => {
                cursor.next();
                let call = parse_filter_call(cursor)?;
                lhs = Node::FilterExpr(FilterExpr::new(lhs, call));
            }
            Some(TokenKind::Keyword(Keyword::Is)) => {
                cursor.next();
                let negated = cursor.next_if_keyword(Keyword::Not);
                let name = parse_test_name(cursor)?;
                let args = if cursor.next_if_punc(Punctuator::OpenParen) {
                    let (args, kwargs) = parse_arguments(cursor)?;
                    if !kwargs.is_empty() {
                        let position = cursor
                            .peek()
                            .map(|t| t.span().start())
                            .unwrap_or_else(|| crate::syntax::ast::Position::new(1, 1));
                        return Err(ParseError::general(
                            "tests take no keyword arguments",
                            position,
                        ));
                    }
                    args
                } else {
                    Vec::new()
                };
                lhs = Node::TestExpr(TestExpr::new(lhs, name, args, negated));
            }
            _ => break,
        }
    }

    Ok(lhs)
}

/// Parses one filter of a chain: its name and optional argument list.
pub(in crate::syntax::parser) fn parse_filter_call(cursor: &mut Cursor) -> ParseResult<FilterCall> {
    let name = cursor.expect_identifier("filter name")?;
    let (args, kwargs) = if cursor.next_if_punc(Punctuator::OpenParen) {
        parse_arguments(cursor)?
    } else {
        (Vec::new(), Vec::new())
    };
    Ok(FilterCall::new(name, args, kwargs))
}

/// Parses a test name after `is [not]`.
///
/// Besides identifiers, the comparison punctuators and the `in` keyword are
/// valid test names (`x is ==(1)`, `x is in([1, 2])`).
fn parse_test_name(cursor: &mut Cursor) -> ParseResult<Box<str>> {
    let token = cursor.next_token()?;
    match token.kind() {
        TokenKind::Identifier(name) => Ok(name.clone()),
        TokenKind::Keyword(Keyword::In) => Ok(Box::from("in")),
        TokenKind::Punctuator(punc) => match punc {
            Punctuator::Eq
            | Punctuator::NotEq
            | Punctuator::LessThan
            | Punctuator::LessThanOrEq
            | Punctuator::GreaterThan
            | Punctuator::GreaterThanOrEq => Ok(Box::from(punc.as_str())),
            _ => Err(ParseError::expected(
                vec!["test name".to_string()],
                token.to_string(),
                token.span(),
                "test expression",
            )),
        },
        _ => Err(ParseError::expected(
            vec!["test name".to_string()],
            token.to_string(),
            token.span(),
            "test expression",
        )),
    }
}

/// Parses `obj[...]` where the bracket has been consumed: either a computed
/// index or a `start:stop:step` slice.
fn parse_index_or_slice(cursor: &mut Cursor, obj: Node) -> ParseResult<Node> {
    let start = match cursor.peek_kind() {
        Some(TokenKind::Punctuator(Punctuator::Colon)) => None,
        _ => Some(parse_expression(cursor)?),
    };

    if !cursor.next_if_punc(Punctuator::Colon) {
        cursor.expect_punc(Punctuator::CloseBracket, "index expression")?;
        let field = start.expect("an index without a colon has an expression");
        return Ok(Node::GetField(GetField::new(obj, field)));
    }

    let stop = match cursor.peek_kind() {
        Some(TokenKind::Punctuator(Punctuator::Colon))
        | Some(TokenKind::Punctuator(Punctuator::CloseBracket)) => None,
        _ => Some(parse_expression(cursor)?),
    };
    let step = if cursor.next_if_punc(Punctuator::Colon) {
        match cursor.peek_kind() {
            Some(TokenKind::Punctuator(Punctuator::CloseBracket)) => None,
            _ => Some(parse_expression(cursor)?),
        }
    } else {
        None
    };
    cursor.expect_punc(Punctuator::CloseBracket, "slice expression")?;
    Ok(Node::Slice(Slice::new(obj, start, stop, step)))
}

/// Parses a call argument list; the opening paren has been consumed.
///
/// Handles `*iterable` spreads, keyword arguments and trailing commas.
/// Positional arguments may not follow keyword arguments.
pub(in crate::syntax::parser) fn parse_arguments(
    cursor: &mut Cursor,
) -> ParseResult<(Vec<Node>, Vec<(Box<str>, Node)>)> {
    let mut args = Vec::new();
    let mut kwargs: Vec<(Box<str>, Node)> = Vec::new();

    loop {
        if cursor.next_if_punc(Punctuator::CloseParen) {
            break;
        }

        if cursor.next_if_punc(Punctuator::Mul) {
            let target = parse_expression(cursor)?;
            args.push(Node::Spread(Spread::new(target)));
        } else if is_kwarg_start(cursor) {
            let name = cursor.expect_identifier("keyword argument")?;
            cursor.expect_punc(Punctuator::Assign, "keyword argument")?;
            let value = parse_expression(cursor)?;
            kwargs.push((name, value));
        } else {
            let value = parse_expression(cursor)?;
            if !kwargs.is_empty() {
                let position = cursor
                    .peek()
                    .map(|t| t.span().start())
                    .unwrap_or_else(|| crate::syntax::ast::Position::new(1, 1));
                return Err(ParseError::general(
                    "positional argument follows keyword argument",
                    position,
                ));
            }
            args.push(value);
        }

        if !cursor.next_if_punc(Punctuator::Comma) {
            cursor.expect_punc(Punctuator::CloseParen, "argument list")?;
            break;
        }
    }

    Ok((args, kwargs))
}

fn is_kwarg_start(cursor: &Cursor) -> bool {
    matches!(cursor.peek_kind(), Some(TokenKind::Identifier(_)))
        && matches!(
            cursor.peek_nth(1).map(|t| t.kind()),
            Some(TokenKind::Punctuator(Punctuator::Assign))
        )
}
