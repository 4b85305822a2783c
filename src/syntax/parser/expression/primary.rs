//! Primary expressions: literals, collections, parentheses and identifiers.

use super::super::cursor::Cursor;
use super::super::error::{ParseError, ParseResult};
use super::parse_expression;
use crate::syntax::ast::node::{ArrayDecl, Identifier, ObjectDecl};
use crate::syntax::ast::{Const, Node, Punctuator};
use crate::syntax::lexer::{Numeric, TokenKind};

/// Parses a primary expression.
pub(super) fn parse_primary(cursor: &mut Cursor) -> ParseResult<Node> {
    let token = cursor.next_token()?;
    match token.kind() {
        TokenKind::BoolLiteral(b) => Ok(Node::Const(Const::Bool(*b))),
        TokenKind::NullLiteral => Ok(Node::Const(Const::Null)),
        TokenKind::StringLiteral(s) => Ok(Node::Const(Const::String(s.clone()))),
        TokenKind::NumericLiteral(Numeric::Integer(i)) => Ok(Node::Const(Const::Int(*i))),
        TokenKind::NumericLiteral(Numeric::Float(f)) => Ok(Node::Const(Const::Float(*f))),
        TokenKind::Identifier(name) => Ok(Node::Identifier(Identifier::from(name.clone()))),
        TokenKind::Punctuator(Punctuator::OpenParen) => {
            let expr = parse_expression(cursor)?;
            cursor.expect_punc(Punctuator::CloseParen, "parenthesised expression")?;
            Ok(expr)
        }
        TokenKind::Punctuator(Punctuator::OpenBracket) => parse_array(cursor),
        TokenKind::Punctuator(Punctuator::OpenBlock) => parse_object(cursor),
        _ => Err(ParseError::expected(
            vec!["expression".to_string()],
            token.to_string(),
            token.span(),
            "primary expression",
        )),
    }
}

/// Parses the elements of an `[a, b, c]` literal; the opening bracket has
/// been consumed.
fn parse_array(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut elements = Vec::new();
    loop {
        if cursor.next_if_punc(Punctuator::CloseBracket) {
            break;
        }
        elements.push(parse_expression(cursor)?);
        if !cursor.next_if_punc(Punctuator::Comma) {
            cursor.expect_punc(Punctuator::CloseBracket, "array literal")?;
            break;
        }
    }
    Ok(Node::ArrayDecl(ArrayDecl::from(elements)))
}

/// Parses the entries of a `{"key": value}` literal; the opening brace has
/// been consumed. Keys must be string literals.
fn parse_object(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut properties = Vec::new();
    loop {
        if cursor.next_if_punc(Punctuator::CloseBlock) {
            break;
        }
        let token = cursor.next_token()?;
        let key = match token.kind() {
            TokenKind::StringLiteral(s) => s.clone(),
            _ => {
                return Err(ParseError::general(
                    "object keys must be string literals",
                    token.span().start(),
                ))
            }
        };
        cursor.expect_punc(Punctuator::Colon, "object literal")?;
        let value = parse_expression(cursor)?;
        properties.push((key, value));
        if !cursor.next_if_punc(Punctuator::Comma) {
            cursor.expect_punc(Punctuator::CloseBlock, "object literal")?;
            break;
        }
    }
    Ok(Node::ObjectDecl(ObjectDecl::from(properties)))
}
