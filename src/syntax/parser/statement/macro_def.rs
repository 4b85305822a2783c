//! `macro`, `call` and `filter` block parsing.

use super::super::cursor::Cursor;
use super::super::error::{ParseError, ParseResult};
use super::super::{expression, parse_nodes};
use crate::syntax::ast::node::{CallBlock, FilterBlock, FormalParameter, MacroDecl};
use crate::syntax::ast::{Keyword, Node, Punctuator};
use crate::syntax::lexer::TokenKind;

/// Parses a macro definition; `{% macro` has been consumed.
pub(super) fn parse_macro(cursor: &mut Cursor) -> ParseResult<Node> {
    let name = cursor.expect_identifier("macro statement")?;
    cursor.expect_punc(Punctuator::OpenParen, "macro statement")?;

    let mut parameters = Vec::new();
    loop {
        if cursor.next_if_punc(Punctuator::CloseParen) {
            break;
        }
        let param = cursor.expect_identifier("macro parameters")?;
        let init = if cursor.next_if_punc(Punctuator::Assign) {
            Some(expression::parse_expression(cursor)?)
        } else {
            None
        };
        parameters.push(FormalParameter::new(param, init));
        if !cursor.next_if_punc(Punctuator::Comma) {
            cursor.expect_punc(Punctuator::CloseParen, "macro parameters")?;
            break;
        }
    }

    cursor.expect(TokenKind::BlockEnd, "macro statement")?;
    let (body, _) = parse_nodes(cursor, &[Keyword::EndMacro])?;
    cursor.expect(TokenKind::BlockEnd, "endmacro tag")?;
    Ok(Node::MacroDecl(MacroDecl::new(name, parameters, body.into())))
}

/// Parses a `call` block; `{% call` has been consumed.
///
/// Grammar: `call [(params)] callee(args) %} body {% endcall`.
pub(super) fn parse_call_block(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut caller_parameters = Vec::new();
    // A `(` directly after `call` declares the caller's own parameters.
    if cursor.next_if_punc(Punctuator::OpenParen) {
        loop {
            if cursor.next_if_punc(Punctuator::CloseParen) {
                break;
            }
            caller_parameters.push(cursor.expect_identifier("call block parameters")?);
            if !cursor.next_if_punc(Punctuator::Comma) {
                cursor.expect_punc(Punctuator::CloseParen, "call block parameters")?;
                break;
            }
        }
    }

    let callee_position = cursor
        .peek()
        .map(|t| t.span().start())
        .unwrap_or_else(|| crate::syntax::ast::Position::new(1, 1));
    let expr = expression::parse_expression(cursor)?;
    let call = match expr {
        Node::Call(call) => call,
        _ => {
            return Err(ParseError::general(
                "a call block must invoke a callable",
                callee_position,
            ))
        }
    };

    cursor.expect(TokenKind::BlockEnd, "call statement")?;
    let (body, _) = parse_nodes(cursor, &[Keyword::EndCall])?;
    cursor.expect(TokenKind::BlockEnd, "endcall tag")?;
    Ok(Node::CallBlock(CallBlock::new(
        caller_parameters,
        call,
        body.into(),
    )))
}

/// Parses a `filter` block; `{% filter` has been consumed.
///
/// The tag accepts a chain: `{% filter upper | trim %}`.
pub(super) fn parse_filter_block(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut filters = vec![expression::parse_filter_call(cursor)?];
    while cursor.next_if_punc(Punctuator::Pipe) {
        filters.push(expression::parse_filter_call(cursor)?);
    }

    cursor.expect(TokenKind::BlockEnd, "filter statement")?;
    let (body, _) = parse_nodes(cursor, &[Keyword::EndFilter])?;
    cursor.expect(TokenKind::BlockEnd, "endfilter tag")?;
    Ok(Node::FilterBlock(FilterBlock::new(filters, body.into())))
}
