//! `set` / `endset` parsing.

use super::super::cursor::Cursor;
use super::super::error::ParseResult;
use super::super::{expression, parse_nodes};
use crate::syntax::ast::node::{Set, SetTarget};
use crate::syntax::ast::{Keyword, Node, Punctuator};
use crate::syntax::lexer::TokenKind;

/// Parses a `set` statement; `{% set` has been consumed.
///
/// Grammar: `set name = expr`, `set a, b = expr`, `set ns.attr = expr`, or
/// the block form `set name %} body {% endset`.
pub(super) fn parse_set(cursor: &mut Cursor) -> ParseResult<Node> {
    let first = cursor.expect_identifier("set statement")?;

    if cursor.next_if_punc(Punctuator::Dot) {
        let field = cursor.expect_identifier("set statement")?;
        cursor.expect_punc(Punctuator::Assign, "set statement")?;
        let value = expression::parse_expression(cursor)?;
        cursor.expect(TokenKind::BlockEnd, "set statement")?;
        return Ok(Node::Set(Set::new(
            SetTarget::Attribute {
                object: first,
                field,
            },
            value,
        )));
    }

    if cursor.next_if_punc(Punctuator::Comma) {
        let mut names = vec![first];
        names.push(cursor.expect_identifier("set statement")?);
        while cursor.next_if_punc(Punctuator::Comma) {
            names.push(cursor.expect_identifier("set statement")?);
        }
        cursor.expect_punc(Punctuator::Assign, "set statement")?;
        let value = expression::parse_expression(cursor)?;
        cursor.expect(TokenKind::BlockEnd, "set statement")?;
        return Ok(Node::Set(Set::new(
            SetTarget::Tuple(names.into_boxed_slice()),
            value,
        )));
    }

    if cursor.next_if_punc(Punctuator::Assign) {
        let value = expression::parse_expression(cursor)?;
        cursor.expect(TokenKind::BlockEnd, "set statement")?;
        return Ok(Node::Set(Set::new(SetTarget::Ident(first), value)));
    }

    // Block form: render the body and assign the string.
    cursor.expect(TokenKind::BlockEnd, "set statement")?;
    let (body, _) = parse_nodes(cursor, &[Keyword::EndSet])?;
    cursor.expect(TokenKind::BlockEnd, "endset tag")?;
    Ok(Node::Set(Set::new_block(
        SetTarget::Ident(first),
        body.into(),
    )))
}
