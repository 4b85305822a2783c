//! `for` / `else` / `endfor` parsing.

use super::super::cursor::Cursor;
use super::super::error::ParseResult;
use super::super::{expression, parse_nodes};
use crate::syntax::ast::node::{ForLoop, StatementList};
use crate::syntax::ast::{Keyword, Node, Punctuator};
use crate::syntax::lexer::TokenKind;

/// Parses a `for` statement; `{% for` has been consumed.
///
/// The iterable is parsed without the ternary level so that a trailing
/// `if condition` belongs to the loop, not to the expression. A literal empty
/// array iterable folds the whole loop to its else branch.
pub(super) fn parse_for(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut vars = vec![cursor.expect_identifier("for statement")?];
    while cursor.next_if_punc(Punctuator::Comma) {
        vars.push(cursor.expect_identifier("for statement")?);
    }
    cursor.expect_keyword(Keyword::In, "for statement")?;

    let iterable = expression::parse_or_expression(cursor)?;
    let condition = if cursor.next_if_keyword(Keyword::If) {
        Some(expression::parse_expression(cursor)?)
    } else {
        None
    };
    cursor.expect(TokenKind::BlockEnd, "for statement")?;

    let (body, terminator) = parse_nodes(cursor, &[Keyword::Else, Keyword::EndFor])?;
    let terminator = terminator.expect("a stopped parse always yields its terminator");

    let else_node = if terminator == Keyword::Else {
        cursor.expect(TokenKind::BlockEnd, "else tag")?;
        let (else_body, _) = parse_nodes(cursor, &[Keyword::EndFor])?;
        cursor.expect(TokenKind::BlockEnd, "endfor tag")?;
        Some(StatementList::from(else_body))
    } else {
        cursor.expect(TokenKind::BlockEnd, "endfor tag")?;
        None
    };

    if let Node::ArrayDecl(arr) = &iterable {
        if arr.as_ref().is_empty() {
            return Ok(Node::StatementList(else_node.unwrap_or_default()));
        }
    }

    Ok(Node::ForLoop(ForLoop::new(
        vars,
        iterable,
        condition,
        body.into(),
        else_node,
    )))
}
