//! Statement parsing.
//!
//! A statement opens on `{%` plus a keyword and, for block statements,
//! consumes everything through its matching `end...` tag.

mod conditional;
mod declaration;
mod iteration;
mod macro_def;

use super::cursor::Cursor;
use super::error::{ParseError, ParseResult};
use crate::syntax::ast::node::{Break, Continue};
use crate::syntax::ast::{Keyword, Node};
use crate::syntax::lexer::TokenKind;

/// Parses one statement, starting at its `{%` token.
pub(super) fn parse_statement(cursor: &mut Cursor) -> ParseResult<Node> {
    cursor.expect(TokenKind::BlockStart, "statement tag")?;
    let token = cursor.next_token()?;
    match token.kind() {
        TokenKind::Keyword(Keyword::If) => conditional::parse_if(cursor),
        TokenKind::Keyword(Keyword::For) => iteration::parse_for(cursor),
        TokenKind::Keyword(Keyword::Set) => declaration::parse_set(cursor),
        TokenKind::Keyword(Keyword::Macro) => macro_def::parse_macro(cursor),
        TokenKind::Keyword(Keyword::Call) => macro_def::parse_call_block(cursor),
        TokenKind::Keyword(Keyword::Filter) => macro_def::parse_filter_block(cursor),
        TokenKind::Keyword(Keyword::Break) => {
            cursor.expect(TokenKind::BlockEnd, "break statement")?;
            Ok(Node::Break(Break))
        }
        TokenKind::Keyword(Keyword::Continue) => {
            cursor.expect(TokenKind::BlockEnd, "continue statement")?;
            Ok(Node::Continue(Continue))
        }
        _ => Err(ParseError::unexpected(
            token.to_string(),
            token.span(),
            "unknown statement keyword or unmatched block closer",
        )),
    }
}
