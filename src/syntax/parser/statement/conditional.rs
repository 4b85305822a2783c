//! `if` / `elif` / `else` / `endif` parsing.

use super::super::cursor::Cursor;
use super::super::error::ParseResult;
use super::super::{expression, parse_nodes};
use crate::syntax::ast::node::{If, StatementList};
use crate::syntax::ast::{Const, Keyword, Node};
use crate::syntax::lexer::TokenKind;

/// Parses an `if` statement; `{% if` has been consumed.
///
/// `elif` recurses, building a nested `If` in the else branch. A boolean
/// literal condition folds to the taken branch at parse time.
pub(super) fn parse_if(cursor: &mut Cursor) -> ParseResult<Node> {
    let cond = expression::parse_expression(cursor)?;
    cursor.expect(TokenKind::BlockEnd, "if statement")?;

    let (body, terminator) =
        parse_nodes(cursor, &[Keyword::Elif, Keyword::Else, Keyword::EndIf])?;
    let terminator = terminator.expect("a stopped parse always yields its terminator");

    let else_node = match terminator {
        Keyword::Elif => Some(StatementList::from(vec![parse_if(cursor)?])),
        Keyword::Else => {
            cursor.expect(TokenKind::BlockEnd, "else tag")?;
            let (else_body, _) = parse_nodes(cursor, &[Keyword::EndIf])?;
            cursor.expect(TokenKind::BlockEnd, "endif tag")?;
            Some(else_body.into())
        }
        _ => {
            cursor.expect(TokenKind::BlockEnd, "endif tag")?;
            None
        }
    };

    if let Node::Const(Const::Bool(cond)) = cond {
        let taken = if cond {
            StatementList::from(body)
        } else {
            else_node.unwrap_or_default()
        };
        return Ok(Node::StatementList(taken));
    }

    Ok(Node::If(If::new(cond, body.into(), else_node)))
}
