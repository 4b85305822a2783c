//! The template parser.
//!
//! A single-pass recursive descent over the token stream. Text tokens become
//! text nodes (adjacent runs coalesced), `{{ ... }}` becomes an expression
//! node, and `{% ... %}` dispatches on its leading keyword to a statement
//! parser that consumes everything through its matching `end...` tag. The
//! first failure aborts the parse; there is no error recovery.

#[cfg(test)]
mod tests;

mod cursor;
pub mod error;
mod expression;
mod statement;

pub use error::{ParseError, ParseResult};

use self::cursor::Cursor;
use crate::syntax::ast::node::{StatementList, Text};
use crate::syntax::ast::{Keyword, Node};
use crate::syntax::lexer::{Token, TokenKind};

/// The template parser.
#[derive(Debug)]
pub struct Parser {
    /// The cursor over the input tokens.
    cursor: Cursor,
}

impl Parser {
    /// Creates a new parser over `tokens`.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parses the whole token stream into a template body.
    pub fn parse_all(&mut self) -> ParseResult<StatementList> {
        let (items, _) = parse_nodes(&mut self.cursor, &[])?;
        Ok(items.into())
    }
}

/// Parses template-level nodes until the end of input, or until a `{%` tag
/// opening with one of the `stop` keywords is reached.
///
/// When stopped by a keyword, the `{%` and the keyword itself have been
/// consumed; the caller finishes that tag. Returns the collected nodes and
/// the keyword that stopped the parse, if any.
fn parse_nodes(
    cursor: &mut Cursor,
    stop: &[Keyword],
) -> ParseResult<(Vec<Node>, Option<Keyword>)> {
    let mut items: Vec<Node> = Vec::new();

    loop {
        let token = match cursor.peek() {
            Some(token) => token,
            None if stop.is_empty() => return Ok((items, None)),
            None => return Err(ParseError::AbruptEnd),
        };

        match token.kind() {
            TokenKind::Text(_) => {
                let token = cursor.next_token()?;
                let text = match token.kind() {
                    TokenKind::Text(text) => text.clone(),
                    _ => unreachable!("peeked a text token"),
                };
                // Coalesce adjacent text nodes (comments can split a run).
                if let Some(Node::Text(last)) = items.last_mut() {
                    let merged = format!("{}{}", last.text(), text);
                    *last = Text::new(merged);
                } else {
                    items.push(Node::Text(Text::new(text)));
                }
            }
            TokenKind::ExpressionStart => {
                cursor.next_token()?;
                let expr = expression::parse_expression(cursor)?;
                cursor.expect(TokenKind::ExpressionEnd, "expression tag")?;
                items.push(expr);
            }
            TokenKind::BlockStart => {
                if let Some(TokenKind::Keyword(keyword)) =
                    cursor.peek_nth(1).map(Token::kind)
                {
                    if stop.contains(keyword) {
                        let keyword = *keyword;
                        cursor.next_token()?;
                        cursor.next_token()?;
                        return Ok((items, Some(keyword)));
                    }
                }
                items.push(statement::parse_statement(cursor)?);
            }
            _ => {
                let token = cursor.next_token()?;
                return Err(ParseError::unexpected(
                    token.to_string(),
                    token.span(),
                    "expected text, an expression or a statement",
                ));
            }
        }
    }
}
