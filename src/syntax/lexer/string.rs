//! String literal lexing.

use super::{Error, Lexer};
use crate::syntax::ast::Position;
use crate::syntax::lexer::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Lexes a `'...'` or `"..."` string literal.
    ///
    /// Recognised escapes are `\n \t \r \b \f \v \\ \" \'`; any other escape
    /// produces the escaped character itself.
    pub(super) fn lex_string(&mut self, start: Position) -> Result<(), Error> {
        let quote = self
            .cursor
            .next_char()
            .expect("string lexing starts on a quote");
        let mut literal = String::new();

        loop {
            let c = match self.cursor.next_char() {
                Some(c) => c,
                None => return Err(Error::syntax("unterminated string literal", start)),
            };
            if c == quote {
                break;
            }
            if c != '\\' {
                literal.push(c);
                continue;
            }
            let escaped = match self.cursor.next_char() {
                Some(c) => c,
                None => return Err(Error::syntax("unterminated string literal", start)),
            };
            literal.push(match escaped {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                'b' => '\u{0008}',
                'f' => '\u{000C}',
                'v' => '\u{000B}',
                other => other,
            });
        }

        self.push_token(TokenKind::string_literal(literal), start);
        Ok(())
    }
}
