//! Numeric literal lexing.

use super::{Error, Lexer};
use crate::syntax::ast::Position;
use crate::syntax::lexer::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal: digits with an optional single `.` followed
    /// by fractional digits.
    ///
    /// The presence of the dot decides int versus float; an integer literal
    /// too large for `i64` falls back to a float.
    pub(super) fn lex_number(&mut self, start: Position) -> Result<(), Error> {
        let mut literal = self.cursor.take_while(|c| c.is_ascii_digit()).to_string();

        let is_float = self.cursor.peek() == Some('.')
            && self
                .cursor
                .peek_nth(1)
                .map(|c| c.is_ascii_digit())
                .unwrap_or(false);
        if is_float {
            self.cursor.take(1);
            literal.push('.');
            literal.push_str(self.cursor.take_while(|c| c.is_ascii_digit()));
        }

        let kind = if is_float {
            let num: f64 = fast_float::parse(&literal)
                .map_err(|_| Error::syntax(format!("invalid float literal '{}'", literal), start))?;
            TokenKind::numeric_literal(num)
        } else {
            match literal.parse::<i64>() {
                Ok(num) => TokenKind::numeric_literal(num),
                // Out of i64 range; keep the value as a float.
                Err(_) => {
                    let num: f64 = fast_float::parse(&literal).map_err(|_| {
                        Error::syntax(format!("invalid numeric literal '{}'", literal), start)
                    })?;
                    TokenKind::numeric_literal(num)
                }
            }
        };
        self.push_token(kind, start);
        Ok(())
    }
}
