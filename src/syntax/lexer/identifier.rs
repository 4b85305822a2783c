//! Identifier, keyword and word-literal lexing.

use super::Lexer;
use crate::syntax::ast::Position;
use crate::syntax::lexer::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Lexes an identifier-shaped word.
    ///
    /// Reserved words become keyword tokens, the boolean/null spellings
    /// (including their Python-style aliases) become literals, everything
    /// else is a plain identifier.
    pub(super) fn lex_identifier(&mut self, start: Position) {
        let word = self
            .cursor
            .take_while(|c| c.is_alphanumeric() || c == '_');

        let kind = match word {
            "true" | "True" => TokenKind::boolean_literal(true),
            "false" | "False" => TokenKind::boolean_literal(false),
            "none" | "None" | "null" => TokenKind::NullLiteral,
            _ => match word.parse() {
                Ok(keyword) => TokenKind::keyword(keyword),
                Err(_) => TokenKind::identifier(word),
            },
        };
        self.push_token(kind, start);
    }
}
