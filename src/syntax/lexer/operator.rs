//! Punctuator and operator lexing.

use super::{Error, Lexer};
use crate::syntax::ast::{Position, Punctuator};
use crate::syntax::lexer::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Lexes a punctuator, matching multi-character operators greedily.
    ///
    /// Curly braces are counted here so that a `}` belonging to an object
    /// literal is never confused with a closing `}}` delimiter (which is
    /// handled before this runs, and only at depth zero).
    pub(super) fn lex_operator(&mut self, start: Position) -> Result<(), Error> {
        let c = self
            .cursor
            .next_char()
            .expect("operator lexing starts on a character");

        let punc = match c {
            '+' => Punctuator::Add,
            '-' => Punctuator::Sub,
            '~' => Punctuator::Tilde,
            '|' => Punctuator::Pipe,
            '.' => Punctuator::Dot,
            ',' => Punctuator::Comma,
            ':' => Punctuator::Colon,
            '(' => Punctuator::OpenParen,
            ')' => Punctuator::CloseParen,
            '[' => Punctuator::OpenBracket,
            ']' => Punctuator::CloseBracket,
            '%' => Punctuator::Mod,
            '*' => {
                if self.cursor.peek() == Some('*') {
                    self.cursor.take(1);
                    Punctuator::Pow
                } else {
                    Punctuator::Mul
                }
            }
            '/' => {
                if self.cursor.peek() == Some('/') {
                    self.cursor.take(1);
                    Punctuator::IntDiv
                } else {
                    Punctuator::Div
                }
            }
            '=' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.take(1);
                    Punctuator::Eq
                } else {
                    Punctuator::Assign
                }
            }
            '!' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.take(1);
                    Punctuator::NotEq
                } else {
                    return Err(Error::syntax("unexpected character '!'", start));
                }
            }
            '<' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.take(1);
                    Punctuator::LessThanOrEq
                } else {
                    Punctuator::LessThan
                }
            }
            '>' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.take(1);
                    Punctuator::GreaterThanOrEq
                } else {
                    Punctuator::GreaterThan
                }
            }
            '{' => {
                self.brace_depth += 1;
                Punctuator::OpenBlock
            }
            '}' => {
                if self.brace_depth == 0 {
                    return Err(Error::syntax("unexpected character '}'", start));
                }
                self.brace_depth -= 1;
                Punctuator::CloseBlock
            }
            other => {
                return Err(Error::syntax(
                    format!("unexpected character '{}' inside tag", other),
                    start,
                ))
            }
        };

        self.push_token(TokenKind::punctuator(punc), start);
        Ok(())
    }
}
