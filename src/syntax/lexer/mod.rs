//! A lexical analyzer for template source.
//!
//! The lexer splits its input into raw text runs and tags, and tokenizes tag
//! contents into identifiers, keywords, literals and punctuators. It owns the
//! whitespace-strip `-` markers: a trailing `-` on an opening delimiter trims
//! the preceding text token, a leading `-` on a closing delimiter arms a flag
//! that trims the next one. Comments are consumed here and emit no token.

#[cfg(test)]
mod tests;

mod cursor;
pub mod error;
mod identifier;
mod number;
mod operator;
mod string;
pub mod token;

pub use self::{
    error::Error,
    token::{Numeric, Token, TokenKind},
};

use self::cursor::Cursor;
use crate::syntax::ast::Position;

/// Which kind of tag the lexer is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    /// Between `{{` and `}}`.
    Expression,
    /// Between `{%` and `%}`.
    Block,
}

/// A lexical analyzer for template source.
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character cursor over the source.
    cursor: Cursor<'a>,
    /// The tokens generated so far.
    tokens: Vec<Token>,
    /// The tag currently being lexed, if any.
    tag: Option<TagKind>,
    /// Depth of `{`/`}` literals inside the current tag, so a `}` inside an
    /// object literal is not mistaken for a closing delimiter.
    brace_depth: u32,
    /// Whether the next text token must strip its leading whitespace.
    strip_next_text: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            tag: None,
            brace_depth: 0,
            strip_next_text: false,
        }
    }

    /// Tokenizes the whole source.
    pub fn lex(mut self) -> Result<Vec<Token>, Error> {
        loop {
            if self.tag.is_some() {
                self.lex_tag()?;
            } else if !self.lex_text()? {
                break;
            }
        }
        Ok(self.tokens)
    }

    /// Pushes a token spanning from `start` to the current position.
    fn push_token(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        self.tokens
            .push(Token::new(kind, (start..end).into_span()));
    }

    /// Lexes one run of raw text up to the next delimiter.
    ///
    /// Returns `false` once the end of the source is reached.
    fn lex_text(&mut self) -> Result<bool, Error> {
        let start = self.cursor.position();
        let mut text = String::new();

        let opened = loop {
            match self.cursor.peek() {
                None => break None,
                Some('{') => match self.cursor.peek_nth(1) {
                    Some(open @ '{') | Some(open @ '%') | Some(open @ '#') => break Some(open),
                    _ => {
                        text.push('{');
                        self.cursor.take(1);
                    }
                },
                Some(c) => {
                    text.push(c);
                    self.cursor.take(1);
                }
            }
        };

        let delimiter_start = self.cursor.position();
        let mut strip_previous = false;
        if opened.is_some() {
            self.cursor.take(2);
            if self.cursor.peek() == Some('-') {
                self.cursor.take(1);
                strip_previous = true;
            }
        }

        // Apply whitespace control to the collected run before pushing it.
        let mut text = text.as_str();
        if self.strip_next_text {
            self.strip_next_text = false;
            text = text.trim_start();
        }
        if strip_previous {
            text = text.trim_end();
        }
        if !text.is_empty() {
            let kind = TokenKind::text(text);
            let end = delimiter_start;
            self.tokens.push(Token::new(kind, (start..end).into_span()));
        }

        match opened {
            None => Ok(false),
            Some('#') => {
                self.lex_comment(delimiter_start)?;
                Ok(true)
            }
            Some(open) => {
                let kind = if open == '{' {
                    self.tag = Some(TagKind::Expression);
                    TokenKind::ExpressionStart
                } else {
                    self.tag = Some(TagKind::Block);
                    TokenKind::BlockStart
                };
                self.push_token(kind, delimiter_start);
                Ok(true)
            }
        }
    }

    /// Consumes a `{# ... #}` comment; comments produce no token.
    fn lex_comment(&mut self, start: Position) -> Result<(), Error> {
        loop {
            if self.cursor.starts_with("-#}") {
                self.cursor.take(3);
                self.strip_next_text = true;
                return Ok(());
            }
            if self.cursor.starts_with("#}") {
                self.cursor.take(2);
                return Ok(());
            }
            if self.cursor.next_char().is_none() {
                return Err(Error::syntax("unterminated comment", start));
            }
        }
    }

    /// Lexes a single token inside a tag, or the closing delimiter.
    fn lex_tag(&mut self) -> Result<(), Error> {
        self.cursor.take_while(char::is_whitespace);
        let start = self.cursor.position();
        let tag = self.tag.expect("lex_tag called outside of a tag");

        let c = match self.cursor.peek() {
            Some(c) => c,
            None => {
                return Err(Error::syntax(
                    "unexpected end of template inside tag",
                    start,
                ))
            }
        };

        // A `-` directly before the closing delimiter is part of it.
        let close = match tag {
            TagKind::Expression => "}}",
            TagKind::Block => "%}",
        };
        let at_depth = tag == TagKind::Block || self.brace_depth == 0;
        if c == '-' && at_depth && self.cursor.remainder()[1..].starts_with(close) {
            self.cursor.take(3);
            self.finish_tag(tag, start, true);
            return Ok(());
        }
        if tag == TagKind::Expression && self.brace_depth == 0 && self.cursor.starts_with("}}") {
            self.cursor.take(2);
            self.finish_tag(tag, start, false);
            return Ok(());
        }
        if tag == TagKind::Block && self.cursor.starts_with("%}") {
            self.cursor.take(2);
            self.finish_tag(tag, start, false);
            return Ok(());
        }

        if c.is_alphabetic() || c == '_' {
            self.lex_identifier(start);
            Ok(())
        } else if c.is_ascii_digit() {
            self.lex_number(start)
        } else if c == '"' || c == '\'' {
            self.lex_string(start)
        } else {
            self.lex_operator(start)
        }
    }

    /// Closes the current tag and arms the strip flag if requested.
    fn finish_tag(&mut self, tag: TagKind, start: Position, strip_following: bool) {
        let kind = match tag {
            TagKind::Expression => TokenKind::ExpressionEnd,
            TagKind::Block => TokenKind::BlockEnd,
        };
        self.push_token(kind, start);
        self.tag = None;
        self.brace_depth = 0;
        if strip_following {
            self.strip_next_text = true;
        }
    }
}

/// Internal adapter turning a position range into a span.
trait IntoSpan {
    fn into_span(self) -> crate::syntax::ast::Span;
}

impl IntoSpan for std::ops::Range<Position> {
    fn into_span(self) -> crate::syntax::ast::Span {
        crate::syntax::ast::Span::new(self.start, self.end.max(self.start))
    }
}
