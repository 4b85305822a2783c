//! This module implements the tokens emitted by the template lexer.

use crate::syntax::ast::{Keyword, Punctuator, Span};
use std::fmt;

/// A single lexed unit: raw text, a delimiter, or a word inside a tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token kind, which contains the actual data of the token.
    kind: TokenKind,
    /// The token position in the original source code.
    span: Span,
}

impl Token {
    /// Creates a new token from its kind and span.
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Gets the kind of the token.
    #[inline]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Gets the token span in the original source code.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

/// A numeric literal, classified by the presence of a decimal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// An integer literal.
    Integer(i64),
    /// A float literal.
    Float(f64),
}

impl From<i64> for Numeric {
    #[inline]
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Numeric {
    #[inline]
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

/// The kinds of token the lexer produces.
///
/// Comments emit no token at all, and the whitespace-strip `-` markers are
/// consumed silently; only their effect on neighbouring text survives.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Raw template text outside any tag.
    Text(Box<str>),
    /// The `{{` delimiter.
    ExpressionStart,
    /// The `}}` delimiter.
    ExpressionEnd,
    /// The `{%` delimiter.
    BlockStart,
    /// The `%}` delimiter.
    BlockEnd,
    /// A boolean literal (`true`, `True`, `false`, `False`).
    BoolLiteral(bool),
    /// The `none` / `None` / `null` literal.
    NullLiteral,
    /// An identifier.
    Identifier(Box<str>),
    /// A reserved word.
    Keyword(Keyword),
    /// A numeric literal.
    NumericLiteral(Numeric),
    /// A string literal with escapes already resolved.
    StringLiteral(Box<str>),
    /// A punctuator or operator.
    Punctuator(Punctuator),
}

impl TokenKind {
    /// Creates a `Text` token kind.
    pub fn text<T>(text: T) -> Self
    where
        T: Into<Box<str>>,
    {
        Self::Text(text.into())
    }

    /// Creates a `BoolLiteral` token kind.
    pub fn boolean_literal(lit: bool) -> Self {
        Self::BoolLiteral(lit)
    }

    /// Creates an `Identifier` token kind.
    pub fn identifier<I>(ident: I) -> Self
    where
        I: Into<Box<str>>,
    {
        Self::Identifier(ident.into())
    }

    /// Creates a `Keyword` token kind.
    pub fn keyword(keyword: Keyword) -> Self {
        Self::Keyword(keyword)
    }

    /// Creates a `NumericLiteral` token kind.
    pub fn numeric_literal<N>(lit: N) -> Self
    where
        N: Into<Numeric>,
    {
        Self::NumericLiteral(lit.into())
    }

    /// Creates a `StringLiteral` token kind.
    pub fn string_literal<S>(lit: S) -> Self
    where
        S: Into<Box<str>>,
    {
        Self::StringLiteral(lit.into())
    }

    /// Creates a `Punctuator` token kind.
    pub fn punctuator(punc: Punctuator) -> Self {
        Self::Punctuator(punc)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::ExpressionStart => write!(f, "{{{{"),
            Self::ExpressionEnd => write!(f, "}}}}"),
            Self::BlockStart => write!(f, "{{%"),
            Self::BlockEnd => write!(f, "%}}"),
            Self::BoolLiteral(lit) => write!(f, "{}", lit),
            Self::NullLiteral => write!(f, "none"),
            Self::Identifier(ident) => write!(f, "{}", ident),
            Self::Keyword(keyword) => write!(f, "{}", keyword),
            Self::NumericLiteral(Numeric::Integer(num)) => write!(f, "{}", num),
            Self::NumericLiteral(Numeric::Float(num)) => write!(f, "{}", num),
            Self::StringLiteral(lit) => write!(f, "\"{}\"", lit),
            Self::Punctuator(punc) => write!(f, "{}", punc),
        }
    }
}
