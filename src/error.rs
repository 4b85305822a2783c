//! The error types surfaced by template compilation and rendering.
//!
//! Each pipeline stage has its own error type; this module sums them into the
//! single [`Error`] returned by [`Template::new`](crate::Template::new) and
//! [`Template::render`](crate::Template::render).

use crate::syntax::{lexer::Error as LexError, parser::ParseError};
use std::{error, fmt};

/// An error produced while compiling or rendering a template.
#[derive(Debug)]
pub enum Error {
    /// The lexer failed to tokenize the source.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// Evaluation of the template failed.
    Runtime(RuntimeError),
    /// Reserved for structured syntax diagnostics distinct from parse errors.
    Syntax(SyntaxError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "lex error: {}", e),
            Self::Parse(e) => write!(f, "parse error: {}", e),
            Self::Runtime(e) => write!(f, "runtime error: {}", e),
            Self::Syntax(e) => write!(f, "syntax error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Syntax(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

/// An error raised while evaluating a template.
///
/// Runtime errors carry a human-readable message; they are normally built
/// through the `throw_*` helpers on [`Context`](crate::Context).
#[derive(Debug, Clone)]
pub struct RuntimeError {
    message: Box<str>,
}

impl RuntimeError {
    /// Creates a new runtime error with the given message.
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Box<str>>,
    {
        Self {
            message: message.into(),
        }
    }

    /// Gets the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl error::Error for RuntimeError {}

/// Placeholder for future structured syntax diagnostics.
///
/// Nothing constructs this today; it exists so the public error enum is stable
/// once richer diagnostics land.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    message: Box<str>,
}

impl SyntaxError {
    /// Creates a new syntax error with the given message.
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Box<str>>,
    {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl error::Error for SyntaxError {}
