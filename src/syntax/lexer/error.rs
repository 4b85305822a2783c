//! This module contains the errors used by the lexer.

use crate::syntax::ast::Position;
use std::{error::Error as StdError, fmt};

/// An error that occurred while tokenizing the template source.
#[derive(Debug, Clone)]
pub enum Error {
    /// A malformed construct: an unterminated string or comment, or an
    /// unexpected character inside a tag.
    Syntax(Box<str>, Position),
}

impl Error {
    /// Creates a new syntax error at the given position.
    pub(super) fn syntax<M>(err: M, position: Position) -> Self
    where
        M: Into<Box<str>>,
    {
        Self::Syntax(err.into(), position)
    }

    /// The position the error occurred at.
    pub fn position(&self) -> Position {
        match self {
            Self::Syntax(_, position) => *position,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e, position) => write!(
                f,
                "{} at line {}, col {}",
                e,
                position.line_number(),
                position.column_number()
            ),
        }
    }
}

impl StdError for Error {}
