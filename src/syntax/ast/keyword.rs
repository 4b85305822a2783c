//! The reserved words of the template statement language.

use std::{
    convert::TryFrom,
    error,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

/// Keywords carry special meaning inside `{% %}` and `{{ }}` tags; an
/// identifier spelling one of these always lexes as the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// The `if` keyword, both the statement and the inline ternary form.
    If,
    /// The `elif` keyword.
    Elif,
    /// The `else` keyword.
    Else,
    /// The `endif` block closer.
    EndIf,
    /// The `for` keyword.
    For,
    /// The `endfor` block closer.
    EndFor,
    /// The `in` keyword; also the membership operator.
    In,
    /// The `not` keyword.
    Not,
    /// The `and` keyword.
    And,
    /// The `or` keyword.
    Or,
    /// The `is` keyword applying a test.
    Is,
    /// The `set` keyword.
    Set,
    /// The `endset` block closer.
    EndSet,
    /// The `macro` keyword.
    Macro,
    /// The `endmacro` block closer.
    EndMacro,
    /// The `call` keyword.
    Call,
    /// The `endcall` block closer.
    EndCall,
    /// The `filter` keyword.
    Filter,
    /// The `endfilter` block closer.
    EndFilter,
    /// The `break` keyword.
    Break,
    /// The `continue` keyword.
    Continue,
}

impl Keyword {
    /// The keyword as it is spelled in template source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::EndIf => "endif",
            Self::For => "for",
            Self::EndFor => "endfor",
            Self::In => "in",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
            Self::Is => "is",
            Self::Set => "set",
            Self::EndSet => "endset",
            Self::Macro => "macro",
            Self::EndMacro => "endmacro",
            Self::Call => "call",
            Self::EndCall => "endcall",
            Self::Filter => "filter",
            Self::EndFilter => "endfilter",
            Self::Break => "break",
            Self::Continue => "continue",
        }
    }
}

/// The error raised when a string is not a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordError;

impl Display for KeywordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "invalid token")
    }
}

impl error::Error for KeywordError {}

impl FromStr for Keyword {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "if" => Ok(Self::If),
            "elif" => Ok(Self::Elif),
            "else" => Ok(Self::Else),
            "endif" => Ok(Self::EndIf),
            "for" => Ok(Self::For),
            "endfor" => Ok(Self::EndFor),
            "in" => Ok(Self::In),
            "not" => Ok(Self::Not),
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            "is" => Ok(Self::Is),
            "set" => Ok(Self::Set),
            "endset" => Ok(Self::EndSet),
            "macro" => Ok(Self::Macro),
            "endmacro" => Ok(Self::EndMacro),
            "call" => Ok(Self::Call),
            "endcall" => Ok(Self::EndCall),
            "filter" => Ok(Self::Filter),
            "endfilter" => Ok(Self::EndFilter),
            "break" => Ok(Self::Break),
            "continue" => Ok(Self::Continue),
            _ => Err(KeywordError),
        }
    }
}

impl TryFrom<&str> for Keyword {
    type Error = KeywordError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str(self.as_str())
    }
}
