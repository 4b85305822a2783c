//! The textual forms of values.
//!
//! `Display` is the render form written to the output buffer: `null` and
//! `undefined` are the empty string, numbers use their natural spelling
//! (floats in shortest round-trip form) and containers use a bracketed
//! diagnostic form. [`Value::repr`] is the quoted form used inside containers
//! and by the `pprint` filter.

use super::Value;
use std::fmt::{self, Write};

/// Formats a float in its shortest round-trip form.
///
/// `ryu` keeps a trailing `.0` on integral floats, so `1.0` renders as `1.0`
/// rather than `1`.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let mut buffer = ryu::Buffer::new();
    buffer.format(value).to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Undefined => Ok(()),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(n) => f.write_str(&format_float(*n)),
            Self::String(s) => f.write_str(s),
            Self::Array(_) | Self::Object(_) => f.write_str(&self.repr()),
            Self::Function(function) => write!(f, "{}", function),
        }
    }
}

impl Value {
    /// The quoted diagnostic form of this value.
    ///
    /// Unlike `Display`, strings are single-quoted and `null`/`undefined` are
    /// spelled out, so containers stay readable.
    pub fn repr(&self) -> String {
        let mut out = String::new();
        // Infallible: writing into a String cannot error.
        let _ = write_repr(&mut out, self);
        out
    }

    /// The render form as an owned string.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

fn write_repr(out: &mut String, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("none"),
        Value::Undefined => out.write_str("undefined"),
        Value::Boolean(b) => write!(out, "{}", b),
        Value::Integer(i) => write!(out, "{}", i),
        Value::Float(n) => out.write_str(&format_float(*n)),
        Value::String(s) => write_quoted(out, s),
        Value::Array(values) => {
            out.write_char('[')?;
            for (i, element) in values.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_repr(out, element)?;
            }
            out.write_char(']')
        }
        Value::Object(object) => {
            out.write_char('{')?;
            for (i, (key, element)) in object.entries().iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_quoted(out, key)?;
                out.write_str(": ")?;
                write_repr(out, element)?;
            }
            out.write_char('}')
        }
        Value::Function(function) => write!(out, "{}", function),
    }
}

fn write_quoted(out: &mut String, s: &str) -> fmt::Result {
    out.write_char('\'')?;
    for c in s.chars() {
        match c {
            '\'' => out.write_str("\\'")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            _ => out.write_char(c)?,
        }
    }
    out.write_char('\'')
}
