//! String-shaped filters. Non-string subjects are stringified first, matching
//! the "neutral output" policy of the user-facing docs.

use crate::builtins::args::{
    arg_or_kwarg, boolean_option, optional_count, optional_string, subject,
};
use crate::builtins::function::Keywords;
use crate::exec::Context;
use crate::value::Value;
use crate::Result;

pub(super) fn upper(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "upper")?.to_display_string();
    Ok(Value::string(s.to_uppercase()))
}

pub(super) fn lower(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "lower")?.to_display_string();
    Ok(Value::string(s.to_lowercase()))
}

pub(super) fn capitalize(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "capitalize")?.to_display_string();
    let mut chars = s.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    };
    Ok(Value::string(capitalized))
}

pub(super) fn title(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "title")?.to_display_string();
    Ok(Value::string(title_case(&s)))
}

/// Uppercases the first letter of every word, lowercasing the rest.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

pub(super) fn trim(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "trim")?.to_display_string();
    let trimmed = match optional_string(args, kwargs, 1, "chars", context)? {
        None => s.trim().to_string(),
        Some(chars) => s.trim_matches(|c| chars.contains(c)).to_string(),
    };
    Ok(Value::string(trimmed))
}

pub(super) fn center(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "center")?.to_display_string();
    let width = optional_count(args, kwargs, 1, "width", context)?.unwrap_or(80);
    let len = s.chars().count();
    if len >= width {
        return Ok(Value::string(s));
    }
    let total = width - len;
    let left = total / 2;
    Ok(Value::string(format!(
        "{}{}{}",
        " ".repeat(left),
        s,
        " ".repeat(total - left)
    )))
}

pub(super) fn truncate(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "truncate")?.to_display_string();
    let length = optional_count(args, kwargs, 1, "length", context)?.unwrap_or(255);
    let killwords = boolean_option(args, kwargs, 2, "killwords", false);
    let end = optional_string(args, kwargs, 3, "end", context)?.unwrap_or_else(|| "...".to_string());
    let leeway = optional_count(args, kwargs, 4, "leeway", context)?.unwrap_or(5);

    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= length + leeway {
        return Ok(Value::string(s));
    }

    let keep = length.saturating_sub(end.chars().count());
    let mut cut: String = chars[..keep].iter().collect();
    if !killwords {
        if let Some(at) = cut.rfind(' ') {
            cut.truncate(at);
        }
    }
    Ok(Value::string(cut + &end))
}

pub(super) fn wordwrap(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "wordwrap")?.to_display_string();
    let width = optional_count(args, kwargs, 1, "width", context)?.unwrap_or(79);
    let break_long_words = boolean_option(args, kwargs, 2, "break_long_words", true);
    let wrapstring =
        optional_string(args, kwargs, 3, "wrapstring", context)?.unwrap_or_else(|| "\n".to_string());
    if width == 0 {
        return context.throw_range_error("wordwrap width must be positive");
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut push_word = |lines: &mut Vec<String>, line: &mut String, word: &str| {
        let line_len = line.chars().count();
        let word_len = word.chars().count();
        if line_len == 0 {
            line.push_str(word);
        } else if line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(line));
            line.push_str(word);
        }
    };

    for word in s.split_whitespace() {
        if break_long_words && word.chars().count() > width {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                let piece: String = chunk.iter().collect();
                push_word(&mut lines, &mut line, &piece);
            }
        } else {
            push_word(&mut lines, &mut line, word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    Ok(Value::string(lines.join(&wrapstring)))
}

pub(super) fn indent(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "indent")?.to_display_string();
    let prefix = match arg_or_kwarg(args, kwargs, 1, "width") {
        None => " ".repeat(4),
        Some(Value::Integer(i)) if *i >= 0 => " ".repeat(*i as usize),
        Some(Value::String(prefix)) => prefix.to_string(),
        Some(other) => {
            return context.throw_type_error(format!(
                "indent width must be an integer or string, not {}",
                other.get_type()
            ))
        }
    };
    let indent_first = boolean_option(args, kwargs, 2, "first", false);
    let indent_blank = boolean_option(args, kwargs, 3, "blank", false);

    let mut out = String::with_capacity(s.len());
    for (i, line) in s.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let skip = (i == 0 && !indent_first) || (line.is_empty() && !indent_blank);
        if !skip {
            out.push_str(&prefix);
        }
        out.push_str(line);
    }
    Ok(Value::string(out))
}

pub(super) fn replace(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "replace")?.to_display_string();
    let old = match arg_or_kwarg(args, kwargs, 1, "old") {
        Some(Value::String(old)) => old.to_string(),
        Some(other) => {
            return context.throw_type_error(format!(
                "replace() arguments must be strings, not {}",
                other.get_type()
            ))
        }
        None => return context.throw_type_error("replace() needs an 'old' argument"),
    };
    let new = match arg_or_kwarg(args, kwargs, 2, "new") {
        Some(Value::String(new)) => new.to_string(),
        Some(other) => {
            return context.throw_type_error(format!(
                "replace() arguments must be strings, not {}",
                other.get_type()
            ))
        }
        None => return context.throw_type_error("replace() needs a 'new' argument"),
    };
    let count = optional_count(args, kwargs, 3, "count", context)?;
    Ok(Value::string(py_replace(&s, &old, &new, count)))
}

/// Python `str.replace` semantics.
///
/// An empty `old` inserts the replacement at every character boundary,
/// including the very beginning; `count` limits the number of insertions.
pub(crate) fn py_replace(s: &str, old: &str, new: &str, count: Option<usize>) -> String {
    if !old.is_empty() {
        return match count {
            None => s.replace(old, new),
            Some(n) => s.replacen(old, new, n),
        };
    }

    let max = count.unwrap_or(usize::MAX);
    let mut out = String::with_capacity(s.len() + new.len());
    let mut done = 0;
    if done < max {
        out.push_str(new);
        done += 1;
    }
    for c in s.chars() {
        out.push(c);
        if done < max {
            out.push_str(new);
            done += 1;
        }
    }
    out
}

pub(super) fn wordcount(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "wordcount")?.to_display_string();
    Ok(Value::from(s.split_whitespace().count()))
}

pub(super) fn format(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let template = match subject(args, context, "format")? {
        Value::String(s) => s.clone(),
        other => {
            return context.throw_type_error(format!(
                "format() subject must be a string, not {}",
                other.get_type()
            ))
        }
    };

    let mut out = String::with_capacity(template.len());
    let mut fill = args[1..].iter();
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some('s') => match fill.next() {
                Some(value) => out.push_str(&value.to_display_string()),
                None => {
                    return context.throw_type_error("not enough arguments for format string")
                }
            },
            Some('d') | Some('i') => match fill.next() {
                Some(Value::Integer(i)) => out.push_str(&i.to_string()),
                Some(Value::Float(f)) => out.push_str(&(*f as i64).to_string()),
                Some(other) => {
                    return context.throw_type_error(format!(
                        "%d requires a number, not {}",
                        other.get_type()
                    ))
                }
                None => {
                    return context.throw_type_error("not enough arguments for format string")
                }
            },
            Some('f') => match fill.next().map(Value::as_number) {
                Some(Some(f)) => out.push_str(&format!("{:.6}", f)),
                Some(None) => {
                    return context.throw_type_error("%f requires a number")
                }
                None => {
                    return context.throw_type_error("not enough arguments for format string")
                }
            },
            Some(other) => {
                return context.throw_type_error(format!(
                    "unsupported format directive '%{}'",
                    other
                ))
            }
            None => return context.throw_type_error("incomplete format directive"),
        }
    }
    Ok(Value::string(out))
}

pub(super) fn string(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "string")?;
    Ok(match value {
        Value::String(_) => value.clone(),
        other => Value::string(other.to_display_string()),
    })
}
