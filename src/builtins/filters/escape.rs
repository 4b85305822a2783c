//! Escaping, serialization and markup-adjacent filters.

use crate::builtins::args::{boolean_option, optional_count, optional_string, subject};
use crate::builtins::function::Keywords;
use crate::exec::Context;
use crate::value::Value;
use crate::Result;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters percent-encoded in plain strings; `/` and the characters
/// Python's `quote` leaves alone stay readable.
const STRING_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~');

/// Characters percent-encoded in form pairs; here `/` is escaped too.
const PAIR_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~');

/// HTML-escapes `& < > " '`.
pub(super) fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(super) fn escape(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "escape")?.to_display_string();
    Ok(Value::string(html_escape(&s)))
}

/// Without a markup type in the core, `forceescape` behaves like `escape`.
pub(super) fn forceescape(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    escape(args, kwargs, context)
}

/// Identity in this core; kept so templates written for autoescaping
/// environments still render.
pub(super) fn safe(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(subject(args, context, "safe")?.clone())
}

pub(super) fn striptags(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "striptags")?.to_display_string();
    let mut stripped = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => stripped.push(c),
            _ => {}
        }
    }
    let decoded = stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#34;", "\"")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    let collapsed: Vec<&str> = decoded.split_whitespace().collect();
    Ok(Value::string(collapsed.join(" ")))
}

pub(super) fn urlencode(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    let encoded = match subject(args, context, "urlencode")? {
        Value::Object(object) => {
            let pairs: Vec<String> = object
                .entries()
                .into_iter()
                .map(|(k, v)| {
                    format!(
                        "{}={}",
                        utf8_percent_encode(&k, PAIR_SET),
                        utf8_percent_encode(&v.to_display_string(), PAIR_SET)
                    )
                })
                .collect();
            pairs.join("&")
        }
        other => utf8_percent_encode(&other.to_display_string(), STRING_SET).to_string(),
    };
    Ok(Value::string(encoded))
}

pub(super) fn urlize(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let s = subject(args, context, "urlize")?.to_display_string();
    let trim_url_limit = optional_count(args, kwargs, 1, "trim_url_limit", context)?;
    let nofollow = boolean_option(args, kwargs, 2, "nofollow", false);
    let target = optional_string(args, kwargs, 3, "target", context)?;

    let mut rel_parts = vec!["noopener"];
    if nofollow {
        rel_parts.push("nofollow");
    }
    let rel = rel_parts.join(" ");
    let target_attr = target
        .map(|t| format!(" target=\"{}\"", html_escape(&t)))
        .unwrap_or_default();

    let mut out = String::with_capacity(s.len());
    let mut rest = s.as_str();
    while !rest.is_empty() {
        let word_end = rest
            .find(char::is_whitespace)
            .unwrap_or_else(|| rest.len());
        let (word, tail) = rest.split_at(word_end);
        out.push_str(&linkify_word(word, trim_url_limit, &rel, &target_attr));

        let ws_end = tail
            .find(|c: char| !c.is_whitespace())
            .unwrap_or_else(|| tail.len());
        let (ws, next) = tail.split_at(ws_end);
        out.push_str(ws);
        rest = next;
    }
    Ok(Value::string(out))
}

fn linkify_word(word: &str, trim_url_limit: Option<usize>, rel: &str, target_attr: &str) -> String {
    let trimmed = word.trim_end_matches(|c| ".,:;!?)".contains(c));
    let trailing = &word[trimmed.len()..];

    let href = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if trimmed.starts_with("www.") {
        format!("https://{}", trimmed)
    } else {
        return word.to_string();
    };

    let mut text = trimmed.to_string();
    if let Some(limit) = trim_url_limit {
        if text.chars().count() > limit {
            text = text.chars().take(limit).collect::<String>() + "...";
        }
    }
    format!(
        "<a href=\"{}\" rel=\"{}\"{}>{}</a>{}",
        html_escape(&href),
        rel,
        target_attr,
        html_escape(&text),
        trailing
    )
}

pub(super) fn xmlattr(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let object = match subject(args, context, "xmlattr")? {
        Value::Object(object) => object.clone(),
        other => {
            return context.throw_type_error(format!(
                "'xmlattr' requires a mapping, not {}",
                other.get_type()
            ))
        }
    };
    let autospace = boolean_option(args, kwargs, 1, "autospace", true);

    let mut parts = Vec::new();
    for (key, value) in object.entries() {
        if value.is_null_or_undefined() {
            continue;
        }
        if key
            .chars()
            .any(|c| c.is_whitespace() || "\"'<>/=".contains(c))
        {
            return context
                .throw_range_error(format!("invalid character in attribute name '{}'", key));
        }
        parts.push(format!(
            "{}=\"{}\"",
            key,
            html_escape(&value.to_display_string())
        ));
    }

    let joined = parts.join(" ");
    Ok(Value::string(
        if autospace && !joined.is_empty() {
            format!(" {}", joined)
        } else {
            joined
        },
    ))
}

pub(super) fn tojson(args: &[Value], kwargs: &Keywords, context: &mut Context) -> Result<Value> {
    let value = subject(args, context, "tojson")?;
    let indent = optional_count(args, kwargs, 1, "indent", context)?;

    let serialized = if indent.is_some() {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    let serialized = match serialized {
        Ok(serialized) => serialized,
        Err(e) => return context.throw_type_error(format!("tojson failed: {}", e)),
    };

    // Keep the output safe to embed in HTML script contexts.
    let safe = serialized
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\'', "\\u0027");
    Ok(Value::string(safe))
}

pub(super) fn pprint(args: &[Value], _: &Keywords, context: &mut Context) -> Result<Value> {
    Ok(Value::string(subject(args, context, "pprint")?.repr()))
}
