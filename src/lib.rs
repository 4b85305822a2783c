//! Habu is a Jinja2-compatible template engine.
//!
//! A template is compiled from source into an AST once and can then be
//! rendered any number of times against different contexts:
//!
//! ```
//! use habu::{Template, Value};
//! use indexmap::IndexMap;
//!
//! let template = Template::parse("Hello, {{ name }}!").unwrap();
//!
//! let mut context = IndexMap::new();
//! context.insert("name".to_string(), Value::from("World"));
//!
//! assert_eq!(template.render(context).unwrap(), "Hello, World!");
//! ```
//!
//! The pipeline is `source -> lexer -> parser -> AST -> renderer`. Whitespace
//! control (`{{-`, `-%}`, `lstrip_blocks`, `trim_blocks`), the full expression
//! grammar, `for`/`if`/`set`/`macro`/`call`/`filter` blocks and the built-in
//! filter and test catalogues are supported; template inheritance and includes
//! are not.

#![deny(
    unused_qualifications,
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style
)]
#![warn(clippy::all, clippy::perf, clippy::single_match_else, clippy::dbg_macro)]
#![allow(
    clippy::missing_inline_in_public_items,
    clippy::cognitive_complexity,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::as_conversions
)]

pub mod builtins;
pub mod environment;
pub mod error;
pub mod exec;
pub mod realm;
pub mod syntax;
pub mod template;
pub mod value;

pub use crate::{
    error::Error,
    exec::{Context, Executable},
    realm::Realm,
    template::{Template, TemplateOptions},
    value::Value,
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::{Template, TemplateOptions, Value};
    use indexmap::IndexMap;

    /// Renders `source` with an empty context, formatting any error into the
    /// returned string so tests can assert on either outcome.
    pub(crate) fn render(source: &str) -> String {
        render_with(source, serde_json::json!({}))
    }

    /// Renders `source` against a JSON object context.
    pub(crate) fn render_with(source: &str, context: serde_json::Value) -> String {
        render_options(source, context, TemplateOptions::default())
    }

    /// Renders `source` against a JSON object context with explicit options.
    pub(crate) fn render_options(
        source: &str,
        context: serde_json::Value,
        options: TemplateOptions,
    ) -> String {
        let template = match Template::new(source, options) {
            Ok(template) => template,
            Err(e) => return e.to_string(),
        };
        match template.render(json_context(context)) {
            Ok(rendered) => rendered,
            Err(e) => e.to_string(),
        }
    }

    /// Converts a `serde_json` object into a render context map.
    pub(crate) fn json_context(context: serde_json::Value) -> IndexMap<String, Value> {
        let mut vars = IndexMap::new();
        if let serde_json::Value::Object(object) = context {
            for (key, json) in object {
                vars.insert(
                    key,
                    Value::from_json(json).expect("test context must convert"),
                );
            }
        }
        vars
    }
}
