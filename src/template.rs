//! The template façade: compile once, render many times.

use crate::exec::{Context, Executable, InterpreterState};
use crate::error::RuntimeError;
use crate::realm::Realm;
use crate::syntax::ast::node::RcStatementList;
use crate::syntax::{Lexer, Parser};
use crate::value::Value;
use crate::Result;
use indexmap::IndexMap;
use std::borrow::Cow;

/// Whitespace-control options applied before lexing.
///
/// The `-` markers inside delimiters always strip on their side regardless of
/// these options; the options set the default policy where no marker is
/// present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemplateOptions {
    /// Strip leading spaces and tabs from lines whose first content is a
    /// `{%` or `{#` tag.
    pub lstrip_blocks: bool,
    /// Drop the newline directly following a `%}` or `#}`.
    pub trim_blocks: bool,
}

/// A compiled template.
///
/// Immutable after construction; one `Template` may be rendered any number of
/// times, each render against its own fresh realm.
#[derive(Debug, Clone)]
pub struct Template {
    body: RcStatementList,
}

impl Template {
    /// Compiles a template from source.
    pub fn new(source: &str, options: TemplateOptions) -> Result<Self> {
        let source = preprocess(source, options);
        let tokens = Lexer::new(&source).lex()?;
        let body = Parser::new(tokens).parse_all()?;
        Ok(Self { body: body.into() })
    }

    /// Compiles a template with default options.
    pub fn parse(source: &str) -> Result<Self> {
        Self::new(source, TemplateOptions::default())
    }

    /// Renders the template against the given context variables.
    pub fn render(&self, context: IndexMap<String, Value>) -> Result<String> {
        self.render_in(context, Realm::create())
    }

    /// Renders against a caller-provided realm, whose bindings sit between
    /// the built-ins and the context variables.
    ///
    /// The realm is consumed: renders never observe each other's mutations,
    /// so a realm cannot be reused either.
    pub fn render_in(&self, context: IndexMap<String, Value>, mut realm: Realm) -> Result<String> {
        // Per-render frame: template-level `set`/`macro` land here, not in
        // the shared globals.
        realm.environment.push_scope();
        for (name, value) in context {
            realm.environment.create_binding(&name, value);
        }

        let mut ctx = Context::new(realm);
        self.body.run(&mut ctx)?;
        if ctx.get_current_state() != InterpreterState::Executing {
            return Err(RuntimeError::new("'break' or 'continue' outside of a loop").into());
        }
        Ok(ctx.into_output())
    }
}

/// Applies the option-driven whitespace transformations.
fn preprocess(source: &str, options: TemplateOptions) -> Cow<'_, str> {
    if !options.lstrip_blocks && !options.trim_blocks {
        return Cow::Borrowed(source);
    }

    let mut out = String::with_capacity(source.len());
    if options.lstrip_blocks {
        for line in source.split_inclusive('\n') {
            let stripped = line.trim_start_matches(|c| c == ' ' || c == '\t');
            if stripped.starts_with("{%") || stripped.starts_with("{#") {
                out.push_str(stripped);
            } else {
                out.push_str(line);
            }
        }
    } else {
        out.push_str(source);
    }

    if options.trim_blocks {
        out = out.replace("%}\n", "%}").replace("#}\n", "#}");
    }
    Cow::Owned(out)
}
