//! Benchmarks of the whole templating pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use habu::realm::Realm;
use habu::syntax::{Lexer, Parser};
use habu::{Template, Value};
use indexmap::IndexMap;

static CHAT_TEMPLATE: &str = "\
{%- for m in messages -%}
<|{{ m.role }}|>
{{ m.content | trim }}
{% endfor -%}
{%- if add_generation_prompt -%}<|assistant|>{%- endif -%}";

fn chat_context() -> IndexMap<String, Value> {
    let json = serde_json::json!({
        "messages": [
            {"role": "system", "content": "You are helpful. "},
            {"role": "user", "content": " Hello there"},
            {"role": "assistant", "content": "Hi! How can I help?"},
            {"role": "user", "content": "Summarise this template engine."}
        ],
        "add_generation_prompt": true
    });
    let mut context = IndexMap::new();
    if let serde_json::Value::Object(object) = json {
        for (key, value) in object {
            context.insert(key, Value::from_json(value).expect("bench context converts"));
        }
    }
    context
}

fn create_realm(c: &mut Criterion) {
    c.bench_function("Create Realm", move |b| b.iter(Realm::create));
}

fn bench_lexer(c: &mut Criterion) {
    c.bench_function("Chat template (Lexer)", move |b| {
        b.iter(|| Lexer::new(black_box(CHAT_TEMPLATE)).lex())
    });
}

fn bench_parser(c: &mut Criterion) {
    let tokens = Lexer::new(CHAT_TEMPLATE).lex().expect("lexing failed");
    c.bench_function("Chat template (Parser)", move |b| {
        b.iter(|| Parser::new(black_box(tokens.clone())).parse_all())
    });
}

fn bench_render(c: &mut Criterion) {
    let template = Template::parse(CHAT_TEMPLATE).expect("compilation failed");
    let context = chat_context();
    c.bench_function("Chat template (Render)", move |b| {
        b.iter(|| {
            template
                .render(black_box(context.clone()))
                .expect("rendering failed")
        })
    });
}

criterion_group!(full, create_realm, bench_lexer, bench_parser, bench_render);
criterion_main!(full);
