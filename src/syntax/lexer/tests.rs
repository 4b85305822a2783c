//! Tests for the template lexer.

use super::{Lexer, Numeric, TokenKind};
use crate::syntax::ast::{Keyword, Punctuator};

fn lex(src: &str) -> Vec<TokenKind> {
    Lexer::new(src)
        .lex()
        .expect("failed to lex")
        .into_iter()
        .map(|token| token.kind().clone())
        .collect()
}

fn lex_err(src: &str) -> String {
    Lexer::new(src).lex().expect_err("expected a lex error").to_string()
}

#[test]
fn plain_text() {
    assert_eq!(lex("hello world"), vec![TokenKind::text("hello world")]);
}

#[test]
fn lone_brace_is_text() {
    assert_eq!(lex("a { b } c"), vec![TokenKind::text("a { b } c")]);
}

#[test]
fn expression_tag() {
    assert_eq!(
        lex("{{ name }}"),
        vec![
            TokenKind::ExpressionStart,
            TokenKind::identifier("name"),
            TokenKind::ExpressionEnd,
        ]
    );
}

#[test]
fn block_tag_keywords() {
    assert_eq!(
        lex("{% if x %}"),
        vec![
            TokenKind::BlockStart,
            TokenKind::keyword(Keyword::If),
            TokenKind::identifier("x"),
            TokenKind::BlockEnd,
        ]
    );
}

#[test]
fn comments_emit_no_tokens() {
    assert_eq!(lex("a{# note #}b"), vec![TokenKind::text("a"), TokenKind::text("b")]);
}

#[test]
fn unterminated_comment() {
    assert!(lex_err("{# never closed").contains("unterminated comment"));
}

#[test]
fn unterminated_string() {
    assert!(lex_err("{{ 'open }}").contains("unterminated string"));
}

#[test]
fn unterminated_tag() {
    assert!(lex_err("{{ x").contains("unexpected end of template"));
}

#[test]
fn strip_markers_trim_text() {
    assert_eq!(
        lex("  a  {{- x -}}  b  "),
        vec![
            TokenKind::text("  a"),
            TokenKind::ExpressionStart,
            TokenKind::identifier("x"),
            TokenKind::ExpressionEnd,
            TokenKind::text("b  "),
        ]
    );
}

#[test]
fn strip_marker_on_comment() {
    assert_eq!(
        lex("a  {#- c -#}  b"),
        vec![TokenKind::text("a"), TokenKind::text("b")]
    );
}

#[test]
fn strip_flag_survives_adjacent_tags() {
    // The armed strip flag must not leak past an intervening tag.
    assert_eq!(
        lex("{% set a = 1 -%}{% set b = 2 %} x"),
        vec![
            TokenKind::BlockStart,
            TokenKind::keyword(Keyword::Set),
            TokenKind::identifier("a"),
            TokenKind::punctuator(Punctuator::Assign),
            TokenKind::numeric_literal(1),
            TokenKind::BlockEnd,
            TokenKind::BlockStart,
            TokenKind::keyword(Keyword::Set),
            TokenKind::identifier("b"),
            TokenKind::punctuator(Punctuator::Assign),
            TokenKind::numeric_literal(2),
            TokenKind::BlockEnd,
            TokenKind::text(" x"),
        ]
    );
}

#[test]
fn numeric_literals() {
    assert_eq!(
        lex("{{ 12 3.5 }}"),
        vec![
            TokenKind::ExpressionStart,
            TokenKind::numeric_literal(12),
            TokenKind::numeric_literal(3.5),
            TokenKind::ExpressionEnd,
        ]
    );
}

#[test]
fn huge_integer_becomes_float() {
    let tokens = lex("{{ 99999999999999999999 }}");
    match tokens[1] {
        TokenKind::NumericLiteral(Numeric::Float(f)) => assert!(f > 9.9e19),
        ref other => panic!("expected float literal, got {:?}", other),
    }
}

#[test]
fn string_escapes() {
    assert_eq!(
        lex(r#"{{ "a\n\t\\\"b" }}"#),
        vec![
            TokenKind::ExpressionStart,
            TokenKind::string_literal("a\n\t\\\"b"),
            TokenKind::ExpressionEnd,
        ]
    );
}

#[test]
fn unknown_escape_keeps_character() {
    assert_eq!(
        lex(r#"{{ "a\qb" }}"#),
        vec![
            TokenKind::ExpressionStart,
            TokenKind::string_literal("aqb"),
            TokenKind::ExpressionEnd,
        ]
    );
}

#[test]
fn greedy_operators() {
    assert_eq!(
        lex("{{ a // b ** c <= d == e }}"),
        vec![
            TokenKind::ExpressionStart,
            TokenKind::identifier("a"),
            TokenKind::punctuator(Punctuator::IntDiv),
            TokenKind::identifier("b"),
            TokenKind::punctuator(Punctuator::Pow),
            TokenKind::identifier("c"),
            TokenKind::punctuator(Punctuator::LessThanOrEq),
            TokenKind::identifier("d"),
            TokenKind::punctuator(Punctuator::Eq),
            TokenKind::identifier("e"),
            TokenKind::ExpressionEnd,
        ]
    );
}

#[test]
fn braces_inside_expression_do_not_close_the_tag() {
    assert_eq!(
        lex(r#"{{ {"k": 1} }}"#),
        vec![
            TokenKind::ExpressionStart,
            TokenKind::punctuator(Punctuator::OpenBlock),
            TokenKind::string_literal("k"),
            TokenKind::punctuator(Punctuator::Colon),
            TokenKind::numeric_literal(1),
            TokenKind::punctuator(Punctuator::CloseBlock),
            TokenKind::ExpressionEnd,
        ]
    );
}

#[test]
fn minus_before_closer_is_not_an_operator() {
    assert_eq!(
        lex("{{ a -}}"),
        vec![
            TokenKind::ExpressionStart,
            TokenKind::identifier("a"),
            TokenKind::ExpressionEnd,
        ]
    );
}

#[test]
fn minus_with_space_is_subtraction() {
    assert_eq!(
        lex("{{ a - 1 }}"),
        vec![
            TokenKind::ExpressionStart,
            TokenKind::identifier("a"),
            TokenKind::punctuator(Punctuator::Sub),
            TokenKind::numeric_literal(1),
            TokenKind::ExpressionEnd,
        ]
    );
}

#[test]
fn word_literals() {
    assert_eq!(
        lex("{{ true False none None null }}"),
        vec![
            TokenKind::ExpressionStart,
            TokenKind::boolean_literal(true),
            TokenKind::boolean_literal(false),
            TokenKind::NullLiteral,
            TokenKind::NullLiteral,
            TokenKind::NullLiteral,
            TokenKind::ExpressionEnd,
        ]
    );
}

#[test]
fn positions_are_tracked() {
    let tokens = Lexer::new("ab\n{{ x }}").lex().unwrap();
    let start = tokens[1].span().start();
    assert_eq!(start.line_number(), 2);
    assert_eq!(start.column_number(), 1);
    let ident = tokens[2].span().start();
    assert_eq!(ident.line_number(), 2);
    assert_eq!(ident.column_number(), 4);
}
