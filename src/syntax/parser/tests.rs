//! Tests for the template parser.

use super::Parser;
use crate::syntax::ast::node::StatementList;
use crate::syntax::ast::{Const, Node};
use crate::syntax::lexer::Lexer;

fn parse(src: &str) -> StatementList {
    let tokens = Lexer::new(src).lex().expect("failed to lex");
    Parser::new(tokens).parse_all().expect("failed to parse")
}

fn parse_err(src: &str) -> String {
    let tokens = Lexer::new(src).lex().expect("failed to lex");
    Parser::new(tokens)
        .parse_all()
        .expect_err("expected a parse error")
        .to_string()
}

#[test]
fn text_and_expression() {
    let list = parse("a{{ x }}b");
    assert_eq!(list.items().len(), 3);
    assert!(matches!(list.items()[0], Node::Text(_)));
    assert!(matches!(list.items()[1], Node::Identifier(_)));
    assert!(matches!(list.items()[2], Node::Text(_)));
}

#[test]
fn adjacent_text_coalesces_around_comments() {
    let list = parse("a{# note #}b");
    assert_eq!(list.items().len(), 1);
    match &list.items()[0] {
        Node::Text(text) => assert_eq!(text.text(), "ab"),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn precedence_shapes() {
    // a + b * c parses as a + (b * c)
    let list = parse("{{ a + b * c }}");
    match &list.items()[0] {
        Node::BinOp(add) => {
            assert_eq!(add.op().to_string(), "+");
            assert_eq!(add.rhs().to_string(), "b * c");
        }
        other => panic!("expected binop, got {:?}", other),
    }

    // not a and b parses as (not a) and b
    let list = parse("{{ not a and b }}");
    match &list.items()[0] {
        Node::BinOp(and) => {
            assert_eq!(and.op().to_string(), "and");
            assert_eq!(and.lhs().to_string(), "not a");
        }
        other => panic!("expected binop, got {:?}", other),
    }

    // a or b and c parses as a or (b and c)
    let list = parse("{{ a or b and c }}");
    match &list.items()[0] {
        Node::BinOp(or) => {
            assert_eq!(or.op().to_string(), "or");
            assert_eq!(or.rhs().to_string(), "b and c");
        }
        other => panic!("expected binop, got {:?}", other),
    }
}

#[test]
fn filters_bind_tighter_than_addition() {
    let list = parse("{{ a + b | length }}");
    match &list.items()[0] {
        Node::BinOp(add) => assert_eq!(add.rhs().to_string(), "b | length"),
        other => panic!("expected binop, got {:?}", other),
    }
}

#[test]
fn constant_folding_of_literal_arithmetic() {
    assert_eq!(parse("{{ 1 + 2 * 3 }}").items(), &[Node::Const(Const::Int(7))]);
    assert_eq!(
        parse("{{ 'a' ~ 'b' }}").items(),
        &[Node::Const(Const::String("ab".into()))]
    );
    assert_eq!(
        parse("{{ 'a' + 'b' }}").items(),
        &[Node::Const(Const::String("ab".into()))]
    );
    assert_eq!(
        parse("{{ not true }}").items(),
        &[Node::Const(Const::Bool(false))]
    );
    assert_eq!(parse("{{ -3 }}").items(), &[Node::Const(Const::Int(-3))]);
}

#[test]
fn literal_if_condition_folds_to_taken_branch() {
    let list = parse("{% if true %}T{% else %}F{% endif %}");
    match &list.items()[0] {
        Node::StatementList(taken) => assert_eq!(taken.to_string(), "T"),
        other => panic!("expected folded branch, got {:?}", other),
    }

    let list = parse("{% if false %}T{% else %}F{% endif %}");
    match &list.items()[0] {
        Node::StatementList(taken) => assert_eq!(taken.to_string(), "F"),
        other => panic!("expected folded branch, got {:?}", other),
    }
}

#[test]
fn for_over_empty_literal_folds_to_else() {
    let list = parse("{% for x in [] %}B{% else %}E{% endfor %}");
    match &list.items()[0] {
        Node::StatementList(taken) => assert_eq!(taken.to_string(), "E"),
        other => panic!("expected folded branch, got {:?}", other),
    }
}

#[test]
fn elif_chain_nests() {
    let list = parse("{% if a %}1{% elif b %}2{% else %}3{% endif %}");
    match &list.items()[0] {
        Node::If(node) => {
            let else_list = node.else_node().expect("has else");
            assert!(matches!(else_list.items()[0], Node::If(_)));
        }
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn for_with_condition_keeps_the_filter_out_of_the_iterable() {
    let list = parse("{% for x in xs if x %}{{ x }}{% endfor %}");
    match &list.items()[0] {
        Node::ForLoop(node) => {
            assert_eq!(node.iterable().to_string(), "xs");
            assert!(node.condition().is_some());
        }
        other => panic!("expected for, got {:?}", other),
    }
}

#[test]
fn slice_forms() {
    assert!(matches!(parse("{{ xs[1] }}").items()[0], Node::GetField(_)));
    assert!(matches!(parse("{{ xs[1:] }}").items()[0], Node::Slice(_)));
    assert!(matches!(parse("{{ xs[:2] }}").items()[0], Node::Slice(_)));
    assert!(matches!(parse("{{ xs[::2] }}").items()[0], Node::Slice(_)));
    assert!(matches!(parse("{{ xs[1:2:3] }}").items()[0], Node::Slice(_)));
}

#[test]
fn call_with_spread_and_kwargs() {
    let list = parse("{{ f(1, *rest, k=2) }}");
    match &list.items()[0] {
        Node::Call(call) => {
            assert_eq!(call.args().len(), 2);
            assert!(matches!(call.args()[1], Node::Spread(_)));
            assert_eq!(call.kwargs().len(), 1);
        }
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_expression_with_punctuator_alias() {
    let list = parse("{% if x is ==(1) %}y{% endif %}");
    match &list.items()[0] {
        Node::If(node) => assert_eq!(node.cond().to_string(), "x is ==(1)"),
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn unclosed_block_fails() {
    assert_eq!(parse_err("{% if x %}y"), "abrupt end");
}

#[test]
fn unmatched_closer_fails() {
    assert!(parse_err("{% endif %}").contains("unexpected token"));
}

#[test]
fn non_string_object_key_fails() {
    assert!(parse_err("{{ {1: 2} }}").contains("object keys must be string literals"));
}

#[test]
fn positional_after_keyword_fails() {
    assert!(parse_err("{{ f(a=1, 2) }}").contains("positional argument follows keyword"));
}

#[test]
fn set_forms() {
    assert!(matches!(parse("{% set a = 1 %}").items()[0], Node::Set(_)));
    assert!(matches!(parse("{% set a, b = xs %}").items()[0], Node::Set(_)));
    assert!(matches!(parse("{% set ns.x = 1 %}").items()[0], Node::Set(_)));
    assert!(matches!(
        parse("{% set s %}hello{% endset %}").items()[0],
        Node::Set(_)
    ));
}

#[test]
fn macro_and_call_block() {
    let list = parse("{% macro g(a, b=2) %}{{ a }}{% endmacro %}{% call(x) g(1) %}{{ x }}{% endcall %}");
    assert!(matches!(list.items()[0], Node::MacroDecl(_)));
    assert!(matches!(list.items()[1], Node::CallBlock(_)));
}

#[test]
fn filter_block_chain() {
    let list = parse("{% filter upper | trim %}x{% endfilter %}");
    match &list.items()[0] {
        Node::FilterBlock(node) => assert_eq!(node.filters().len(), 2),
        other => panic!("expected filter block, got {:?}", other),
    }
}

#[test]
fn ternary_parses_as_conditional() {
    let list = parse("{{ a if cond else b }}");
    assert!(matches!(list.items()[0], Node::ConditionalOp(_)));
}
