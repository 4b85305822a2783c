//! End-to-end rendering tests.

use crate::test_utils::{render, render_with};
use serde_json::json;

#[test]
fn hello_world() {
    assert_eq!(
        render_with("Hello, {{ name }}!", json!({"name": "World"})),
        "Hello, World!"
    );
}

#[test]
fn for_over_range() {
    assert_eq!(render("{% for i in range(3) %}{{ i }}{% endfor %}"), "012");
}

#[test]
fn sort_and_join() {
    assert_eq!(
        render("{% set xs = [3,1,2] %}{{ xs | sort | join('-') }}"),
        "1-2-3"
    );
}

#[test]
fn macro_defaults_and_keyword_override() {
    assert_eq!(
        render("{% macro g(a, b=2) %}{{ a }}+{{ b }}{% endmacro %}{{ g(5) }} {{ g(5, b=7) }}"),
        "5+2 5+7"
    );
}

#[test]
fn chat_prompt_loop_with_strip_markers() {
    let msgs = json!({"msgs": [
        {"role": "u", "content": "hi"},
        {"role": "a", "content": "yo"}
    ]});
    // `{%-` strips the preceding newline along with any other whitespace.
    assert_eq!(
        render_with(
            "{%- for m in msgs -%}{{ m.role }}:{{ m.content }}\n{%- endfor -%}",
            msgs.clone()
        ),
        "u:hia:yo"
    );
    // A newline emitted as an expression survives every strip marker.
    assert_eq!(
        render_with(
            "{%- for m in msgs -%}{{ m.role }}:{{ m.content }}{{ '\\n' }}{%- endfor -%}",
            msgs.clone()
        ),
        "u:hi\na:yo\n"
    );
    // Without a strip marker on `endfor` the body newline stays.
    assert_eq!(
        render_with(
            "{%- for m in msgs -%}{{ m.role }}:{{ m.content }}\n{% endfor -%}",
            msgs
        ),
        "u:hi\na:yo\n"
    );
}

#[test]
fn undefined_or_falls_back() {
    assert_eq!(render("{{ missing or 'd' }}"), "d");
    assert_eq!(render_with("{{ x or 'd' }}", json!({"x": null})), "d");
}

#[test]
fn divisibleby_test() {
    assert_eq!(
        render_with(
            "{% if x is divisibleby(3) %}y{% else %}n{% endif %}",
            json!({"x": 9})
        ),
        "y"
    );
    assert_eq!(
        render_with(
            "{% if x is divisibleby(3) %}y{% else %}n{% endif %}",
            json!({"x": 8})
        ),
        "n"
    );
}

#[test]
fn whitespace_strip_marker_combinations() {
    assert_eq!(
        render_with("  A  {{- x -}}  B  ", json!({"x": "m"})),
        "  AmB  "
    );
    assert_eq!(
        render_with("  A  {{ x }}  B  ", json!({"x": "m"})),
        "  A  m  B  "
    );
    assert_eq!(
        render_with("  A  {{- x }}  B  ", json!({"x": "m"})),
        "  Am  B  "
    );
    assert_eq!(
        render_with("  A  {{ x -}}  B  ", json!({"x": "m"})),
        "  A  mB  "
    );
}

#[test]
fn operator_precedence() {
    assert_eq!(render_with("{{ a + b * c }}", json!({"a": 2, "b": 3, "c": 4})), "14");
    assert_eq!(
        render_with("{{ 'T' if not a and b else 'F' }}", json!({"a": false, "b": true})),
        "T"
    );
    assert_eq!(
        render_with(
            "{{ 'T' if a or b and c else 'F' }}",
            json!({"a": true, "b": false, "c": false})
        ),
        "T"
    );
}

#[test]
fn truthiness_table() {
    let template = "{% if x %}T{% else %}F{% endif %}";
    for falsy in [
        json!({"x": null}),
        json!({}),
        json!({"x": false}),
        json!({"x": ""}),
        json!({"x": []}),
        json!({"x": {}}),
        json!({"x": 0}),
        json!({"x": 0.0}),
    ] {
        assert_eq!(render_with(template, falsy), "F");
    }
    for truthy in [
        json!({"x": true}),
        json!({"x": 1}),
        json!({"x": 0.5}),
        json!({"x": "a"}),
        json!({"x": [0]}),
        json!({"x": {"k": null}}),
    ] {
        assert_eq!(render_with(template, truthy), "T");
    }
}

#[test]
fn loop_counters() {
    assert_eq!(
        render_with(
            "{% for x in xs %}{{ loop.index + loop.revindex0 }},{% endfor %}",
            json!({"xs": [10, 20, 30]})
        ),
        "3,3,3,"
    );
    assert_eq!(
        render_with(
            "{% for x in xs %}{% if loop.first %}F{% endif %}{% if loop.last %}L{% endif %}{{ loop.index0 }}{% endfor %}",
            json!({"xs": ["a", "b", "c"]})
        ),
        "F012L"
    );
}

#[test]
fn macro_static_scope() {
    assert_eq!(
        render(
            "{% set x = 'outer' %}{% macro m() %}{{ x }}{% endmacro %}\
             {% for i in [1] %}{% set x = 'inner' %}{{ m() }}{% endfor %}"
        ),
        "outer"
    );
}

#[test]
fn set_block() {
    assert_eq!(render("{% set s %}hello{% endset %}{{ s }}"), "hello");
}

#[test]
fn tuple_unpacking_over_items() {
    assert_eq!(
        render_with(
            "{% for k, v in obj.items() %}{{ k }}={{ v }};{% endfor %}",
            json!({"obj": {"a": 1, "b": 2}})
        ),
        "a=1;b=2;"
    );
}

#[test]
fn tuple_unpack_arity_mismatch_fails() {
    assert!(render_with(
        "{% for a, b in xs %}{% endfor %}",
        json!({"xs": [[1, 2, 3]]})
    )
    .contains("cannot unpack"));
    assert!(render("{% set a, b = [1, 2, 3] %}").contains("cannot unpack"));
}

#[test]
fn membership_with_empty_needle() {
    assert_eq!(render("{% if '' in 'abc' %}T{% endif %}"), "T");
    assert_eq!(render("{% if 'b' not in 'abc' %}T{% else %}F{% endif %}"), "F");
}

#[test]
fn reverse_round_trips() {
    assert_eq!(
        render_with(
            "{{ xs | reverse | reverse | join(',') }}|{{ xs | join(',') }}",
            json!({"xs": [1, 2, 3]})
        ),
        "1,2,3|1,2,3"
    );
    assert_eq!(render("{{ 'abc' | reverse | reverse }}"), "abc");
}

#[test]
fn numeric_promotion() {
    assert_eq!(render("{{ 1 / 2 }}"), "0.5");
    assert_eq!(render("{{ 3 + 0.5 }}"), "3.5");
    assert_eq!(render("{{ 5 % 2 }}"), "1");
    assert!(render("{{ 5.0 % 2 }}").contains("unsupported operands for %"));
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    assert!(render("{{ 1 / 0 }}").contains("division by zero"));
    assert!(render("{{ 1 % 0 }}").contains("modulo by zero"));
}

#[test]
fn elif_chain() {
    let template = "{% if x == 1 %}one{% elif x == 2 %}two{% else %}many{% endif %}";
    assert_eq!(render_with(template, json!({"x": 1})), "one");
    assert_eq!(render_with(template, json!({"x": 2})), "two");
    assert_eq!(render_with(template, json!({"x": 5})), "many");
}

#[test]
fn for_else_runs_on_empty_iterable() {
    assert_eq!(
        render_with(
            "{% for x in xs %}{{ x }}{% else %}empty{% endfor %}",
            json!({"xs": []})
        ),
        "empty"
    );
}

#[test]
fn for_iterates_strings_and_object_keys() {
    assert_eq!(render("{% for c in 'héllo' %}{{ c }}.{% endfor %}"), "h.é.l.l.o.");
    assert_eq!(
        render_with(
            "{% for k in obj %}{{ k }},{% endfor %}",
            json!({"obj": {"x": 1, "y": 2}})
        ),
        "x,y,"
    );
}

#[test]
fn iterating_a_non_iterable_fails() {
    assert!(render("{% for x in 5 %}{% endfor %}").contains("is not iterable"));
    assert!(render("{% for x in missing %}{% endfor %}").contains("is not iterable"));
}

#[test]
fn break_and_continue() {
    assert_eq!(
        render("{% for i in range(10) %}{% if i == 3 %}{% break %}{% endif %}{{ i }}{% endfor %}"),
        "012"
    );
    assert_eq!(
        render(
            "{% for i in range(5) %}{% if i is even %}{% continue %}{% endif %}{{ i }}{% endfor %}"
        ),
        "13"
    );
}

#[test]
fn break_outside_a_loop_fails() {
    assert!(render("{% break %}").contains("outside of a loop"));
    assert!(render("{% if true %}{% continue %}{% endif %}").contains("outside of a loop"));
}

#[test]
fn loop_condition_skips_body_but_keeps_raw_counters() {
    assert_eq!(
        render("{% for i in range(5) if i is even %}{{ i }}{% endfor %}"),
        "024"
    );
    assert_eq!(
        render("{% for i in range(5) if i is even %}{{ loop.index }}:{{ loop.length }} {% endfor %}"),
        "1:5 3:5 5:5 "
    );
}

#[test]
fn loop_cycle() {
    assert_eq!(
        render("{% for i in range(4) %}{{ loop.cycle('a', 'b') }}{% endfor %}"),
        "abab"
    );
    assert!(render("{% for i in range(1) %}{{ loop.cycle() }}{% endfor %}")
        .contains("at least one value"));
}

#[test]
fn namespace_mutation_across_a_loop() {
    assert_eq!(
        render(
            "{% set ns = namespace(x=0) %}\
             {% for i in [1, 2, 3] %}{% set ns.x = ns.x + i %}{% endfor %}\
             {{ ns.x }}"
        ),
        "6"
    );
}

#[test]
fn attribute_assignment_needs_a_namespace() {
    assert!(render("{% set d = dict(a=1) %}{% set d.a = 2 %}").contains("not a namespace"));
    assert!(render("{% set x = 1 %}{% set x.y = 2 %}").contains("cannot assign attribute"));
}

#[test]
fn call_block_with_caller() {
    assert_eq!(
        render("{% macro wrap() %}[{{ caller() }}]{% endmacro %}{% call wrap() %}hi{% endcall %}"),
        "[hi]"
    );
    assert_eq!(
        render(
            "{% macro each(xs) %}{% for x in xs %}{{ caller(x) }}{% endfor %}{% endmacro %}\
             {% call(y) each([1, 2]) %}({{ y }}){% endcall %}"
        ),
        "(1)(2)"
    );
}

#[test]
fn break_inside_a_call_block_reaches_the_enclosing_loop() {
    // The call body is lexical content of the call site, so its break
    // targets the for loop around the call block, not the macro body.
    assert_eq!(
        render(
            "{% macro wrap() %}[{{ caller() }}]{% endmacro %}\
             {% for i in range(5) %}{% call wrap() %}{% if i == 2 %}{% break %}{% endif %}{{ i }}{% endcall %}{% endfor %}"
        ),
        "[0][1][]"
    );
    assert_eq!(
        render(
            "{% macro wrap() %}({{ caller() }}){% endmacro %}\
             {% for i in range(3) %}{% call wrap() %}{% if i == 1 %}{% continue %}{% endif %}{{ i }}{% endcall %}{% endfor %}"
        ),
        "(0)()(2)"
    );
}

#[test]
fn break_in_a_macro_body_is_still_an_error() {
    // A macro body has no lexically enclosing loop of its own; a call site
    // inside one does not change that.
    assert!(render(
        "{% macro m() %}{% break %}{% endmacro %}{% for i in [1] %}{{ m() }}{% endfor %}"
    )
    .contains("outside of a loop"));
}

#[test]
fn macro_varargs_and_kwargs_spillover() {
    assert_eq!(
        render("{% macro m(a) %}{{ a }}|{{ varargs | join(',') }}|{{ kwargs.x }}{% endmacro %}{{ m(1, 2, 3, x=4) }}"),
        "1|2,3|4"
    );
}

#[test]
fn filter_block() {
    assert_eq!(render("{% filter upper %}abc{% endfilter %}"), "ABC");
    assert_eq!(
        render("{% filter upper | replace('B', '-') %}abc{% endfilter %}"),
        "A-C"
    );
}

#[test]
fn string_methods() {
    assert_eq!(render("{{ 'a,b,c'.split(',') | join('-') }}"), "a-b-c");
    assert_eq!(render("{{ 'one two  three'.split(none, 1) | last }}"), "two  three");
    assert_eq!(render("{{ '  x  '.strip() }}!"), "x!");
    assert_eq!(render("{{ 'ab'.replace('', '-') }}"), "-a-b-");
    assert_eq!(render("{{ 'hi there'.title() }}"), "Hi There");
    assert_eq!(render("{{ 'HI'.lower() }}{{ 'hi'.upper() }}"), "hiHI");
}

#[test]
fn object_get_method() {
    assert_eq!(
        render_with("{{ obj.get('a') }}{{ obj.get('z', 'dflt') }}", json!({"obj": {"a": 1}})),
        "1dflt"
    );
}

#[test]
fn unicode_indexing_and_slicing() {
    assert_eq!(render("{{ 'héllo'[1] }}"), "é");
    assert_eq!(render("{{ 'héllo'[-1] }}"), "o");
    assert_eq!(render("{{ 'abcdef'[::-1] }}"), "fedcba");
    assert_eq!(render("{{ 'abcdef'[1:4] }}"), "bcd");
    assert_eq!(render_with("{{ xs[1:][0] }}", json!({"xs": [1, 2, 3]})), "2");
    assert_eq!(render("{{ [0, 1, 2, 3][::2] | join('') }}"), "02");
}

#[test]
fn out_of_range_index_is_undefined() {
    assert_eq!(render_with("[{{ xs[10] }}]", json!({"xs": [1]})), "[]");
    assert_eq!(render_with("[{{ xs[-10] }}]", json!({"xs": [1]})), "[]");
}

#[test]
fn slice_step_zero_fails() {
    assert!(render("{{ 'abc'[::0] }}").contains("step cannot be zero"));
}

#[test]
fn attribute_misses_render_empty() {
    assert_eq!(render_with("[{{ user.name.first }}]", json!({"user": {}})), "[]");
    assert_eq!(render("[{{ missing }}]"), "[]");
    assert_eq!(render("[{{ none }}]"), "[]");
}

#[test]
fn environment_bindings_shadow_builtin_filters() {
    assert_eq!(
        render("{% macro upper(s) %}!{{ s }}!{% endmacro %}{{ 'x' | upper }}"),
        "!x!"
    );
}

#[test]
fn unknown_filter_and_test_fail() {
    assert!(render("{{ 1 | nosuchfilter }}").contains("unknown filter"));
    assert!(render("{{ 1 is nosuchtest }}").contains("unknown test"));
}

#[test]
fn ternary_without_else_yields_null() {
    assert_eq!(render_with("[{{ 'y' if x }}]", json!({"x": false})), "[]");
    assert_eq!(render_with("[{{ 'y' if x }}]", json!({"x": true})), "[y]");
}

#[test]
fn test_aliases_and_negation() {
    assert_eq!(render("{% if 3 is odd %}T{% endif %}"), "T");
    assert_eq!(render("{% if 3 is not even %}T{% endif %}"), "T");
    assert_eq!(render("{% if 'a' is string %}T{% endif %}"), "T");
    assert_eq!(render("{% if missing is not defined %}T{% endif %}"), "T");
    assert_eq!(render("{% if none is none %}T{% endif %}"), "T");
    assert_eq!(render("{% if 2 is eq(2) %}T{% endif %}"), "T");
    assert_eq!(render("{% if 2 is ==(2) %}T{% endif %}"), "T");
    assert_eq!(render("{% if 1 is lessthan(2) %}T{% endif %}"), "T");
    assert_eq!(render("{% if 1 is in([1, 2]) %}T{% endif %}"), "T");
    assert_eq!(render("{% if range is callable %}T{% endif %}"), "T");
    assert_eq!(render("{% if 'upper' is filter %}T{% endif %}"), "T");
    assert_eq!(render("{% if 'odd' is test %}T{% endif %}"), "T");
}

#[test]
fn sameas_is_identity() {
    assert_eq!(
        render_with(
            "{% set a = xs %}{% if a is sameas(xs) %}T{% endif %}",
            json!({"xs": [1]})
        ),
        "T"
    );
    assert_eq!(
        render("{% if [1] is sameas([1]) %}T{% else %}F{% endif %}"),
        "F"
    );
}

#[test]
fn cycler_global() {
    assert_eq!(
        render(
            "{% set c = cycler('odd', 'even') %}\
             {{ c.next() }}{{ c.next() }}{{ c.next() }}|{{ c.current }}"
        ),
        "oddevenodd|even"
    );
    assert_eq!(
        render("{% set c = cycler('a', 'b') %}{{ c.next() }}{% set _ = c.reset() %}{{ c.next() }}"),
        "aa"
    );
}

#[test]
fn joiner_global() {
    assert_eq!(
        render("{% set j = joiner('; ') %}{% for i in range(3) %}{{ j() }}{{ i }}{% endfor %}"),
        "0; 1; 2"
    );
}

#[test]
fn raise_exception_aborts() {
    assert!(render("{{ raise_exception('boom') }}").contains("boom"));
}

#[test]
fn spread_call_arguments() {
    assert_eq!(
        render("{% macro f(a, b, c) %}{{ a }}{{ b }}{{ c }}{% endmacro %}{{ f(*[1, 2, 3]) }}"),
        "123"
    );
}

#[test]
fn concat_operator_stringifies() {
    assert_eq!(render("{{ 1 ~ '-' ~ 2.5 }}"), "1-2.5");
}

#[test]
fn string_repetition_and_array_concat() {
    assert_eq!(render("{{ 'ab' * 3 }}"), "ababab");
    assert_eq!(render("{{ ([1] + [2]) | join(',') }}"), "1,2");
    assert_eq!(render("{{ ([1] + [2]) | length }}"), "2");
}

#[test]
fn pow_and_floor_division() {
    assert_eq!(render("{{ 2 ** 10 }}"), "1024");
    assert_eq!(render("{{ -2 ** 2 }}"), "-4");
    assert_eq!(render("{{ 7 // 2 }}"), "3");
    assert_eq!(render("{{ -7 // 2 }}"), "-4");
    assert_eq!(render("{{ 7.0 // 2 }}"), "3.0");
}

#[test]
fn float_display_keeps_a_decimal() {
    assert_eq!(render("{{ 1.0 }}"), "1.0");
    assert_eq!(render("{{ 2.0 * 2 }}"), "4.0");
}

#[test]
fn comparison_of_mismatched_variants_fails() {
    assert!(render("{{ 1 < 'a' }}").contains("cannot compare"));
    assert!(render("{{ 1 < 2.0 }}").contains("cannot compare"));
}

#[test]
fn equality_is_strict_across_variants() {
    assert_eq!(render("{% if 1 == 1.0 %}T{% else %}F{% endif %}"), "F");
    assert_eq!(render("{% if 1 != '1' %}T{% else %}F{% endif %}"), "T");
}

#[test]
fn calling_a_non_function_fails() {
    assert!(render("{{ 'x'() }}").contains("not callable"));
    assert!(render_with("{{ x() }}", json!({"x": 5})).contains("not callable"));
}
