//! Tests for the built-in filters.

use crate::test_utils::{render, render_with};
use serde_json::json;

#[test]
fn case_filters() {
    assert_eq!(render("{{ 'hi' | upper }}"), "HI");
    assert_eq!(render("{{ 'HI' | lower }}"), "hi");
    assert_eq!(render("{{ 'hELLO wORLD' | capitalize }}"), "Hello world");
    assert_eq!(render("{{ 'hello world' | title }}"), "Hello World");
}

#[test]
fn length_and_count() {
    assert_eq!(render("{{ 'héllo' | length }}"), "5");
    assert_eq!(render_with("{{ xs | count }}", json!({"xs": [1, 2, 3]})), "3");
    assert_eq!(render_with("{{ o | length }}", json!({"o": {"a": 1}})), "1");
    assert!(render("{{ 5 | length }}").contains("has no length"));
}

#[test]
fn first_last_random() {
    assert_eq!(render_with("{{ xs | first }}", json!({"xs": [7, 8]})), "7");
    assert_eq!(render_with("{{ xs | last }}", json!({"xs": [7, 8]})), "8");
    assert_eq!(render("{{ 'abc' | first }}{{ 'abc' | last }}"), "ac");
    assert_eq!(render("[{{ [] | first }}]"), "[]");
    assert_eq!(render("{{ [9] | random }}"), "9");
}

#[test]
fn join_with_attribute() {
    assert_eq!(
        render_with(
            "{{ users | join(', ', attribute='name') }}",
            json!({"users": [{"name": "a"}, {"name": "b"}]})
        ),
        "a, b"
    );
    assert_eq!(render("{{ [1, 2, 3] | join }}"), "123");
}

#[test]
fn default_filter() {
    assert_eq!(render("{{ missing | default('d') }}"), "d");
    assert_eq!(render("{{ 0 | default('d') }}"), "0");
    assert_eq!(render("{{ 0 | default('d', true) }}"), "d");
    assert_eq!(render("{{ missing | default }}!"), "!");
}

#[test]
fn sort_options() {
    assert_eq!(render("{{ [3, 1, 2] | sort | join(',') }}"), "1,2,3");
    assert_eq!(render("{{ [3, 1, 2] | sort(true) | join(',') }}"), "3,2,1");
    assert_eq!(render("{{ ['b', 'A', 'c'] | sort | join('') }}"), "Abc");
    assert_eq!(
        render("{{ ['b', 'A', 'c'] | sort(case_sensitive=true) | join('') }}"),
        "Abc"
    );
    assert_eq!(
        render_with(
            "{% for u in users | sort(attribute='age') %}{{ u.name }}{% endfor %}",
            json!({"users": [{"name": "b", "age": 30}, {"name": "a", "age": 20}]})
        ),
        "ab"
    );
    // Neutral result on a non-array.
    assert_eq!(render("{{ 'ba' | sort }}"), "ba");
    assert!(render("{{ [1, 'a'] | sort }}").contains("cannot order"));
}

#[test]
fn unique_preserves_first_occurrence() {
    assert_eq!(render("{{ [2, 1, 2, 3, 1] | unique | join(',') }}"), "2,1,3");
    assert_eq!(render("{{ ['A', 'a', 'b'] | unique | join('') }}"), "Ab");
    assert_eq!(
        render("{{ ['A', 'a'] | unique(case_sensitive=true) | join('') }}"),
        "Aa"
    );
}

#[test]
fn slice_and_batch() {
    assert_eq!(
        render("{% for col in [1, 2, 3, 4, 5] | slice(2) %}{{ col | join('') }}|{% endfor %}"),
        "123|45|"
    );
    assert_eq!(
        render("{% for col in [1, 2, 3, 4, 5] | slice(2, 0) %}{{ col | join('') }}|{% endfor %}"),
        "123|450|"
    );
    assert_eq!(
        render("{% for row in [1, 2, 3, 4, 5] | batch(2) %}{{ row | join('') }}|{% endfor %}"),
        "12|34|5|"
    );
    assert_eq!(
        render("{% for row in [1, 2, 3] | batch(2, 'x') %}{{ row | join('') }}|{% endfor %}"),
        "12|3x|"
    );
}

#[test]
fn map_select_reject() {
    assert_eq!(
        render_with(
            "{{ users | map(attribute='name') | join(',') }}",
            json!({"users": [{"name": "a"}, {"name": "b"}, {}]})
        ),
        "a,b,"
    );
    assert_eq!(
        render_with(
            "{{ users | map(attribute='name', default='?') | join(',') }}",
            json!({"users": [{"name": "a"}, {}]})
        ),
        "a,?"
    );
    assert_eq!(render("{{ ['a', 'b'] | map('upper') | join(',') }}"), "A,B");
    assert_eq!(render("{{ [0, 1, 2, ''] | select | join(',') }}"), "1,2");
    assert_eq!(render("{{ [1, 2, 3, 4] | select('even') | join(',') }}"), "2,4");
    assert_eq!(render("{{ [1, 2, 3, 4] | reject('even') | join(',') }}"), "1,3");
    assert_eq!(
        render("{{ [1, 2, 3, 4] | select('divisibleby', 2) | join(',') }}"),
        "2,4"
    );
}

#[test]
fn selectattr_without_a_test_uses_truthiness() {
    assert_eq!(
        render_with(
            "{{ users | selectattr('active') | map(attribute='name') | join(',') }}",
            json!({"users": [
                {"name": "a", "active": true},
                {"name": "b", "active": false},
                {"name": "c"}
            ]})
        ),
        "a"
    );
    assert_eq!(
        render_with(
            "{{ users | rejectattr('active') | map(attribute='name') | join(',') }}",
            json!({"users": [
                {"name": "a", "active": true},
                {"name": "b", "active": false}
            ]})
        ),
        "b"
    );
    assert_eq!(
        render_with(
            "{{ users | selectattr('age', 'gt', 21) | map(attribute='name') | join(',') }}",
            json!({"users": [{"name": "a", "age": 20}, {"name": "b", "age": 30}]})
        ),
        "b"
    );
}

#[test]
fn attr_filter() {
    assert_eq!(
        render_with("{{ user | attr('name') }}", json!({"user": {"name": "a"}})),
        "a"
    );
    assert_eq!(render_with("[{{ user | attr('x') }}]", json!({"user": {}})), "[]");
}

#[test]
fn groupby_pairs() {
    assert_eq!(
        render_with(
            "{% for city, people in users | groupby('city') %}{{ city }}:{{ people | map(attribute='name') | join('+') }};{% endfor %}",
            json!({"users": [
                {"name": "a", "city": "x"},
                {"name": "b", "city": "y"},
                {"name": "c", "city": "x"}
            ]})
        ),
        "x:a+c;y:b;"
    );
}

#[test]
fn dictsort_orders_entries() {
    assert_eq!(
        render_with(
            "{% for k, v in o | dictsort %}{{ k }}={{ v }};{% endfor %}",
            json!({"o": {"b": 2, "A": 3, "c": 1}})
        ),
        "A=3;b=2;c=1;"
    );
    assert_eq!(
        render_with(
            "{% for k, v in o | dictsort(by='value') %}{{ k }};{% endfor %}",
            json!({"o": {"b": 2, "a": 3, "c": 1}})
        ),
        "c;b;a;"
    );
    assert_eq!(
        render_with(
            "{% for k, v in o | dictsort(reverse=true) %}{{ k }};{% endfor %}",
            json!({"o": {"b": 2, "a": 3}})
        ),
        "b;a;"
    );
}

#[test]
fn items_filter() {
    assert_eq!(
        render_with(
            "{% for k, v in o | items %}{{ k }}{{ v }}{% endfor %}",
            json!({"o": {"a": 1, "b": 2}})
        ),
        "a1b2"
    );
    assert_eq!(render("{{ missing | items | length }}"), "0");
}

#[test]
fn min_max_sum() {
    assert_eq!(render("{{ [3, 1, 2] | min }} {{ [3, 1, 2] | max }}"), "1 3");
    assert_eq!(render("{{ ['b', 'A'] | min }}"), "A");
    assert_eq!(render("[{{ [] | min }}]"), "[]");
    assert_eq!(render("{{ [1, 2, 3] | sum }}"), "6");
    assert_eq!(render("{{ [1, 2] | sum(start=10) }}"), "13");
    assert_eq!(
        render_with(
            "{{ items | sum(attribute='price') }}",
            json!({"items": [{"price": 2}, {"price": 3}]})
        ),
        "5"
    );
    assert!(render("{{ ['a'] | sum }}").contains("can only add numbers"));
}

#[test]
fn list_filter() {
    assert_eq!(render("{{ 'abc' | list | join(',') }}"), "a,b,c");
    assert_eq!(render_with("{{ o | list | join(',') }}", json!({"o": {"a": 1, "b": 2}})), "a,b");
    assert_eq!(render("{{ missing | list | length }}"), "0");
}

#[test]
fn numeric_filters() {
    assert_eq!(render("{{ -3 | abs }} {{ -3.5 | abs }}"), "3 3.5");
    assert_eq!(render("{{ 2.25 | round(1) }}"), "2.3");
    assert_eq!(render("{{ 42.55 | round }}"), "43.0");
    assert_eq!(render("{{ 2.1 | round(0, 'ceil') }}"), "3.0");
    assert_eq!(render("{{ 2.9 | round(0, 'floor') }}"), "2.0");
    assert_eq!(render("{{ '42' | int }} {{ '0x1A' | int(0, 16) }}"), "42 26");
    assert_eq!(render("{{ 'nope' | int(7) }}"), "7");
    assert_eq!(render("{{ 3.9 | int }}"), "3");
    assert_eq!(render("{{ '3.5' | float }} {{ 2 | float }}"), "3.5 2.0");
    assert_eq!(render("{{ 'nope' | float(1.5) }}"), "1.5");
}

#[test]
fn filesizeformat_spellings() {
    assert_eq!(render("{{ 1 | filesizeformat }}"), "1 Byte");
    assert_eq!(render("{{ 110 | filesizeformat }}"), "110 Bytes");
    assert_eq!(render("{{ 1000 | filesizeformat }}"), "1.0 kB");
    assert_eq!(render("{{ 1500000 | filesizeformat }}"), "1.5 MB");
    assert_eq!(render("{{ 1024 | filesizeformat(true) }}"), "1.0 KiB");
}

#[test]
fn trim_center_truncate() {
    assert_eq!(render("{{ '  x  ' | trim }}!"), "x!");
    assert_eq!(render("{{ 'xy..' | trim('.') }}!"), "xy!");
    assert_eq!(render("[{{ 'ab' | center(6) }}]"), "[  ab  ]");
    assert_eq!(
        render("{{ 'foo bar baz qux' | truncate(9) }}"),
        "foo..."
    );
    assert_eq!(
        render("{{ 'foo bar baz qux' | truncate(9, true) }}"),
        "foo ba..."
    );
    assert_eq!(render("{{ 'short' | truncate(9) }}"), "short");
}

#[test]
fn wordwrap_and_indent() {
    assert_eq!(
        render("{{ 'aa bb cc dd' | wordwrap(5) }}"),
        "aa bb\ncc dd"
    );
    assert_eq!(
        render("{{ 'aaaaaaaa' | wordwrap(4) }}"),
        "aaaa\naaaa"
    );
    assert_eq!(render("{{ 'a\nb' | indent(2) }}"), "a\n  b");
    assert_eq!(render("{{ 'a\nb' | indent(2, true) }}"), "  a\n  b");
}

#[test]
fn replace_filter() {
    assert_eq!(render("{{ 'aaa' | replace('a', 'b') }}"), "bbb");
    assert_eq!(render("{{ 'aaa' | replace('a', 'b', 2) }}"), "bba");
    assert_eq!(render("{{ 'ab' | replace('', '-') }}"), "-a-b-");
}

#[test]
fn wordcount_and_string() {
    assert_eq!(render("{{ 'a b  c' | wordcount }}"), "3");
    assert_eq!(render("{{ 42 | string | length }}"), "2");
}

#[test]
fn format_filter() {
    assert_eq!(render("{{ '%s=%d' | format('x', 2) }}"), "x=2");
    assert_eq!(render("{{ '100%%' | format }}"), "100%");
    assert!(render("{{ '%s' | format }}").contains("not enough arguments"));
}

#[test]
fn escaping_filters() {
    assert_eq!(render("{{ '<b>&amp;</b>' | escape }}"), "&lt;b&gt;&amp;amp;&lt;/b&gt;");
    assert_eq!(render("{{ '<i>x</i>' | e }}"), "&lt;i&gt;x&lt;/i&gt;");
    assert_eq!(render("{{ 5 | escape }}"), "5");
    assert_eq!(render("{{ '<b>x</b>' | safe }}"), "<b>x</b>");
    assert_eq!(render("{{ '<b>x</b>' | forceescape }}"), "&lt;b&gt;x&lt;/b&gt;");
    assert_eq!(
        render("{{ '<p>hi   <b>there</b></p>' | striptags }}"),
        "hi there"
    );
}

#[test]
fn urlencode_filter() {
    assert_eq!(render("{{ 'a b/c' | urlencode }}"), "a%20b/c");
    assert_eq!(
        render_with("{{ o | urlencode }}", json!({"o": {"a b": "c/d"}})),
        "a%20b=c%2Fd"
    );
}

#[test]
fn urlize_filter() {
    assert_eq!(
        render("{{ 'see https://example.com.' | urlize }}"),
        "see <a href=\"https://example.com\" rel=\"noopener\">https://example.com</a>."
    );
    assert_eq!(
        render("{{ 'www.example.com' | urlize }}"),
        "<a href=\"https://www.example.com\" rel=\"noopener\">www.example.com</a>"
    );
    assert_eq!(render("{{ 'plain text' | urlize }}"), "plain text");
}

#[test]
fn xmlattr_filter() {
    assert_eq!(
        render_with(
            "<div{{ o | xmlattr }}></div>",
            json!({"o": {"class": "a b", "id": null}})
        ),
        "<div class=\"a b\"></div>"
    );
    assert!(render_with("{{ o | xmlattr }}", json!({"o": {"bad name": 1}}))
        .contains("invalid character"));
}

#[test]
fn tojson_filter() {
    assert_eq!(
        render_with("{{ o | tojson }}", json!({"o": {"a": [1, 2], "b": "x"}})),
        "{\"a\":[1,2],\"b\":\"x\"}"
    );
    assert_eq!(render("{{ \"<script>\" | tojson }}"), "\"\\u003cscript\\u003e\"");
    assert!(render("{{ range | tojson }}").contains("tojson failed"));
}

#[test]
fn pprint_filter() {
    assert_eq!(
        render_with("{{ o | pprint }}", json!({"o": {"a": [1, "x"]}})),
        "{'a': [1, 'x']}"
    );
}
