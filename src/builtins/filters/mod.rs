//! The built-in filter registry.
//!
//! Filters are subject-first callables: `value | join('-')` dispatches to the
//! registered function with `value` prepended to the argument list. The
//! registry is consulted only after the environment, so same-named bindings
//! shadow built-ins.

#[cfg(test)]
mod tests;

mod escape;
mod numeric;
mod sequence;
pub(crate) mod string;

use crate::builtins::function::NativeFunctionData;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

static FILTERS: Lazy<FxHashMap<&'static str, NativeFunctionData>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    let mut add = |name: &'static str, f: NativeFunctionData| {
        m.insert(name, f);
    };

    add("abs", numeric::abs);
    add("attr", sequence::attr);
    add("batch", sequence::batch);
    add("capitalize", string::capitalize);
    add("center", string::center);
    add("count", sequence::length);
    add("default", sequence::default);
    add("dictsort", sequence::dictsort);
    add("e", escape::escape);
    add("escape", escape::escape);
    add("filesizeformat", numeric::filesizeformat);
    add("first", sequence::first);
    add("float", numeric::float);
    add("forceescape", escape::forceescape);
    add("format", string::format);
    add("groupby", sequence::groupby);
    add("indent", string::indent);
    add("int", numeric::int);
    add("items", sequence::items);
    add("join", sequence::join);
    add("last", sequence::last);
    add("length", sequence::length);
    add("list", sequence::list);
    add("lower", string::lower);
    add("map", sequence::map);
    add("max", sequence::max);
    add("min", sequence::min);
    add("pprint", escape::pprint);
    add("random", sequence::random);
    add("reject", sequence::reject);
    add("rejectattr", sequence::rejectattr);
    add("replace", string::replace);
    add("reverse", sequence::reverse);
    add("round", numeric::round);
    add("safe", escape::safe);
    add("select", sequence::select);
    add("selectattr", sequence::selectattr);
    add("slice", sequence::slice);
    add("sort", sequence::sort);
    add("string", string::string);
    add("striptags", escape::striptags);
    add("sum", sequence::sum);
    add("title", string::title);
    add("tojson", escape::tojson);
    add("trim", string::trim);
    add("truncate", string::truncate);
    add("unique", sequence::unique);
    add("upper", string::upper);
    add("urlencode", escape::urlencode);
    add("urlize", escape::urlize);
    add("wordcount", string::wordcount);
    add("wordwrap", string::wordwrap);
    add("xmlattr", escape::xmlattr);

    m
});

/// Looks a built-in filter up by name.
pub fn lookup(name: &str) -> Option<NativeFunctionData> {
    FILTERS.get(name).copied()
}

/// Checks whether a built-in filter with this name exists (the `filter`
/// test).
pub fn contains(name: &str) -> bool {
    FILTERS.contains_key(name)
}
