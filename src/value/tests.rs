use super::{Object, Value};
use float_cmp::approx_eq;
use indexmap::IndexMap;

fn obj(entries: Vec<(&str, Value)>) -> Value {
    let mut properties = IndexMap::new();
    for (key, value) in entries {
        properties.insert(key.to_string(), value);
    }
    Value::object(Object::with_properties(properties))
}

#[test]
fn truthiness() {
    assert!(!Value::null().to_boolean());
    assert!(!Value::undefined().to_boolean());
    assert!(!Value::boolean(false).to_boolean());
    assert!(!Value::integer(0).to_boolean());
    assert!(!Value::float(0.0).to_boolean());
    assert!(!Value::string("").to_boolean());
    assert!(!Value::array(vec![]).to_boolean());
    assert!(!obj(vec![]).to_boolean());

    assert!(Value::boolean(true).to_boolean());
    assert!(Value::integer(-1).to_boolean());
    assert!(Value::float(0.1).to_boolean());
    assert!(Value::string(" ").to_boolean());
    assert!(Value::array(vec![Value::null()]).to_boolean());
    assert!(obj(vec![("a", Value::integer(1))]).to_boolean());
}

#[test]
fn no_cross_variant_numeric_equality() {
    assert_ne!(Value::integer(1), Value::float(1.0));
    assert_ne!(Value::integer(0), Value::boolean(false));
    assert_ne!(Value::null(), Value::undefined());
}

#[test]
fn deep_equality() {
    let a = Value::array(vec![Value::integer(1), Value::string("x")]);
    let b = Value::array(vec![Value::integer(1), Value::string("x")]);
    assert_eq!(a, b);
    assert!(!a.same_as(&b));
    assert!(a.same_as(&a.clone()));

    let o1 = obj(vec![("a", Value::integer(1)), ("b", Value::integer(2))]);
    let o2 = obj(vec![("b", Value::integer(2)), ("a", Value::integer(1))]);
    assert_eq!(o1, o2);
}

#[test]
fn display_forms() {
    assert_eq!(Value::null().to_string(), "");
    assert_eq!(Value::undefined().to_string(), "");
    assert_eq!(Value::boolean(true).to_string(), "true");
    assert_eq!(Value::integer(-3).to_string(), "-3");
    assert_eq!(Value::float(1.0).to_string(), "1.0");
    assert_eq!(Value::float(0.5).to_string(), "0.5");
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(
        Value::array(vec![Value::string("a"), Value::integer(2)]).to_string(),
        "['a', 2]"
    );
    assert_eq!(
        obj(vec![("k", Value::null())]).to_string(),
        "{'k': none}"
    );
}

#[test]
fn integer_arithmetic_stays_integer() {
    let v = Value::integer(2).add(&Value::integer(3)).unwrap();
    assert_eq!(v, Value::integer(5));

    let v = Value::integer(5).rem(&Value::integer(2)).unwrap();
    assert_eq!(v, Value::integer(1));
}

#[test]
fn division_always_promotes() {
    let v = Value::integer(1).div(&Value::integer(2)).unwrap();
    match v {
        Value::Float(f) => assert!(approx_eq!(f64, f, 0.5)),
        other => panic!("expected float, got {:?}", other),
    }
}

#[test]
fn division_by_zero_fails() {
    assert!(Value::integer(1).div(&Value::integer(0)).is_err());
    assert!(Value::integer(1).rem(&Value::integer(0)).is_err());
    assert!(Value::integer(1).int_div(&Value::integer(0)).is_err());
}

#[test]
fn float_modulo_fails() {
    assert!(Value::float(5.0).rem(&Value::integer(2)).is_err());
}

#[test]
fn python_style_modulo_and_floor_division() {
    assert_eq!(
        Value::integer(-7).rem(&Value::integer(3)).unwrap(),
        Value::integer(2)
    );
    assert_eq!(
        Value::integer(7).rem(&Value::integer(-3)).unwrap(),
        Value::integer(-2)
    );
    assert_eq!(
        Value::integer(-7).int_div(&Value::integer(2)).unwrap(),
        Value::integer(-4)
    );
    assert_eq!(
        Value::integer(-7).int_div(&Value::integer(-2)).unwrap(),
        Value::integer(3)
    );
}

#[test]
fn string_concatenation_stringifies() {
    let v = Value::string("a").add(&Value::integer(1)).unwrap();
    assert_eq!(v, Value::string("a1"));
    let v = Value::integer(1).add(&Value::string("a")).unwrap();
    assert_eq!(v, Value::string("1a"));
}

#[test]
fn string_repetition() {
    let v = Value::string("ab").mul(&Value::integer(3)).unwrap();
    assert_eq!(v, Value::string("ababab"));
    let v = Value::string("ab").mul(&Value::integer(-1)).unwrap();
    assert_eq!(v, Value::string(""));
}

#[test]
fn comparison_is_same_variant_only() {
    assert!(Value::integer(1).compare(&Value::float(2.0)).is_err());
    assert!(Value::string("a").compare(&Value::integer(1)).is_err());
    assert_eq!(
        Value::string("a").compare(&Value::string("b")).unwrap(),
        std::cmp::Ordering::Less
    );
}

#[test]
fn membership() {
    let xs = Value::array(vec![Value::integer(1), Value::integer(2)]);
    assert!(xs.contains(&Value::integer(2)).unwrap());
    assert!(!xs.contains(&Value::integer(3)).unwrap());

    let s = Value::string("hello");
    assert!(s.contains(&Value::string("ell")).unwrap());
    assert!(s.contains(&Value::string("")).unwrap());
    assert!(s.contains(&Value::integer(1)).is_err());

    let o = obj(vec![("a", Value::integer(1))]);
    assert!(o.contains(&Value::string("a")).unwrap());
    assert!(!o.contains(&Value::integer(1)).unwrap());

    assert!(!Value::undefined().contains(&Value::integer(1)).unwrap());
    assert!(!Value::null().contains(&Value::integer(1)).unwrap());
}

#[test]
fn hashing_rejects_functions() {
    let a = Value::array(vec![Value::integer(1)]);
    let b = Value::array(vec![Value::integer(1)]);
    assert_eq!(a.hash_value().unwrap(), b.hash_value().unwrap());

    let f = Value::function(crate::builtins::function::Function::Native(|_, _, _| {
        Ok(Value::null())
    }));
    assert!(f.hash_value().is_err());
}

#[test]
fn from_json_round_trip() {
    let json = serde_json::json!({
        "name": "World",
        "count": 3,
        "ratio": 0.5,
        "tags": ["a", "b"],
        "nested": {"ok": true, "missing": null}
    });
    let value = Value::from_json(json).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get("name").unwrap(), Value::string("World"));
    assert_eq!(object.get("count").unwrap(), Value::integer(3));
    assert_eq!(object.get("ratio").unwrap(), Value::float(0.5));
    assert_eq!(object.keys(), vec!["name", "count", "ratio", "tags", "nested"]);

    let serialized = serde_json::to_string(&value).unwrap();
    assert!(serialized.starts_with("{\"name\":\"World\""));
}

#[test]
fn from_json_rejects_huge_integers() {
    let json = serde_json::json!(u64::MAX);
    assert!(Value::from_json(json).is_err());
}
