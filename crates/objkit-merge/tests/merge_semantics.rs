use objkit_merge::{clone, merge, merge_arrays, Overrides};
use objkit_value::{deep_equal, Object, Value};
use serde_json::json;

fn obj(j: serde_json::Value) -> Object {
    match Value::from(j) {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

#[test]
fn test_defaulting_a_config_structure() {
    let user = obj(json!({
        "name": "yang",
        "limits": {"rows": 50},
        "tags": ["a"]
    }));
    let defaults = obj(json!({
        "name": "anonymous",
        "limits": {"rows": 10, "cols": 80},
        "tags": ["default"],
        "verbose": false
    }));
    let merged = merge(&user, &defaults, &Overrides::new());
    let expected = Value::from(json!({
        "name": "yang",
        "limits": {"rows": 50, "cols": 80},
        "tags": ["a"],
        "verbose": false
    }));
    assert!(deep_equal(&Value::Object(merged), &expected));
}

#[test]
fn test_every_defined_source_key_survives_verbatim() {
    let source = obj(json!({"a": 1, "b": null, "c": [1, 2], "d": {"e": "f"}}));
    let fallback = obj(json!({"a": 9, "b": 9, "c": 9, "d": 9, "z": 9}));
    let merged = merge(&source, &fallback, &Overrides::new());
    for (key, value) in &source {
        assert!(
            deep_equal(merged.get(key).unwrap(), value),
            "key {key} was not preserved"
        );
    }
    assert_eq!(merged.get("z"), Some(&Value::Int(9)));
}

#[test]
fn test_merge_against_empty_fallback_equals_clone() {
    let source = obj(json!({
        "a": {"b": [1, {"c": null}]},
        "d": "x"
    }));
    let merged = merge(&source, &Object::new(), &Overrides::new());
    let cloned = clone(&Value::Object(source), &Overrides::new());
    assert!(deep_equal(&Value::Object(merged), &cloned));
}

#[test]
fn test_overrides_apply_during_fallback_fill() {
    // Cloning from the fallback goes through the same per-path dispatch,
    // so an override addressing a fallback-only key still fires.
    let overrides = Overrides::new().set("token", |_| Value::Str("masked".into()));
    let merged = merge(
        &Object::new(),
        &obj(json!({"token": "secret"})),
        &overrides,
    );
    assert_eq!(merged.get("token"), Some(&Value::Str("masked".into())));
}

#[test]
fn test_override_output_is_taken_verbatim() {
    // The engine does not re-clone what an override returns.
    let overrides = Overrides::new().set("a", |_| Value::from(json!({"deep": [1]})));
    let merged = merge(&obj(json!({"a": 1})), &Object::new(), &overrides);
    assert!(deep_equal(
        merged.get("a").unwrap(),
        &Value::from(json!({"deep": [1]}))
    ));
}

#[test]
fn test_three_way_key_distinction() {
    // absent vs present-undefined vs present-null all behave differently.
    let mut source = Object::new();
    source.insert("undef".into(), Value::Undefined);
    source.insert("null".into(), Value::Null);
    let fallback = obj(json!({"undef": 1, "null": 2, "absent": 3}));
    let merged = merge(&source, &fallback, &Overrides::new());
    assert_eq!(merged.get("undef"), Some(&Value::Int(1)));
    assert_eq!(merged.get("null"), Some(&Value::Null));
    assert_eq!(merged.get("absent"), Some(&Value::Int(3)));
}

#[test]
fn test_chained_merges_keep_fallback_nulls() {
    // A null supplied by one merge's fallback survives a later merge.
    let first = merge(
        &Object::new(),
        &obj(json!({"a": null})),
        &Overrides::new(),
    );
    let second = merge(&first, &obj(json!({"a": 5})), &Overrides::new());
    assert_eq!(second.get("a"), Some(&Value::Null));
}

#[test]
fn test_array_combine_end_to_end() {
    let source = arr_of(json!([1, "x", {"id": 1}]));
    let fallback = arr_of(json!([1, "y", {"id": 1}, null]));
    let combined = merge_arrays(&source, &fallback);
    let expected = Value::from(json!([1, "x", {"id": 1}, "y", {"id": 1}, null]));
    assert!(deep_equal(&Value::Array(combined), &expected));
}

fn arr_of(j: serde_json::Value) -> Vec<Value> {
    match Value::from(j) {
        Value::Array(items) => items,
        _ => panic!("expected an array"),
    }
}
