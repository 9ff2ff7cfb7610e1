use objkit_codec::{
    compress, decompress, decompress_with, DecodeOptions, NestedKind, Template,
};
use objkit_value::{deep_equal, Object, Value};
use serde_json::json;

fn obj(j: serde_json::Value) -> Object {
    match Value::from(j) {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

#[test]
fn test_round_trip_restricted_to_template_keys() {
    let mut template = Template::keys(["id", "name"]);
    template.push_nested("addr", NestedKind::Object, Template::keys(["city", "zip"]));
    let original = obj(json!({
        "id": 7,
        "name": "yang",
        "addr": {"city": "x", "zip": "y"},
        "ignored": true
    }));
    let row = compress(&original, &template);
    let restored = decompress(&row, &template);
    let expected = Value::from(json!({
        "id": 7,
        "name": "yang",
        "addr": {"city": "x", "zip": "y"}
    }));
    assert!(deep_equal(&Value::Object(restored), &expected));
}

#[test]
fn test_absent_keys_round_trip_to_explicit_undefined() {
    let template = Template::keys(["id", "name"]);
    let row = compress(&obj(json!({"id": 1})), &template);
    let restored = decompress(&row, &template);
    assert_eq!(restored.get("name"), Some(&Value::Undefined));
    assert!(restored.contains_key("name"));
}

#[test]
fn test_template_growth_reads_old_rows() {
    // Data encoded against v1 of the template.
    let v1 = Template::keys(["id", "name"]);
    let row = compress(&obj(json!({"id": 1, "name": "a"})), &v1);

    // The template later grew two trailing fields.
    let mut v2 = v1.clone();
    v2.push_key("email");
    v2.push_nested("addr", NestedKind::Object, Template::keys(["city"]));

    let restored = decompress(&row, &v2);
    assert_eq!(restored.get("id"), Some(&Value::Int(1)));
    assert_eq!(restored.get("name"), Some(&Value::Str("a".into())));
    assert_eq!(restored.get("email"), Some(&Value::Undefined));
    assert_eq!(restored.get("addr"), Some(&Value::Undefined));
}

#[test]
fn test_placeholder_entry_keeps_later_positions_aligned() {
    // v1 had a "legacy" field; v2 retired it but keeps the placeholder so
    // the "kept" position still lines up.
    let v1 = Template::keys(["id", "legacy", "kept"]);
    let row = compress(&obj(json!({"id": 1, "legacy": "x", "kept": "y"})), &v1);
    let v2 = Template::keys(["id", "legacy", "kept"]);
    let restored = decompress(&row, &v2);
    assert_eq!(restored.get("kept"), Some(&Value::Str("y".into())));
}

#[test]
fn test_json_round_trip_collapses_undefined_then_null() {
    // The intended persistence path: compress, serialize to JSON text
    // (undefined becomes null), parse back, decompress. The decoder's
    // null collapse makes the two signals converge on Undefined.
    let template = Template::keys(["a", "b"]);
    let row = compress(&obj(json!({"a": 1})), &template);
    let text = serde_json::to_string(&serde_json::Value::from(Value::Array(row))).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let Value::Array(row_back) = Value::from(parsed) else {
        panic!("expected an array");
    };
    let restored = decompress(&row_back, &template);
    assert_eq!(restored.get("a"), Some(&Value::Int(1)));
    assert_eq!(restored.get("b"), Some(&Value::Undefined));
}

#[test]
fn test_preserve_null_keeps_intentional_nulls() {
    let template = Template::keys(["a", "b"]);
    let row = vec![Value::Null, Value::Int(2)];
    let restored = decompress_with(&row, &template, DecodeOptions { preserve_null: true });
    assert_eq!(restored.get("a"), Some(&Value::Null));
    assert_eq!(restored.get("b"), Some(&Value::Int(2)));
}

#[test]
fn test_nested_array_round_trip() {
    let mut template = Template::keys(["id"]);
    template.push_nested("tags", NestedKind::Array, Template::keys(["k", "v"]));
    let original = obj(json!({
        "id": 1,
        "tags": [{"k": "a", "v": 1}, {"k": "b", "v": 2}]
    }));
    let row = compress(&original, &template);
    let restored = decompress(&row, &template);
    assert!(deep_equal(
        &Value::Object(restored),
        &Value::Object(original)
    ));
}
