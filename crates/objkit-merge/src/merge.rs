//! The recursive merge/clone walk.

use objkit_value::{Object, Value};

use crate::overrides::Overrides;

/// Segment used for override lookups below array elements.
const ELEMENT_SEGMENT: &str = "[]";

/// Merges a source object over a fallback object.
///
/// Per source key, in insertion order:
/// - an override registered at the key's path produces the value verbatim;
/// - nested objects merge recursively when the fallback holds an object at
///   the same key, and clone from the source alone otherwise;
/// - arrays clone element-wise (element paths append the `[]` segment);
/// - `Undefined` and `Null` propagate explicitly; dates clone by epoch
///   value; callables become `Undefined`; primitives copy.
///
/// Fallback keys absent from the source, or present as `Undefined`, are
/// then filled in as clones. Neither input is mutated and the result never
/// aliases either.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use objkit_merge::{merge, Overrides};
/// use objkit_value::{deep_equal, Value};
///
/// let source = Value::from(json!({"name": "yang", "opts": {"a": 1}}));
/// let fallback = Value::from(json!({"id": 0, "opts": {"a": 9, "b": 2}}));
/// let merged = merge(
///     source.as_object().unwrap(),
///     fallback.as_object().unwrap(),
///     &Overrides::new(),
/// );
/// let expected = Value::from(json!({"name": "yang", "opts": {"a": 1, "b": 2}, "id": 0}));
/// assert!(deep_equal(&Value::Object(merged), &expected));
/// ```
pub fn merge(source: &Object, fallback: &Object, overrides: &Overrides) -> Object {
    let mut path = Vec::new();
    merge_at(source, fallback, overrides, &mut path)
}

/// Clones a value, applying overrides by name path.
///
/// For objects this is `merge` against an empty fallback; arrays clone
/// element-wise; scalars follow the same kind rules as the merge walk.
pub fn clone(value: &Value, overrides: &Overrides) -> Value {
    let mut path = Vec::new();
    clone_at(value, overrides, &mut path)
}

fn merge_at(
    source: &Object,
    fallback: &Object,
    overrides: &Overrides,
    path: &mut Vec<String>,
) -> Object {
    let mut out = Object::new();
    for (key, value) in source {
        path.push(key.clone());
        let merged = match overrides.get(path) {
            Some(f) => f(value),
            None => match value {
                Value::Object(child) => match fallback.get(key) {
                    Some(Value::Object(fb)) => Value::Object(merge_at(child, fb, overrides, path)),
                    // Kinds disagree; the fallback for this key is discarded.
                    _ => Value::Object(clone_object_at(child, overrides, path)),
                },
                other => clone_dispatch(other, overrides, path),
            },
        };
        path.pop();
        out.insert(key.clone(), merged);
    }
    // Fill phase: fallback supplies keys the source lacks or left undefined.
    for (key, value) in fallback {
        let fill = matches!(source.get(key), None | Some(Value::Undefined));
        if !fill {
            continue;
        }
        path.push(key.clone());
        out.insert(key.clone(), clone_at(value, overrides, path));
        path.pop();
    }
    out
}

fn clone_at(value: &Value, overrides: &Overrides, path: &mut Vec<String>) -> Value {
    match overrides.get(path) {
        Some(f) => f(value),
        None => clone_dispatch(value, overrides, path),
    }
}

// Kind dispatch shared by the merge and clone walks. The override for
// `path` itself has already been consulted by the caller; objects reaching
// this point clone rather than merge.
fn clone_dispatch(value: &Value, overrides: &Overrides, path: &mut Vec<String>) -> Value {
    match value {
        Value::Object(map) => Value::Object(clone_object_at(map, overrides, path)),
        Value::Array(items) => {
            path.push(ELEMENT_SEGMENT.to_string());
            let cloned = items
                .iter()
                .map(|item| clone_at(item, overrides, path))
                .collect();
            path.pop();
            Value::Array(cloned)
        }
        Value::Func(_) => Value::Undefined,
        other => other.clone(),
    }
}

fn clone_object_at(map: &Object, overrides: &Overrides, path: &mut Vec<String>) -> Object {
    let mut out = Object::new();
    for (key, value) in map {
        path.push(key.clone());
        out.insert(key.clone(), clone_at(value, overrides, path));
        path.pop();
    }
    out
}
