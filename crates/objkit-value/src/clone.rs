//! Deep structural duplication of [`Value`] trees.

use crate::value::{Object, Value};

/// Creates a deep clone of a value.
///
/// Nested arrays and objects are rebuilt as fresh containers; the clone
/// never aliases any part of the source. Callables are not legal persistent
/// data and clone to `Undefined`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use objkit_value::{deep_clone, deep_equal, Value};
///
/// let original = Value::from(json!({"foo": [1, 2, 3]}));
/// let cloned = deep_clone(&original);
/// assert!(deep_equal(&cloned, &original));
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(arr) => Value::Array(arr.iter().map(deep_clone).collect()),
        Value::Object(obj) => Value::Object(clone_object(obj)),
        Value::Func(_) => Value::Undefined,
        other => other.clone(),
    }
}

/// Clones an object map, deep-cloning every value.
pub fn clone_object(obj: &Object) -> Object {
    let mut out = Object::new();
    for (key, val) in obj {
        out.insert(key.clone(), deep_clone(val));
    }
    out
}
