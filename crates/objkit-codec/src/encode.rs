//! Object-to-positional-array encoding.

use objkit_value::{deep_clone, Object, Value};

use crate::template::{NestedKind, Template, TemplateEntry};

/// Compresses an object into a flat positional array.
///
/// Template entries are walked in order; a bare key appends the value at
/// that key (a clone), or `Undefined` when the key is absent — intentional
/// positional padding, never an error. Nested descriptors recurse; a
/// nested value that is undefined, absent, or of the wrong shape encodes
/// as `Undefined`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use objkit_codec::{compress, Template};
/// use objkit_value::Value;
///
/// let obj = Value::from(json!({"id": 123, "name": "yang"}));
/// let row = compress(obj.as_object().unwrap(), &Template::keys(["id", "name"]));
/// assert_eq!(row, vec![Value::Int(123), Value::Str("yang".into())]);
/// ```
pub fn compress(obj: &Object, template: &Template) -> Vec<Value> {
    let mut out = Vec::with_capacity(template.len());
    for entry in &template.0 {
        match entry {
            TemplateEntry::Key(key) => {
                out.push(obj.get(key).map(deep_clone).unwrap_or(Value::Undefined));
            }
            TemplateEntry::Nested(nested) => {
                let value = obj.get(&nested.name).unwrap_or(&Value::Undefined);
                out.push(match (nested.kind, value) {
                    (NestedKind::Object, Value::Object(child)) => {
                        Value::Array(compress(child, &nested.template))
                    }
                    (NestedKind::Array, Value::Array(items)) => {
                        Value::Array(compress_array(items, &nested.template))
                    }
                    // Undefined, or a value of the wrong shape.
                    _ => Value::Undefined,
                });
            }
        }
    }
    out
}

/// Applies [`compress`] element-wise.
///
/// Each element is expected to be an object; anything else encodes as a
/// row of `Undefined` positions.
pub fn compress_array(items: &[Value], template: &Template) -> Vec<Value> {
    let empty = Object::new();
    items
        .iter()
        .map(|item| {
            let row = match item {
                Value::Object(obj) => compress(obj, template),
                _ => compress(&empty, template),
            };
            Value::Array(row)
        })
        .collect()
}
