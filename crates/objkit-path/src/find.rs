//! Name-path lookup over values.

use objkit_value::Value;

static UNDEFINED: Value = Value::Undefined;

/// Resolves a name path against a value.
///
/// Descends one object key per segment. If any segment is absent at any
/// depth, or an intermediate value is not an object, the result is
/// `Undefined`; lookup never fails.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use objkit_path::{find, parse_path};
/// use objkit_value::Value;
///
/// let doc = Value::from(json!({"user": {"name": "yang"}}));
/// assert_eq!(find(&doc, &parse_path("user.name")), &Value::Str("yang".into()));
/// assert_eq!(find(&doc, &parse_path("user.missing")), &Value::Undefined);
/// ```
pub fn find<'a>(value: &'a Value, path: &[String]) -> &'a Value {
    let mut current = value;
    for segment in path {
        match current {
            Value::Object(map) => {
                current = map.get(segment.as_str()).unwrap_or(&UNDEFINED);
            }
            _ => return &UNDEFINED,
        }
    }
    current
}
