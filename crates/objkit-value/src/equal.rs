//! Deep structural equality over [`Value`].
//!
//! The precedence of the rules here is the single source of truth for the
//! whole workspace; the merge engine reuses it to detect duplicates during
//! array combination.

use crate::value::{Object, Value};

/// Performs a deep equality check between two values.
///
/// Rules, in precedence order per compared pair:
/// 1. both undefined are equal; exactly one undefined is not.
/// 2. both null are equal; exactly one null is not.
/// 3. dates compare by epoch millisecond.
/// 4. arrays compare by length, then index-wise recursion.
/// 5. objects compare by exact key set (order ignored), then per-key
///    recursion.
/// 6. a date/array/object against any other kind is never equal.
/// 7. primitives compare by value; numeric kinds compare across the
///    `Int`/`UInt`/`Float` variants, big integers only against big
///    integers.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use objkit_value::{deep_equal, Value};
///
/// let a = Value::from(json!({"foo": [1, 2, 3]}));
/// let b = Value::from(json!({"foo": [1, 2, 3]}));
/// let c = Value::from(json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// assert!(!deep_equal(&Value::Undefined, &Value::Null));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Undefined, _) | (_, Value::Undefined) => false,

        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,

        (Value::Date(a), Value::Date(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => arrays_equal(a, b),
        (Value::Object(a), Value::Object(b)) => objects_equal(a, b),

        // Dates, arrays, and objects never equal a different kind.
        (Value::Date(_), _) | (_, Value::Date(_)) => false,
        (Value::Array(_), _) | (_, Value::Array(_)) => false,
        (Value::Object(_), _) | (_, Value::Object(_)) => false,

        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::BigInt(a), Value::BigInt(b)) => a == b,
        (Value::Func(a), Value::Func(b)) => a == b,

        _ => numbers_equal(a, b),
    }
}

/// Compares two date values by epoch millisecond.
pub fn dates_equal(a: i64, b: i64) -> bool {
    a == b
}

/// Positional array equality: lengths must match, then every index pair
/// compares recursively. An `Undefined` at the same index on both sides
/// counts as equal.
pub fn arrays_equal(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for i in 0..a.len() {
        if !deep_equal(&a[i], &b[i]) {
            return false;
        }
    }
    true
}

/// Object equality: key sets must match exactly, ignoring order; each value
/// pair compares recursively.
pub fn objects_equal(a: &Object, b: &Object) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (key, val_a) in a {
        match b.get(key) {
            Some(val_b) => {
                if !deep_equal(val_a, val_b) {
                    return false;
                }
            }
            None => return false,
        }
    }
    true
}

// Numeric equality across the Int/UInt/Float variants. BigInt is excluded
// on purpose; it is handled above and never equals a plain number.
fn numbers_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::UInt(a), Value::UInt(b)) => a == b,
        (Value::Int(a), Value::UInt(b)) | (Value::UInt(b), Value::Int(a)) => {
            *a >= 0 && *a as u64 == *b
        }
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => *a as f64 == *b,
        (Value::UInt(a), Value::Float(b)) | (Value::Float(b), Value::UInt(a)) => *a as f64 == *b,
        _ => false,
    }
}
