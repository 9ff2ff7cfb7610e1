//! Set-union style array combination.

use objkit_value::{deep_clone, deep_equal, Value};

/// Combines two arrays, union-style.
///
/// The result starts as a full clone of `source`. Each `fallback` element
/// is then appended unless it is a cheaply comparable value (string,
/// number, boolean, big integer, or date) already equal to an element
/// within the original source-length window. Null, undefined, array, and
/// object elements are always appended; callables append as `Undefined`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use objkit_merge::merge_arrays;
/// use objkit_value::Value;
///
/// let source = [Value::Int(1), Value::Int(2)];
/// let fallback = [Value::Int(2), Value::Int(3)];
/// let combined = merge_arrays(&source, &fallback);
/// assert_eq!(combined, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
/// ```
pub fn merge_arrays(source: &[Value], fallback: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = source.iter().map(deep_clone).collect();
    let window = source.len();
    for item in fallback {
        let item = match item {
            Value::Func(_) => Value::Undefined,
            other => deep_clone(other),
        };
        if item.is_comparable() && out[..window].iter().any(|existing| deep_equal(existing, &item))
        {
            continue;
        }
        out.push(item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use objkit_value::FuncValue;
    use serde_json::json;

    fn arr(j: serde_json::Value) -> Vec<Value> {
        match Value::from(j) {
            Value::Array(items) => items,
            _ => panic!("expected an array"),
        }
    }

    #[test]
    fn test_scalars_are_deduplicated() {
        let combined = merge_arrays(&arr(json!([1, "a", true])), &arr(json!(["a", 2, true])));
        assert_eq!(combined, arr(json!([1, "a", true, 2])));
    }

    #[test]
    fn test_dates_are_deduplicated_by_epoch() {
        let source = [Value::Date(1000), Value::Date(2000)];
        let fallback = [Value::Date(2000), Value::Date(3000)];
        let combined = merge_arrays(&source, &fallback);
        assert_eq!(
            combined,
            vec![Value::Date(1000), Value::Date(2000), Value::Date(3000)]
        );
    }

    #[test]
    fn test_objects_and_arrays_always_append() {
        let combined = merge_arrays(&arr(json!([{"a": 1}, [1]])), &arr(json!([{"a": 1}, [1]])));
        assert_eq!(combined.len(), 4);
    }

    #[test]
    fn test_null_and_undefined_always_append() {
        let source = [Value::Null, Value::Undefined];
        let fallback = [Value::Null, Value::Undefined];
        let combined = merge_arrays(&source, &fallback);
        assert_eq!(combined.len(), 4);
    }

    #[test]
    fn test_dedup_window_is_the_original_source_length() {
        // "b" is appended by the fallback pass; a later duplicate of it is
        // only checked against the original source window, so it appends too.
        let combined = merge_arrays(&arr(json!(["a"])), &arr(json!(["b", "b"])));
        assert_eq!(combined, arr(json!(["a", "b", "b"])));
    }

    #[test]
    fn test_callable_fallback_elements_append_as_undefined() {
        let fallback = [Value::Func(FuncValue::new(|v| v.clone()))];
        let combined = merge_arrays(&[], &fallback);
        assert_eq!(combined, vec![Value::Undefined]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_arrays(&[], &[]).is_empty());
        assert_eq!(merge_arrays(&arr(json!([1])), &[]), arr(json!([1])));
        assert_eq!(merge_arrays(&[], &arr(json!([1]))), arr(json!([1])));
    }
}
