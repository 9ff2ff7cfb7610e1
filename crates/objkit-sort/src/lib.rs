//! objkit-sort - stable multi-key sorting by attribute paths.
//!
//! Order expressions mirror a SQL `ORDER BY` clause restricted to property
//! paths, e.g. `"type, id DESC"`. Field values are resolved through the
//! shared name-path lookup; absent paths resolve to `Undefined`, which
//! sorts ahead of every real value (as does `Null`, in its own tier).
//!
//! [`sort`] and [`sort_by_expression`] mutate the given slice in place;
//! that is the one operation in this workspace that is not safe to run
//! concurrently on the same collection. The `sorted*` variants return a
//! new vector instead.

pub mod compare;

pub use compare::{compare_field, compare_objects};
pub use objkit_path::{parse_order, parse_order_strict, OrderField};

use objkit_value::Value;

/// Sorts a collection of objects in place by the given order fields.
///
/// The sort is stable: rows that tie on every field keep their relative
/// order.
pub fn sort(items: &mut [Value], fields: &[OrderField]) {
    items.sort_by(|a, b| compare_objects(a, b, fields));
}

/// Parses an order expression and sorts in place.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use objkit_sort::sort_by_expression;
/// use objkit_value::Value;
///
/// let mut rows = vec![
///     Value::from(json!({"id": 5, "type": "foo"})),
///     Value::from(json!({"id": 6, "type": "bar"})),
/// ];
/// sort_by_expression(&mut rows, "type, id");
/// assert_eq!(rows[0], Value::from(json!({"id": 6, "type": "bar"})));
/// ```
pub fn sort_by_expression(items: &mut [Value], expression: &str) {
    sort(items, &parse_order(expression));
}

/// Pure variant of [`sort`]: returns a new sorted vector, leaving the
/// input untouched.
pub fn sorted(items: &[Value], fields: &[OrderField]) -> Vec<Value> {
    let mut out = items.to_vec();
    sort(&mut out, fields);
    out
}

/// Pure variant of [`sort_by_expression`].
pub fn sorted_by_expression(items: &[Value], expression: &str) -> Vec<Value> {
    sorted(items, &parse_order(expression))
}
