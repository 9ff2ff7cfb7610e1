//! Field and row comparators.

use std::cmp::Ordering;

use objkit_path::{find, OrderField};
use objkit_value::Value;

/// Total order over two resolved field values.
///
/// Tiers, smallest first: `Undefined`, then `Null`, then real values
/// compared relationally (numbers across variants, strings
/// lexicographically, dates chronologically, booleans with false < true).
/// Values of incomparable kinds tie. The two small tiers only tie against
/// themselves, so a mix of undefined and null rows keeps whatever relative
/// order the stable sort preserves.
pub fn compare_field(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => Ordering::Equal,
        (Value::Undefined, _) => Ordering::Less,
        (_, Value::Undefined) => Ordering::Greater,

        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,

        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::BigInt(a), Value::BigInt(b)) => a.cmp(b),

        _ => compare_numbers(a, b),
    }
}

/// Compares two rows field by field; the first field producing a nonzero
/// result decides, negated when that field is descending. The direction
/// flip applies to the whole field result, undefined/null tiers included.
pub fn compare_objects(a: &Value, b: &Value, fields: &[OrderField]) -> Ordering {
    for field in fields {
        let va = find(a, &field.path);
        let vb = find(b, &field.path);
        let ord = compare_field(va, vb);
        let ord = if field.ascending { ord } else { ord.reverse() };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

// Relational comparison across the numeric variants (big integers
// included); anything non-numeric on either side ties.
fn compare_numbers(a: &Value, b: &Value) -> Ordering {
    match (to_number(a), to_number(b)) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::UInt(u) => Some(*u as f64),
        Value::Float(f) => Some(*f),
        Value::BigInt(i) => Some(*i as f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_sorts_first() {
        assert_eq!(compare_field(&Value::Undefined, &Value::Int(0)), Ordering::Less);
        assert_eq!(compare_field(&Value::Int(0), &Value::Undefined), Ordering::Greater);
        assert_eq!(
            compare_field(&Value::Undefined, &Value::Undefined),
            Ordering::Equal
        );
    }

    #[test]
    fn test_null_sorts_first_but_after_no_one() {
        assert_eq!(compare_field(&Value::Null, &Value::Int(-5)), Ordering::Less);
        assert_eq!(compare_field(&Value::Null, &Value::Null), Ordering::Equal);
        // Undefined and null are separate tiers; undefined is smaller.
        assert_eq!(compare_field(&Value::Undefined, &Value::Null), Ordering::Less);
    }

    #[test]
    fn test_numbers_compare_across_variants() {
        assert_eq!(compare_field(&Value::Int(1), &Value::Float(1.5)), Ordering::Less);
        assert_eq!(compare_field(&Value::BigInt(10), &Value::Int(2)), Ordering::Greater);
    }

    #[test]
    fn test_strings_lexicographic() {
        assert_eq!(
            compare_field(&Value::Str("a".into()), &Value::Str("b".into())),
            Ordering::Less
        );
    }

    #[test]
    fn test_dates_chronological() {
        assert_eq!(compare_field(&Value::Date(1), &Value::Date(2)), Ordering::Less);
    }

    #[test]
    fn test_booleans_false_before_true() {
        assert_eq!(
            compare_field(&Value::Bool(false), &Value::Bool(true)),
            Ordering::Less
        );
    }

    #[test]
    fn test_incomparable_kinds_tie() {
        assert_eq!(
            compare_field(&Value::Str("a".into()), &Value::Int(1)),
            Ordering::Equal
        );
        assert_eq!(
            compare_field(&Value::Array(vec![]), &Value::Int(1)),
            Ordering::Equal
        );
    }
}
