//! The [`Value`] union and its kind classification.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Insertion-ordered string-keyed map of values.
///
/// Iteration order is the order keys were inserted, which matters for the
/// merge engine (source keys are processed in order) and for positional
/// compression templates derived from object shapes.
pub type Object = IndexMap<String, Value>;

/// Universal value type for all objkit operations.
///
/// A closed tagged union over plain tree-shaped data:
/// - `Undefined` is a first-class "present but undefined" value, distinct
///   from `Null` and from a key being absent altogether.
/// - `Date` carries an instant as epoch milliseconds and is compared and
///   cloned by that number, never by identity.
/// - `Func` is an opaque callable. It is not legal persistent data; the
///   clone and merge rules drop it to `Undefined` wherever it appears.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Present-but-undefined marker.
    Undefined,
    /// Explicit null, distinct from `Undefined`.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer above `i64::MAX`.
    UInt(u64),
    /// Floating-point number.
    Float(f64),
    /// Big integer (never numerically equal to the other numeric kinds).
    BigInt(i128),
    /// String.
    Str(String),
    /// Instant in time, epoch milliseconds.
    Date(i64),
    /// Ordered heterogeneous sequence.
    Array(Vec<Value>),
    /// String-keyed map, insertion-ordered.
    Object(Object),
    /// Opaque callable; dropped to `Undefined` by clone and merge.
    Func(FuncValue),
}

/// Kind tag produced by [`Value::kind`]; the single classification every
/// component's dispatch matches over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Int,
    UInt,
    Float,
    BigInt,
    Str,
    Date,
    Array,
    Object,
    Func,
}

impl Value {
    /// Classifies this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::UInt(_) => Kind::UInt,
            Value::Float(_) => Kind::Float,
            Value::BigInt(_) => Kind::BigInt,
            Value::Str(_) => Kind::Str,
            Value::Date(_) => Kind::Date,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Func(_) => Kind::Func,
        }
    }

    /// True for `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// True for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for the kinds that are cheaply comparable by value: strings,
    /// numbers, booleans, big integers, and dates. These are the kinds the
    /// array combiner de-duplicates; everything else is appended blindly.
    pub fn is_comparable(&self) -> bool {
        matches!(
            self,
            Value::Bool(_)
                | Value::Int(_)
                | Value::UInt(_)
                | Value::Float(_)
                | Value::BigInt(_)
                | Value::Str(_)
                | Value::Date(_)
        )
    }

    /// Borrows the object map when this value is an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Borrows the element slice when this value is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Opaque shared callable carried by [`Value::Func`].
///
/// Exists only so the merge/clone rules can observe a callable and drop it;
/// two `FuncValue`s compare equal only when they are the same allocation.
#[derive(Clone)]
pub struct FuncValue(Arc<dyn Fn(&Value) -> Value + Send + Sync>);

impl FuncValue {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the callable.
    pub fn call(&self, value: &Value) -> Value {
        (self.0)(value)
    }
}

impl fmt::Debug for FuncValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FuncValue")
    }
}

impl PartialEq for FuncValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Object(
                obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            // JSON has no undefined; collapse to null like JSON.stringify.
            Value::Undefined => serde_json::Value::Null,
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::json!(i),
            Value::UInt(u) => serde_json::json!(u),
            Value::Float(f) => serde_json::json!(f),
            Value::BigInt(i) => match i64::try_from(i) {
                Ok(i) => serde_json::json!(i),
                Err(_) => serde_json::Value::String(i.to_string()),
            },
            Value::Str(s) => serde_json::Value::String(s),
            Value::Date(ms) => serde_json::json!(ms),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Func(_) => serde_json::Value::Null,
        }
    }
}
