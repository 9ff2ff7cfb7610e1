//! Positional-array-to-object decoding.

use objkit_value::{deep_clone, Object, Value};

use crate::template::{NestedKind, Template, TemplateEntry};

/// Decoding behavior toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Keep stored nulls as `Null` instead of collapsing them to
    /// `Undefined`. The default collapse exists because the intended
    /// persistence path is JSON text, which turns `Undefined` into `Null`
    /// on the way out; transports that keep the two distinct can opt out.
    pub preserve_null: bool,
}

/// Decompresses a positional array against a template.
///
/// Entries are read by index. Positions beyond the data's length decode to
/// `Undefined` — the designed forward-compatibility path for templates
/// that have grown trailing fields since the data was encoded. A stored
/// `Null` decodes to `Undefined`; see [`DecodeOptions::preserve_null`].
/// Decompression never fails.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use objkit_codec::{decompress, Template};
/// use objkit_value::Value;
///
/// let data = [Value::Int(123), Value::Str("yang".into())];
/// let obj = decompress(&data, &Template::keys(["id", "name", "addr"]));
/// assert_eq!(obj.get("id"), Some(&Value::Int(123)));
/// assert_eq!(obj.get("addr"), Some(&Value::Undefined));
/// ```
pub fn decompress(data: &[Value], template: &Template) -> Object {
    decompress_with(data, template, DecodeOptions::default())
}

/// [`decompress`] with explicit options.
pub fn decompress_with(data: &[Value], template: &Template, options: DecodeOptions) -> Object {
    let mut out = Object::new();
    for (index, entry) in template.0.iter().enumerate() {
        let stored = data.get(index).unwrap_or(&Value::Undefined);
        match entry {
            TemplateEntry::Key(key) => {
                let value = match stored {
                    Value::Undefined => Value::Undefined,
                    Value::Null if !options.preserve_null => Value::Undefined,
                    other => deep_clone(other),
                };
                out.insert(key.clone(), value);
            }
            TemplateEntry::Nested(nested) => {
                let value = match stored {
                    Value::Array(row) => match nested.kind {
                        NestedKind::Object => {
                            Value::Object(decompress_with(row, &nested.template, options))
                        }
                        NestedKind::Array => Value::Array(
                            decompress_array_with(row, &nested.template, options)
                                .into_iter()
                                .map(Value::Object)
                                .collect(),
                        ),
                    },
                    Value::Null if options.preserve_null => Value::Null,
                    // Null, undefined, or a non-array: no recursion.
                    _ => Value::Undefined,
                };
                out.insert(nested.name.clone(), value);
            }
        }
    }
    out
}

/// Applies [`decompress`] element-wise.
///
/// A non-array element decodes to an object whose every field is
/// `Undefined`.
pub fn decompress_array(data: &[Value], template: &Template) -> Vec<Object> {
    decompress_array_with(data, template, DecodeOptions::default())
}

/// [`decompress_array`] with explicit options.
pub fn decompress_array_with(
    data: &[Value],
    template: &Template,
    options: DecodeOptions,
) -> Vec<Object> {
    data.iter()
        .map(|row| match row {
            Value::Array(row) => decompress_with(row, template, options),
            _ => decompress_with(&[], template, options),
        })
        .collect()
}
