//! Declarative positional templates.

use serde::{Deserialize, Serialize};

/// Ordered schema mapping object keys to array positions.
///
/// JSON-representable: a template serializes as an array whose items are
/// either bare key names or nested descriptors, e.g.
/// `["id", "name", {"name": "addr", "kind": "object", "template": ["city"]}]`.
/// Authored and versioned by the calling application and persisted
/// alongside any data encoded with it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template(pub Vec<TemplateEntry>);

/// One positional entry of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateEntry {
    /// A scalar (or opaque) field copied verbatim to its position.
    Key(String),
    /// A field whose value is itself positionally encoded.
    Nested(NestedTemplate),
}

/// Descriptor for a nested object or array-of-objects field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedTemplate {
    /// Key of the nested field.
    pub name: String,
    /// Whether the field holds one object or an array of objects.
    pub kind: NestedKind,
    /// Template applied to the nested object(s).
    pub template: Template,
}

/// Shape of a nested template field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestedKind {
    /// A single nested object.
    Object,
    /// An array of objects, each encoded with the child template.
    Array,
}

impl Template {
    /// Template of bare keys only.
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(|k| TemplateEntry::Key(k.into())).collect())
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the template has no positions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a bare key entry. Appending is the only legal way a template
    /// may evolve between versions.
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.0.push(TemplateEntry::Key(key.into()));
    }

    /// Appends a nested descriptor entry.
    pub fn push_nested(&mut self, name: impl Into<String>, kind: NestedKind, template: Template) {
        self.0.push(TemplateEntry::Nested(NestedTemplate {
            name: name.into(),
            kind,
            template,
        }));
    }
}
