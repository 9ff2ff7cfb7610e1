//! Path and order-field types.

/// An ordered sequence of raw segment names identifying a field at
/// arbitrary nesting depth. Segments are arbitrary strings; the textual
/// syntax quotes segments that contain separator characters.
pub type NamePath = Vec<String>;

/// One key of a multi-key sort: a name path plus a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderField {
    /// Path to the attribute being compared.
    pub path: NamePath,
    /// Sort direction; ascending unless a `DESC` suffix was parsed.
    pub ascending: bool,
}

impl OrderField {
    /// Ascending field over the given path.
    pub fn asc(path: NamePath) -> Self {
        Self {
            path,
            ascending: true,
        }
    }

    /// Descending field over the given path.
    pub fn desc(path: NamePath) -> Self {
        Self {
            path,
            ascending: false,
        }
    }
}
