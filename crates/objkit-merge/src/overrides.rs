//! Per-path override registry for merge and clone.

use std::collections::HashMap;
use std::fmt;

use objkit_path::{parse_path, NamePath};
use objkit_value::Value;

/// A caller-supplied replacement for the value the engine would otherwise
/// produce at one name path.
pub type OverrideFn = Box<dyn Fn(&Value) -> Value>;

/// Mapping from name paths to override functions.
///
/// Keys are segment sequences, not raw strings; textual paths handed to
/// [`Overrides::set`] go through the shared path grammar once, so segment
/// names containing separator characters are quoted the usual way. Array
/// element positions use the literal `[]` segment, e.g. `tags.[].id`.
///
/// An override fully replaces the engine's handling of its path: its return
/// value is placed in the result verbatim, with no further cloning.
#[derive(Default)]
pub struct Overrides {
    map: HashMap<NamePath, OverrideFn>,
}

impl Overrides {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an override at a textual name path.
    pub fn set<F>(mut self, path: &str, f: F) -> Self
    where
        F: Fn(&Value) -> Value + 'static,
    {
        self.map.insert(parse_path(path), Box::new(f));
        self
    }

    /// Registers an override at an already-segmented path.
    pub fn set_segments<F>(mut self, path: NamePath, f: F) -> Self
    where
        F: Fn(&Value) -> Value + 'static,
    {
        self.map.insert(path, Box::new(f));
        self
    }

    /// Looks up the override for an exact segment sequence.
    pub fn get(&self, path: &[String]) -> Option<&OverrideFn> {
        self.map.get(path)
    }

    /// True when no overrides are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("paths", &self.map.keys().collect::<Vec<_>>())
            .finish()
    }
}
