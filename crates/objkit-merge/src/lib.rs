//! objkit-merge - the recursive merge/clone engine.
//!
//! Combines a source structure with a fallback (default) structure, with
//! caller-supplied override functions addressed by name path. The source
//! always wins where it has a defined value; the fallback fills keys that
//! are absent or explicitly undefined in the source. Nested objects merge
//! field by field; everything else clones. There are no failure paths:
//! shape mismatches fall back to source-only cloning, callables silently
//! become `Undefined`, and unknown override paths simply never match.

pub mod combine;
pub mod merge;
pub mod overrides;

pub use combine::merge_arrays;
pub use merge::{clone, merge};
pub use overrides::Overrides;
