//! objkit - pure-data structural operations on tree-shaped values.
//!
//! A facade over the component crates:
//! - [`value`]: the closed [`Value`] union, deep equality, deep clone;
//! - [`path`]: the shared name-path grammar and path lookup;
//! - [`merge`]: deep merge/clone with per-path override hooks and array
//!   set-union combination;
//! - [`codec`]: template-driven positional compression;
//! - [`sort`]: stable multi-key sorting by order expressions.
//!
//! Everything here is synchronous, allocation-only, and failure-free: the
//! lenient parsers degrade to prefixes, merge falls back to cloning on
//! shape mismatches, and the codec treats missing positions as `Undefined`.
//! The only in-place mutator is [`sort::sort`] (and its expression
//! variant); every other operation builds fresh output from read-only
//! inputs.

pub use objkit_codec as codec;
pub use objkit_merge as merge;
pub use objkit_path as path;
pub use objkit_sort as sort;
pub use objkit_value as value;

pub use objkit_codec::{compress, decompress, NestedKind, Template};
pub use objkit_merge::{merge_arrays, Overrides};
pub use objkit_path::{find, parse_order, parse_path, NamePath, OrderField};
pub use objkit_sort::{sort_by_expression, sorted_by_expression};
pub use objkit_value::{deep_clone, deep_equal, Object, Value};
