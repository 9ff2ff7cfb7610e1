//! objkit-path - the shared name-path grammar and path lookup.
//!
//! One character-level scanner backs three entry points: dotted property
//! paths, comma-separated name lists, and SQL-`ORDER BY`-like order
//! expressions with an optional `DESC` suffix per field. The lenient entry
//! points never fail; malformed input degrades to the longest cleanly
//! parsed prefix. The `*_strict` variants surface the error instead.

pub mod find;
pub mod parser;
pub mod types;

pub use find::find;
pub use parser::{
    parse_names, parse_names_strict, parse_order, parse_order_strict, parse_path,
    parse_path_strict, PathError,
};
pub use types::{NamePath, OrderField};
