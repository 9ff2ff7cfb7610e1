//! objkit-codec - positional compression of objects into flat arrays.
//!
//! A declarative [`Template`] maps object keys to array positions; the same
//! template instance drives both directions. Templates may only grow by
//! appending entries across versions (a removed field keeps a placeholder
//! entry in its position), which is what makes old encoded arrays readable
//! against newer templates: missing trailing positions simply decode to
//! `Undefined`. Neither direction has a failure path.

pub mod decode;
pub mod encode;
pub mod template;

pub use decode::{decompress, decompress_array, decompress_array_with, decompress_with, DecodeOptions};
pub use encode::{compress, compress_array};
pub use template::{NestedKind, NestedTemplate, Template, TemplateEntry};
