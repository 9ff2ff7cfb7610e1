//! objkit-value - the closed value union shared by every objkit component.
//!
//! All structural operations in this workspace (merge, clone, compression,
//! sorting) dispatch over the single [`Value`] enum defined here, using the
//! equality rules in [`equal`] and the duplication rules in [`clone`].

pub mod clone;
pub mod equal;
pub mod value;

pub use clone::deep_clone;
pub use equal::{arrays_equal, dates_equal, deep_equal, objects_equal};
pub use value::{FuncValue, Kind, Object, Value};
