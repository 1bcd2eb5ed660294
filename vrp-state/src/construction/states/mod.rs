//! Contains the state engine: ids, typed values, tiered storage, visitor protocol and
//! the recompute lifecycle.

mod manager;
pub use self::manager::*;

mod registry;
pub use self::registry::*;

mod store;
pub use self::store::*;

mod values;
pub use self::values::*;

mod visitors;
pub use self::visitors::*;
