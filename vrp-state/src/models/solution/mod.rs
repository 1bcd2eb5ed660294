//! Solution domain models.

mod route;
pub use self::route::*;

mod tour;
pub use self::tour::*;
