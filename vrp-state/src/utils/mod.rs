//! A collection of various utility helpers.

mod comparison;
pub use self::comparison::*;

pub use rosomaxa::utils::{Float, GenericError, GenericResult, compare_floats};

use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the engine.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;
