//! This crate contains an incremental state propagation engine used by metaheuristics which solve
//! variations of ***Vehicle Routing Problem***.
//!
//! The engine keeps derived route quantities (activity schedules, cumulative load, latest feasible
//! operation start per candidate vehicle, ride time slack, aggregated skills) up to date while the
//! search mutates routes. It consists of:
//!
//! - a [state registry](construction::states::StateRegistry) which interns state names into dense ids;
//! - a [state store](construction::states::StateStore) with problem, route and activity tiers and
//!   their vehicle-conditional variants;
//! - a [visitor protocol](construction::states::RouteVisitor) with forward and reverse drivers;
//! - a set of [state updaters](construction::updaters) which write derived values into the store;
//! - a [state manager](construction::states::StateManager) which drives recomputation.
//!
//! # Examples
//!
//! A minimal pipeline which keeps loads and skills of a route up to date:
//!
//! ```
//! use std::sync::Arc;
//! use vrp_state::prelude::*;
//!
//! let mut manager = StateManager::new(Arc::new(|_: &str| {}));
//! manager.add_state_updater(UpdateLoads::default().into());
//! manager.add_state_updater(UpdateSkills::default().into());
//!
//! let tag = manager.create_state_id("tag");
//! assert_eq!(manager.create_state_id("tag"), tag);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[macro_use]
pub mod macros;

pub mod config;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod utils;
