//! The construction module contains the state engine used while routes are being built and
//! modified by a search: the [`states`] storage with its lifecycle and the [`updaters`] which
//! propagate derived values along routes.

pub mod states;
pub mod updaters;
