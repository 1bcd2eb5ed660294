//! A collection of models to represent problem and solution in Vehicle Routing Problem domain.

pub mod common;
pub mod problem;
pub mod solution;

use crate::models::problem::{ActivityCost, Fleet, Jobs, TransportCost};
use std::sync::Arc;

/// Defines a problem which routes are built for.
pub struct Problem {
    /// Specifies used fleet.
    pub fleet: Arc<Fleet>,

    /// Specifies all jobs.
    pub jobs: Arc<Jobs>,

    /// Specifies activity costs.
    pub activity: Arc<dyn ActivityCost>,

    /// Specifies transport costs.
    pub transport: Arc<dyn TransportCost>,
}

impl Problem {
    /// Returns total amount of dense activity indices used by the problem.
    pub fn activity_count(&self) -> usize {
        self.jobs.activity_count()
    }

    /// Returns total amount of dense vehicle (actor) indices used by the problem.
    pub fn vehicle_count(&self) -> usize {
        self.fleet.actors.len()
    }
}
