#[cfg(test)]
#[path = "../../../tests/unit/construction/states/manager_test.rs"]
mod manager_test;

use super::*;
use crate::models::Problem;
use crate::models::problem::Job;
use crate::models::solution::Route;
use crate::utils::InfoLogger;

/// Owns state ids, state values and the ordered pipeline of state updaters.
///
/// Updaters run in the order of their registration. Consecutive updaters with the same direction
/// share a single pass over the route, so an updater which depends on output of another one has
/// to be registered after it.
pub struct StateManager {
    registry: StateRegistry,
    store: StateStore,
    pipeline: Vec<RouteVisitors>,
    logger: InfoLogger,
}

impl StateManager {
    /// Creates a new instance of `StateManager` with empty pipeline.
    pub fn new(logger: InfoLogger) -> Self {
        Self { registry: StateRegistry::default(), store: StateStore::default(), pipeline: Vec::default(), logger }
    }

    /// Creates a new instance of `StateManager` with storage pre-sized for the problem.
    pub fn new_for_problem(problem: &Problem, logger: InfoLogger) -> Self {
        Self {
            store: StateStore::with_capacity(problem.activity_count(), problem.vehicle_count()),
            ..Self::new(logger)
        }
    }

    /// Returns the id of the state with given name. Repeated calls with the same name return the same id.
    pub fn create_state_id(&mut self, name: &str) -> StateId {
        self.registry.create_state_id(name)
    }

    /// Returns state registry.
    pub fn registry(&self) -> &StateRegistry {
        &self.registry
    }

    /// Returns state values.
    pub fn states(&self) -> &StateStore {
        &self.store
    }

    /// Returns mutable state values.
    pub fn states_mut(&mut self) -> &mut StateStore {
        &mut self.store
    }

    /// Registers a state updater. Registration order is invocation order.
    pub fn add_state_updater(&mut self, updater: StateUpdater) {
        let StateUpdater { direction, visitor } = updater;

        match self.pipeline.last_mut() {
            Some(visitors) if visitors.direction() == direction => visitors.add(visitor),
            _ => {
                let mut visitors = RouteVisitors::new(direction);
                visitors.add(visitor);
                self.pipeline.push(visitors);
            }
        }
    }

    /// Returns total amount of registered updaters.
    pub fn updater_count(&self) -> usize {
        self.pipeline.iter().map(|visitors| visitors.size()).sum()
    }

    /// Runs all registered updaters over every given route. Called before insertions are evaluated
    /// on these routes. Unassigned jobs are not used by the built-in updaters.
    pub fn inform_insertion_starts(&mut self, routes: &mut [Route], _unassigned: &[Job]) {
        routes.iter_mut().for_each(|route| self.recalculate_states(route));
    }

    /// Runs all registered updaters over the route.
    pub fn recalculate_states(&mut self, route: &mut Route) {
        let store = &mut self.store;
        self.pipeline.iter_mut().for_each(|visitors| visitors.visit(route, store));
    }

    /// Drops problem state values. Route and activity values stay until the next recompute.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Drops all state values keeping registered ids and updaters.
    pub fn reset(&mut self) {
        self.store.reset();
        (self.logger)(format!("state store is reset, {} state ids are kept", self.registry.size()).as_str());
    }
}
