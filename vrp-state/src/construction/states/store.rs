#[cfg(test)]
#[path = "../../../tests/unit/construction/states/store_test.rs"]
mod store_test;

use super::{StateId, StateValue, StateValueType};

type Slots = Vec<Option<StateValue>>;

/// Keeps state values in three tiers: problem, route and activity. Route and activity tiers have
/// vehicle-conditional variants which keep a separate value per candidate vehicle.
///
/// Every tier is a dense array addressed by state index, then by route (actor) or activity index,
/// then by vehicle index. Storage grows on write, reads of never written slots return nothing.
///
/// The store is not synchronized: values of a route are valid only after a recompute pass over
/// that route has finished and until the route is mutated.
#[derive(Clone, Default)]
pub struct StateStore {
    problem: Slots,
    routes: Vec<Slots>,
    vehicle_routes: Vec<Vec<Slots>>,
    activities: Vec<Slots>,
    vehicle_activities: Vec<Vec<Slots>>,
    activity_capacity: usize,
    vehicle_capacity: usize,
}

impl StateStore {
    /// Creates a new store with storage pre-sized for given amount of activities and vehicles.
    pub fn with_capacity(activity_capacity: usize, vehicle_capacity: usize) -> Self {
        Self { activity_capacity, vehicle_capacity, ..Self::default() }
    }

    /// Puts a problem state value, overwriting existing one.
    pub fn put_problem_state(&mut self, id: StateId, value: impl Into<StateValue>) {
        *slot_mut(&mut self.problem, id.index()) = Some(value.into());
    }

    /// Gets a problem state value. Panics if the value has a different type.
    pub fn get_problem_state<T: StateValueType>(&self, id: StateId) -> Option<&T> {
        typed(id, self.problem.get(id.index()).and_then(|value| value.as_ref()))
    }

    /// Gets a problem state value which is expected to be set. Panics if it is absent.
    pub fn require_problem_state<T: StateValueType>(&self, id: StateId) -> &T {
        self.get_problem_state(id).unwrap_or_else(|| panic!("problem state {id} is not set"))
    }

    /// Checks whether a problem state value is set.
    pub fn has_problem_state(&self, id: StateId) -> bool {
        self.problem.get(id.index()).is_some_and(|value| value.is_some())
    }

    /// Puts a route state value, overwriting existing one.
    pub fn put_route_state(&mut self, id: StateId, route_idx: usize, value: impl Into<StateValue>) {
        *slot_mut(slot_mut(&mut self.routes, id.index()), route_idx) = Some(value.into());
    }

    /// Gets a route state value. Panics if the value has a different type.
    pub fn get_route_state<T: StateValueType>(&self, id: StateId, route_idx: usize) -> Option<&T> {
        typed(id, lookup(&self.routes, id, route_idx))
    }

    /// Gets a route state value which is expected to be set. Panics if it is absent.
    pub fn require_route_state<T: StateValueType>(&self, id: StateId, route_idx: usize) -> &T {
        self.get_route_state(id, route_idx)
            .unwrap_or_else(|| panic!("route state {id} is not set for route {route_idx}"))
    }

    /// Checks whether a route state value is set.
    pub fn has_route_state(&self, id: StateId, route_idx: usize) -> bool {
        lookup(&self.routes, id, route_idx).is_some()
    }

    /// Puts a route state value computed for specific vehicle.
    pub fn put_vehicle_route_state(
        &mut self,
        id: StateId,
        route_idx: usize,
        vehicle_idx: usize,
        value: impl Into<StateValue>,
    ) {
        let vehicles = slot_mut(slot_mut(&mut self.vehicle_routes, id.index()), route_idx);
        *slot_mut(vehicles, vehicle_idx) = Some(value.into());
    }

    /// Gets a route state value computed for specific vehicle. Panics if the value has a different type.
    pub fn get_vehicle_route_state<T: StateValueType>(
        &self,
        id: StateId,
        route_idx: usize,
        vehicle_idx: usize,
    ) -> Option<&T> {
        typed(id, lookup_vehicle(&self.vehicle_routes, id, route_idx, vehicle_idx))
    }

    /// Gets a route state value computed for specific vehicle which is expected to be set.
    pub fn require_vehicle_route_state<T: StateValueType>(
        &self,
        id: StateId,
        route_idx: usize,
        vehicle_idx: usize,
    ) -> &T {
        self.get_vehicle_route_state(id, route_idx, vehicle_idx)
            .unwrap_or_else(|| panic!("route state {id} is not set for route {route_idx} and vehicle {vehicle_idx}"))
    }

    /// Checks whether a route state value is set for specific vehicle.
    pub fn has_vehicle_route_state(&self, id: StateId, route_idx: usize, vehicle_idx: usize) -> bool {
        lookup_vehicle(&self.vehicle_routes, id, route_idx, vehicle_idx).is_some()
    }

    /// Puts an activity state value, overwriting existing one.
    pub fn put_activity_state(&mut self, id: StateId, activity_idx: usize, value: impl Into<StateValue>) {
        let capacity = self.activity_capacity;
        let activities = slot_mut(&mut self.activities, id.index());
        activities.reserve(capacity.saturating_sub(activities.len()));

        *slot_mut(activities, activity_idx) = Some(value.into());
    }

    /// Gets an activity state value. Panics if the value has a different type.
    pub fn get_activity_state<T: StateValueType>(&self, id: StateId, activity_idx: usize) -> Option<&T> {
        typed(id, lookup(&self.activities, id, activity_idx))
    }

    /// Gets an activity state value which is expected to be set. Panics if it is absent.
    pub fn require_activity_state<T: StateValueType>(&self, id: StateId, activity_idx: usize) -> &T {
        self.get_activity_state(id, activity_idx)
            .unwrap_or_else(|| panic!("activity state {id} is not set for activity {activity_idx}"))
    }

    /// Checks whether an activity state value is set.
    pub fn has_activity_state(&self, id: StateId, activity_idx: usize) -> bool {
        lookup(&self.activities, id, activity_idx).is_some()
    }

    /// Puts an activity state value computed for specific vehicle.
    pub fn put_vehicle_activity_state(
        &mut self,
        id: StateId,
        activity_idx: usize,
        vehicle_idx: usize,
        value: impl Into<StateValue>,
    ) {
        let (activity_capacity, vehicle_capacity) = (self.activity_capacity, self.vehicle_capacity);
        let activities = slot_mut(&mut self.vehicle_activities, id.index());
        activities.reserve(activity_capacity.saturating_sub(activities.len()));

        let vehicles = slot_mut(activities, activity_idx);
        vehicles.reserve(vehicle_capacity.saturating_sub(vehicles.len()));

        *slot_mut(vehicles, vehicle_idx) = Some(value.into());
    }

    /// Gets an activity state value computed for specific vehicle. Panics if the value has a different type.
    pub fn get_vehicle_activity_state<T: StateValueType>(
        &self,
        id: StateId,
        activity_idx: usize,
        vehicle_idx: usize,
    ) -> Option<&T> {
        typed(id, lookup_vehicle(&self.vehicle_activities, id, activity_idx, vehicle_idx))
    }

    /// Gets an activity state value computed for specific vehicle which is expected to be set.
    pub fn require_vehicle_activity_state<T: StateValueType>(
        &self,
        id: StateId,
        activity_idx: usize,
        vehicle_idx: usize,
    ) -> &T {
        self.get_vehicle_activity_state(id, activity_idx, vehicle_idx).unwrap_or_else(|| {
            panic!("activity state {id} is not set for activity {activity_idx} and vehicle {vehicle_idx}")
        })
    }

    /// Checks whether an activity state value is set for specific vehicle.
    pub fn has_vehicle_activity_state(&self, id: StateId, activity_idx: usize, vehicle_idx: usize) -> bool {
        lookup_vehicle(&self.vehicle_activities, id, activity_idx, vehicle_idx).is_some()
    }

    /// Drops all problem state values. Route and activity values are kept: they are overwritten
    /// by the next recompute pass.
    pub fn clear(&mut self) {
        self.problem.clear();
    }

    /// Drops all values in all tiers.
    pub fn reset(&mut self) {
        self.problem.clear();
        self.routes.clear();
        self.vehicle_routes.clear();
        self.activities.clear();
        self.vehicle_activities.clear();
    }
}

fn slot_mut<T: Default>(items: &mut Vec<T>, index: usize) -> &mut T {
    if items.len() <= index {
        items.resize_with(index + 1, T::default);
    }

    &mut items[index]
}

fn lookup(tier: &[Slots], id: StateId, idx: usize) -> Option<&StateValue> {
    tier.get(id.index()).and_then(|slots| slots.get(idx)).and_then(|value| value.as_ref())
}

fn lookup_vehicle(tier: &[Vec<Slots>], id: StateId, idx: usize, vehicle_idx: usize) -> Option<&StateValue> {
    tier.get(id.index())
        .and_then(|items| items.get(idx))
        .and_then(|slots| slots.get(vehicle_idx))
        .and_then(|value| value.as_ref())
}

fn typed<T: StateValueType>(id: StateId, value: Option<&StateValue>) -> Option<&T> {
    value.map(|value| {
        T::from_state(value).unwrap_or_else(|| {
            panic!("state {id} has type '{}', but '{}' is requested", value.type_name(), T::TYPE_NAME)
        })
    })
}
