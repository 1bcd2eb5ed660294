#[cfg(test)]
#[path = "../../../tests/unit/construction/states/registry_test.rs"]
mod registry_test;

use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

/// A handle of a state kind: a stable dense index assigned once per distinct name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    /// Returns a dense index of the state.
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Amount of indices reserved for built-in states. User states are allocated after this block.
pub const RESERVED_STATE_IDS: usize = 20;

/// A current load after activity (activity state).
pub const LOAD: StateId = StateId(0);
/// A load at the beginning of the route (route state).
pub const LOAD_AT_BEGINNING: StateId = StateId(1);
/// A load at the end of the route (route state).
pub const LOAD_AT_END: StateId = StateId(2);
/// A max load of the route (route state).
pub const MAX_LOAD: StateId = StateId(3);
/// A max load from activity till the end of the route (activity state).
pub const FUTURE_MAX_LOAD: StateId = StateId(4);
/// A max load from the start of the route till activity (activity state).
pub const PAST_MAX_LOAD: StateId = StateId(5);
/// A latest operation start time of activity (vehicle-conditional activity state).
pub const LATEST_OPERATION_START_TIME: StateId = StateId(6);
/// Signals that the route is infeasible for a vehicle (vehicle-conditional route state).
pub const SWITCH_NOT_FEASIBLE: StateId = StateId(7);
/// A slack of activity start time with respect to ride time limits (vehicle-conditional activity state).
pub const MAX_TIME_IN_VEHICLE_SLACK: StateId = StateId(8);
/// A union of required skills (route state).
pub const SKILLS: StateId = StateId(9);
/// Accumulated costs (activity and route state).
pub const COSTS: StateId = StateId(10);
/// A total route duration (route state).
pub const TOTAL_DURATION: StateId = StateId(11);
/// A total route distance (route state).
pub const TOTAL_DISTANCE: StateId = StateId(12);
/// A waiting time accumulated from activity till the end of the route (activity state).
pub const FUTURE_WAITING: StateId = StateId(13);

const BUILT_IN_STATES: &[(StateId, &str)] = &[
    (LOAD, "load"),
    (LOAD_AT_BEGINNING, "load_at_beginning"),
    (LOAD_AT_END, "load_at_end"),
    (MAX_LOAD, "max_load"),
    (FUTURE_MAX_LOAD, "future_max_load"),
    (PAST_MAX_LOAD, "past_max_load"),
    (LATEST_OPERATION_START_TIME, "latest_operation_start_time"),
    (SWITCH_NOT_FEASIBLE, "switch_not_feasible"),
    (MAX_TIME_IN_VEHICLE_SLACK, "max_time_in_vehicle_slack"),
    (SKILLS, "skills"),
    (COSTS, "costs"),
    (TOTAL_DURATION, "total_duration"),
    (TOTAL_DISTANCE, "total_distance"),
    (FUTURE_WAITING, "future_waiting"),
];

/// Interns state names into [`StateId`]s.
///
/// Ids are never invalidated: resetting a store wipes only the values keyed by them. The registry
/// is not synchronized, all ids should be created before routes are processed in parallel.
pub struct StateRegistry {
    ids: FxHashMap<String, StateId>,
    names: Vec<Option<String>>,
}

impl Default for StateRegistry {
    fn default() -> Self {
        let mut names = vec![None; RESERVED_STATE_IDS];
        let ids = BUILT_IN_STATES
            .iter()
            .map(|(id, name)| {
                names[id.index()] = Some(name.to_string());
                (name.to_string(), *id)
            })
            .collect();

        Self { ids, names }
    }
}

impl StateRegistry {
    /// Returns the id of the state with given name, allocating the next free index for unseen names.
    pub fn create_state_id(&mut self, name: &str) -> StateId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }

        let id = StateId(self.names.len());
        self.names.push(Some(name.to_string()));
        self.ids.insert(name.to_string(), id);

        id
    }

    /// Returns an existing id for given name.
    pub fn get(&self, name: &str) -> Option<StateId> {
        self.ids.get(name).copied()
    }

    /// Returns a name of given state id.
    pub fn name(&self, id: StateId) -> Option<&str> {
        self.names.get(id.index()).and_then(|name| name.as_deref())
    }

    /// Returns amount of allocated indices, including the reserved block.
    pub fn size(&self) -> usize {
        self.names.len()
    }
}
