#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/practical_time_windows_test.rs"]
mod practical_time_windows_test;

use super::VehiclesToUpdate;
use super::vehicles::VehicleSignature;
use crate::construction::states::*;
use crate::models::common::{Location, TimeWindow, Timestamp};
use crate::models::problem::{Actor, ActivityCost, TransportCost, TravelTime};
use crate::models::solution::{Activity, Route};
use crate::utils::{compare_floats, min_float};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::sync::Arc;

/// Computes, moving backward from the route end, the latest time each activity may start without
/// violating time windows of the activities after it. The value is computed separately for each
/// candidate vehicle and kept under [`LATEST_OPERATION_START_TIME`] in the vehicle-conditional
/// activity tier. A route which cannot be served in time by a vehicle gets [`SWITCH_NOT_FEASIBLE`]
/// set for that vehicle.
///
/// Candidate vehicles with the same timing properties share a single computation.
pub struct UpdateVehicleDependentPracticalTimeWindows {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
    vehicles: Arc<dyn VehiclesToUpdate>,
    route_idx: usize,
    groups: Vec<VehicleGroup>,
    locations: Vec<Location>,
}

struct VehicleGroup {
    actor: Arc<Actor>,
    members: Vec<usize>,
    latest: Timestamp,
    next_location: Option<Location>,
    is_feasible: bool,
}

impl UpdateVehicleDependentPracticalTimeWindows {
    /// Creates a new instance of `UpdateVehicleDependentPracticalTimeWindows`.
    pub fn new(
        transport: Arc<dyn TransportCost>,
        activity: Arc<dyn ActivityCost>,
        vehicles: Arc<dyn VehiclesToUpdate>,
    ) -> Self {
        Self { transport, activity, vehicles, route_idx: 0, groups: Vec::default(), locations: Vec::default() }
    }
}

impl RouteVisitor for UpdateVehicleDependentPracticalTimeWindows {
    fn begin(&mut self, route: &Route, states: &mut StateStore) {
        self.route_idx = route.index();

        self.locations.clear();
        self.locations.extend(route.tour.all_activities().map(|activity| activity.place.location));

        self.groups.clear();
        let mut signatures = FxHashMap::<VehicleSignature, usize>::default();
        self.vehicles.get(route).into_iter().for_each(|actor| {
            let signature = VehicleSignature::from(actor.as_ref());
            match signatures.entry(signature) {
                Entry::Occupied(entry) => self.groups[*entry.get()].members.push(actor.index),
                Entry::Vacant(entry) => {
                    entry.insert(self.groups.len());
                    self.groups.push(VehicleGroup {
                        members: vec![actor.index],
                        latest: actor.detail.time.end,
                        next_location: actor.detail.end,
                        is_feasible: true,
                        actor,
                    });
                }
            }
        });

        self.groups.iter().flat_map(|group| group.members.iter()).for_each(|&vehicle_idx| {
            states.put_vehicle_route_state(SWITCH_NOT_FEASIBLE, self.route_idx, vehicle_idx, false);
        });
    }

    fn visit(&mut self, activity: &mut Activity, states: &mut StateStore) {
        self.locations.pop();

        if activity.job.is_none() {
            return;
        }

        let location = activity.place.location;
        // only the route start is left: the previous stop is the depot of the candidate vehicle
        let prev_location = match self.locations.as_slice() {
            [_] | [] => None,
            [.., prev] => Some(*prev),
        };

        for group in self.groups.iter_mut() {
            let actor = group.actor.as_ref();
            let prev_location = prev_location.unwrap_or(actor.detail.start);

            let travel = group.next_location.map_or(0., |next| {
                self.transport.duration(actor, location, next, TravelTime::Arrival(group.latest))
            });
            let latest_departure = group.latest - travel;
            let duration =
                self.activity.duration(actor, prev_location, activity, latest_departure - activity.place.duration);

            let bound = latest_departure - duration;
            let (latest, is_feasible) = select_latest_start(activity.place.times.as_slice(), bound);

            group.latest = latest;
            group.next_location = Some(location);

            group.members.iter().for_each(|&vehicle_idx| {
                states.put_vehicle_activity_state(LATEST_OPERATION_START_TIME, activity.index, vehicle_idx, latest);
            });

            if !is_feasible && group.is_feasible {
                group.is_feasible = false;
                group.members.iter().for_each(|&vehicle_idx| {
                    states.put_vehicle_route_state(SWITCH_NOT_FEASIBLE, self.route_idx, vehicle_idx, true);
                });
            }
        }
    }

    fn finish(&mut self, _: &mut StateStore) {
        self.groups.clear();
    }
}

impl From<UpdateVehicleDependentPracticalTimeWindows> for StateUpdater {
    fn from(updater: UpdateVehicleDependentPracticalTimeWindows) -> Self {
        StateUpdater::reverse(updater)
    }
}

/// Returns the latest operation start not later than `bound` and a flag whether it lies inside
/// one of the time windows. Among windows starting not later than `bound`, the one which allows
/// the latest start is selected. When every window starts after `bound`, the bound itself is
/// returned and the flag is false.
pub fn select_latest_start(times: &[TimeWindow], bound: Timestamp) -> (Timestamp, bool) {
    if times.is_empty() {
        return (bound, true);
    }

    times
        .iter()
        .filter(|time| compare_floats(time.start, bound) != Ordering::Greater)
        .map(|time| min_float(bound, time.end))
        .max_by(|a, b| compare_floats(*a, *b))
        .map_or((bound, false), |latest| (latest, true))
}
