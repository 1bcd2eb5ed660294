#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/max_time_in_vehicle_test.rs"]
mod max_time_in_vehicle_test;

use super::{VehiclesToUpdate, select_time_window};
use crate::construction::states::*;
use crate::models::common::{Duration, Location, Timestamp};
use crate::models::problem::{Actor, ActivityCost, JobMaxRideDurationDimension, Multi, TransportCost, TravelTime};
use crate::models::solution::{Activity, Route};
use crate::utils::{Float, max_float, min_float};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Computes, per candidate vehicle, how much the start of each activity can be delayed without
/// exceeding its time window or the max ride duration of any multi job (e.g. shipment) which is
/// on board at that moment. The result is kept under [`MAX_TIME_IN_VEHICLE_SLACK`] in the
/// vehicle-conditional activity tier.
///
/// A ride duration is measured from the end of the first sub job to the start of the last one.
/// Activities which are not affected by any ride limit get [`Float::MAX`], including the start and
/// the end of the route.
pub struct UpdateMaxTimeInVehicle {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
    vehicles: Arc<dyn VehiclesToUpdate>,
    start_idx: Option<usize>,
    timelines: Vec<VehicleTimeline>,
}

struct VehicleTimeline {
    actor: Arc<Actor>,
    location: Location,
    departure: Timestamp,
    records: Vec<RideRecord>,
}

struct RideRecord {
    activity_idx: usize,
    start: Timestamp,
    end: Timestamp,
    window_end: Timestamp,
    role: RideRole,
}

#[derive(Clone, Copy)]
enum RideRole {
    Unbound,
    Pickup { multi: usize },
    Delivery { multi: usize, max_ride: Duration },
}

impl UpdateMaxTimeInVehicle {
    /// Creates a new instance of `UpdateMaxTimeInVehicle`.
    pub fn new(
        transport: Arc<dyn TransportCost>,
        activity: Arc<dyn ActivityCost>,
        vehicles: Arc<dyn VehiclesToUpdate>,
    ) -> Self {
        Self { transport, activity, vehicles, start_idx: None, timelines: Vec::default() }
    }
}

impl RouteVisitor for UpdateMaxTimeInVehicle {
    fn begin(&mut self, route: &Route, _: &mut StateStore) {
        let committed = route.tour.start().map(|start| (start.place.location, start.schedule.departure));
        self.start_idx = route.tour.start().map(|start| start.index);

        self.timelines = self
            .vehicles
            .get(route)
            .into_iter()
            .map(|actor| {
                let (location, departure) = committed
                    .filter(|_| actor.index == route.actor.index)
                    .unwrap_or((actor.detail.start, actor.detail.time.start));

                VehicleTimeline { actor, location, departure, records: Vec::with_capacity(route.tour.total()) }
            })
            .collect();
    }

    fn visit(&mut self, activity: &mut Activity, _: &mut StateStore) {
        let role = get_ride_role(activity);

        for timeline in self.timelines.iter_mut() {
            let actor = timeline.actor.as_ref();
            let departure = TravelTime::Departure(timeline.departure);
            let location = match activity.job {
                Some(_) => activity.place.location,
                None => actor.detail.end.unwrap_or(activity.place.location),
            };
            let arrival = timeline.departure + self.transport.duration(actor, timeline.location, location, departure);

            let window = select_time_window(activity.place.times.as_slice(), arrival).unwrap_or(&activity.place.time);
            let start = max_float(arrival, window.start);
            let end = start + self.activity.duration(actor, timeline.location, activity, arrival);

            let window_end = window.end;

            timeline.records.push(RideRecord { activity_idx: activity.index, start, end, window_end, role });
            timeline.location = location;
            timeline.departure = end;
        }
    }

    fn finish(&mut self, states: &mut StateStore) {
        let start_idx = self.start_idx.take();

        self.timelines.drain(..).for_each(|timeline| {
            let vehicle_idx = timeline.actor.index;
            if let Some(start_idx) = start_idx {
                states.put_vehicle_activity_state(MAX_TIME_IN_VEHICLE_SLACK, start_idx, vehicle_idx, Float::MAX);
            }

            let ride_slacks = get_ride_slacks(timeline.records.as_slice());

            let mut on_board = FxHashMap::<usize, Duration>::default();
            timeline.records.iter().zip(ride_slacks.iter()).rev().for_each(|(record, ride_slack)| {
                let is_bound = match (record.role, ride_slack) {
                    (RideRole::Delivery { multi, .. }, Some(slack)) => {
                        on_board.insert(multi, *slack);
                        true
                    }
                    (RideRole::Pickup { multi }, _) => {
                        on_board.remove(&multi);
                        true
                    }
                    _ => false,
                };

                let slack = if is_bound || !on_board.is_empty() {
                    let ride_slack = on_board.values().fold(Float::MAX, |acc, slack| min_float(acc, *slack));
                    min_float(ride_slack, record.window_end - record.start)
                } else {
                    Float::MAX
                };

                states.put_vehicle_activity_state(MAX_TIME_IN_VEHICLE_SLACK, record.activity_idx, vehicle_idx, slack);
            });
        });
    }
}

impl From<UpdateMaxTimeInVehicle> for StateUpdater {
    fn from(updater: UpdateMaxTimeInVehicle) -> Self {
        StateUpdater::forward(updater)
    }
}

/// Returns ride slack of each delivery which has its pickup earlier in the route.
fn get_ride_slacks(records: &[RideRecord]) -> Vec<Option<Duration>> {
    let mut pickup_ends = FxHashMap::<usize, Timestamp>::default();

    records
        .iter()
        .map(|record| match record.role {
            RideRole::Pickup { multi } => {
                pickup_ends.insert(multi, record.end);
                None
            }
            RideRole::Delivery { multi, max_ride } => {
                pickup_ends.get(&multi).map(|pickup_end| max_ride - (record.start - pickup_end))
            }
            RideRole::Unbound => None,
        })
        .collect()
}

fn get_ride_role(activity: &Activity) -> RideRole {
    activity
        .job
        .as_ref()
        .and_then(|single| {
            let multi = Multi::roots(single)?;
            let max_ride = *multi.dimens.get_job_max_ride_duration()?;
            let position = multi.index_of(single)?;
            let key = Arc::as_ptr(&multi) as usize;

            match position {
                0 => Some(RideRole::Pickup { multi: key }),
                _ if position + 1 == multi.jobs.len() => Some(RideRole::Delivery { multi: key, max_ride }),
                _ => None,
            }
        })
        .unwrap_or(RideRole::Unbound)
}
