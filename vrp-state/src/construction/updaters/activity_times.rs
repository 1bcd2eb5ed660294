#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/activity_times_test.rs"]
mod activity_times_test;

use crate::construction::states::{RouteVisitor, StateStore, StateUpdater};
use crate::models::common::{Location, Schedule, TimeWindow, Timestamp};
use crate::models::problem::{Actor, ActivityCost, TransportCost, TravelTime};
use crate::models::solution::{Activity, Route};
use crate::utils::{compare_floats, max_float};
use std::cmp::Ordering;
use std::sync::Arc;

/// Updates arrival and departure times of route activities moving forward from the route start.
///
/// Times are written to the activities themselves: they describe the schedule of the one vehicle
/// which actually serves the route. The selected time window of each activity is updated too.
pub struct UpdateActivityTimes {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
    actor: Option<Arc<Actor>>,
    prev: (Location, Timestamp),
}

impl UpdateActivityTimes {
    /// Creates a new instance of `UpdateActivityTimes`.
    pub fn new(transport: Arc<dyn TransportCost>, activity: Arc<dyn ActivityCost>) -> Self {
        Self { transport, activity, actor: None, prev: (0, 0.) }
    }
}

impl RouteVisitor for UpdateActivityTimes {
    fn begin(&mut self, route: &Route, _: &mut StateStore) {
        self.actor = Some(route.actor.clone());
        self.prev = route
            .tour
            .start()
            .map(|start| (start.place.location, start.schedule.departure))
            .unwrap_or((route.actor.detail.start, route.actor.detail.time.start));
    }

    fn visit(&mut self, activity: &mut Activity, _: &mut StateStore) {
        let actor = self.actor.as_ref().expect("activity is visited before route begin");
        let (prev_location, prev_departure) = self.prev;

        let departure = TravelTime::Departure(prev_departure);
        let arrival =
            prev_departure + self.transport.duration(actor, prev_location, activity.place.location, departure);

        if let Some(time) = select_time_window(activity.place.times.as_slice(), arrival).cloned() {
            activity.place.time = time;
        }

        let operation_start = max_float(arrival, activity.place.time.start);
        let duration = self.activity.duration(actor, prev_location, activity, arrival);

        activity.schedule = Schedule::new(arrival, operation_start + duration);
        self.prev = (activity.place.location, activity.schedule.departure);
    }

    fn finish(&mut self, _: &mut StateStore) {
        self.actor = None;
    }
}

impl From<UpdateActivityTimes> for StateUpdater {
    fn from(updater: UpdateActivityTimes) -> Self {
        StateUpdater::forward(updater)
    }
}

/// Selects a time window which gives the earliest operation start for given arrival. If the
/// arrival is too late for all windows, the window with the latest end is returned.
pub fn select_time_window(times: &[TimeWindow], arrival: Timestamp) -> Option<&TimeWindow> {
    times
        .iter()
        .filter(|time| compare_floats(time.end, arrival) != Ordering::Less)
        .min_by(|a, b| compare_floats(max_float(arrival, a.start), max_float(arrival, b.start)))
        .or_else(|| times.iter().max_by(|a, b| compare_floats(a.end, b.end)))
}
