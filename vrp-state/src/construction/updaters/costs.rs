#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/costs_test.rs"]
mod costs_test;

use crate::construction::states::*;
use crate::models::common::{Cost, Distance, Location, Timestamp};
use crate::models::problem::{Actor, ActivityCost, TransportCost, TravelTime};
use crate::models::solution::{Activity, Route};
use std::sync::Arc;

/// Accumulates variable costs of the route using activity schedules, so it has to be registered
/// after [`UpdateActivityTimes`](super::UpdateActivityTimes).
///
/// Keeps [`COSTS`] accumulated till each activity and route totals: [`COSTS`], [`TOTAL_DISTANCE`]
/// and [`TOTAL_DURATION`].
pub struct UpdateVariableCosts {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
    actor: Option<Arc<Actor>>,
    route_idx: usize,
    prev: (Location, Timestamp),
    started_at: Timestamp,
    cost: Cost,
    distance: Distance,
}

impl UpdateVariableCosts {
    /// Creates a new instance of `UpdateVariableCosts`.
    pub fn new(transport: Arc<dyn TransportCost>, activity: Arc<dyn ActivityCost>) -> Self {
        Self {
            transport,
            activity,
            actor: None,
            route_idx: 0,
            prev: (0, 0.),
            started_at: 0.,
            cost: 0.,
            distance: 0.,
        }
    }
}

impl RouteVisitor for UpdateVariableCosts {
    fn begin(&mut self, route: &Route, states: &mut StateStore) {
        self.actor = Some(route.actor.clone());
        self.route_idx = route.index();
        self.cost = 0.;
        self.distance = 0.;

        if let Some(start) = route.tour.start() {
            self.prev = (start.place.location, start.schedule.departure);
            self.started_at = start.schedule.departure;
            states.put_activity_state(COSTS, start.index, 0.);
        }
    }

    fn visit(&mut self, activity: &mut Activity, states: &mut StateStore) {
        let actor = self.actor.as_ref().expect("activity is visited before route begin");
        let (prev_location, prev_departure) = self.prev;
        let departure = TravelTime::Departure(prev_departure);

        self.distance += self.transport.distance(actor, prev_location, activity.place.location, departure);
        self.cost += self.transport.cost(actor, prev_location, activity.place.location, departure)
            + self.activity.cost(actor, prev_location, activity, activity.schedule.arrival);

        states.put_activity_state(COSTS, activity.index, self.cost);
        self.prev = (activity.place.location, activity.schedule.departure);
    }

    fn finish(&mut self, states: &mut StateStore) {
        states.put_route_state(COSTS, self.route_idx, self.cost);
        states.put_route_state(TOTAL_DISTANCE, self.route_idx, self.distance);
        states.put_route_state(TOTAL_DURATION, self.route_idx, self.prev.1 - self.started_at);
        self.actor = None;
    }
}

impl From<UpdateVariableCosts> for StateUpdater {
    fn from(updater: UpdateVariableCosts) -> Self {
        StateUpdater::forward(updater)
    }
}
