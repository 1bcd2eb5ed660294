#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/waiting_test.rs"]
mod waiting_test;

use crate::construction::states::*;
use crate::models::common::Duration;
use crate::models::solution::{Activity, Route};
use crate::utils::max_float;

/// Keeps under [`FUTURE_WAITING`] the total waiting time of all activities after each activity.
/// Reads activity schedules, so it has to be registered after
/// [`UpdateActivityTimes`](super::UpdateActivityTimes).
#[derive(Default)]
pub struct UpdateFutureWaitingTimes {
    start_idx: Option<usize>,
    waiting: Duration,
}

impl RouteVisitor for UpdateFutureWaitingTimes {
    fn begin(&mut self, route: &Route, _: &mut StateStore) {
        self.start_idx = route.tour.start().map(|start| start.index);
        self.waiting = 0.;
    }

    fn visit(&mut self, activity: &mut Activity, states: &mut StateStore) {
        states.put_activity_state(FUTURE_WAITING, activity.index, self.waiting);
        self.waiting += max_float(activity.place.time.start - activity.schedule.arrival, 0.);
    }

    fn finish(&mut self, states: &mut StateStore) {
        if let Some(start_idx) = self.start_idx.take() {
            states.put_activity_state(FUTURE_WAITING, start_idx, self.waiting);
        }
    }
}

impl From<UpdateFutureWaitingTimes> for StateUpdater {
    fn from(updater: UpdateFutureWaitingTimes) -> Self {
        StateUpdater::reverse(updater)
    }
}
