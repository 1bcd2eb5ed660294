#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/loads_test.rs"]
mod loads_test;

use crate::construction::states::*;
use crate::models::common::{Demand, JobDemandDimension, MultiDimLoad};
use crate::models::solution::{Activity, Route};

/// Accumulates load along the route.
///
/// Static deliveries are loaded at the route start, static pickups stay on board till the route
/// end, dynamic demand is loaded and unloaded on the way. Keeps:
/// - [`LOAD`]: the load after each activity;
/// - [`PAST_MAX_LOAD`] and [`FUTURE_MAX_LOAD`]: max load before and after each activity, inclusive;
/// - [`LOAD_AT_BEGINNING`], [`LOAD_AT_END`] and [`MAX_LOAD`]: route level values.
#[derive(Default)]
pub struct UpdateLoads {
    route_idx: usize,
    current: MultiDimLoad,
    past_max: MultiDimLoad,
    loads: Vec<(usize, MultiDimLoad)>,
}

impl RouteVisitor for UpdateLoads {
    fn begin(&mut self, route: &Route, states: &mut StateStore) {
        self.route_idx = route.index();

        let start_load: MultiDimLoad =
            route.tour.all_activities().filter_map(get_demand).map(|demand| demand.delivery.0).sum();

        self.current = start_load;
        self.past_max = start_load;
        self.loads.clear();

        if let Some(start) = route.tour.start() {
            self.put_load(start.index, states);
        }

        states.put_route_state(LOAD_AT_BEGINNING, self.route_idx, start_load);
    }

    fn visit(&mut self, activity: &mut Activity, states: &mut StateStore) {
        if let Some(demand) = get_demand(activity) {
            self.current = self.current + demand.change();
        }

        self.past_max = self.past_max.max_load(self.current);
        self.put_load(activity.index, states);
    }

    fn finish(&mut self, states: &mut StateStore) {
        let future_max = self.loads.iter().rev().fold(None, |future_max: Option<MultiDimLoad>, (activity_idx, load)| {
            let future_max = future_max.map_or(*load, |future_max| future_max.max_load(*load));
            states.put_activity_state(FUTURE_MAX_LOAD, *activity_idx, future_max);

            Some(future_max)
        });

        states.put_route_state(LOAD_AT_END, self.route_idx, self.current);
        states.put_route_state(MAX_LOAD, self.route_idx, future_max.unwrap_or_default());
    }
}

impl UpdateLoads {
    fn put_load(&mut self, activity_idx: usize, states: &mut StateStore) {
        states.put_activity_state(LOAD, activity_idx, self.current);
        states.put_activity_state(PAST_MAX_LOAD, activity_idx, self.past_max);
        self.loads.push((activity_idx, self.current));
    }
}

impl From<UpdateLoads> for StateUpdater {
    fn from(updater: UpdateLoads) -> Self {
        StateUpdater::forward(updater)
    }
}

fn get_demand(activity: &Activity) -> Option<&Demand> {
    activity.job.as_ref().and_then(|single| single.dimens.get_job_demand())
}
