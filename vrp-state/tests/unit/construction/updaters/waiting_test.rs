use super::*;
use crate::construction::updaters::UpdateActivityTimes;
use crate::helpers::construction::*;
use crate::helpers::models::problem::*;
use crate::models::common::TimeWindow;

#[test]
fn can_calculate_future_waiting_times() {
    let singles = vec![
        SingleBuilder::default().location(10).duration(5.).build_shared(),
        SingleBuilder::default().location(20).duration(5.).times(vec![TimeWindow::new(40., 50.)]).build_shared(),
        SingleBuilder::default().location(30).times(vec![TimeWindow::new(60., 100.)]).build_shared(),
    ];
    let problem = create_test_problem(test_fleet(), as_jobs(&singles));
    let mut route = create_route_with_singles(&problem, 0, singles.as_slice());
    let mut manager = create_test_state_manager(&problem);
    manager.add_state_updater(UpdateActivityTimes::new(problem.transport.clone(), problem.activity.clone()).into());
    manager.add_state_updater(UpdateFutureWaitingTimes::default().into());

    manager.recalculate_states(&mut route);

    let waiting = route
        .tour
        .all_activities()
        .map(|activity| manager.states().get_activity_state::<Duration>(FUTURE_WAITING, activity.index).copied())
        .collect::<Vec<_>>();
    assert_eq!(waiting, vec![Some(20.), Some(20.), Some(5.), Some(0.), Some(0.)]);
}
