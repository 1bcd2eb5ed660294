use super::*;
use crate::construction::updaters::{CurrentVehicle, FleetVehicles, UpdateActivityTimes, UpdateMaxTimeInVehicle};
use crate::helpers::construction::*;
use crate::helpers::models::problem::*;
use crate::models::Problem;
use crate::models::problem::{ConsolidatedActivityCost, Job, Single, Vehicle};

fn create_singles() -> Vec<Arc<Single>> {
    vec![
        SingleBuilder::default().location(10).times(vec![TimeWindow::new(0., 50.)]).build_shared(),
        SingleBuilder::default().location(25).times(vec![TimeWindow::new(40., 60.)]).build_shared(),
        SingleBuilder::default().location(80).build_shared(),
    ]
}

fn create_problem(vehicles: Vec<Vehicle>, singles: &[Arc<Single>]) -> Problem {
    create_test_problem(test_fleet_with_vehicles(vehicles), as_jobs(singles))
}

fn create_manager(problem: &Problem, vehicles: Arc<dyn VehiclesToUpdate>) -> StateManager {
    let mut manager = create_test_state_manager(problem);
    manager.add_state_updater(
        UpdateVehicleDependentPracticalTimeWindows::new(problem.transport.clone(), problem.activity.clone(), vehicles)
            .into(),
    );

    manager
}

fn get_latest(
    manager: &StateManager,
    problem: &Problem,
    singles: &[Arc<Single>],
    vehicle_idx: usize,
) -> Vec<Option<f64>> {
    let states = manager.states();

    singles
        .iter()
        .map(|single| problem.jobs.activity_index(single).expect("unknown single"))
        .map(|idx| states.get_vehicle_activity_state::<f64>(LATEST_OPERATION_START_TIME, idx, vehicle_idx).copied())
        .collect()
}

fn is_not_feasible(manager: &StateManager, route_idx: usize, vehicle_idx: usize) -> Option<bool> {
    manager.states().get_vehicle_route_state::<bool>(SWITCH_NOT_FEASIBLE, route_idx, vehicle_idx).copied()
}

#[test]
fn can_calculate_latest_start_for_feasible_route() {
    let singles = create_singles();
    let problem = create_problem(vec![VehicleBuilder::default().depot(0, Some(0), (0., 200.)).build()], &singles);
    let mut route = create_route_with_singles(&problem, 0, singles.as_slice());
    let mut manager = create_manager(&problem, Arc::new(CurrentVehicle::default()));

    manager.recalculate_states(&mut route);

    assert_eq!(get_latest(&manager, &problem, &singles, 0), vec![Some(45.), Some(60.), Some(120.)]);
    assert_eq!(is_not_feasible(&manager, 0, 0), Some(false));
    assert!(!manager.states().has_vehicle_activity_state(LATEST_OPERATION_START_TIME, 0, 0));
    assert!(!manager.states().has_vehicle_activity_state(LATEST_OPERATION_START_TIME, 1, 0));
}

#[test]
fn can_detect_infeasible_route() {
    let singles = create_singles();
    let problem = create_problem(vec![VehicleBuilder::default().depot(0, Some(0), (0., 200.)).build()], &singles);
    let reversed = singles.iter().rev().cloned().collect::<Vec<_>>();
    let mut route = create_route_with_singles(&problem, 0, reversed.as_slice());
    let mut manager = create_manager(&problem, Arc::new(CurrentVehicle::default()));

    manager.recalculate_states(&mut route);

    assert_eq!(get_latest(&manager, &problem, &singles, 0), vec![Some(50.), Some(35.), Some(-20.)]);
    assert_eq!(is_not_feasible(&manager, 0, 0), Some(true));
}

#[test]
fn can_detect_infeasible_route_when_first_stops_are_swapped() {
    let singles = create_singles();
    let problem = create_problem(vec![VehicleBuilder::default().depot(0, Some(0), (0., 200.)).build()], &singles);
    let swapped = vec![singles[1].clone(), singles[0].clone(), singles[2].clone()];
    let mut route = create_route_with_singles(&problem, 0, swapped.as_slice());
    let mut manager = create_manager(&problem, Arc::new(CurrentVehicle::default()));

    manager.recalculate_states(&mut route);

    assert_eq!(get_latest(&manager, &problem, &singles, 0), vec![Some(50.), Some(35.), Some(120.)]);
    assert_eq!(is_not_feasible(&manager, 0, 0), Some(true));
}

#[test]
fn can_calculate_latest_start_for_open_route() {
    let singles = create_singles();
    let problem = create_problem(vec![VehicleBuilder::default().depot(0, None, (0., 200.)).build()], &singles);
    let mut route = create_route_with_singles(&problem, 0, singles.as_slice());
    let mut manager = create_manager(&problem, Arc::new(CurrentVehicle::default()));

    manager.recalculate_states(&mut route);

    assert_eq!(get_latest(&manager, &problem, &singles, 0), vec![Some(45.), Some(60.), Some(200.)]);
    assert_eq!(is_not_feasible(&manager, 0, 0), Some(false));
}

#[test]
fn can_calculate_latest_start_per_candidate_vehicle() {
    let singles = create_singles();
    let problem = create_problem(
        vec![
            VehicleBuilder::default().depot(0, Some(0), (0., 200.)).build(),
            VehicleBuilder::default().depot(0, Some(0), (0., 200.)).build(),
            VehicleBuilder::default().depot(0, Some(0), (0., 100.)).build(),
        ],
        &singles,
    );
    let mut route = create_route_with_singles(&problem, 0, singles.as_slice());
    let mut manager = create_manager(&problem, Arc::new(FleetVehicles::new(problem.fleet.clone(), true)));

    manager.recalculate_states(&mut route);

    assert_eq!(get_latest(&manager, &problem, &singles, 0), vec![Some(45.), Some(60.), Some(120.)]);
    assert_eq!(get_latest(&manager, &problem, &singles, 1), vec![Some(45.), Some(60.), Some(120.)]);
    assert_eq!(get_latest(&manager, &problem, &singles, 2), vec![Some(-50.), Some(-35.), Some(20.)]);
    assert_eq!(is_not_feasible(&manager, 0, 0), Some(false));
    assert_eq!(is_not_feasible(&manager, 0, 1), Some(false));
    assert_eq!(is_not_feasible(&manager, 0, 2), Some(true));
}

#[test]
fn can_share_latest_start_between_vehicles_with_different_costs() {
    let singles = create_singles();
    let problem = create_problem(
        vec![
            VehicleBuilder::default().depot(0, Some(0), (0., 200.)).build(),
            VehicleBuilder::default().depot(0, Some(0), (0., 200.)).costs(empty_costs()).build(),
        ],
        &singles,
    );
    let mut route = create_route_with_singles(&problem, 0, singles.as_slice());
    let mut manager = create_manager(&problem, Arc::new(FleetVehicles::new(problem.fleet.clone(), true)));

    manager.recalculate_states(&mut route);

    assert_eq!(get_latest(&manager, &problem, &singles, 1), vec![Some(45.), Some(60.), Some(120.)]);
    assert_eq!(get_latest(&manager, &problem, &singles, 1), get_latest(&manager, &problem, &singles, 0));
    assert_eq!(is_not_feasible(&manager, 0, 1), Some(false));
}

#[test]
fn can_use_depot_of_candidate_vehicle_before_first_stop() {
    let single =
        SingleBuilder::default().location(10).duration(10.).times(vec![TimeWindow::new(0., 200.)]).build_shared();
    let singles = vec![single];
    let problem = create_test_problem_with_activity(
        test_fleet_with_vehicles(vec![
            VehicleBuilder::default().depot(10, Some(10), (0., 200.)).build(),
            VehicleBuilder::default().depot(0, Some(0), (0., 200.)).build(),
        ]),
        as_jobs(singles.as_slice()),
        Arc::new(ConsolidatedActivityCost::default()),
    );
    let mut route = create_route_with_singles(&problem, 0, singles.as_slice());
    let mut manager = create_manager(&problem, Arc::new(FleetVehicles::new(problem.fleet.clone(), true)));

    manager.recalculate_states(&mut route);

    assert_eq!(get_latest(&manager, &problem, &singles, 0), vec![Some(200.)]);
    assert_eq!(get_latest(&manager, &problem, &singles, 1), vec![Some(180.)]);
}

type TimingStates = (Vec<(f64, f64)>, Vec<Option<f64>>, Option<bool>, Option<bool>);

#[test]
fn can_produce_same_timing_states_on_repeated_runs() {
    let singles = create_singles();
    let problem = create_problem(
        vec![
            VehicleBuilder::default().depot(0, Some(0), (0., 200.)).build(),
            VehicleBuilder::default().depot(5, Some(5), (10., 150.)).build(),
        ],
        &singles,
    );
    let run = || {
        let vehicles: Arc<dyn VehiclesToUpdate> = Arc::new(FleetVehicles::new(problem.fleet.clone(), true));
        let (transport, activity) = (problem.transport.clone(), problem.activity.clone());
        let mut route = create_route_with_singles(&problem, 0, singles.as_slice());
        let mut manager = create_test_state_manager(&problem);
        manager.add_state_updater(UpdateActivityTimes::new(transport.clone(), activity.clone()).into());
        manager.add_state_updater(
            UpdateVehicleDependentPracticalTimeWindows::new(transport.clone(), activity.clone(), vehicles.clone())
                .into(),
        );
        manager.add_state_updater(UpdateMaxTimeInVehicle::new(transport, activity, vehicles).into());

        manager.recalculate_states(&mut route);
        manager.recalculate_states(&mut route);

        let schedules = route
            .tour
            .all_activities()
            .map(|activity| (activity.schedule.arrival, activity.schedule.departure))
            .collect::<Vec<_>>();
        let latest =
            (0..2).flat_map(|vehicle_idx| get_latest(&manager, &problem, &singles, vehicle_idx)).collect::<Vec<_>>();

        (schedules, latest, is_not_feasible(&manager, 0, 0), is_not_feasible(&manager, 0, 1))
    };

    let (first, second): (TimingStates, TimingStates) = (run(), run());

    assert_eq!(first, second);
    assert!(first.1.iter().all(|latest| latest.is_some()));
}

#[test]
fn can_skip_other_vehicles_when_switch_is_not_allowed() {
    let singles = create_singles();
    let problem = create_problem(vec![test_vehicle(0), test_vehicle(0)], &singles);
    let mut route = create_route_with_singles(&problem, 0, singles.as_slice());
    let mut manager = create_manager(&problem, Arc::new(FleetVehicles::new(problem.fleet.clone(), false)));

    manager.recalculate_states(&mut route);

    assert!(get_latest(&manager, &problem, &singles, 0).iter().all(|latest| latest.is_some()));
    assert!(get_latest(&manager, &problem, &singles, 1).iter().all(|latest| latest.is_none()));
    assert_eq!(is_not_feasible(&manager, 0, 1), None);
}

#[test]
fn can_include_service_duration() {
    let single =
        SingleBuilder::default().location(10).duration(10.).times(vec![TimeWindow::new(0., 200.)]).build_shared();
    let singles = vec![single];
    let problem = create_problem(vec![VehicleBuilder::default().depot(0, Some(0), (0., 200.)).build()], &singles);
    let mut route = create_route_with_singles(&problem, 0, singles.as_slice());
    let mut manager = create_manager(&problem, Arc::new(CurrentVehicle::default()));

    manager.recalculate_states(&mut route);

    assert_eq!(get_latest(&manager, &problem, &singles, 0), vec![Some(180.)]);
}

#[test]
fn can_recalculate_after_route_change() {
    let singles = create_singles();
    let problem = create_problem(vec![VehicleBuilder::default().depot(0, Some(0), (0., 200.)).build()], &singles);
    let mut route = create_route_with_singles(&problem, 0, singles.as_slice());
    let mut manager = create_manager(&problem, Arc::new(CurrentVehicle::default()));
    manager.recalculate_states(&mut route);
    assert_eq!(get_latest(&manager, &problem, &singles, 0)[0], Some(45.));

    route.tour.remove(&Job::Single(singles[1].clone()));
    manager.recalculate_states(&mut route);

    assert_eq!(get_latest(&manager, &problem, &singles, 0)[0], Some(50.));
    assert_eq!(get_latest(&manager, &problem, &singles, 0)[2], Some(120.));
}

parameterized_test! {can_select_latest_start, (times, bound, expected), {
    let times = times.into_iter().map(|(start, end)| TimeWindow::new(start, end)).collect::<Vec<_>>();

    let result = select_latest_start(times.as_slice(), bound);

    assert_eq!(result, expected);
}}

can_select_latest_start! {
    case01_inside_second: (vec![(0., 20.), (50., 70.)], 60., (60., true)),
    case02_between: (vec![(0., 20.), (50., 70.)], 40., (20., true)),
    case03_after_last: (vec![(0., 20.), (50., 70.)], 80., (70., true)),
    case04_inside_first: (vec![(0., 20.), (50., 70.)], 10., (10., true)),
    case05_before_first: (vec![(0., 20.), (50., 70.)], -5., (-5., false)),
    case06_no_windows: (Vec::<(f64, f64)>::new(), 15., (15., true)),
}
