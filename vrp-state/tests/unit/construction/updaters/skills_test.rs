use super::*;
use crate::helpers::construction::*;
use crate::helpers::models::problem::*;
use crate::models::common::Dimensions;
use crate::models::problem::{Job, Multi, Single};
use std::sync::Arc;

fn create_singles() -> Vec<Arc<Single>> {
    vec![
        SingleBuilder::default().location(1).skills(vec!["a", "b"]).build_shared(),
        SingleBuilder::default().location(2).skills(vec!["b", "c"]).build_shared(),
        SingleBuilder::default().location(3).build_shared(),
        SingleBuilder::default().location(4).skills(vec!["d", "e"]).build_shared(),
    ]
}

fn get_route_skills(singles: &[Arc<Single>], order: &[usize]) -> Option<Skills> {
    let problem = create_test_problem(test_fleet(), as_jobs(singles));
    let route_singles = order.iter().map(|idx| singles[*idx].clone()).collect::<Vec<_>>();
    let mut route = create_route_with_singles(&problem, 0, route_singles.as_slice());
    let mut manager = create_test_state_manager(&problem);
    manager.add_state_updater(UpdateSkills::default().into());

    manager.recalculate_states(&mut route);

    manager.states().get_route_state::<Skills>(SKILLS, 0).cloned()
}

fn skills(values: &[&str]) -> Skills {
    values.iter().map(|value| value.to_string()).collect()
}

parameterized_test! {can_collect_skills_union, (order, expected), {
    let singles = create_singles();

    let result = get_route_skills(singles.as_slice(), order.as_slice());

    assert_eq!(result, Some(skills(expected.as_slice())));
}}

can_collect_skills_union! {
    case01_all: (vec![0, 1, 2, 3], vec!["a", "b", "c", "d", "e"]),
    case02_reversed: (vec![3, 2, 1, 0], vec!["a", "b", "c", "d", "e"]),
    case03_no_skills: (vec![2], vec![]),
    case04_empty_route: (vec![], vec![]),
    case05_overlapping: (vec![1, 0], vec!["a", "b", "c"]),
}

#[test]
fn can_use_skills_of_multi_job() {
    let mut dimens = Dimensions::default();
    dimens.set_job_skills(skills(&["x"]));
    let multi = Multi::new_shared(vec![Arc::new(test_single()), Arc::new(test_single())], dimens);
    let problem = create_test_problem(test_fleet(), vec![Job::Multi(multi.clone())]);
    let mut route = create_route_with_singles(&problem, 0, multi.jobs.as_slice());
    let mut manager = create_test_state_manager(&problem);
    manager.add_state_updater(UpdateSkills::default().into());

    manager.recalculate_states(&mut route);

    assert_eq!(manager.states().get_route_state::<Skills>(SKILLS, 0), Some(&skills(&["x"])));
}
