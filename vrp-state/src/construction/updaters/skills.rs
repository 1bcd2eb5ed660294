#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/skills_test.rs"]
mod skills_test;

use crate::construction::states::*;
use crate::models::problem::{JobSkillsDimension, Skills};
use crate::models::solution::{Activity, Route};

/// Keeps a union of skills required by all jobs served on the route under [`SKILLS`] route state.
#[derive(Default)]
pub struct UpdateSkills {
    route_idx: usize,
    skills: Skills,
}

impl RouteVisitor for UpdateSkills {
    fn begin(&mut self, route: &Route, _: &mut StateStore) {
        self.route_idx = route.index();
        self.skills.clear();
    }

    fn visit(&mut self, activity: &mut Activity, _: &mut StateStore) {
        if let Some(skills) = activity.retrieve_job().as_ref().and_then(|job| job.dimens().get_job_skills()) {
            self.skills.extend(skills.iter().cloned());
        }
    }

    fn finish(&mut self, states: &mut StateStore) {
        states.put_route_state(SKILLS, self.route_idx, std::mem::take(&mut self.skills));
    }
}

impl From<UpdateSkills> for StateUpdater {
    fn from(updater: UpdateSkills) -> Self {
        StateUpdater::forward(updater)
    }
}
