use crate::models::problem::{Actor, Jobs, Single};
use crate::models::solution::{Activity, Route};
use std::sync::Arc;

pub fn test_activity_with_job(index: usize, job: Arc<Single>) -> Activity {
    let place = job.places.first().cloned().expect("job has no place");
    Activity::new_with_place(index, job, &place)
}

pub struct RouteBuilder(Route);

impl RouteBuilder {
    pub fn new(actor: Arc<Actor>) -> Self {
        Self(Route::new(actor))
    }

    pub fn add_activity(&mut self, activity: Activity) -> &mut Self {
        self.0.tour.insert_last(activity);
        self
    }

    pub fn add_activities(&mut self, activities: impl IntoIterator<Item = Activity>) -> &mut Self {
        activities.into_iter().for_each(|activity| {
            self.add_activity(activity);
        });
        self
    }

    /// Adds activities of given singles using activity indices assigned by `jobs`.
    pub fn add_singles(&mut self, jobs: &Jobs, singles: &[Arc<Single>]) -> &mut Self {
        self.add_activities(singles.iter().map(|single| {
            let index = jobs.activity_index(single).expect("single is not registered");
            test_activity_with_job(index, single.clone())
        }))
    }

    pub fn build(&mut self) -> Route {
        let actor = self.0.actor.clone();
        std::mem::replace(&mut self.0, Route::new(actor))
    }
}
