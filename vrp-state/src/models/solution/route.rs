use crate::models::common::{Duration, Location, Schedule, TimeWindow};
use crate::models::problem::{Actor, Job, Multi, Single};
use crate::models::solution::Tour;
use std::sync::Arc;

/// Specifies activity place.
#[derive(Clone, Debug)]
pub struct Place {
    /// Location where activity is performed.
    pub location: Location,

    /// Specifies activity's duration.
    pub duration: Duration,

    /// Specifies activity's selected time window: an interval when job is allowed to be started.
    pub time: TimeWindow,

    /// Specifies all declared time windows of the activity.
    pub times: Vec<TimeWindow>,
}

/// Represents activity which is needed to be performed.
pub struct Activity {
    /// A dense index of the activity, stable for its whole lifetime.
    pub index: usize,

    /// Specifies activity details.
    pub place: Place,

    /// Specifies activity's schedule: arrival and end of operation.
    pub schedule: Schedule,

    /// Specifies associated job. Empty if it has no association with a single job (e.g. tour start or end).
    /// If single job is part of multi job, then original job can be received via `retrieve_job` method.
    pub job: Option<Arc<Single>>,
}

/// Represents a tour performing jobs.
pub struct Route {
    /// An actor associated within route.
    pub actor: Arc<Actor>,

    /// Specifies job tour assigned to this route.
    pub tour: Tour,
}

impl Route {
    /// Creates a new empty route for given actor.
    pub fn new(actor: Arc<Actor>) -> Self {
        let tour = Tour::new(actor.as_ref());
        Self { actor, tour }
    }

    /// Returns a dense index of the route which is the index of its actor.
    pub fn index(&self) -> usize {
        self.actor.index
    }
}

impl Activity {
    /// Creates an activity with a job performed at given job's place.
    pub fn new_with_place(index: usize, job: Arc<Single>, place: &crate::models::problem::Place) -> Self {
        let times = if place.times.is_empty() { vec![TimeWindow::max()] } else { place.times.clone() };

        Activity {
            index,
            place: Place { location: place.location, duration: place.duration, time: times[0].clone(), times },
            schedule: Schedule::new(0., 0.),
            job: Some(job),
        }
    }

    /// Checks whether activity has given job.
    pub fn has_same_job(&self, job: &Job) -> bool {
        self.retrieve_job().is_some_and(|j| j == *job)
    }

    /// Returns job if activity has it.
    pub fn retrieve_job(&self) -> Option<Job> {
        match self.job.as_ref() {
            Some(single) => Multi::roots(single).map(Job::Multi).or_else(|| Some(Job::Single(single.clone()))),
            _ => None,
        }
    }
}
