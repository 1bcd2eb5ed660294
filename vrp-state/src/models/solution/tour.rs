#[cfg(test)]
#[path = "../../../tests/unit/models/solution/tour_test.rs"]
mod tour_test;

use crate::models::common::{Schedule, TimeWindow};
use crate::models::problem::{Actor, Job};
use crate::models::solution::{Activity, Place};
use rustc_hash::FxHashSet;
use std::slice::{Iter, IterMut};

/// Represents a tour, a smart container for jobs with their associated activities.
#[derive(Default)]
pub struct Tour {
    /// Stores activities in the order the performed.
    activities: Vec<Activity>,

    /// Stores jobs in the order of their activities added.
    jobs: FxHashSet<Job>,

    /// Keeps track whether tour is set as closed.
    is_closed: bool,
}

impl Tour {
    /// Creates a new tour with start and optional end using actor properties.
    pub fn new(actor: &Actor) -> Self {
        let mut tour = Self::default();
        tour.set_start(create_start_activity(actor));
        if let Some(end) = create_end_activity(actor) {
            tour.set_end(end);
        }

        tour
    }

    /// Sets tour start.
    pub fn set_start(&mut self, activity: Activity) -> &mut Tour {
        assert!(activity.job.is_none());
        assert!(self.activities.is_empty());
        self.activities.push(activity);

        self
    }

    /// Sets tour end.
    pub fn set_end(&mut self, activity: Activity) -> &mut Tour {
        assert!(activity.job.is_none());
        assert!(!self.activities.is_empty());
        self.activities.push(activity);
        self.is_closed = true;

        self
    }

    /// Inserts activity within its job to the end of tour.
    pub fn insert_last(&mut self, activity: Activity) -> &mut Tour {
        self.insert_at(activity, self.job_activity_count() + 1);
        self
    }

    /// Inserts activity within its job at specified index.
    pub fn insert_at(&mut self, activity: Activity, index: usize) -> &mut Tour {
        assert!(!self.activities.is_empty());

        if let Some(job) = activity.retrieve_job() {
            self.jobs.insert(job);
        } else {
            panic!("cannot insert activity without a job into the tour");
        }
        self.activities.insert(index, activity);

        self
    }

    /// Removes job within its activities from the tour.
    pub fn remove(&mut self, job: &Job) -> bool {
        self.activities.retain(|a| !a.has_same_job(job));
        self.jobs.remove(job)
    }

    /// Returns all activities in tour.
    pub fn all_activities(&self) -> Iter<'_, Activity> {
        self.activities.iter()
    }

    /// Returns all activities in tour as mutable.
    pub fn all_activities_mut(&mut self) -> IterMut<'_, Activity> {
        self.activities.iter_mut()
    }

    /// Returns all jobs.
    pub fn jobs(&'_ self) -> impl Iterator<Item = Job> + '_ {
        self.jobs.iter().cloned()
    }

    /// Returns activity by its index in tour.
    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    /// Returns start activity in tour.
    pub fn start(&self) -> Option<&Activity> {
        self.activities.first()
    }

    /// Returns end activity in tour if the tour is closed.
    pub fn end(&self) -> Option<&Activity> {
        if self.is_closed { self.activities.last() } else { None }
    }

    /// Returns true if tour returns to a depot.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Checks whether job is present in tour
    pub fn contains(&self, job: &Job) -> bool {
        self.jobs.contains(job)
    }

    /// Returns total amount of job activities.
    pub fn job_activity_count(&self) -> usize {
        if self.activities.is_empty() {
            0
        } else {
            self.activities.len() - (if self.is_closed { 2 } else { 1 })
        }
    }

    /// Returns amount of all activities in tour.
    pub fn total(&self) -> usize {
        self.activities.len()
    }
}

/// Creates start activity.
fn create_start_activity(actor: &Actor) -> Activity {
    let time = actor.detail.time.clone();

    Activity {
        index: actor.start_index(),
        schedule: Schedule::new(time.start, time.start),
        place: Place { location: actor.detail.start, duration: 0.0, time: time.clone(), times: vec![time] },
        job: None,
    }
}

/// Creates end activity if it is specified for the actor.
fn create_end_activity(actor: &Actor) -> Option<Activity> {
    actor.detail.end.map(|location| {
        let time = actor.detail.time.clone();

        Activity {
            index: actor.end_index(),
            schedule: Schedule::new(time.start, time.start),
            place: Place { location, duration: 0.0, time: TimeWindow::new(time.start, time.end), times: vec![time] },
            job: None,
        }
    })
}
