#[cfg(test)]
#[path = "../../../tests/unit/models/problem/jobs_test.rs"]
mod jobs_test;

use crate::models::common::*;
use crate::models::problem::Fleet;
use rustc_hash::FxHashMap;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

/// A set of skills.
pub type Skills = HashSet<String>;

custom_dimension!(JobSkills typeof Skills);
custom_dimension!(JobMaxRideDuration typeof Duration);

/// Represents a job variant.
#[derive(Clone)]
pub enum Job {
    /// Single job.
    Single(Arc<Single>),
    /// MultiJob with multiple dependent jobs.
    Multi(Arc<Multi>),
}

impl Job {
    /// Considers job as [`Single`].
    pub fn as_single(&self) -> Option<&Arc<Single>> {
        match &self {
            Job::Single(job) => Some(job),
            _ => None,
        }
    }

    /// Returns dimensions collection.
    pub fn dimens(&self) -> &Dimensions {
        match &self {
            Job::Single(single) => &single.dimens,
            Job::Multi(multi) => &multi.dimens,
        }
    }

    /// Returns all singles of the job.
    pub fn singles(&self) -> Box<dyn Iterator<Item = &Arc<Single>> + '_> {
        match &self {
            Job::Single(single) => Box::new(std::iter::once(single)),
            Job::Multi(multi) => Box::new(multi.jobs.iter()),
        }
    }
}

/// Represents a job place details where and/or when work has to be performed.
#[derive(Clone, Debug)]
pub struct Place {
    /// Location where work has to be performed.
    pub location: Location,
    /// Time has to be spend performing work.
    pub duration: Duration,
    /// Time windows which specify when work can be started, ordered by their start.
    pub times: Vec<TimeWindow>,
}

/// Represents a job which should be performed once but actual place/time might vary.
pub struct Single {
    /// Specifies job details: where and when it can be performed.
    pub places: Vec<Place>,
    /// Dimensions which contains extra work requirements.
    pub dimens: Dimensions,
}

/// Represents a job which consists of multiple sub jobs.
/// All of these jobs must be performed or none of them in the order they are specified.
pub struct Multi {
    /// A list of jobs which must be performed.
    pub jobs: Vec<Arc<Single>>,
    /// Dimensions which contains extra work requirements.
    pub dimens: Dimensions,
}

// A key of the dimension which keeps a reference from a sub job to its multi job.
struct MultiRootKey;

impl Multi {
    /// Creates a new multi job from given 'dimens' and `jobs` assuming that jobs has to be
    /// inserted in order they specified.
    pub fn new_shared(jobs: Vec<Arc<Single>>, dimens: Dimensions) -> Arc<Self> {
        Self::bind(Self { jobs, dimens })
    }

    /// Returns parent multi job for given sub-job.
    pub fn roots(single: &Single) -> Option<Arc<Multi>> {
        single.dimens.get_value::<MultiRootKey, Weak<Multi>>().and_then(|w| w.upgrade())
    }

    /// Returns position of given sub-job inside multi job.
    pub fn index_of(&self, single: &Single) -> Option<usize> {
        self.jobs.iter().position(|job| std::ptr::eq(job.as_ref(), single))
    }

    /// Wraps given multi job into [`Arc`] adding reference to it from all sub-jobs.
    fn bind(mut multi: Self) -> Arc<Self> {
        Arc::new_cyclic(|weak_multi| {
            multi.jobs.iter_mut().for_each(|single| {
                Arc::get_mut(single)
                    .expect("Single from Multi should not be shared before binding")
                    .dimens
                    .set_value::<MultiRootKey, _>(weak_multi.clone());
            });

            multi
        })
    }
}

/// Stores all jobs and assigns dense activity indices to their singles.
pub struct Jobs {
    jobs: Vec<Job>,
    index: FxHashMap<usize, usize>,
    activity_count: usize,
}

impl Jobs {
    /// Creates a new [`Jobs`]. Activity indices of singles start right after the indices
    /// reserved for start and end activities of the fleet.
    pub fn new(fleet: &Fleet, jobs: Vec<Job>) -> Jobs {
        let offset = fleet.sentinel_count();
        let index = jobs
            .iter()
            .flat_map(|job| job.singles())
            .enumerate()
            .map(|(idx, single)| (single_address(single), offset + idx))
            .collect::<FxHashMap<_, _>>();
        let activity_count = offset + index.len();

        Jobs { jobs, index, activity_count }
    }

    /// Returns all jobs in original order.
    pub fn all(&'_ self) -> impl Iterator<Item = &Job> + '_ {
        self.jobs.iter()
    }

    /// Returns amount of jobs.
    pub fn size(&self) -> usize {
        self.jobs.len()
    }

    /// Returns a dense activity index assigned to given single.
    pub fn activity_index(&self, single: &Arc<Single>) -> Option<usize> {
        self.index.get(&single_address(single)).copied()
    }

    /// Returns total amount of activity indices, including fleet's start and end ones.
    pub fn activity_count(&self) -> usize {
        self.activity_count
    }
}

fn single_address(single: &Arc<Single>) -> usize {
    Arc::as_ptr(single) as usize
}

impl PartialEq<Job> for Job {
    fn eq(&self, other: &Job) -> bool {
        match (&self, other) {
            (Job::Single(_), Job::Multi(_)) => false,
            (Job::Multi(_), Job::Single(_)) => false,
            (Job::Single(lhs), Job::Single(rhs)) => std::ptr::eq(lhs.as_ref(), rhs.as_ref()),
            (Job::Multi(lhs), Job::Multi(rhs)) => std::ptr::eq(lhs.as_ref(), rhs.as_ref()),
        }
    }
}

impl Eq for Job {}

impl Hash for Job {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Job::Single(single) => {
                let address = single.as_ref() as *const Single;
                address.hash(state);
            }
            Job::Multi(multi) => {
                let address = multi.as_ref() as *const Multi;
                address.hash(state);
            }
        }
    }
}
