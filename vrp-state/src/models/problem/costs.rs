#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::*;
use crate::models::problem::Actor;
use crate::models::solution::Activity;
use crate::utils::{Float, GenericResult, max_float};
use std::sync::Arc;

/// Specifies travel time type.
#[derive(Copy, Clone, Debug)]
pub enum TravelTime {
    /// Arrival time type.
    Arrival(Timestamp),
    /// Departure time type
    Departure(Timestamp),
}

/// Provides the way to get cost information for specific activities done by specific actor.
pub trait ActivityCost: Send + Sync {
    /// Returns service duration of the activity when actor arrives at `arrival` coming from
    /// the `prev` location.
    fn duration(&self, _actor: &Actor, _prev: Location, activity: &Activity, _arrival: Timestamp) -> Duration {
        activity.place.duration
    }

    /// Returns cost to perform activity.
    fn cost(&self, actor: &Actor, prev: Location, activity: &Activity, arrival: Timestamp) -> Cost {
        let waiting = max_float(activity.place.time.start - arrival, 0.);
        let service = self.duration(actor, prev, activity, arrival);

        waiting * (actor.driver.costs.per_waiting_time + actor.vehicle.costs.per_waiting_time)
            + service * (actor.driver.costs.per_service_time + actor.vehicle.costs.per_service_time)
    }
}

/// An actor independent activity costs.
#[derive(Default)]
pub struct SimpleActivityCost {}

impl ActivityCost for SimpleActivityCost {}

/// An activity costs which consolidates stops: an activity at the same location as the previous
/// one has no service time.
#[derive(Default)]
pub struct ConsolidatedActivityCost {}

impl ActivityCost for ConsolidatedActivityCost {
    fn duration(&self, _: &Actor, prev: Location, activity: &Activity, _: Timestamp) -> Duration {
        if prev == activity.place.location { 0. } else { activity.place.duration }
    }
}

/// Provides the way to get routing information for specific locations and actor.
pub trait TransportCost: Send + Sync {
    /// Returns time-dependent transport cost between two locations for given actor.
    fn cost(&self, actor: &Actor, from: Location, to: Location, travel_time: TravelTime) -> Cost {
        let distance = self.distance(actor, from, to, travel_time);
        let duration = self.duration(actor, from, to, travel_time);

        distance * (actor.driver.costs.per_distance + actor.vehicle.costs.per_distance)
            + duration * (actor.driver.costs.per_driving_time + actor.vehicle.costs.per_driving_time)
    }

    /// Returns time-dependent travel duration between locations specific for given actor.
    /// [`TravelTime::Departure`] asks for a forward estimate, [`TravelTime::Arrival`] for a backward one.
    fn duration(&self, actor: &Actor, from: Location, to: Location, travel_time: TravelTime) -> Duration;

    /// Returns time-dependent travel distance between locations specific for given actor.
    fn distance(&self, actor: &Actor, from: Location, to: Location, travel_time: TravelTime) -> Distance;
}

/// Contains matrix routing data for specific profile.
pub struct MatrixData {
    /// A routing profile index.
    pub index: Profile,
    /// Travel durations.
    pub durations: Vec<Duration>,
    /// Travel distances.
    pub distances: Vec<Distance>,
}

impl MatrixData {
    /// Creates `MatrixData` instance.
    pub fn new(index: Profile, durations: Vec<Duration>, distances: Vec<Distance>) -> Self {
        Self { index, durations, distances }
    }
}

/// Creates time agnostic routing costs based on matrix data passed.
pub fn create_matrix_transport_cost(costs: Vec<MatrixData>) -> GenericResult<Arc<dyn TransportCost>> {
    let size = match costs.first() {
        Some(matrix) => (matrix.durations.len() as f64).sqrt().round() as usize,
        None => return Err("no matrix data found".into()),
    };

    if costs.iter().any(|matrix| matrix.distances.len() != matrix.durations.len()) {
        return Err("distance and duration collections have different length".into());
    }

    if costs.iter().any(|matrix| matrix.durations.len() != size * size) {
        return Err("matrix lengths don't match".into());
    }

    Ok(Arc::new(MatrixTransportCost::new(costs, size)?))
}

/// A time agnostic matrix routing costs.
struct MatrixTransportCost {
    durations: Vec<Vec<Duration>>,
    distances: Vec<Vec<Distance>>,
    size: usize,
}

impl MatrixTransportCost {
    fn new(mut costs: Vec<MatrixData>, size: usize) -> GenericResult<Self> {
        costs.sort_by(|a, b| a.index.cmp(&b.index));

        if (0..).zip(costs.iter().map(|c| &c.index)).any(|(a, &b)| a != b) {
            return Err("profiles should be unique and start from zero".into());
        }

        let (durations, distances) = costs.into_iter().fold((vec![], vec![]), |mut acc, data| {
            acc.0.push(data.durations);
            acc.1.push(data.distances);

            acc
        });

        Ok(Self { durations, distances, size })
    }

    fn lookup(&self, matrices: &[Vec<Float>], actor: &Actor, from: Location, to: Location) -> Float {
        let profile = actor.vehicle.profile;

        matrices
            .get(profile)
            .filter(|_| from < self.size && to < self.size)
            .and_then(|matrix| matrix.get(from * self.size + to))
            .copied()
            .unwrap_or_else(|| panic!("no routing data for profile {profile} between {from} and {to}"))
    }
}

impl TransportCost for MatrixTransportCost {
    fn duration(&self, actor: &Actor, from: Location, to: Location, _: TravelTime) -> Duration {
        self.lookup(self.durations.as_slice(), actor, from, to)
    }

    fn distance(&self, actor: &Actor, from: Location, to: Location, _: TravelTime) -> Distance {
        self.lookup(self.distances.as_slice(), actor, from, to)
    }
}
