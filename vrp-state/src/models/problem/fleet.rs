#[cfg(test)]
#[path = "../../../tests/unit/models/problem/fleet_test.rs"]
mod fleet_test;

use crate::models::common::{Dimensions, Location, Profile, TimeWindow};
use std::sync::Arc;

/// Represents operating costs for driver and vehicle.
#[derive(Clone, Debug)]
pub struct Costs {
    /// A fixed cost to use an actor.
    pub fixed: f64,
    /// Cost per distance unit.
    pub per_distance: f64,
    /// Cost per driving time unit.
    pub per_driving_time: f64,
    /// Cost per waiting time unit.
    pub per_waiting_time: f64,
    /// Cost per service time unit.
    pub per_service_time: f64,
}

/// Represents a driver, person who drives Vehicle.
pub struct Driver {
    /// Specifies operating costs for driver.
    pub costs: Costs,
    /// Dimensions which contains extra work requirements.
    pub dimens: Dimensions,
}

/// Represents a vehicle detail.
#[derive(Clone, Debug)]
pub struct VehicleDetail {
    /// Location where vehicle starts.
    pub start: Location,
    /// Location where vehicle ends. No location means an open route.
    pub end: Option<Location>,
    /// Time window when vehicle can operate.
    pub time: Option<TimeWindow>,
}

/// Represents a vehicle.
pub struct Vehicle {
    /// A vehicle profile.
    pub profile: Profile,
    /// Specifies operating costs for vehicle.
    pub costs: Costs,
    /// Dimensions which contains extra work requirements.
    pub dimens: Dimensions,
    /// Specifies vehicle details.
    pub details: Vec<VehicleDetail>,
}

/// Represents actor detail.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct ActorDetail {
    /// Location where actor starts.
    pub start: Location,

    /// Location where actor ends.
    pub end: Option<Location>,

    /// Time window when actor can work.
    pub time: TimeWindow,
}

/// Represents an actor: a vehicle with its driver and the vehicle detail used.
pub struct Actor {
    /// A dense index of the actor inside the fleet.
    pub index: usize,

    /// A vehicle associated within actor.
    pub vehicle: Arc<Vehicle>,

    /// A driver associated within actor.
    pub driver: Arc<Driver>,

    /// Specifies actor detail.
    pub detail: ActorDetail,
}

impl Actor {
    /// Returns activity index of the route's start sentinel.
    pub fn start_index(&self) -> usize {
        2 * self.index
    }

    /// Returns activity index of the route's end sentinel.
    pub fn end_index(&self) -> usize {
        2 * self.index + 1
    }
}

/// Represents available resources to serve jobs.
pub struct Fleet {
    /// All fleet drivers.
    pub drivers: Vec<Arc<Driver>>,
    /// All fleet vehicles.
    pub vehicles: Vec<Arc<Vehicle>>,
    /// All fleet profiles.
    pub profiles: Vec<Profile>,
    /// All fleet actors, an actor's index is its position in this collection.
    pub actors: Vec<Arc<Actor>>,
}

impl Fleet {
    /// Creates a new instance of `Fleet`.
    pub fn new(drivers: Vec<Arc<Driver>>, vehicles: Vec<Arc<Vehicle>>) -> Fleet {
        assert_eq!(drivers.len(), 1, "exactly one driver is supported");
        assert!(!vehicles.is_empty(), "fleet should have at least one vehicle");

        let mut profiles = vehicles.iter().map(|vehicle| vehicle.profile).collect::<Vec<_>>();
        profiles.sort_unstable();
        profiles.dedup();

        let driver = drivers[0].clone();
        let actors = vehicles
            .iter()
            .flat_map(|vehicle| vehicle.details.iter().map(move |detail| (vehicle, detail)))
            .enumerate()
            .map(|(index, (vehicle, detail))| {
                Arc::new(Actor {
                    index,
                    vehicle: vehicle.clone(),
                    driver: driver.clone(),
                    detail: ActorDetail {
                        start: detail.start,
                        end: detail.end,
                        time: detail.time.clone().unwrap_or_else(TimeWindow::max),
                    },
                })
            })
            .collect();

        Fleet { drivers, vehicles, profiles, actors }
    }

    /// Returns amount of activity indices reserved for start and end sentinels.
    pub fn sentinel_count(&self) -> usize {
        2 * self.actors.len()
    }
}

impl PartialEq<Actor> for Actor {
    fn eq(&self, other: &Actor) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Actor {}
