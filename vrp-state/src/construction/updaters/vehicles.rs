#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/vehicles_test.rs"]
mod vehicles_test;

use crate::models::common::{Location, Profile, TimeWindow};
use crate::models::problem::{Actor, Fleet};
use crate::models::solution::Route;
use std::sync::Arc;

/// Specifies candidate vehicles for which vehicle-conditional states of the route are computed.
pub trait VehiclesToUpdate: Send + Sync {
    /// Returns candidate vehicles for the route.
    fn get(&self, route: &Route) -> Vec<Arc<Actor>>;
}

/// Returns only the vehicle currently assigned to the route.
#[derive(Default)]
pub struct CurrentVehicle {}

impl VehiclesToUpdate for CurrentVehicle {
    fn get(&self, route: &Route) -> Vec<Arc<Actor>> {
        vec![route.actor.clone()]
    }
}

/// Returns the route's vehicle followed by all other fleet vehicles when vehicle switching is allowed.
pub struct FleetVehicles {
    fleet: Arc<Fleet>,
    is_switch_allowed: bool,
}

impl FleetVehicles {
    /// Creates a new instance of `FleetVehicles`.
    pub fn new(fleet: Arc<Fleet>, is_switch_allowed: bool) -> Self {
        Self { fleet, is_switch_allowed }
    }
}

impl VehiclesToUpdate for FleetVehicles {
    fn get(&self, route: &Route) -> Vec<Arc<Actor>> {
        let current = std::iter::once(route.actor.clone());

        if self.is_switch_allowed {
            current.chain(self.fleet.actors.iter().filter(|actor| actor.index != route.actor.index).cloned()).collect()
        } else {
            current.collect()
        }
    }
}

/// Vehicle properties which define timing of a route. Vehicles with the same signature get the
/// same vehicle-conditional timing values.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub(crate) struct VehicleSignature {
    profile: Profile,
    start: Location,
    end: Option<Location>,
    time: TimeWindow,
}

impl From<&Actor> for VehicleSignature {
    fn from(actor: &Actor) -> Self {
        Self {
            profile: actor.vehicle.profile,
            start: actor.detail.start,
            end: actor.detail.end,
            time: actor.detail.time.clone(),
        }
    }
}
