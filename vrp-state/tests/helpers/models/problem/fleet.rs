use crate::models::common::*;
use crate::models::problem::*;
use std::sync::Arc;

pub const DEFAULT_ACTOR_LOCATION: Location = 0;
pub const DEFAULT_ACTOR_TIME_WINDOW: TimeWindow = TimeWindow { start: 0.0, end: 1000.0 };
pub const DEFAULT_VEHICLE_COSTS: Costs =
    Costs { fixed: 0.0, per_distance: 1.0, per_driving_time: 1.0, per_waiting_time: 1.0, per_service_time: 1.0 };

pub fn test_costs() -> Costs {
    DEFAULT_VEHICLE_COSTS
}

pub fn empty_costs() -> Costs {
    Costs { fixed: 0.0, per_distance: 0.0, per_driving_time: 0.0, per_waiting_time: 0.0, per_service_time: 0.0 }
}

pub fn test_driver() -> Driver {
    Driver { costs: empty_costs(), dimens: Default::default() }
}

pub fn test_vehicle_detail() -> VehicleDetail {
    VehicleDetail {
        start: DEFAULT_ACTOR_LOCATION,
        end: Some(DEFAULT_ACTOR_LOCATION),
        time: Some(DEFAULT_ACTOR_TIME_WINDOW),
    }
}

pub fn test_vehicle(profile: Profile) -> Vehicle {
    Vehicle { profile, costs: test_costs(), dimens: Default::default(), details: vec![test_vehicle_detail()] }
}

pub fn test_ovrp_vehicle() -> Vehicle {
    VehicleBuilder::default().details(vec![VehicleDetail { end: None, ..test_vehicle_detail() }]).build()
}

pub fn test_fleet() -> Fleet {
    FleetBuilder::default().add_driver(test_driver()).add_vehicle(test_vehicle(0)).build()
}

pub fn test_fleet_with_vehicles(vehicles: Vec<Vehicle>) -> Fleet {
    FleetBuilder::default().add_driver(test_driver()).add_vehicles(vehicles).build()
}

pub struct VehicleBuilder(Vehicle);

impl Default for VehicleBuilder {
    fn default() -> VehicleBuilder {
        Self(test_vehicle(0))
    }
}

impl VehicleBuilder {
    pub fn profile(&mut self, profile: Profile) -> &mut VehicleBuilder {
        self.0.profile = profile;
        self
    }

    pub fn costs(&mut self, costs: Costs) -> &mut VehicleBuilder {
        self.0.costs = costs;
        self
    }

    pub fn details(&mut self, details: Vec<VehicleDetail>) -> &mut VehicleBuilder {
        self.0.details = details;
        self
    }

    pub fn depot(
        &mut self,
        start: Location,
        end: Option<Location>,
        time: (Timestamp, Timestamp),
    ) -> &mut VehicleBuilder {
        self.0.details = vec![VehicleDetail { start, end, time: Some(TimeWindow::new(time.0, time.1)) }];
        self
    }

    pub fn build(&mut self) -> Vehicle {
        std::mem::replace(&mut self.0, test_vehicle(0))
    }
}

#[derive(Default)]
pub struct FleetBuilder {
    drivers: Vec<Driver>,
    vehicles: Vec<Vehicle>,
}

impl FleetBuilder {
    pub fn add_driver(&mut self, driver: Driver) -> &mut FleetBuilder {
        self.drivers.push(driver);
        self
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> &mut FleetBuilder {
        self.vehicles.push(vehicle);
        self
    }

    pub fn add_vehicles(&mut self, vehicles: Vec<Vehicle>) -> &mut FleetBuilder {
        self.vehicles.extend(vehicles);
        self
    }

    pub fn build(&mut self) -> Fleet {
        let drivers = std::mem::take(&mut self.drivers);
        let vehicles = std::mem::take(&mut self.vehicles);

        let drivers = drivers.into_iter().map(Arc::new).collect();
        let vehicles = vehicles.into_iter().map(Arc::new).collect();

        Fleet::new(drivers, vehicles)
    }
}
