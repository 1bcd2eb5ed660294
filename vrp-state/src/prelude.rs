//! This module reimports commonly used types.

pub use crate::construction::states::{
    RouteVisitor, StateId, StateManager, StateRegistry, StateStore, StateUpdater, StateValue, StateValueType,
};
pub use crate::construction::updaters::{
    CurrentVehicle, FleetVehicles, UpdateActivityTimes, UpdateFutureWaitingTimes, UpdateLoads, UpdateMaxTimeInVehicle,
    UpdateSkills, UpdateVariableCosts, UpdateVehicleDependentPracticalTimeWindows, VehiclesToUpdate,
};
pub use crate::models::Problem;
pub use crate::models::common::{MultiDimLoad, TimeWindow};
pub use crate::models::problem::{ActivityCost, SimpleActivityCost, TransportCost, TravelTime};
pub use crate::models::solution::{Activity, Route, Tour};
pub use crate::utils::{GenericError, GenericResult, InfoLogger};
