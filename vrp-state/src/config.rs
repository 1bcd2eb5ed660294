//! Provides the way to configure the state update pipeline from json.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::construction::states::StateManager;
use crate::construction::updaters::*;
use crate::models::Problem;
use crate::utils::{GenericError, GenericResult, InfoLogger};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A state engine configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateConfig {
    /// State updaters in the order of their invocation.
    pub updaters: Vec<UpdaterConfig>,
    /// Specifies whether vehicle-conditional states are computed for all fleet vehicles.
    /// Only the route's vehicle is used when it is not set or false.
    pub vehicle_switch: Option<bool>,
}

/// A state updater type.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum UpdaterConfig {
    /// Updates activity schedules.
    #[serde(rename = "activity-times")]
    ActivityTimes,

    /// Updates latest operation start times for candidate vehicles.
    #[serde(rename = "practical-time-windows")]
    PracticalTimeWindows,

    /// Updates ride duration slacks for candidate vehicles.
    #[serde(rename = "max-time-in-vehicle")]
    MaxTimeInVehicle,

    /// Updates loads.
    #[serde(rename = "loads")]
    Loads,

    /// Updates route skills.
    #[serde(rename = "skills")]
    Skills,

    /// Updates accumulated costs.
    #[serde(rename = "variable-costs")]
    VariableCosts,

    /// Updates future waiting times.
    #[serde(rename = "future-waiting")]
    FutureWaiting,
}

impl UpdaterConfig {
    /// Returns updater name as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            UpdaterConfig::ActivityTimes => "activity-times",
            UpdaterConfig::PracticalTimeWindows => "practical-time-windows",
            UpdaterConfig::MaxTimeInVehicle => "max-time-in-vehicle",
            UpdaterConfig::Loads => "loads",
            UpdaterConfig::Skills => "skills",
            UpdaterConfig::VariableCosts => "variable-costs",
            UpdaterConfig::FutureWaiting => "future-waiting",
        }
    }

    fn reads_schedule(&self) -> bool {
        matches!(self, UpdaterConfig::VariableCosts | UpdaterConfig::FutureWaiting)
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            updaters: vec![
                UpdaterConfig::ActivityTimes,
                UpdaterConfig::PracticalTimeWindows,
                UpdaterConfig::MaxTimeInVehicle,
                UpdaterConfig::Loads,
                UpdaterConfig::Skills,
                UpdaterConfig::VariableCosts,
                UpdaterConfig::FutureWaiting,
            ],
            vehicle_switch: None,
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<StateConfig> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a state manager with updaters specified by config.
pub fn create_state_manager_from_config(
    problem: &Problem,
    config: &StateConfig,
    logger: InfoLogger,
) -> GenericResult<StateManager> {
    validate_config(config)?;

    let is_switch_allowed = config.vehicle_switch.unwrap_or(false);
    let vehicles: Arc<dyn VehiclesToUpdate> = if is_switch_allowed {
        Arc::new(FleetVehicles::new(problem.fleet.clone(), true))
    } else {
        Arc::new(CurrentVehicle::default())
    };

    let mut manager = StateManager::new_for_problem(problem, logger.clone());
    config.updaters.iter().for_each(|updater| {
        let (transport, activity) = (problem.transport.clone(), problem.activity.clone());

        manager.add_state_updater(match updater {
            UpdaterConfig::ActivityTimes => UpdateActivityTimes::new(transport, activity).into(),
            UpdaterConfig::PracticalTimeWindows => {
                UpdateVehicleDependentPracticalTimeWindows::new(transport, activity, vehicles.clone()).into()
            }
            UpdaterConfig::MaxTimeInVehicle => {
                UpdateMaxTimeInVehicle::new(transport, activity, vehicles.clone()).into()
            }
            UpdaterConfig::Loads => UpdateLoads::default().into(),
            UpdaterConfig::Skills => UpdateSkills::default().into(),
            UpdaterConfig::VariableCosts => UpdateVariableCosts::new(transport, activity).into(),
            UpdaterConfig::FutureWaiting => UpdateFutureWaitingTimes::default().into(),
        });
    });

    let names = config.updaters.iter().map(|updater| updater.name()).collect::<Vec<_>>().join(", ");
    (logger)(format!("configured state updaters: [{names}], vehicle switch: {is_switch_allowed}").as_str());

    Ok(manager)
}

fn validate_config(config: &StateConfig) -> GenericResult<()> {
    let errors = config
        .updaters
        .iter()
        .enumerate()
        .filter_map(|(idx, updater)| {
            let previous = &config.updaters[..idx];

            if previous.contains(updater) {
                Some(GenericError::from(format!("'{}' updater is specified more than once", updater.name())))
            } else if updater.reads_schedule() && !previous.contains(&UpdaterConfig::ActivityTimes) {
                Some(GenericError::from(format!(
                    "'{}' updater requires 'activity-times' updater to be specified before",
                    updater.name()
                )))
            } else {
                None
            }
        })
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(errors.as_slice(), ", ").into()) }
}
