use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{
    disruption::DisruptionScenario,
    network::{NetworkError, TransitGraph},
};

/// the stations taken out of service by one scenario, by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedStationsRow {
    pub strategy: String,
    pub removal_fraction: Option<f64>,
    pub trial: Option<usize>,
    pub n_removed: usize,
    /// station names in removal order, separated by `; `
    pub removed_stations: String,
}

impl RemovedStationsRow {
    pub fn new(
        scenario: &DisruptionScenario,
        graph: &TransitGraph,
    ) -> Result<RemovedStationsRow, NetworkError> {
        let names: Vec<&str> = scenario
            .removed
            .iter()
            .map(|s| graph.station(*s).map(|station| station.label()))
            .collect::<Result<_, _>>()?;
        Ok(RemovedStationsRow {
            strategy: scenario.strategy.to_string(),
            removal_fraction: scenario.removal_fraction,
            trial: scenario.trial,
            n_removed: scenario.n_removed(),
            removed_stations: names.iter().join("; "),
        })
    }
}
