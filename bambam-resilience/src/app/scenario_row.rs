use serde::{Deserialize, Serialize};

use crate::model::disruption::ScenarioResult;

/// flat record of one scored disruption scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub strategy: String,
    pub removal_fraction: Option<f64>,
    pub trial: Option<usize>,
    pub n_removed: usize,
    pub pr_topology_transfers: f64,
    pub pr_topology_trains: f64,
    pub size_penalty: f64,
    pub performance_ratio_transfers: f64,
    pub performance_ratio_trains: f64,
    pub isolated_stations: usize,
    pub reachable_pct: f64,
    pub n_components: usize,
    pub largest_component: usize,
}

impl From<&ScenarioResult> for ScenarioRow {
    fn from(value: &ScenarioResult) -> Self {
        let f = &value.fragmentation;
        ScenarioRow {
            strategy: value.scenario.strategy.to_string(),
            removal_fraction: value.scenario.removal_fraction,
            trial: value.scenario.trial,
            n_removed: value.scenario.n_removed(),
            pr_topology_transfers: value.pr_topology.transfers,
            pr_topology_trains: value.pr_topology.trains,
            size_penalty: f.size_penalty,
            performance_ratio_transfers: value.performance_ratio.transfers,
            performance_ratio_trains: value.performance_ratio.trains,
            isolated_stations: f.isolated_stations,
            reachable_pct: f.reachable_pct,
            n_components: f.n_components,
            largest_component: f.largest_component,
        }
    }
}
