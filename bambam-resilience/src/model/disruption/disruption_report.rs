use super::{FriSummary, ScenarioResult};
use crate::model::topology::TopologyIndicators;

/// the outcome of a disruption simulation.
#[derive(Debug, Clone)]
pub struct DisruptionReport {
    pub baseline: TopologyIndicators,
    pub results: Vec<ScenarioResult>,
    pub summary: Vec<FriSummary>,
}

impl DisruptionReport {
    /// the overall failure resilience index, if any scenario was scored.
    pub fn overall(&self) -> Option<&FriSummary> {
        self.summary.iter().find(|s| s.is_overall())
    }
}
