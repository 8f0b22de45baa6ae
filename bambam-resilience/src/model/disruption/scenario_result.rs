use serde::{Deserialize, Serialize};

use super::{DisruptionScenario, Fragmentation};
use crate::model::topology::{Dual, TopologyIndicators};

/// the scores of one disruption scenario. performance is always reported
/// with the fragmentation it was penalized by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: DisruptionScenario,
    pub indicators: TopologyIndicators,
    pub fragmentation: Fragmentation,
    /// Bpc_disrupted / Bpc_baseline
    pub pr_topology: Dual<f64>,
    /// pr_topology × size_penalty
    pub performance_ratio: Dual<f64>,
}
