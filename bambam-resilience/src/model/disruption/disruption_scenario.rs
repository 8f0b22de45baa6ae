use serde::{Deserialize, Serialize};

use super::RemovalStrategy;
use crate::model::network::StationIndex;

/// a set of stations taken out of service together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionScenario {
    pub strategy: RemovalStrategy,
    /// tested removal fraction, random scenarios only
    pub removal_fraction: Option<f64>,
    /// trial number within a removal fraction, random scenarios only
    pub trial: Option<usize>,
    /// removed stations, in removal order for targeted scenarios
    pub removed: Vec<StationIndex>,
}

impl DisruptionScenario {
    pub fn n_removed(&self) -> usize {
        self.removed.len()
    }
}
