use serde::{Deserialize, Serialize};

use super::centrality_ops;
use crate::model::network::GraphSnapshot;

/// station rankings used by targeted removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentralityMeasure {
    Degree,
    Betweenness,
}

impl CentralityMeasure {
    /// scores every station of the snapshot, indexed by station. stations
    /// out of service score 0.
    pub fn scores(&self, snapshot: &GraphSnapshot) -> Vec<f64> {
        match self {
            CentralityMeasure::Degree => centrality_ops::degree_centrality(snapshot),
            CentralityMeasure::Betweenness => centrality_ops::betweenness_centrality(snapshot),
        }
    }
}
