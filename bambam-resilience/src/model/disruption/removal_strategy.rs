use serde::{Deserialize, Serialize};

use super::CentralityMeasure;

/// how the stations of a disruption scenario are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalStrategy {
    /// uniform draws without replacement
    Random,
    /// highest degree first
    Degree,
    /// highest betweenness centrality first
    Betweenness,
}

impl RemovalStrategy {
    /// summary order of the strategy categories.
    pub const ALL: [RemovalStrategy; 3] = [
        RemovalStrategy::Random,
        RemovalStrategy::Degree,
        RemovalStrategy::Betweenness,
    ];
}

impl From<CentralityMeasure> for RemovalStrategy {
    fn from(value: CentralityMeasure) -> Self {
        match value {
            CentralityMeasure::Degree => RemovalStrategy::Degree,
            CentralityMeasure::Betweenness => RemovalStrategy::Betweenness,
        }
    }
}

impl std::fmt::Display for RemovalStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemovalStrategy::Random => write!(f, "random"),
            RemovalStrategy::Degree => write!(f, "degree"),
            RemovalStrategy::Betweenness => write!(f, "betweenness"),
        }
    }
}
