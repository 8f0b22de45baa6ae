use serde::{Deserialize, Serialize};

/// when targeted strategies rank stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    /// rank again on the reduced network before every single removal
    #[default]
    Iterative,
    /// rank once on the intact network and remove the top stations in bulk
    Static,
}

impl std::fmt::Display for RankingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingMode::Iterative => write!(f, "iterative"),
            RankingMode::Static => write!(f, "static"),
        }
    }
}
