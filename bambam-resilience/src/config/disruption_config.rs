use serde::{Deserialize, Serialize};

use crate::model::{disruption::RankingMode, network::NetworkError};

/// controls which removal scenarios are simulated.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct DisruptionConfig {
    /// seed for the random removal draws
    pub seed: u64,
    /// share of stations removed in each random scenario group
    pub random_fractions: Vec<f64>,
    /// number of independent draws per random fraction
    pub random_trials: usize,
    /// number of stations removed by each targeted scenario
    pub targeted_counts: Vec<usize>,
    pub ranking_mode: RankingMode,
    pub parallelize: bool,
}

impl Default for DisruptionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            random_fractions: vec![0.05, 0.10, 0.15, 0.20],
            random_trials: 10,
            targeted_counts: (1..=8).collect(),
            ranking_mode: RankingMode::default(),
            parallelize: true,
        }
    }
}

impl DisruptionConfig {
    pub fn validate(&self) -> Result<(), NetworkError> {
        if let Some(p) = self
            .random_fractions
            .iter()
            .find(|p| !p.is_finite() || **p <= 0.0 || **p > 1.0)
        {
            return Err(NetworkError::InvalidConfiguration(format!(
                "disruption.random_fractions must lie in (0, 1], found {p}"
            )));
        }
        if self.random_trials == 0 {
            return Err(NetworkError::InvalidConfiguration(String::from(
                "disruption.random_trials must be at least 1",
            )));
        }
        Ok(())
    }
}
