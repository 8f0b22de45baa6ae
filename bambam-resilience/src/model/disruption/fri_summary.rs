use serde::{Deserialize, Serialize};

use super::{RemovalStrategy, ScenarioResult};
use crate::model::topology::Dual;

/// a failure resilience index: mean performance ratio over a group of
/// scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriSummary {
    /// a removal strategy name or `overall`
    pub category: String,
    pub n_scenarios: usize,
    pub fri: Dual<f64>,
}

impl FriSummary {
    pub const OVERALL: &'static str = "overall";

    /// one index per strategy with at least one scenario, followed by the
    /// overall index, the mean of those category indices.
    pub fn summarize(results: &[ScenarioResult]) -> Vec<FriSummary> {
        let mut summaries: Vec<FriSummary> = Vec::with_capacity(RemovalStrategy::ALL.len() + 1);
        for strategy in RemovalStrategy::ALL {
            let ratios: Vec<Dual<f64>> = results
                .iter()
                .filter(|r| r.scenario.strategy == strategy)
                .map(|r| r.performance_ratio)
                .collect();
            if let Some(fri) = Dual::mean(ratios.iter()) {
                summaries.push(FriSummary {
                    category: strategy.to_string(),
                    n_scenarios: ratios.len(),
                    fri,
                });
            }
        }

        if let Some(overall) = Dual::mean(summaries.iter().map(|s| &s.fri)) {
            summaries.push(FriSummary {
                category: String::from(FriSummary::OVERALL),
                n_scenarios: results.len(),
                fri: overall,
            });
        }
        summaries
    }

    pub fn is_overall(&self) -> bool {
        self.category == FriSummary::OVERALL
    }
}
