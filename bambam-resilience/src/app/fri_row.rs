use serde::{Deserialize, Serialize};

use crate::model::disruption::FriSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriRow {
    pub category: String,
    pub n_scenarios: usize,
    pub fri_transfers: f64,
    pub fri_trains: f64,
}

impl From<&FriSummary> for FriRow {
    fn from(value: &FriSummary) -> Self {
        FriRow {
            category: value.category.clone(),
            n_scenarios: value.n_scenarios,
            fri_transfers: value.fri.transfers,
            fri_trains: value.fri.trains,
        }
    }
}
