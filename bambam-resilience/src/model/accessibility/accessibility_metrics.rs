use geo::Polygon;
use serde::{Deserialize, Serialize};

use super::{AreaMethod, EfficiencyIndicators};

/// accessibility of the network within one travel time budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityMetrics {
    pub threshold_minutes: f64,
    /// identifier of the representative origin
    pub representative_station: String,
    /// stations reachable from the representative origin, itself included
    pub representative_reachable: usize,
    pub reachable_area_km2: f64,
    pub area_method: AreaMethod,
    pub hull: Option<Polygon<f64>>,
    pub route_length_km: f64,
    pub efficiency: EfficiencyIndicators,
    /// share of ordered station pairs within the budget, floored to one decimal
    pub reachability_pct: f64,
    pub mean_reachable: f64,
    pub median_reachable: f64,
    /// longest finite shortest travel time in the network
    pub max_travel_time_minutes: f64,
}
