use serde::{Deserialize, Serialize};
use wkt::ToWkt;

use crate::model::accessibility::AccessibilityMetrics;

/// flat record of the accessibility metrics for one travel time budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityRow {
    pub threshold_minutes: f64,
    pub representative_station: String,
    pub representative_reachable: usize,
    pub reachable_area_km2: f64,
    pub area_method: String,
    pub route_length_km: f64,
    pub isochrone_efficiency: f64,
    pub per_capita_area: f64,
    pub density_normalized_coverage: f64,
    pub spatial_mobility_efficiency: f64,
    pub reachability_pct: f64,
    pub mean_reachable: f64,
    pub median_reachable: f64,
    pub max_travel_time_minutes: f64,
    pub hull_wkt: Option<String>,
}

impl From<&AccessibilityMetrics> for AccessibilityRow {
    fn from(value: &AccessibilityMetrics) -> Self {
        let e = &value.efficiency;
        AccessibilityRow {
            threshold_minutes: value.threshold_minutes,
            representative_station: value.representative_station.clone(),
            representative_reachable: value.representative_reachable,
            reachable_area_km2: value.reachable_area_km2,
            area_method: value.area_method.to_string(),
            route_length_km: value.route_length_km,
            isochrone_efficiency: e.isochrone_efficiency,
            per_capita_area: e.per_capita_area,
            density_normalized_coverage: e.density_normalized_coverage,
            spatial_mobility_efficiency: e.spatial_mobility_efficiency,
            reachability_pct: value.reachability_pct,
            mean_reachable: value.mean_reachable,
            median_reachable: value.median_reachable,
            max_travel_time_minutes: value.max_travel_time_minutes,
            hull_wkt: value.hull.as_ref().map(|h| h.wkt_string()),
        }
    }
}
