use itertools::Itertools;

use super::{
    median_count, shortest_path_ops, AccessibilityMetrics, AreaEstimate, EfficiencyIndicators,
};
use crate::{
    config::{AccessibilityConfig, NetworkConstants},
    model::network::{NetworkError, StationIndex, TransitGraph},
};

/// time-bounded accessibility of the intact network for each configured
/// travel time budget.
///
/// # Arguments
///
/// * `graph` - the intact network
/// * `constants` - population and area of the served city
/// * `config` - travel time budgets and area estimation settings
///
/// # Returns
///
/// one record per budget, in configuration order
pub fn analyze_accessibility(
    graph: &TransitGraph,
    constants: &NetworkConstants,
    config: &AccessibilityConfig,
) -> Result<Vec<AccessibilityMetrics>, NetworkError> {
    let matrix = shortest_path_ops::all_pairs_minutes(graph, config.parallelize)?;
    let max_travel_time_minutes = matrix
        .iter()
        .flatten()
        .copied()
        .filter(|t| t.is_finite())
        .fold(0.0, f64::max);
    let route_length_km = constants.get_route_length_km(graph)?;
    log::info!(
        "all-pairs travel times computed for {} stations, longest trip {:.1} minutes",
        graph.n_stations(),
        max_travel_time_minutes
    );

    let mut records: Vec<AccessibilityMetrics> =
        Vec::with_capacity(config.time_thresholds_minutes.len());
    for threshold in config.time_thresholds_minutes.iter() {
        let reachable = reachable_sets(&matrix, *threshold);
        let counts = reachable.iter().map(|r| r.len()).collect_vec();
        let representative = config
            .representative_origin
            .select(&counts)
            .ok_or_else(|| {
                NetworkError::InternalError(String::from(
                    "cannot select a representative origin of an empty network",
                ))
            })?;
        let members = reachable
            .get(representative.0)
            .ok_or(NetworkError::GraphMissingStation(representative))?;
        let points = members
            .iter()
            .map(|s| graph.station(*s).map(|station| station.coordinate))
            .collect::<Result<Vec<_>, _>>()?;
        let area = AreaEstimate::from_points(points, config.station_area_proxy_km2);
        let efficiency = EfficiencyIndicators::new(
            area.area_km2,
            route_length_km,
            constants.population,
            constants.get_city_area_km2(),
        );
        let total_reachable: usize = counts.iter().sum();
        let station = graph.station(representative)?;
        log::info!(
            "{} minute budget: representative station {} reaches {} stations, {:.2} km2 by {}",
            threshold,
            station.label(),
            members.len(),
            area.area_km2,
            area.method
        );

        records.push(AccessibilityMetrics {
            threshold_minutes: *threshold,
            representative_station: station.id.clone(),
            representative_reachable: members.len(),
            reachable_area_km2: area.area_km2,
            area_method: area.method,
            hull: area.hull,
            route_length_km,
            efficiency,
            reachability_pct: reachability_pct(total_reachable, graph.n_stations()),
            mean_reachable: total_reachable as f64 / counts.len() as f64,
            median_reachable: median_count(&counts).unwrap_or(0.0),
            max_travel_time_minutes,
        });
    }
    Ok(records)
}

/// for each origin, the stations reachable within `threshold` minutes,
/// the origin itself included.
pub fn reachable_sets(matrix: &[Vec<f64>], threshold: f64) -> Vec<Vec<StationIndex>> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, t)| **t <= threshold)
                .map(|(idx, _)| StationIndex(idx))
                .collect_vec()
        })
        .collect()
}

/// Σ|R_i| / N² as a percentage, floored to one decimal place.
pub fn reachability_pct(total_reachable: usize, n_stations: usize) -> f64 {
    let n_pairs = n_stations * n_stations;
    if n_pairs == 0 {
        return 0.0;
    }
    let tenths = total_reachable * 1000 / n_pairs;
    tenths as f64 / 10.0
}
