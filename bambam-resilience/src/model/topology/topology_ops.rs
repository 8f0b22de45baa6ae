use std::f64::consts::PI;

use super::{directness, TopologyContext, TopologyIndicators};
use crate::model::network::{
    largest_component, network_ops, GraphSnapshot, NetworkError, SimplifiedGraph, StationIndex,
};

/// computes the topology indicators of a network state. only the largest
/// connected component is analyzed; the rest of the network is considered
/// out of service.
///
/// # Arguments
///
/// * `snapshot` - the network state, intact or disrupted
/// * `context` - values fixed by the intact network
///
/// # Returns
///
/// the indicators and predicted boardings of the largest component
pub fn compute_indicators(
    snapshot: &GraphSnapshot,
    context: &TopologyContext,
) -> Result<TopologyIndicators, NetworkError> {
    let components = snapshot.connected_components();
    compute_indicators_of_components(snapshot, &components, context)
}

/// as [`compute_indicators`], for callers that already hold the connected
/// components of the snapshot.
pub fn compute_indicators_of_components(
    snapshot: &GraphSnapshot,
    components: &[Vec<StationIndex>],
    context: &TopologyContext,
) -> Result<TopologyIndicators, NetworkError> {
    let largest = match largest_component(components) {
        Some(c) if c.len() > 1 => c,
        Some(c) => return Ok(TopologyIndicators::degenerate(c.len(), context)),
        None => return Ok(TopologyIndicators::degenerate(0, context)),
    };
    let graph = snapshot.graph();
    let component = GraphSnapshot::only(graph, largest);
    let runs = component.line_runs();
    let simplified = SimplifiedGraph::build(&component);

    let geometric_length_km = network_ops::route_length_km(graph, &runs)?;
    let segment_count = network_ops::route_segment_count(&runs);
    let route_length_km = context.scaled_route_length_km(geometric_length_km, segment_count);
    let n_stations = largest.len();

    let sigma_route_length = route_length_km / context.area_km2;
    let sigma_station_catchment =
        n_stations as f64 * PI * context.catchment_radius_km.powi(2) / context.area_km2;

    let n_transfer = simplified.n_transfer();
    let n_terminal = simplified.n_terminal_only();
    let n_single_use_edges = simplified.n_single_use_edges();
    let n_multi_use_edges = simplified.n_multi_use_edges();
    let n_transfer_possibilities = simplified.n_transfer_possibilities();
    let rho_edge_count = edge_count_connectivity(
        n_single_use_edges,
        n_multi_use_edges,
        n_transfer + n_terminal,
    );
    let rho_transfer_possibility =
        transfer_possibility_connectivity(n_transfer_possibilities, n_multi_use_edges, n_transfer);

    let directness = directness::directness(&simplified, context.n_lines);

    let mut indicators = TopologyIndicators {
        n_stations,
        n_special_vertices: simplified.vertices().len(),
        n_transfer,
        n_terminal,
        n_single_use_edges,
        n_multi_use_edges,
        n_transfer_possibilities,
        route_length_km,
        sigma_route_length,
        sigma_station_catchment,
        directness,
        rho_edge_count,
        rho_transfer_possibility,
        coverage_variant: context.coverage,
        connectivity_variant: context.connectivity,
        boardings: Default::default(),
    };
    indicators.boardings =
        context
            .boardings
            .predict_dual(indicators.sigma(), indicators.tau(), indicators.rho());
    Ok(indicators)
}

/// ρ = (e_single + 2·e_multi) / (v_transfer + v_terminal).
pub fn edge_count_connectivity(
    n_single_use_edges: usize,
    n_multi_use_edges: usize,
    n_special_vertices: usize,
) -> f64 {
    if n_special_vertices == 0 {
        return 0.0;
    }
    (n_single_use_edges + 2 * n_multi_use_edges) as f64 / n_special_vertices as f64
}

/// ρ = max(0, (Σ(l - 1) - e_multi) / v_transfer), 0 without transfer stations.
pub fn transfer_possibility_connectivity(
    n_transfer_possibilities: usize,
    n_multi_use_edges: usize,
    n_transfer: usize,
) -> f64 {
    if n_transfer == 0 {
        return 0.0;
    }
    let net = n_transfer_possibilities as f64 - n_multi_use_edges as f64;
    (net / n_transfer as f64).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{NetworkConstants, TopologyConfig},
        model::{
            network::{StationIndex, TransitGraph},
            test_networks,
            topology::CoverageVariant,
        },
    };

    fn context(graph: &TransitGraph, route_length_km: Option<f64>) -> TopologyContext {
        let constants = NetworkConstants {
            population: 1_000_000.0,
            area_km2: 100.0,
            city_area_km2: None,
            route_length_km,
            fallback_speed_kmh: None,
        };
        TopologyContext::new(graph, &constants, &TopologyConfig::default()).expect("valid")
    }

    #[test]
    fn test_closed_chain_connectivity_is_one() {
        let graph = test_networks::triangle();
        let ctx = context(&graph, None);
        let ind = compute_indicators(&GraphSnapshot::full(&graph), &ctx).expect("computes");
        assert_eq!(ind.n_special_vertices, 3);
        assert_eq!(ind.n_terminal, 0);
        assert_eq!(ind.n_single_use_edges, 3);
        assert!((ind.rho_edge_count - 1.0).abs() < 1e-12);
        assert!((ind.rho_transfer_possibility - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_indicators() {
        let graph = test_networks::cross();
        let ctx = context(&graph, Some(20.0));
        let ind = compute_indicators(&GraphSnapshot::full(&graph), &ctx).expect("computes");
        assert_eq!(ind.n_stations, 9);
        assert_eq!(ind.n_transfer, 1);
        assert_eq!(ind.n_terminal, 4);
        // four single-use edges over five special vertices
        assert!((ind.rho_edge_count - 0.8).abs() < 1e-12);
        assert!((ind.rho_transfer_possibility - 1.0).abs() < 1e-12);
        assert!((ind.sigma_route_length - 0.2).abs() < 1e-12);
        let catchment = 9.0 * std::f64::consts::PI * 0.25 / 100.0;
        assert!((ind.sigma_station_catchment - catchment).abs() < 1e-12);
        assert_eq!(ind.delta().transfers, 1);
        let expected = ctx.boardings.predict(0.2, 2.0, 0.8);
        assert!((ind.boardings.transfers - expected).abs() < 1e-9);
    }

    #[test]
    fn test_shared_trunk_transfer_possibility_nets_multi_use() {
        let graph = test_networks::shared_trunk();
        let ctx = context(&graph, None);
        let ind = compute_indicators(&GraphSnapshot::full(&graph), &ctx).expect("computes");
        // x and y each offer one transfer possibility, one multi-use edge joins them
        assert_eq!(ind.n_transfer_possibilities, 2);
        assert_eq!(ind.n_multi_use_edges, 1);
        assert!((ind.rho_transfer_possibility - 0.5).abs() < 1e-12);
        assert!((ind.rho_edge_count - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_route_length_scales_with_surviving_geometry() {
        let graph = test_networks::linear(5);
        let ctx = context(&graph, Some(40.0));
        let full = compute_indicators(&GraphSnapshot::full(&graph), &ctx).expect("computes");
        assert!((full.route_length_km - 40.0).abs() < 1e-9);
        let reduced = GraphSnapshot::without(&graph, &[StationIndex(4)]);
        let ind = compute_indicators(&reduced, &ctx).expect("computes");
        assert!((ind.route_length_km - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_removal_reproduces_baseline() {
        let graph = test_networks::grid(4, 3);
        let ctx = context(&graph, None);
        let a = compute_indicators(&GraphSnapshot::full(&graph), &ctx).expect("computes");
        let b = compute_indicators(&GraphSnapshot::without(&graph, &[]), &ctx).expect("computes");
        assert_eq!(a, b);
    }

    #[test]
    fn test_precomputed_components_match_direct_computation() {
        let graph = test_networks::grid(4, 3);
        let ctx = context(&graph, None);
        let snapshot = GraphSnapshot::without(&graph, &[StationIndex(1), StationIndex(5)]);
        let components = snapshot.connected_components();
        let direct = compute_indicators(&snapshot, &ctx).expect("computes");
        let reused =
            compute_indicators_of_components(&snapshot, &components, &ctx).expect("computes");
        assert_eq!(direct, reused);
    }

    #[test]
    fn test_degenerate_states_predict_no_boardings() {
        let graph = test_networks::linear(3);
        let ctx = context(&graph, None);
        let single = GraphSnapshot::without(&graph, &[StationIndex(0), StationIndex(1)]);
        let ind = compute_indicators(&single, &ctx).expect("computes");
        assert_eq!(ind.n_stations, 1);
        assert_eq!(ind.boardings.transfers, 0.0);
        assert_eq!(ind.boardings.trains, 0.0);
        let all: Vec<StationIndex> = (0..3).map(StationIndex).collect();
        let empty = GraphSnapshot::without(&graph, &all);
        let ind = compute_indicators(&empty, &ctx).expect("computes");
        assert_eq!(ind.n_stations, 0);
        assert_eq!(ind.boardings.trains, 0.0);
    }

    #[test]
    fn test_selected_coverage_variant_feeds_boardings() {
        let graph = test_networks::cross();
        let constants = NetworkConstants {
            population: 1_000_000.0,
            area_km2: 100.0,
            city_area_km2: None,
            route_length_km: None,
            fallback_speed_kmh: None,
        };
        let config = TopologyConfig {
            coverage: CoverageVariant::StationCatchment,
            ..Default::default()
        };
        let ctx = TopologyContext::new(&graph, &constants, &config).expect("valid");
        let ind = compute_indicators(&GraphSnapshot::full(&graph), &ctx).expect("computes");
        assert_eq!(ind.sigma(), ind.sigma_station_catchment);
        let expected =
            ctx.boardings
                .predict(ind.sigma_station_catchment, ind.tau().trains, ind.rho());
        assert!((ind.boardings.trains - expected).abs() < 1e-9);
    }
}
