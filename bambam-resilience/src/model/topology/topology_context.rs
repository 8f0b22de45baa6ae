use super::{BoardingsModel, ConnectivityVariant, CoverageVariant};
use crate::{
    config::{NetworkConstants, TopologyConfig},
    model::network::{network_ops, GraphSnapshot, NetworkError, TransitGraph},
};

/// everything the indicator calculation needs that is fixed by the intact
/// network, shared read-only by every disruption scenario.
#[derive(Debug, Clone)]
pub struct TopologyContext {
    /// line count of the intact network
    pub n_lines: usize,
    pub area_km2: f64,
    pub catchment_radius_km: f64,
    /// route length of the intact network, configured or geometric
    pub route_length_km: f64,
    pub baseline_geometric_length_km: f64,
    pub baseline_segment_count: usize,
    pub coverage: CoverageVariant,
    pub connectivity: ConnectivityVariant,
    pub boardings: BoardingsModel,
}

impl TopologyContext {
    pub fn new(
        graph: &TransitGraph,
        constants: &NetworkConstants,
        config: &TopologyConfig,
    ) -> Result<TopologyContext, NetworkError> {
        let runs = GraphSnapshot::full(graph).line_runs();
        let baseline_geometric_length_km = network_ops::route_length_km(graph, &runs)?;
        let route_length_km = constants
            .route_length_km
            .unwrap_or(baseline_geometric_length_km);
        Ok(TopologyContext {
            n_lines: graph.n_lines(),
            area_km2: constants.area_km2,
            catchment_radius_km: config.catchment_radius_km,
            route_length_km,
            baseline_geometric_length_km,
            baseline_segment_count: network_ops::route_segment_count(&runs),
            coverage: config.coverage,
            connectivity: config.connectivity,
            boardings: config.boardings,
        })
    }

    /// route length of a reduced network: the baseline route length scaled by
    /// the surviving share of geometric length, or of segment traversals when
    /// the network has no geometric length at all.
    pub fn scaled_route_length_km(&self, geometric_length_km: f64, segment_count: usize) -> f64 {
        if self.baseline_geometric_length_km > 0.0 {
            self.route_length_km * geometric_length_km / self.baseline_geometric_length_km
        } else if self.baseline_segment_count > 0 {
            self.route_length_km * segment_count as f64 / self.baseline_segment_count as f64
        } else {
            0.0
        }
    }
}
