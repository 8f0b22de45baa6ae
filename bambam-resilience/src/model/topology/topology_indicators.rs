use serde::{Deserialize, Serialize};

use super::{ConnectivityVariant, CoverageVariant, Directness, Dual, TopologyContext};

/// coverage, directness and connectivity of one network state, with the
/// boardings they predict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyIndicators {
    /// stations in the analyzed component
    pub n_stations: usize,
    pub n_special_vertices: usize,
    pub n_transfer: usize,
    /// terminals that are not also transfer stations
    pub n_terminal: usize,
    pub n_single_use_edges: usize,
    pub n_multi_use_edges: usize,
    pub n_transfer_possibilities: usize,
    pub route_length_km: f64,
    pub sigma_route_length: f64,
    pub sigma_station_catchment: f64,
    pub directness: Directness,
    pub rho_edge_count: f64,
    pub rho_transfer_possibility: f64,
    pub coverage_variant: CoverageVariant,
    pub connectivity_variant: ConnectivityVariant,
    pub boardings: Dual<f64>,
}

impl TopologyIndicators {
    /// a network state with no topology left: an empty network or a
    /// component of a single station. it predicts no boardings.
    pub fn degenerate(n_stations: usize, context: &TopologyContext) -> TopologyIndicators {
        TopologyIndicators {
            n_stations,
            n_special_vertices: 0,
            n_transfer: 0,
            n_terminal: 0,
            n_single_use_edges: 0,
            n_multi_use_edges: 0,
            n_transfer_possibilities: 0,
            route_length_km: 0.0,
            sigma_route_length: 0.0,
            sigma_station_catchment: 0.0,
            directness: Directness {
                n_lines: context.n_lines,
                delta_transfers: 0,
            },
            rho_edge_count: 0.0,
            rho_transfer_possibility: 0.0,
            coverage_variant: context.coverage,
            connectivity_variant: context.connectivity,
            boardings: Dual::splat(0.0),
        }
    }

    /// σ of the variant feeding the boardings model.
    pub fn sigma(&self) -> f64 {
        match self.coverage_variant {
            CoverageVariant::RouteLength => self.sigma_route_length,
            CoverageVariant::StationCatchment => self.sigma_station_catchment,
        }
    }

    /// ρ of the variant feeding the boardings model.
    pub fn rho(&self) -> f64 {
        match self.connectivity_variant {
            ConnectivityVariant::EdgeCount => self.rho_edge_count,
            ConnectivityVariant::TransferPossibility => self.rho_transfer_possibility,
        }
    }

    pub fn delta(&self) -> Dual<usize> {
        self.directness.delta()
    }

    pub fn tau(&self) -> Dual<f64> {
        self.directness.tau()
    }
}
