use serde::{Deserialize, Serialize};

use crate::model::topology::TopologyIndicators;

/// flat record of the intact network's topology indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineRow {
    pub n_stations: usize,
    pub n_lines: usize,
    pub n_special_vertices: usize,
    pub n_transfer: usize,
    pub n_terminal: usize,
    pub n_single_use_edges: usize,
    pub n_multi_use_edges: usize,
    pub route_length_km: f64,
    pub sigma_route_length: f64,
    pub sigma_station_catchment: f64,
    pub delta_transfers: usize,
    pub delta_trains: usize,
    pub tau_transfers: f64,
    pub tau_trains: f64,
    pub rho_edge_count: f64,
    pub rho_transfer_possibility: f64,
    pub coverage_variant: String,
    pub connectivity_variant: String,
    pub bpc_transfers: f64,
    pub bpc_trains: f64,
}

impl From<&TopologyIndicators> for BaselineRow {
    fn from(value: &TopologyIndicators) -> Self {
        let delta = value.delta();
        let tau = value.tau();
        BaselineRow {
            n_stations: value.n_stations,
            n_lines: value.directness.n_lines,
            n_special_vertices: value.n_special_vertices,
            n_transfer: value.n_transfer,
            n_terminal: value.n_terminal,
            n_single_use_edges: value.n_single_use_edges,
            n_multi_use_edges: value.n_multi_use_edges,
            route_length_km: value.route_length_km,
            sigma_route_length: value.sigma_route_length,
            sigma_station_catchment: value.sigma_station_catchment,
            delta_transfers: delta.transfers,
            delta_trains: delta.trains,
            tau_transfers: tau.transfers,
            tau_trains: tau.trains,
            rho_edge_count: value.rho_edge_count,
            rho_transfer_possibility: value.rho_transfer_possibility,
            coverage_variant: value.coverage_variant.to_string(),
            connectivity_variant: value.connectivity_variant.to_string(),
            bpc_transfers: value.boardings.transfers,
            bpc_trains: value.boardings.trains,
        }
    }
}
