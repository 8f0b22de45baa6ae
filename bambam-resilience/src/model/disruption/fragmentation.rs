use serde::{Deserialize, Serialize};

/// how a disruption broke the network apart, measured against the intact
/// station count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragmentation {
    pub n_baseline: usize,
    /// stations still in service, in any component
    pub n_remaining: usize,
    pub n_components: usize,
    pub largest_component: usize,
    /// surviving stations cut off from the largest component
    pub isolated_stations: usize,
    /// N_remaining / N_baseline
    pub size_penalty: f64,
    /// share of the intact network's station pairs still connected, in percent
    pub reachable_pct: f64,
}

impl Fragmentation {
    /// # Arguments
    ///
    /// * `n_baseline` - stations in the intact network
    /// * `component_sizes` - station count of every surviving component
    pub fn new(n_baseline: usize, component_sizes: &[usize]) -> Fragmentation {
        let n_remaining: usize = component_sizes.iter().sum();
        let largest_component = component_sizes.iter().copied().max().unwrap_or(0);
        let size_penalty = if n_baseline == 0 {
            0.0
        } else {
            n_remaining as f64 / n_baseline as f64
        };
        let baseline_pairs = pairs(n_baseline);
        let connected_pairs: usize = component_sizes.iter().map(|c| pairs(*c)).sum();
        let reachable_pct = if baseline_pairs == 0 {
            0.0
        } else {
            connected_pairs as f64 / baseline_pairs as f64 * 100.0
        };
        Fragmentation {
            n_baseline,
            n_remaining,
            n_components: component_sizes.len(),
            largest_component,
            isolated_stations: n_remaining - largest_component,
            size_penalty,
            reachable_pct,
        }
    }
}

fn pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
