use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use super::Dual;
use crate::model::network::{LineIndex, SimplifiedGraph, StationIndex};

/// network diameter in line changes and the resulting directness indicator τ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directness {
    /// line count, fixed at the intact network's value
    pub n_lines: usize,
    /// the largest minimum number of line changes between two special vertices
    pub delta_transfers: usize,
}

impl Directness {
    pub fn delta(&self) -> Dual<usize> {
        Dual::new(self.delta_transfers, self.delta_transfers + 1)
    }

    /// τ = n_L / δ under both interpretations. a network needing no line
    /// change at all has τ_transfers defined as 1.0.
    pub fn tau(&self) -> Dual<f64> {
        let n_lines = self.n_lines as f64;
        let transfers = if self.delta_transfers == 0 {
            1.0
        } else {
            n_lines / self.delta_transfers as f64
        };
        let trains = n_lines / (self.delta_transfers + 1) as f64;
        Dual::new(transfers, trains)
    }
}

/// computes the directness of a simplified graph.
///
/// # Arguments
///
/// * `graph` - simplified view of the analyzed component
/// * `n_lines` - line count used as the numerator of τ
pub fn directness(graph: &SimplifiedGraph, n_lines: usize) -> Directness {
    let delta_transfers = graph
        .vertices()
        .iter()
        .map(|origin| {
            line_changes_from(graph, *origin)
                .into_values()
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0);
    Directness {
        n_lines,
        delta_transfers,
    }
}

/// minimum number of line changes from `origin` to every reachable special
/// vertex, found by a 0-1 breadth-first search over (vertex, line) states.
/// riding on along the current line costs 0, boarding any other line costs 1,
/// and the first boarding at the origin is free.
pub fn line_changes_from(
    graph: &SimplifiedGraph,
    origin: StationIndex,
) -> HashMap<StationIndex, usize> {
    let mut costs: HashMap<(StationIndex, LineIndex), usize> = HashMap::new();
    let mut frontier: VecDeque<(StationIndex, LineIndex, usize)> = VecDeque::new();
    for edge in graph.incident_edges(origin) {
        for line in edge.lines.iter() {
            if costs.insert((origin, *line), 0).is_none() {
                frontier.push_back((origin, *line, 0));
            }
        }
    }

    while let Some((station, line, cost)) = frontier.pop_front() {
        if costs.get(&(station, line)).is_some_and(|c| *c < cost) {
            continue;
        }
        for edge in graph.incident_edges(station) {
            let next = edge.opposite(station);
            for next_line in edge.lines.iter() {
                let step = usize::from(*next_line != line);
                let next_cost = cost + step;
                let improved = costs
                    .get(&(next, *next_line))
                    .map_or(true, |c| next_cost < *c);
                if improved {
                    costs.insert((next, *next_line), next_cost);
                    if step == 0 {
                        frontier.push_front((next, *next_line, next_cost));
                    } else {
                        frontier.push_back((next, *next_line, next_cost));
                    }
                }
            }
        }
    }

    let mut result: HashMap<StationIndex, usize> = HashMap::from([(origin, 0)]);
    for ((station, _), cost) in costs.into_iter() {
        let entry = result.entry(station).or_insert(cost);
        *entry = (*entry).min(cost);
    }
    result
}
