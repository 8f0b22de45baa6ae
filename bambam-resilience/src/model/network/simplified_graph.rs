use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{
    station_role::derive_station_roles, GraphSnapshot, LineIndex, StationIndex, StationRole,
};

/// an edge between two special vertices that are consecutive along at
/// least one line run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifiedEdge {
    pub src: StationIndex,
    pub dst: StationIndex,
    pub lines: BTreeSet<LineIndex>,
}

impl SimplifiedEdge {
    pub fn is_multi_use(&self) -> bool {
        self.lines.len() > 1
    }

    pub fn opposite(&self, station: StationIndex) -> StationIndex {
        if station == self.src {
            self.dst
        } else {
            self.src
        }
    }
}

/// the network reduced to transfer and terminal stations. intermediate
/// stations are folded into the edges that pass through them.
#[derive(Debug, Clone, Default)]
pub struct SimplifiedGraph {
    /// every station in service in the source snapshot and its role
    roles: HashMap<StationIndex, StationRole>,
    /// special vertices, sorted
    vertices: Vec<StationIndex>,
    edges: Vec<SimplifiedEdge>,
    adjacency: BTreeMap<StationIndex, Vec<usize>>,
}

impl SimplifiedGraph {
    /// builds the simplified view of a snapshot. roles are derived from the
    /// snapshot's line runs, then each run is walked in stopping order and
    /// consecutive special vertices along it are joined.
    pub fn build(snapshot: &GraphSnapshot) -> SimplifiedGraph {
        let runs = snapshot.line_runs();
        let roles = derive_station_roles(&runs);
        let vertices: Vec<StationIndex> = roles
            .iter()
            .filter(|(_, role)| role.is_special())
            .map(|(station, _)| *station)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut merged: BTreeMap<(StationIndex, StationIndex), SimplifiedEdge> = BTreeMap::new();
        for run in runs.iter() {
            let mut previous: Option<StationIndex> = None;
            for station in run.stations.iter() {
                let is_special = roles.get(station).map(|r| r.is_special()).unwrap_or(false);
                if !is_special {
                    continue;
                }
                if let Some(prev) = previous {
                    if prev != *station {
                        let key = if prev < *station {
                            (prev, *station)
                        } else {
                            (*station, prev)
                        };
                        let edge = merged.entry(key).or_insert_with(|| SimplifiedEdge {
                            src: key.0,
                            dst: key.1,
                            lines: BTreeSet::new(),
                        });
                        edge.lines.insert(run.line);
                    }
                }
                previous = Some(*station);
            }
        }

        let edges: Vec<SimplifiedEdge> = merged.into_values().collect();
        let mut adjacency: BTreeMap<StationIndex, Vec<usize>> =
            vertices.iter().map(|v| (*v, vec![])).collect();
        for (idx, edge) in edges.iter().enumerate() {
            adjacency.entry(edge.src).or_default().push(idx);
            adjacency.entry(edge.dst).or_default().push(idx);
        }

        SimplifiedGraph {
            roles,
            vertices,
            edges,
            adjacency,
        }
    }

    /// special vertices in index order.
    pub fn vertices(&self) -> &[StationIndex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[SimplifiedEdge] {
        &self.edges
    }

    pub fn incident_edges(&self, station: StationIndex) -> impl Iterator<Item = &SimplifiedEdge> {
        self.adjacency
            .get(&station)
            .into_iter()
            .flatten()
            .filter_map(move |idx| self.edges.get(*idx))
    }

    pub fn degree(&self, station: StationIndex) -> usize {
        self.adjacency.get(&station).map(|e| e.len()).unwrap_or(0)
    }

    /// transfer stations (two or more lines), including those that are also terminals.
    pub fn n_transfer(&self) -> usize {
        self.special_roles().filter(|r| r.is_transfer()).count()
    }

    /// terminal stations that are not also transfer stations.
    pub fn n_terminal_only(&self) -> usize {
        self.special_roles()
            .filter(|r| r.is_terminal && !r.is_transfer())
            .count()
    }

    pub fn n_single_use_edges(&self) -> usize {
        self.edges.iter().filter(|e| !e.is_multi_use()).count()
    }

    pub fn n_multi_use_edges(&self) -> usize {
        self.edges.iter().filter(|e| e.is_multi_use()).count()
    }

    /// sum over transfer stations of (lines - 1), the transfer possibilities.
    pub fn n_transfer_possibilities(&self) -> usize {
        self.special_roles()
            .filter(|r| r.is_transfer())
            .map(|r| r.lines.len() - 1)
            .sum()
    }

    fn special_roles(&self) -> impl Iterator<Item = &StationRole> {
        self.vertices.iter().filter_map(move |v| self.roles.get(v))
    }
}
