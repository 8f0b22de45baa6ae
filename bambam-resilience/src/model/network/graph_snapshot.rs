use super::{LineRun, SegmentIndex, StationIndex, TransitGraph};

/// a read-only view of a [`TransitGraph`] with some stations taken out of
/// service. each disruption scenario owns its own snapshot while the
/// underlying graph is shared.
#[derive(Debug, Clone)]
pub struct GraphSnapshot<'a> {
    graph: &'a TransitGraph,
    active: Vec<bool>,
    n_active: usize,
}

impl<'a> GraphSnapshot<'a> {
    /// every station in service.
    pub fn full(graph: &'a TransitGraph) -> GraphSnapshot<'a> {
        GraphSnapshot {
            graph,
            active: vec![true; graph.n_stations()],
            n_active: graph.n_stations(),
        }
    }

    /// every station in service except `removed`. unknown indices are ignored.
    pub fn without(graph: &'a TransitGraph, removed: &[StationIndex]) -> GraphSnapshot<'a> {
        let mut snapshot = GraphSnapshot::full(graph);
        for station in removed.iter() {
            snapshot.remove_station(*station);
        }
        snapshot
    }

    /// only the given stations in service.
    pub fn only(graph: &'a TransitGraph, members: &[StationIndex]) -> GraphSnapshot<'a> {
        let mut active = vec![false; graph.n_stations()];
        let mut n_active = 0;
        for station in members.iter() {
            if let Some(flag) = active.get_mut(station.0) {
                if !*flag {
                    *flag = true;
                    n_active += 1;
                }
            }
        }
        GraphSnapshot {
            graph,
            active,
            n_active,
        }
    }

    /// takes a station out of service in this snapshot only.
    pub fn remove_station(&mut self, station: StationIndex) {
        if let Some(flag) = self.active.get_mut(station.0) {
            if *flag {
                *flag = false;
                self.n_active -= 1;
            }
        }
    }

    pub fn graph(&self) -> &'a TransitGraph {
        self.graph
    }

    pub fn is_active(&self, station: StationIndex) -> bool {
        self.active.get(station.0).copied().unwrap_or(false)
    }

    pub fn n_active(&self) -> usize {
        self.n_active
    }

    /// stations in service, in index order.
    pub fn active_stations(&self) -> impl Iterator<Item = StationIndex> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(|(idx, _)| StationIndex(idx))
    }

    /// neighbors of a station that are still in service, sorted by index.
    pub fn active_neighbors(
        &self,
        station: StationIndex,
    ) -> impl Iterator<Item = (StationIndex, SegmentIndex)> + '_ {
        let in_service = self.is_active(station);
        self.graph
            .neighbors(station)
            .iter()
            .filter(move |(n, _)| in_service && self.is_active(*n))
            .copied()
    }

    /// number of in-service neighbors of an in-service station.
    pub fn degree(&self, station: StationIndex) -> usize {
        self.active_neighbors(station).count()
    }

    /// splits every line's stopping pattern into maximal runs of in-service
    /// stations. runs with fewer than two stations carry no service and are dropped.
    pub fn line_runs(&self) -> Vec<LineRun> {
        let mut runs: Vec<LineRun> = Vec::new();
        for line in self.graph.lines().iter() {
            let mut current: Vec<StationIndex> = Vec::new();
            for station in line.stations.iter() {
                if self.is_active(*station) {
                    current.push(*station);
                } else if !current.is_empty() {
                    let stations = std::mem::take(&mut current);
                    if stations.len() > 1 {
                        runs.push(LineRun {
                            line: line.index,
                            stations,
                        });
                    }
                }
            }
            if current.len() > 1 {
                runs.push(LineRun {
                    line: line.index,
                    stations: current,
                });
            }
        }
        runs
    }
}
