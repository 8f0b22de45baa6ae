use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    sync::{Arc, Mutex},
};

use kdam::{tqdm, Bar, BarExt};
use rayon::prelude::*;

use crate::model::network::{NetworkError, StationIndex, TransitGraph};

/// shortest scheduled travel time from `src` to every station, in minutes.
/// unreachable stations are `f64::INFINITY`.
pub fn dijkstra_minutes(graph: &TransitGraph, src: StationIndex) -> Result<Vec<f64>, NetworkError> {
    let mut minutes = vec![f64::INFINITY; graph.n_stations()];
    let mut frontier: BinaryHeap<SearchQueueElement> = BinaryHeap::new();
    let origin = minutes
        .get_mut(src.0)
        .ok_or(NetworkError::GraphMissingStation(src))?;
    *origin = 0.0;
    frontier.push(SearchQueueElement {
        minutes: 0.0,
        station: src,
    });

    while let Some(SearchQueueElement { minutes: t, station }) = frontier.pop() {
        if t > minutes[station.0] {
            continue;
        }
        for (neighbor, segment_index) in graph.neighbors(station).iter() {
            let segment = graph
                .segment(*segment_index)
                .ok_or(NetworkError::GraphMissingSegment(station, *neighbor))?;
            let next = t + segment.travel_time_minutes;
            if next < minutes[neighbor.0] {
                minutes[neighbor.0] = next;
                frontier.push(SearchQueueElement {
                    minutes: next,
                    station: *neighbor,
                });
            }
        }
    }
    Ok(minutes)
}

/// travel times between every pair of stations, one row per origin.
pub fn all_pairs_minutes(
    graph: &TransitGraph,
    parallelize: bool,
) -> Result<Vec<Vec<f64>>, NetworkError> {
    let n = graph.n_stations();
    if !parallelize {
        return tqdm!(
            (0..n).map(StationIndex),
            desc = "all-pairs travel times",
            total = n
        )
        .map(|src| dijkstra_minutes(graph, src))
        .collect();
    }
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("all-pairs travel times")
            .total(n)
            .build()
            .map_err(NetworkError::InternalError)?,
    ));
    let rows = (0..n)
        .into_par_iter()
        .map(|idx| {
            if let Ok(mut bar) = bar.clone().lock() {
                let _ = bar.update(1);
            }
            dijkstra_minutes(graph, StationIndex(idx))
        })
        .collect::<Result<Vec<_>, _>>();
    eprintln!();
    rows
}

/// min-heap entry for the search frontier.
#[derive(Clone, Copy, PartialEq)]
struct SearchQueueElement {
    minutes: f64,
    station: StationIndex,
}

impl Eq for SearchQueueElement {}

impl Ord for SearchQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed so the shortest time is popped first
        other
            .minutes
            .total_cmp(&self.minutes)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for SearchQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_networks;

    #[test]
    fn test_linear_times() {
        let graph = test_networks::linear(4);
        let minutes = dijkstra_minutes(&graph, StationIndex(0)).expect("searches");
        assert_eq!(minutes, vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_shortcut_through_hub() {
        let graph = test_networks::cross();
        let n2 = graph.station_index("n2").expect("exists");
        let e2 = graph.station_index("e2").expect("exists");
        let minutes = dijkstra_minutes(&graph, n2).expect("searches");
        assert!((minutes[e2.0] - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_pairs_symmetric() {
        let graph = test_networks::grid(3, 3);
        let matrix = all_pairs_minutes(&graph, true).expect("searches");
        let sequential = all_pairs_minutes(&graph, false).expect("searches");
        assert_eq!(matrix, sequential);
        for i in 0..9 {
            for j in 0..9 {
                assert!((matrix[i][j] - matrix[j][i]).abs() < 1e-12);
            }
        }
        assert!((matrix[0][8] - 8.0).abs() < 1e-12);
    }
}
