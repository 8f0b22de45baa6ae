use std::collections::VecDeque;

use super::{CentralityMeasure, RankingMode};
use crate::model::network::{GraphSnapshot, StationIndex, TransitGraph};

/// scores closer than this, relative to their magnitude, are ties.
const SCORE_TOLERANCE: f64 = 1e-9;

/// number of in-service neighbors of every station.
pub fn degree_centrality(snapshot: &GraphSnapshot) -> Vec<f64> {
    let mut scores = vec![0.0; snapshot.graph().n_stations()];
    for station in snapshot.active_stations() {
        scores[station.0] = snapshot.degree(station) as f64;
    }
    scores
}

/// unweighted shortest-path betweenness of every station using Brandes'
/// algorithm. pairs are unordered, so each path is counted once.
pub fn betweenness_centrality(snapshot: &GraphSnapshot) -> Vec<f64> {
    let n = snapshot.graph().n_stations();
    let mut centrality = vec![0.0; n];
    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![vec![]; n];
    let mut n_paths: Vec<f64> = vec![0.0; n];
    let mut distance: Vec<Option<usize>> = vec![None; n];
    let mut dependency: Vec<f64> = vec![0.0; n];
    let mut queue: VecDeque<usize> = VecDeque::new();

    for src in snapshot.active_stations() {
        stack.clear();
        predecessors.iter_mut().for_each(|p| p.clear());
        n_paths.iter_mut().for_each(|v| *v = 0.0);
        distance.iter_mut().for_each(|d| *d = None);
        dependency.iter_mut().for_each(|d| *d = 0.0);

        n_paths[src.0] = 1.0;
        distance[src.0] = Some(0);
        queue.push_back(src.0);
        while let Some(v) = queue.pop_front() {
            stack.push(v);
            let dist_v = distance[v].unwrap_or(0);
            for (w, _) in snapshot.active_neighbors(StationIndex(v)) {
                let w = w.0;
                if distance[w].is_none() {
                    distance[w] = Some(dist_v + 1);
                    queue.push_back(w);
                }
                if distance[w] == Some(dist_v + 1) {
                    n_paths[w] += n_paths[v];
                    predecessors[w].push(v);
                }
            }
        }

        while let Some(w) = stack.pop() {
            let coefficient = (1.0 + dependency[w]) / n_paths[w];
            for v in predecessors[w].iter() {
                dependency[*v] += n_paths[*v] * coefficient;
            }
            if w != src.0 {
                centrality[w] += dependency[w];
            }
        }
    }

    centrality.iter_mut().for_each(|c| *c /= 2.0);
    centrality
}

/// the in-service station with the highest score. near-equal scores are
/// ties and go to the lowest station index.
pub fn highest_ranked(snapshot: &GraphSnapshot, scores: &[f64]) -> Option<StationIndex> {
    let mut best: Option<(StationIndex, f64)> = None;
    for station in snapshot.active_stations() {
        let score = scores.get(station.0).copied().unwrap_or(0.0);
        match best {
            Some((_, best_score))
                if score <= best_score + SCORE_TOLERANCE * best_score.abs().max(1.0) => {}
            _ => best = Some((station, score)),
        }
    }
    best.map(|(station, _)| station)
}

/// the order in which a targeted strategy removes stations.
///
/// # Arguments
///
/// * `graph` - the intact network
/// * `measure` - station ranking
/// * `mode` - whether rankings are recomputed after every removal
/// * `count` - length of the sequence. shorter if the network runs out of stations.
pub fn targeted_removal_sequence(
    graph: &TransitGraph,
    measure: CentralityMeasure,
    mode: RankingMode,
    count: usize,
) -> Vec<StationIndex> {
    let mut snapshot = GraphSnapshot::full(graph);
    let mut sequence: Vec<StationIndex> = Vec::with_capacity(count);
    let static_scores = match mode {
        RankingMode::Static => Some(measure.scores(&snapshot)),
        RankingMode::Iterative => None,
    };
    while sequence.len() < count {
        let next = match &static_scores {
            Some(scores) => highest_ranked(&snapshot, scores),
            None => highest_ranked(&snapshot, &measure.scores(&snapshot)),
        };
        match next {
            Some(station) => {
                log::debug!(
                    "{:?} removal #{} is station {}",
                    measure,
                    sequence.len() + 1,
                    station
                );
                snapshot.remove_station(station);
                sequence.push(station);
            }
            None => break,
        }
    }
    sequence
}
