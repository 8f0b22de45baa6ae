use std::collections::VecDeque;

use super::{GraphSnapshot, StationIndex};

/// finds the set of in-service stations reachable from `src` using a
/// breadth-first search over the undirected snapshot.
///
/// # Arguments
///
/// * `src` - origin of the search tree
/// * `snapshot` - graph view to search
/// * `visited` - shared visit flags, indexed by station. stations already
///   flagged are not expanded, which lets callers label many components
///   without re-allocating.
///
/// # Returns
///
/// the stations of the tree rooted at `src`, sorted by index
pub fn bfs_undirected(
    src: StationIndex,
    snapshot: &GraphSnapshot,
    visited: &mut [bool],
) -> Vec<StationIndex> {
    let mut tree: Vec<StationIndex> = Vec::new();
    if !snapshot.is_active(src) || visited.get(src.0).copied().unwrap_or(true) {
        return tree;
    }
    // breadth-first search is modeled here with a FIFO queue.
    let mut frontier: VecDeque<StationIndex> = VecDeque::new();
    visited[src.0] = true;
    frontier.push_back(src);
    while let Some(next_id) = frontier.pop_front() {
        tree.push(next_id);
        for (neighbor, _) in snapshot.active_neighbors(next_id) {
            if !visited[neighbor.0] {
                visited[neighbor.0] = true;
                frontier.push_back(neighbor);
            }
        }
    }
    tree.sort();
    tree
}

impl GraphSnapshot<'_> {
    /// connected components of the in-service stations, ordered by their
    /// lowest station index. each component is sorted.
    pub fn connected_components(&self) -> Vec<Vec<StationIndex>> {
        let mut visited = vec![false; self.graph().n_stations()];
        let mut components: Vec<Vec<StationIndex>> = Vec::new();
        let sources: Vec<StationIndex> = self.active_stations().collect();
        for src in sources {
            if visited[src.0] {
                continue;
            }
            let component = bfs_undirected(src, self, &mut visited);
            components.push(component);
        }
        components
    }
}

/// the component with the most stations. ties go to the component holding
/// the lowest station index, which for [`GraphSnapshot::connected_components`]
/// output is the earliest one.
pub fn largest_component(components: &[Vec<StationIndex>]) -> Option<&Vec<StationIndex>> {
    let mut best: Option<&Vec<StationIndex>> = None;
    for component in components.iter() {
        match best {
            Some(b) if b.len() >= component.len() => {}
            _ => best = Some(component),
        }
    }
    best
}
