use std::{collections::BTreeSet, fmt::Display};

use serde::{Deserialize, Serialize};

use super::{LineIndex, StationIndex};

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SegmentIndex(pub usize);

impl Display for SegmentIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// an undirected physical track segment between two adjacent stations.
#[derive(Debug, Clone)]
pub struct Segment {
    pub index: SegmentIndex,
    pub src: StationIndex,
    pub dst: StationIndex,
    /// scheduled travel time in minutes, averaged over all observed traversals
    pub travel_time_minutes: f64,
    /// every line running over this segment, in either direction
    pub lines: BTreeSet<LineIndex>,
}

impl Segment {
    /// undirected key for a station pair.
    pub fn key(a: StationIndex, b: StationIndex) -> (StationIndex, StationIndex) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    pub fn is_multi_use(&self) -> bool {
        self.lines.len() > 1
    }
}
