use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::StationIndex;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LineIndex(pub usize);

impl Display for LineIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// a line and its fixed stopping pattern.
#[derive(Debug, Clone)]
pub struct Line {
    pub index: LineIndex,
    pub id: String,
    pub stations: Vec<StationIndex>,
}

/// a maximal stretch of a line's stopping pattern where every station is
/// still in service. a line that lost a station in the middle of its pattern
/// is represented by two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRun {
    pub line: LineIndex,
    pub stations: Vec<StationIndex>,
}

impl LineRun {
    pub fn first(&self) -> Option<StationIndex> {
        self.stations.first().copied()
    }

    pub fn last(&self) -> Option<StationIndex> {
        self.stations.last().copied()
    }
}
