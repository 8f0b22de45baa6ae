use std::{collections::BTreeSet, fmt::Display};

use geo::Point;
use serde::{Deserialize, Serialize};

use super::LineIndex;

/// stable arena address of a station within a [`super::TransitGraph`].
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct StationIndex(pub usize);

impl Display for StationIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Station {
    pub index: StationIndex,
    pub id: String,
    pub name: Option<String>,
    /// WGS84 (lon, lat)
    pub coordinate: Point<f64>,
    /// lines whose stopping pattern includes this station
    pub lines: BTreeSet<LineIndex>,
}

impl Station {
    /// the station name when present, otherwise its identifier.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
