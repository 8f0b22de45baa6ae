use serde::{Deserialize, Serialize};

/// how a reachable area was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaMethod {
    /// spherical area of the convex hull of the reachable stations
    ConvexHull,
    /// reachable station count times a fixed area per station
    StationProxy,
}

impl std::fmt::Display for AreaMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AreaMethod::ConvexHull => write!(f, "convex_hull"),
            AreaMethod::StationProxy => write!(f, "station_proxy"),
        }
    }
}
