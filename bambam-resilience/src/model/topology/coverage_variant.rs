use serde::{Deserialize, Serialize};

/// definitions of the coverage indicator σ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoverageVariant {
    /// route length per unit of serving area
    #[default]
    RouteLength,
    /// share of the serving area inside station walking catchments
    StationCatchment,
}

impl std::fmt::Display for CoverageVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverageVariant::RouteLength => write!(f, "route_length"),
            CoverageVariant::StationCatchment => write!(f, "station_catchment"),
        }
    }
}
