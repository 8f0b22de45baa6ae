use serde::{Deserialize, Serialize};

/// network document produced by an ingestion step (for example, a GTFS
/// pre-processor). stations, stopping patterns and per-trip travel times.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkInput {
    pub stations: Vec<StationInput>,
    pub lines: Vec<LineInput>,
    #[serde(default)]
    pub travel_times: Vec<TravelTimeObservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationInput {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub lon: f64,
    pub lat: f64,
    /// declared line memberships. serving lines are always derived from the
    /// line stopping patterns; this list is only checked against them.
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineInput {
    pub id: String,
    pub stations: Vec<String>,
}

/// one observed traversal of a station pair by one trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelTimeObservation {
    pub from: String,
    pub to: String,
    pub minutes: f64,
}
