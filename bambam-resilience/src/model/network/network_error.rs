use thiserror::Error;

use super::StationIndex;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("network must contain at least two stations, found {0}")]
    TooFewStations(usize),
    #[error("station id '{0}' appears more than once in the network input")]
    DuplicateStationId(String),
    #[error("line id '{0}' appears more than once in the network input")]
    DuplicateLineId(String),
    #[error("line '{line_id}' references station '{station_id}' which is not in the network")]
    UnknownStation { line_id: String, station_id: String },
    #[error("travel time observation references station '{0}' which is not in the network")]
    UnknownObservationStation(String),
    #[error("line '{0}' must stop at two or more distinct stations")]
    LineTooShort(String),
    #[error("segment '{0}'-'{1}' has no observed travel time and no fallback speed is configured")]
    MissingTravelTime(String, String),
    #[error("segment '{src}'-'{dst}' has non-positive travel time {minutes} minutes")]
    NonPositiveTravelTime {
        src: String,
        dst: String,
        minutes: f64,
    },
    #[error("station '{0}' has invalid coordinates ({1}, {2})")]
    InvalidCoordinates(String, f64, f64),
    #[error("baseline network must be a single connected component, found {0} components")]
    DisconnectedNetwork(usize),
    #[error("attempting to get station {0} not in graph")]
    GraphMissingStation(StationIndex),
    #[error("no segment joins stations {0} and {1}")]
    GraphMissingSegment(StationIndex, StationIndex),
    #[error("invalid analysis configuration: {0}")]
    InvalidConfiguration(String),
    #[error("{0}")]
    InternalError(String),
}
