use std::collections::HashMap;

use geo::{line_string, Haversine, Length, Point};
use itertools::Itertools;

use super::{
    network_input::TravelTimeObservation, LineRun, NetworkError, Segment, StationIndex,
    TransitGraph,
};

/// haversine distance between two WGS84 points, in kilometers.
pub fn haversine_km(src: Point<f64>, dst: Point<f64>) -> f64 {
    Haversine.length(&line_string![src.0, dst.0]) / 1000.0
}

/// averages all observed traversal times for each unordered station pair.
///
/// # Arguments
///
/// * `observations` - one entry per trip traversal of a station pair
/// * `station_lookup` - station identifier to arena index
///
/// # Returns
///
/// the mean travel time in minutes for each observed pair, keyed by [`Segment::key`]
pub fn average_travel_times(
    observations: &[TravelTimeObservation],
    station_lookup: &HashMap<String, StationIndex>,
) -> Result<HashMap<(StationIndex, StationIndex), f64>, NetworkError> {
    let mut sums: HashMap<(StationIndex, StationIndex), (f64, usize)> = HashMap::new();
    for obs in observations.iter() {
        let src = station_lookup
            .get(&obs.from)
            .ok_or_else(|| NetworkError::UnknownObservationStation(obs.from.clone()))?;
        let dst = station_lookup
            .get(&obs.to)
            .ok_or_else(|| NetworkError::UnknownObservationStation(obs.to.clone()))?;
        let entry = sums.entry(Segment::key(*src, *dst)).or_insert((0.0, 0));
        entry.0 += obs.minutes;
        entry.1 += 1;
    }
    let averages = sums
        .into_iter()
        .map(|(key, (total, count))| (key, total / count as f64))
        .collect();
    Ok(averages)
}

/// estimates a segment travel time from its straight-line length and a
/// configured average running speed.
pub fn estimate_travel_time_minutes(
    src: Point<f64>,
    dst: Point<f64>,
    speed_kmh: f64,
) -> Result<f64, NetworkError> {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return Err(NetworkError::InvalidConfiguration(format!(
            "fallback speed must be strictly positive, found {speed_kmh} km/h"
        )));
    }
    Ok(haversine_km(src, dst) / speed_kmh * 60.0)
}

/// geometric route length of a set of line runs in kilometers. a segment
/// served by two lines is counted once per line.
pub fn route_length_km(graph: &TransitGraph, runs: &[LineRun]) -> Result<f64, NetworkError> {
    let mut total = 0.0;
    for run in runs.iter() {
        for (src, dst) in run.stations.iter().tuple_windows() {
            let src_station = graph.station(*src)?;
            let dst_station = graph.station(*dst)?;
            total += haversine_km(src_station.coordinate, dst_station.coordinate);
        }
    }
    Ok(total)
}

/// number of segment traversals across a set of line runs, the count
/// analogue of [`route_length_km`].
pub fn route_segment_count(runs: &[LineRun]) -> usize {
    runs.iter()
        .map(|run| run.stations.len().saturating_sub(1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_is_undirected() {
        let lookup = HashMap::from([
            (String::from("a"), StationIndex(0)),
            (String::from("b"), StationIndex(1)),
        ]);
        let obs = vec![
            TravelTimeObservation {
                from: String::from("a"),
                to: String::from("b"),
                minutes: 2.0,
            },
            TravelTimeObservation {
                from: String::from("b"),
                to: String::from("a"),
                minutes: 4.0,
            },
        ];
        let result = average_travel_times(&obs, &lookup).expect("should average");
        assert_eq!(result.len(), 1);
        let avg = result
            .get(&(StationIndex(0), StationIndex(1)))
            .expect("pair should be present");
        assert!((avg - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_observation_station() {
        let lookup = HashMap::from([(String::from("a"), StationIndex(0))]);
        let obs = vec![TravelTimeObservation {
            from: String::from("a"),
            to: String::from("z"),
            minutes: 2.0,
        }];
        let result = average_travel_times(&obs, &lookup);
        assert!(matches!(
            result,
            Err(NetworkError::UnknownObservationStation(s)) if s == "z"
        ));
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        let km = haversine_km(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        // one degree of latitude is roughly 111.2 km on the mean-radius sphere
        assert!((km - 111.2).abs() < 0.2, "found {km}");
    }

    #[test]
    fn test_estimate_rejects_zero_speed() {
        let result = estimate_travel_time_minutes(Point::new(0.0, 0.0), Point::new(0.0, 1.0), 0.0);
        assert!(matches!(result, Err(NetworkError::InvalidConfiguration(_))));
    }
}
