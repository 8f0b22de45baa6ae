use std::collections::{BTreeSet, HashMap, HashSet};

use geo::Point;
use itertools::Itertools;

use super::{
    network_input::NetworkInput, network_ops, GraphSnapshot, Line, LineIndex, NetworkError,
    Segment, SegmentIndex, Station, StationIndex, StationRole,
};

/// the full rail network graph. stations, lines and segments are stored in
/// arenas and addressed by stable indices; the graph is never mutated after
/// construction. disruptions are modeled with [`GraphSnapshot`] masks.
#[derive(Debug, Clone)]
pub struct TransitGraph {
    stations: Vec<Station>,
    lines: Vec<Line>,
    segments: Vec<Segment>,
    /// per station, the (neighbor, segment) pairs, sorted by neighbor
    adjacency: Vec<Vec<(StationIndex, SegmentIndex)>>,
    station_lookup: HashMap<String, StationIndex>,
    segment_lookup: HashMap<(StationIndex, StationIndex), SegmentIndex>,
}

impl TransitGraph {
    /// builds the full graph from a network document, validating it along the way.
    ///
    /// # Arguments
    ///
    /// * `input` - stations, line stopping patterns and travel time observations
    /// * `fallback_speed_kmh` - if provided, segments without an observed travel
    ///   time are estimated from their length at this speed. otherwise they are an error.
    ///
    /// # Returns
    ///
    /// a connected graph, or an error describing the first data problem found
    pub fn new(
        input: &NetworkInput,
        fallback_speed_kmh: Option<f64>,
    ) -> Result<TransitGraph, NetworkError> {
        if input.stations.len() < 2 {
            return Err(NetworkError::TooFewStations(input.stations.len()));
        }

        let mut station_lookup: HashMap<String, StationIndex> =
            HashMap::with_capacity(input.stations.len());
        let mut stations: Vec<Station> = Vec::with_capacity(input.stations.len());
        for (idx, row) in input.stations.iter().enumerate() {
            let valid_coordinate = row.lon.is_finite()
                && row.lat.is_finite()
                && row.lon.abs() <= 180.0
                && row.lat.abs() <= 90.0;
            if !valid_coordinate {
                return Err(NetworkError::InvalidCoordinates(
                    row.id.clone(),
                    row.lon,
                    row.lat,
                ));
            }
            let index = StationIndex(idx);
            if station_lookup.insert(row.id.clone(), index).is_some() {
                return Err(NetworkError::DuplicateStationId(row.id.clone()));
            }
            stations.push(Station {
                index,
                id: row.id.clone(),
                name: row.name.clone(),
                coordinate: Point::new(row.lon, row.lat),
                lines: BTreeSet::new(),
            });
        }

        let mut line_ids: HashSet<&str> = HashSet::with_capacity(input.lines.len());
        let mut lines: Vec<Line> = Vec::with_capacity(input.lines.len());
        for (idx, row) in input.lines.iter().enumerate() {
            if !line_ids.insert(row.id.as_str()) {
                return Err(NetworkError::DuplicateLineId(row.id.clone()));
            }
            let index = LineIndex(idx);
            let mut sequence: Vec<StationIndex> = Vec::with_capacity(row.stations.len());
            for station_id in row.stations.iter() {
                let station_index =
                    station_lookup
                        .get(station_id)
                        .ok_or_else(|| NetworkError::UnknownStation {
                            line_id: row.id.clone(),
                            station_id: station_id.clone(),
                        })?;
                // repeated consecutive stops (platform changes) are a single stop
                if sequence.last() != Some(station_index) {
                    sequence.push(*station_index);
                }
            }
            if sequence.iter().unique().count() < 2 {
                return Err(NetworkError::LineTooShort(row.id.clone()));
            }
            for station_index in sequence.iter() {
                stations[station_index.0].lines.insert(index);
            }
            lines.push(Line {
                index,
                id: row.id.clone(),
                stations: sequence,
            });
        }

        let observed = network_ops::average_travel_times(&input.travel_times, &station_lookup)?;
        let mut segment_lookup: HashMap<(StationIndex, StationIndex), SegmentIndex> =
            HashMap::new();
        let mut segments: Vec<Segment> = Vec::new();
        for line in lines.iter() {
            for (src, dst) in line.stations.iter().tuple_windows() {
                let key = Segment::key(*src, *dst);
                if let Some(segment_index) = segment_lookup.get(&key) {
                    segments[segment_index.0].lines.insert(line.index);
                    continue;
                }
                let (src_station, dst_station) = (&stations[key.0 .0], &stations[key.1 .0]);
                let minutes = match (observed.get(&key), fallback_speed_kmh) {
                    (Some(minutes), _) => *minutes,
                    (None, Some(speed)) => {
                        let estimate = network_ops::estimate_travel_time_minutes(
                            src_station.coordinate,
                            dst_station.coordinate,
                            speed,
                        )?;
                        log::warn!(
                            "segment {}-{} has no observed travel time, estimated {:.2} minutes at {} km/h",
                            src_station.id,
                            dst_station.id,
                            estimate,
                            speed
                        );
                        estimate
                    }
                    (None, None) => {
                        return Err(NetworkError::MissingTravelTime(
                            src_station.id.clone(),
                            dst_station.id.clone(),
                        ))
                    }
                };
                if !minutes.is_finite() || minutes <= 0.0 {
                    return Err(NetworkError::NonPositiveTravelTime {
                        src: src_station.id.clone(),
                        dst: dst_station.id.clone(),
                        minutes,
                    });
                }
                let index = SegmentIndex(segments.len());
                segment_lookup.insert(key, index);
                segments.push(Segment {
                    index,
                    src: key.0,
                    dst: key.1,
                    travel_time_minutes: minutes,
                    lines: BTreeSet::from([line.index]),
                });
            }
        }

        let unused = observed
            .keys()
            .filter(|key| !segment_lookup.contains_key(key))
            .count();
        if unused > 0 {
            log::warn!(
                "ignoring travel times for {unused} station pairs that are not adjacent on any line"
            );
        }

        let mut adjacency: Vec<Vec<(StationIndex, SegmentIndex)>> = vec![vec![]; stations.len()];
        for segment in segments.iter() {
            adjacency[segment.src.0].push((segment.dst, segment.index));
            adjacency[segment.dst.0].push((segment.src, segment.index));
        }
        for neighbors in adjacency.iter_mut() {
            neighbors.sort();
        }

        for (station, row) in stations.iter().zip(input.stations.iter()) {
            let declared: BTreeSet<&str> = row.lines.iter().map(|l| l.as_str()).collect();
            if declared.is_empty() {
                continue;
            }
            let derived: BTreeSet<&str> = station
                .lines
                .iter()
                .map(|l| lines[l.0].id.as_str())
                .collect();
            if declared != derived {
                log::warn!(
                    "station '{}' declares lines [{}] but is served by [{}] according to line stopping patterns",
                    station.id,
                    declared.iter().join(", "),
                    derived.iter().join(", ")
                );
            }
        }

        let graph = TransitGraph {
            stations,
            lines,
            segments,
            adjacency,
            station_lookup,
            segment_lookup,
        };

        let components = GraphSnapshot::full(&graph).connected_components();
        if components.len() != 1 {
            return Err(NetworkError::DisconnectedNetwork(components.len()));
        }
        log::info!(
            "built transit graph with {} stations, {} lines and {} segments",
            graph.n_stations(),
            graph.n_lines(),
            graph.n_segments()
        );
        Ok(graph)
    }

    pub fn n_stations(&self) -> usize {
        self.stations.len()
    }

    pub fn n_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn n_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// helper with error handling for getting the station data for a given index
    pub fn station(&self, index: StationIndex) -> Result<&Station, NetworkError> {
        self.stations
            .get(index.0)
            .ok_or(NetworkError::GraphMissingStation(index))
    }

    pub fn station_index(&self, station_id: &str) -> Option<StationIndex> {
        self.station_lookup.get(station_id).copied()
    }

    /// all (neighbor, segment) pairs of a station, ignoring any disruption.
    pub fn neighbors(&self, index: StationIndex) -> &[(StationIndex, SegmentIndex)] {
        self.adjacency
            .get(index.0)
            .map(|n| n.as_slice())
            .unwrap_or_default()
    }

    pub fn segment(&self, index: SegmentIndex) -> Option<&Segment> {
        self.segments.get(index.0)
    }

    /// the segment joining two stations, in either direction.
    pub fn segment_between(
        &self,
        src: StationIndex,
        dst: StationIndex,
    ) -> Result<&Segment, NetworkError> {
        self.segment_lookup
            .get(&Segment::key(src, dst))
            .and_then(|idx| self.segments.get(idx.0))
            .ok_or(NetworkError::GraphMissingSegment(src, dst))
    }

    /// station roles of the intact network.
    pub fn baseline_roles(&self) -> HashMap<StationIndex, StationRole> {
        let runs = GraphSnapshot::full(self).line_runs();
        super::station_role::derive_station_roles(&runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::network_input::{LineInput, StationInput, TravelTimeObservation};

    fn station(id: &str, lon: f64) -> StationInput {
        StationInput {
            id: String::from(id),
            name: None,
            lon,
            lat: 0.0,
            lines: vec![],
        }
    }

    fn obs(from: &str, to: &str, minutes: f64) -> TravelTimeObservation {
        TravelTimeObservation {
            from: String::from(from),
            to: String::from(to),
            minutes,
        }
    }

    fn line(id: &str, stations: &[&str]) -> LineInput {
        LineInput {
            id: String::from(id),
            stations: stations.iter().map(|s| String::from(*s)).collect(),
        }
    }

    #[test]
    fn test_segments_are_shared_between_lines() {
        let input = NetworkInput {
            stations: vec![station("a", 0.0), station("b", 0.01), station("c", 0.02)],
            lines: vec![line("red", &["a", "b", "c"]), line("blue", &["c", "b"])],
            travel_times: vec![obs("a", "b", 2.0), obs("b", "c", 3.0), obs("c", "b", 5.0)],
        };
        let graph = TransitGraph::new(&input, None).expect("graph should build");
        assert_eq!(graph.n_segments(), 2);
        let bc = graph
            .segment_between(StationIndex(2), StationIndex(1))
            .expect("segment b-c exists");
        assert!(bc.is_multi_use());
        assert!((bc.travel_time_minutes - 4.0).abs() < 1e-12);
        let ab = graph
            .segment_between(StationIndex(0), StationIndex(1))
            .expect("segment a-b exists");
        assert!(!ab.is_multi_use());
    }

    #[test]
    fn test_non_positive_travel_time_is_rejected() {
        let input = NetworkInput {
            stations: vec![station("a", 0.0), station("b", 0.01)],
            lines: vec![line("red", &["a", "b"])],
            travel_times: vec![obs("a", "b", 0.0)],
        };
        let result = TransitGraph::new(&input, None);
        assert!(matches!(
            result,
            Err(NetworkError::NonPositiveTravelTime { .. })
        ));
    }

    #[test]
    fn test_missing_travel_time_without_fallback() {
        let input = NetworkInput {
            stations: vec![station("a", 0.0), station("b", 0.01)],
            lines: vec![line("red", &["a", "b"])],
            travel_times: vec![],
        };
        let result = TransitGraph::new(&input, None);
        assert!(matches!(result, Err(NetworkError::MissingTravelTime(_, _))));
        let graph = TransitGraph::new(&input, Some(30.0)).expect("fallback should apply");
        let ab = graph
            .segment_between(StationIndex(0), StationIndex(1))
            .expect("segment exists");
        // 0.01 degrees of longitude at the equator is about 1.11 km
        assert!((ab.travel_time_minutes - 1.112 / 30.0 * 60.0).abs() < 0.01);
    }

    #[test]
    fn test_disconnected_network_is_rejected() {
        let input = NetworkInput {
            stations: vec![
                station("a", 0.0),
                station("b", 0.01),
                station("c", 0.02),
                station("d", 0.03),
            ],
            lines: vec![line("red", &["a", "b"]), line("blue", &["c", "d"])],
            travel_times: vec![obs("a", "b", 2.0), obs("c", "d", 2.0)],
        };
        let result = TransitGraph::new(&input, None);
        assert!(matches!(result, Err(NetworkError::DisconnectedNetwork(2))));
    }

    #[test]
    fn test_unknown_station_in_line() {
        let input = NetworkInput {
            stations: vec![station("a", 0.0), station("b", 0.01)],
            lines: vec![line("red", &["a", "x"])],
            travel_times: vec![],
        };
        let result = TransitGraph::new(&input, None);
        assert!(matches!(result, Err(NetworkError::UnknownStation { .. })));
    }

    #[test]
    fn test_duplicate_station_id() {
        let input = NetworkInput {
            stations: vec![station("a", 0.0), station("b", 0.01), station("a", 0.02)],
            lines: vec![line("red", &["a", "b"])],
            travel_times: vec![obs("a", "b", 2.0)],
        };
        let result = TransitGraph::new(&input, None);
        assert!(matches!(result, Err(NetworkError::DuplicateStationId(id)) if id == "a"));
    }

    #[test]
    fn test_duplicate_line_id() {
        let input = NetworkInput {
            stations: vec![station("a", 0.0), station("b", 0.01), station("c", 0.02)],
            lines: vec![line("red", &["a", "b"]), line("red", &["b", "c"])],
            travel_times: vec![obs("a", "b", 2.0), obs("b", "c", 2.0)],
        };
        let result = TransitGraph::new(&input, None);
        assert!(matches!(result, Err(NetworkError::DuplicateLineId(id)) if id == "red"));
    }

    #[test]
    fn test_line_with_one_distinct_stop() {
        let input = NetworkInput {
            stations: vec![station("a", 0.0), station("b", 0.01)],
            lines: vec![line("red", &["a", "b"]), line("loop", &["a", "a"])],
            travel_times: vec![obs("a", "b", 2.0)],
        };
        let result = TransitGraph::new(&input, None);
        assert!(matches!(result, Err(NetworkError::LineTooShort(id)) if id == "loop"));
    }

    #[test]
    fn test_too_few_stations() {
        let input = NetworkInput {
            stations: vec![station("a", 0.0)],
            lines: vec![],
            travel_times: vec![],
        };
        let result = TransitGraph::new(&input, None);
        assert!(matches!(result, Err(NetworkError::TooFewStations(1))));
    }

    #[test]
    fn test_invalid_coordinates() {
        let mut far = station("b", 0.01);
        far.lat = 91.0;
        let input = NetworkInput {
            stations: vec![station("a", 0.0), far],
            lines: vec![line("red", &["a", "b"])],
            travel_times: vec![obs("a", "b", 2.0)],
        };
        let result = TransitGraph::new(&input, None);
        assert!(matches!(result, Err(NetworkError::InvalidCoordinates(id, _, _)) if id == "b"));

        let input = NetworkInput {
            stations: vec![station("a", f64::NAN), station("b", 0.01)],
            lines: vec![line("red", &["a", "b"])],
            travel_times: vec![obs("a", "b", 2.0)],
        };
        let result = TransitGraph::new(&input, None);
        assert!(matches!(result, Err(NetworkError::InvalidCoordinates(id, _, _)) if id == "a"));
    }

    #[test]
    fn test_repeated_stop_collapses() {
        let input = NetworkInput {
            stations: vec![station("a", 0.0), station("b", 0.01)],
            lines: vec![line("red", &["a", "a", "b"])],
            travel_times: vec![obs("a", "b", 1.5)],
        };
        let graph = TransitGraph::new(&input, None).expect("graph should build");
        assert_eq!(graph.lines()[0].stations, vec![StationIndex(0), StationIndex(1)]);
    }
}
