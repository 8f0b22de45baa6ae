//! synthetic rail networks shared by unit tests.
use crate::model::network::{
    LineInput, NetworkInput, StationInput, TransitGraph, TravelTimeObservation,
};
use itertools::Itertools;

fn station(id: &str, lon: f64, lat: f64) -> StationInput {
    StationInput {
        id: String::from(id),
        name: Some(format!("Station {id}")),
        lon,
        lat,
        lines: vec![],
    }
}

fn line(id: &str, stations: &[String]) -> LineInput {
    LineInput {
        id: String::from(id),
        stations: stations.to_vec(),
    }
}

/// one observation per consecutive pair of every line, at a fixed time.
fn observations(lines: &[LineInput], minutes: f64) -> Vec<TravelTimeObservation> {
    lines
        .iter()
        .flat_map(|l| {
            l.stations
                .iter()
                .tuple_windows()
                .map(|(a, b)| TravelTimeObservation {
                    from: a.clone(),
                    to: b.clone(),
                    minutes,
                })
                .collect_vec()
        })
        .collect()
}

fn build(stations: Vec<StationInput>, lines: Vec<LineInput>, minutes: f64) -> TransitGraph {
    let travel_times = observations(&lines, minutes);
    let input = NetworkInput {
        stations,
        lines,
        travel_times,
    };
    TransitGraph::new(&input, None).expect("test network should be valid")
}

/// the network document for a single line of `n` stations, 2 minutes apart.
pub fn linear_input(n: usize) -> NetworkInput {
    let ids = (0..n).map(|i| format!("s{i}")).collect_vec();
    let stations = ids
        .iter()
        .enumerate()
        .map(|(i, id)| station(id, i as f64 * 0.01, 0.0))
        .collect_vec();
    let lines = vec![line("main", &ids)];
    let travel_times = observations(&lines, 2.0);
    NetworkInput {
        stations,
        lines,
        travel_times,
    }
}

/// a single line of `n` stations `s0..s{n-1}` laid out west to east.
pub fn linear(n: usize) -> TransitGraph {
    TransitGraph::new(&linear_input(n), None).expect("test network should be valid")
}

/// two 5-station lines crossing at hub `x`.
///
/// ```text
///            n2
///            n1
///  w2  w1    x    e1  e2
///            s1
///            s2
/// ```
pub fn cross() -> TransitGraph {
    let coords = [
        ("n2", 0.0, 0.02),
        ("n1", 0.0, 0.01),
        ("x", 0.0, 0.0),
        ("s1", 0.0, -0.01),
        ("s2", 0.0, -0.02),
        ("w2", -0.02, 0.0),
        ("w1", -0.01, 0.0),
        ("e1", 0.01, 0.0),
        ("e2", 0.02, 0.0),
    ];
    let stations = coords
        .iter()
        .map(|(id, lon, lat)| station(id, *lon, *lat))
        .collect_vec();
    let ns = ["n2", "n1", "x", "s1", "s2"].map(String::from);
    let ew = ["w2", "w1", "x", "e1", "e2"].map(String::from);
    build(stations, vec![line("ns", &ns), line("ew", &ew)], 2.0)
}

/// a north-south line with a branch line starting at hub `x`, which is
/// therefore both a transfer and a terminal.
pub fn cross_with_branch_terminal() -> TransitGraph {
    let coords = [
        ("n2", 0.0, 0.02),
        ("n1", 0.0, 0.01),
        ("x", 0.0, 0.0),
        ("s1", 0.0, -0.01),
        ("s2", 0.0, -0.02),
        ("e1", 0.01, 0.0),
        ("e2", 0.02, 0.0),
    ];
    let stations = coords
        .iter()
        .map(|(id, lon, lat)| station(id, *lon, *lat))
        .collect_vec();
    let ns = ["n2", "n1", "x", "s1", "s2"].map(String::from);
    let branch = ["x", "e1", "e2"].map(String::from);
    build(stations, vec![line("ns", &ns), line("branch", &branch)], 2.0)
}

/// three lines joined end to end in a triangle `p → q → r → p`, each with
/// one intermediate stop. the simplified graph is a 3-cycle of transfer
/// stations with single-use edges.
pub fn triangle() -> TransitGraph {
    let coords = [
        ("p", 0.0, 0.0),
        ("a1", 0.01, 0.0),
        ("q", 0.02, 0.0),
        ("b1", 0.015, 0.01),
        ("r", 0.01, 0.02),
        ("c1", 0.005, 0.01),
    ];
    let stations = coords
        .iter()
        .map(|(id, lon, lat)| station(id, *lon, *lat))
        .collect_vec();
    let a = ["p", "a1", "q"].map(String::from);
    let b = ["q", "b1", "r"].map(String::from);
    let c = ["r", "c1", "p"].map(String::from);
    build(
        stations,
        vec![line("a", &a), line("b", &b), line("c", &c)],
        3.0,
    )
}

/// two lines sharing the trunk `x-y` (a multi-use segment) and splitting
/// at both ends.
///
/// ```text
///  a1 \            / b2
///      x ======== y
///  b1 /            \ a2
/// ```
pub fn shared_trunk() -> TransitGraph {
    let coords = [
        ("a1", 0.0, 0.01),
        ("b1", 0.0, -0.01),
        ("x", 0.01, 0.0),
        ("y", 0.02, 0.0),
        ("a2", 0.03, -0.01),
        ("b2", 0.03, 0.01),
    ];
    let stations = coords
        .iter()
        .map(|(id, lon, lat)| station(id, *lon, *lat))
        .collect_vec();
    let a = ["a1", "x", "y", "a2"].map(String::from);
    let b = ["b1", "x", "y", "b2"].map(String::from);
    build(stations, vec![line("a", &a), line("b", &b)], 2.0)
}

/// a `width` x `height` lattice where every row and every column is a line.
/// station `g{row}_{col}` has index `row * width + col`.
pub fn grid(width: usize, height: usize) -> TransitGraph {
    let id = |r: usize, c: usize| format!("g{r}_{c}");
    let stations = (0..height)
        .cartesian_product(0..width)
        .map(|(r, c)| station(&id(r, c), c as f64 * 0.01, r as f64 * 0.01))
        .collect_vec();
    let rows = (0..height).map(|r| {
        let ids = (0..width).map(|c| id(r, c)).collect_vec();
        line(&format!("row{r}"), &ids)
    });
    let cols = (0..width).map(|c| {
        let ids = (0..height).map(|r| id(r, c)).collect_vec();
        line(&format!("col{c}"), &ids)
    });
    build(stations, rows.chain(cols).collect_vec(), 2.0)
}
