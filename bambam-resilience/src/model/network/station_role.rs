use std::collections::{BTreeSet, HashMap};

use super::{LineIndex, LineRun, StationIndex};

/// structural role of a station, derived from the line runs serving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRole {
    /// lines with an in-service run through this station
    pub lines: BTreeSet<LineIndex>,
    /// first or last station of at least one run
    pub is_terminal: bool,
}

impl StationRole {
    pub fn is_transfer(&self) -> bool {
        self.lines.len() >= 2
    }

    /// transfer and terminal stations are the vertices of the simplified graph.
    pub fn is_special(&self) -> bool {
        self.is_transfer() || self.is_terminal
    }
}

/// derives station roles from a set of line runs. roles are never cached
/// across disruptions; they are derived again for every snapshot.
pub fn derive_station_roles(runs: &[LineRun]) -> HashMap<StationIndex, StationRole> {
    let mut roles: HashMap<StationIndex, StationRole> = HashMap::new();
    for run in runs.iter() {
        for station in run.stations.iter() {
            roles.entry(*station).or_default().lines.insert(run.line);
        }
        for terminal in [run.first(), run.last()].into_iter().flatten() {
            roles.entry(terminal).or_default().is_terminal = true;
        }
    }
    roles
}
