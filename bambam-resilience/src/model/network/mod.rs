mod graph_snapshot;
mod line;
mod network_error;
mod network_input;
pub mod network_ops;
mod search;
mod segment;
mod simplified_graph;
mod station;
mod station_role;
mod transit_graph;

pub use graph_snapshot::GraphSnapshot;
pub use line::{Line, LineIndex, LineRun};
pub use network_error::NetworkError;
pub use network_input::{LineInput, NetworkInput, StationInput, TravelTimeObservation};
pub use search::{bfs_undirected, largest_component};
pub use segment::{Segment, SegmentIndex};
pub use simplified_graph::{SimplifiedEdge, SimplifiedGraph};
pub use station::{Station, StationIndex};
pub use station_role::{derive_station_roles, StationRole};
pub use transit_graph::TransitGraph;
