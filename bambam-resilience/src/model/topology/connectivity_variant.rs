use serde::{Deserialize, Serialize};

/// definitions of the connectivity indicator ρ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityVariant {
    /// weighted simplified edges per special vertex, multi-use edges counting twice
    #[default]
    EdgeCount,
    /// transfer possibilities net of multi-use edges, per transfer station
    TransferPossibility,
}

impl std::fmt::Display for ConnectivityVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectivityVariant::EdgeCount => write!(f, "edge_count"),
            ConnectivityVariant::TransferPossibility => write!(f, "transfer_possibility"),
        }
    }
}
