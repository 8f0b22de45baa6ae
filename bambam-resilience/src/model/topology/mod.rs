mod boardings_model;
mod connectivity_variant;
mod coverage_variant;
pub mod directness;
mod dual;
mod topology_context;
mod topology_indicators;
pub mod topology_ops;

pub use boardings_model::BoardingsModel;
pub use connectivity_variant::ConnectivityVariant;
pub use coverage_variant::CoverageVariant;
pub use directness::Directness;
pub use dual::Dual;
pub use topology_context::TopologyContext;
pub use topology_indicators::TopologyIndicators;
