mod accessibility_row;
mod baseline_row;
mod fri_row;
pub mod network_source;
pub mod output_writer;
mod removed_stations_row;
mod resilience_app;
mod resilience_app_error;
mod scenario_row;

pub use accessibility_row::AccessibilityRow;
pub use baseline_row::BaselineRow;
pub use fri_row::FriRow;
pub use output_writer::OutputWriter;
pub use removed_stations_row::RemovedStationsRow;
pub use resilience_app::{ResilienceApp, ResilienceOperation, RunArguments};
pub use resilience_app_error::ResilienceAppError;
pub use scenario_row::ScenarioRow;
