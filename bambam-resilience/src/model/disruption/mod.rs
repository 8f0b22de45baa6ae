mod centrality_measure;
pub mod centrality_ops;
mod disruption_report;
mod disruption_scenario;
pub mod disruption_ops;
mod fragmentation;
mod fri_summary;
mod ranking_mode;
mod removal_strategy;
mod scenario_result;

pub use centrality_measure::CentralityMeasure;
pub use disruption_report::DisruptionReport;
pub use disruption_scenario::DisruptionScenario;
pub use fragmentation::Fragmentation;
pub use fri_summary::FriSummary;
pub use ranking_mode::RankingMode;
pub use removal_strategy::RemovalStrategy;
pub use scenario_result::ScenarioResult;
