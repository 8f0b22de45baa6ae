use clap::{Args, Parser, Subcommand};
use itertools::Itertools;

use super::{
    network_source, output_writer::filenames, AccessibilityRow, BaselineRow, FriRow,
    OutputWriter, RemovedStationsRow, ResilienceAppError, ScenarioRow,
};
use crate::{
    config::ResilienceConfiguration,
    model::{
        accessibility::accessibility_ops,
        disruption::disruption_ops,
        network::{GraphSnapshot, TransitGraph},
        topology::{topology_ops, TopologyContext},
    },
};

/// command line tool for topology, disruption and accessibility analysis of rail transit networks
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ResilienceApp {
    #[command(subcommand)]
    pub op: ResilienceOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ResilienceOperation {
    /// compute the topology indicators of the intact network
    Baseline(RunArguments),
    /// simulate station removals and summarize failure resilience
    Disruption(RunArguments),
    /// compute time-bounded reachability and accessibility metrics
    Accessibility(RunArguments),
    /// run the baseline, disruption and accessibility analyses
    Run(RunArguments),
}

#[derive(Debug, Clone, Args)]
pub struct RunArguments {
    #[arg(long, help = "path to the network document (.json or .json.gz)")]
    pub network_file: String,
    #[arg(long, help = "path to the run configuration (.toml or .json)")]
    pub configuration_file: String,
    #[arg(long, help = "output path for result files")]
    pub output_directory: String,
    #[arg(long, default_value_t = false, help = "gzip the result files")]
    pub compress: bool,
    #[arg(long, default_value_t = false, help = "replace existing result files")]
    pub overwrite: bool,
}

impl ResilienceOperation {
    pub fn arguments(&self) -> &RunArguments {
        match self {
            ResilienceOperation::Baseline(args) => args,
            ResilienceOperation::Disruption(args) => args,
            ResilienceOperation::Accessibility(args) => args,
            ResilienceOperation::Run(args) => args,
        }
    }

    pub fn run(&self) -> Result<(), ResilienceAppError> {
        let args = self.arguments();
        let config = ResilienceConfiguration::try_from(&args.configuration_file)?;
        let input = network_source::read_network_document(&args.network_file)?;
        let graph = TransitGraph::new(&input, config.network.fallback_speed_kmh)?;
        let writer = OutputWriter::new(&args.output_directory, args.compress, args.overwrite)?;
        match self {
            ResilienceOperation::Baseline(_) => run_baseline(&graph, &config, &writer),
            ResilienceOperation::Disruption(_) => run_disruption(&graph, &config, &writer),
            ResilienceOperation::Accessibility(_) => run_accessibility(&graph, &config, &writer),
            ResilienceOperation::Run(_) => {
                run_disruption(&graph, &config, &writer)?;
                run_accessibility(&graph, &config, &writer)
            }
        }
    }
}

fn run_baseline(
    graph: &TransitGraph,
    config: &ResilienceConfiguration,
    writer: &OutputWriter,
) -> Result<(), ResilienceAppError> {
    let context = TopologyContext::new(graph, &config.network, &config.topology)?;
    let baseline = topology_ops::compute_indicators(&GraphSnapshot::full(graph), &context)?;
    log::info!(
        "baseline Bpc {:.3} (transfers), {:.3} (trains)",
        baseline.boardings.transfers,
        baseline.boardings.trains
    );
    writer.write_records(filenames::BASELINE_INDICATORS, &[BaselineRow::from(&baseline)])?;
    Ok(())
}

/// the disruption report carries the baseline, so the baseline indicators
/// are written here too.
fn run_disruption(
    graph: &TransitGraph,
    config: &ResilienceConfiguration,
    writer: &OutputWriter,
) -> Result<(), ResilienceAppError> {
    let context = TopologyContext::new(graph, &config.network, &config.topology)?;
    let report = disruption_ops::run_disruption(graph, &context, &config.disruption)?;
    let scenario_rows = report.results.iter().map(ScenarioRow::from).collect_vec();
    let removed_rows = report
        .results
        .iter()
        .map(|r| RemovedStationsRow::new(&r.scenario, graph))
        .collect::<Result<Vec<_>, _>>()?;
    let fri_rows = report.summary.iter().map(FriRow::from).collect_vec();
    writer.write_records(
        filenames::BASELINE_INDICATORS,
        &[BaselineRow::from(&report.baseline)],
    )?;
    writer.write_records(filenames::DISRUPTION_SCENARIOS, &scenario_rows)?;
    writer.write_records(filenames::REMOVED_STATIONS, &removed_rows)?;
    writer.write_records(filenames::FRI_SUMMARY, &fri_rows)?;
    Ok(())
}

fn run_accessibility(
    graph: &TransitGraph,
    config: &ResilienceConfiguration,
    writer: &OutputWriter,
) -> Result<(), ResilienceAppError> {
    let records =
        accessibility_ops::analyze_accessibility(graph, &config.network, &config.accessibility)?;
    let rows = records.iter().map(AccessibilityRow::from).collect_vec();
    writer.write_records(filenames::ACCESSIBILITY, &rows)?;
    Ok(())
}
