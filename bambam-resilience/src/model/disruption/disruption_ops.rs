use std::sync::{Arc, Mutex};

use itertools::Itertools;
use kdam::{tqdm, Bar, BarExt};
use rand::{rngs::StdRng, seq::index, SeedableRng};
use rayon::prelude::*;

use super::{
    centrality_ops, CentralityMeasure, DisruptionReport, DisruptionScenario, Fragmentation,
    FriSummary, RemovalStrategy, ScenarioResult,
};
use crate::{
    config::DisruptionConfig,
    model::{
        network::{GraphSnapshot, NetworkError, StationIndex, TransitGraph},
        topology::{topology_ops, TopologyContext, TopologyIndicators},
    },
};

/// runs every configured disruption scenario against the intact network.
///
/// # Arguments
///
/// * `graph` - the intact network, shared read-only by every scenario
/// * `context` - values fixed by the intact network
/// * `config` - scenarios to simulate
///
/// # Returns
///
/// the baseline indicators, one result per scenario and the resilience indices
pub fn run_disruption(
    graph: &TransitGraph,
    context: &TopologyContext,
    config: &DisruptionConfig,
) -> Result<DisruptionReport, NetworkError> {
    let baseline = topology_ops::compute_indicators(&GraphSnapshot::full(graph), context)?;
    let mut scenarios = random_scenarios(graph, config);
    scenarios.extend(targeted_scenarios(graph, CentralityMeasure::Degree, config));
    scenarios.extend(targeted_scenarios(
        graph,
        CentralityMeasure::Betweenness,
        config,
    ));
    log::info!(
        "scoring {} disruption scenarios on a network of {} stations",
        scenarios.len(),
        graph.n_stations()
    );

    let results = score_scenarios(graph, scenarios, &baseline, context, config.parallelize)?;
    let summary = FriSummary::summarize(&results);
    for s in summary.iter() {
        log::info!(
            "FRI {}: {:.4} (transfers), {:.4} (trains) over {} scenarios",
            s.category,
            s.fri.transfers,
            s.fri.trains,
            s.n_scenarios
        );
    }
    Ok(DisruptionReport {
        baseline,
        results,
        summary,
    })
}

/// draws every random removal set up front from a single seeded generator,
/// fraction by fraction and trial by trial.
pub fn random_scenarios(graph: &TransitGraph, config: &DisruptionConfig) -> Vec<DisruptionScenario> {
    let n_stations = graph.n_stations();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut scenarios: Vec<DisruptionScenario> = Vec::new();
    for fraction in config.random_fractions.iter() {
        let count = ((fraction * n_stations as f64).floor() as usize).min(n_stations);
        if count == 0 {
            log::warn!(
                "random removal fraction {fraction} selects no station of {n_stations}, skipping"
            );
            continue;
        }
        for trial in 0..config.random_trials {
            let removed = index::sample(&mut rng, n_stations, count)
                .into_iter()
                .map(StationIndex)
                .sorted()
                .collect_vec();
            scenarios.push(DisruptionScenario {
                strategy: RemovalStrategy::Random,
                removal_fraction: Some(*fraction),
                trial: Some(trial),
                removed,
            });
        }
    }
    scenarios
}

/// one scenario per configured count, each removing the first `k` stations
/// of the strategy's removal sequence. counts that would remove the whole
/// network are skipped.
pub fn targeted_scenarios(
    graph: &TransitGraph,
    measure: CentralityMeasure,
    config: &DisruptionConfig,
) -> Vec<DisruptionScenario> {
    let n_stations = graph.n_stations();
    let counts = config
        .targeted_counts
        .iter()
        .copied()
        .filter(|k| {
            if *k >= n_stations {
                log::warn!(
                    "targeted removal of {k} stations would empty a network of {n_stations}, skipping"
                );
                false
            } else {
                true
            }
        })
        .collect_vec();
    let max_count = counts.iter().copied().max().unwrap_or(0);
    let sequence =
        centrality_ops::targeted_removal_sequence(graph, measure, config.ranking_mode, max_count);
    counts
        .into_iter()
        .filter_map(|k| {
            let removed = sequence.get(0..k)?.to_vec();
            Some(DisruptionScenario {
                strategy: RemovalStrategy::from(measure),
                removal_fraction: None,
                trial: None,
                removed,
            })
        })
        .collect()
}

/// scores a single scenario against the baseline.
pub fn evaluate_scenario(
    graph: &TransitGraph,
    scenario: DisruptionScenario,
    baseline: &TopologyIndicators,
    context: &TopologyContext,
) -> Result<ScenarioResult, NetworkError> {
    let snapshot = GraphSnapshot::without(graph, &scenario.removed);
    let components = snapshot.connected_components();
    let component_sizes = components.iter().map(|c| c.len()).collect_vec();
    let fragmentation = Fragmentation::new(graph.n_stations(), &component_sizes);
    let indicators =
        topology_ops::compute_indicators_of_components(&snapshot, &components, context)?;
    let pr_topology = indicators
        .boardings
        .zip_with(baseline.boardings, |disrupted, intact| {
            if intact == 0.0 {
                0.0
            } else {
                disrupted / intact
            }
        });
    let performance_ratio = pr_topology.map(|pr| pr * fragmentation.size_penalty);
    Ok(ScenarioResult {
        scenario,
        indicators,
        fragmentation,
        pr_topology,
        performance_ratio,
    })
}

fn score_scenarios(
    graph: &TransitGraph,
    scenarios: Vec<DisruptionScenario>,
    baseline: &TopologyIndicators,
    context: &TopologyContext,
    parallelize: bool,
) -> Result<Vec<ScenarioResult>, NetworkError> {
    let total = scenarios.len();
    if !parallelize {
        return tqdm!(
            scenarios.into_iter(),
            desc = "score disruption scenarios",
            total = total
        )
        .map(|s| evaluate_scenario(graph, s, baseline, context))
        .collect();
    }

    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("score disruption scenarios")
            .total(total)
            .build()
            .map_err(NetworkError::InternalError)?,
    ));
    let results = scenarios
        .into_par_iter()
        .map(|s| {
            if let Ok(mut bar) = bar.clone().lock() {
                let _ = bar.update(1);
            }
            evaluate_scenario(graph, s, baseline, context)
        })
        .collect::<Result<Vec<_>, _>>();
    eprintln!();
    results
}
