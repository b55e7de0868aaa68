//! Strategy × scenario correctness grid with pass-rate summaries.

use serde::Serialize;

use membench_core::types::BenchmarkEntry;
use membench_core::{IResultSource, ViewError};

use super::numeric::{percentage, round_cost, round_int};
use super::stats::pass_counts;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub strategy: String,
    pub scenario: String,
    pub correct: bool,
    pub cost_usd: f64,
    pub tokens: u64,
    pub latency_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassRate {
    pub name: String,
    pub passed: u64,
    pub total: u64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioHeatmap {
    pub source: String,
    pub cells: Vec<HeatmapCell>,
    /// Highest pass rate first.
    pub strategies: Vec<PassRate>,
    pub scenarios: Vec<PassRate>,
}

fn pass_rates<K>(entries: &[BenchmarkEntry], key: K) -> Vec<PassRate>
where
    K: Fn(&BenchmarkEntry) -> &str,
{
    let mut rates: Vec<PassRate> = pass_counts(entries, key, |e| e.strategy_name.as_str())
        .into_iter()
        .map(|c| PassRate {
            accuracy: percentage(c.passed as f64, c.total as f64),
            passed: c.passed,
            total: c.total,
            name: c.name,
        })
        .collect();
    rates.sort_by(|a, b| b.accuracy.total_cmp(&a.accuracy));
    rates
}

pub fn build_scenario_heatmap(
    entries: &[BenchmarkEntry],
) -> Result<(Vec<HeatmapCell>, Vec<PassRate>, Vec<PassRate>), ViewError> {
    if entries.is_empty() {
        return Err(ViewError::no_data("benchmark"));
    }
    let cells = entries
        .iter()
        .map(|e| HeatmapCell {
            strategy: e.strategy_name.clone(),
            scenario: e.scenario_name.clone(),
            correct: e.correct,
            cost_usd: round_cost(e.estimated_cost_usd),
            tokens: e.total_input_tokens,
            latency_ms: round_int(e.total_latency_ms),
        })
        .collect();
    let strategies = pass_rates(entries, |e| e.strategy_name.as_str());
    let scenarios = pass_rates(entries, |e| e.scenario_name.as_str());
    Ok((cells, strategies, scenarios))
}

pub fn scenario_heatmap(source: &dyn IResultSource) -> Result<ScenarioHeatmap, ViewError> {
    let run = super::load_benchmark(source)?;
    let (cells, strategies, scenarios) = build_scenario_heatmap(&run.data)?;
    Ok(ScenarioHeatmap {
        source: run.file,
        cells,
        strategies,
        scenarios,
    })
}
