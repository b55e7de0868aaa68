//! Scenarios ranked hardest first, with the strategies that failed each.

use serde::Serialize;

use membench_core::types::BenchmarkEntry;
use membench_core::{IResultSource, ViewError};

use super::numeric::percentage;
use super::stats::pass_counts;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDifficultyRow {
    pub scenario: String,
    pub passed: u64,
    pub total: u64,
    pub accuracy: f64,
    pub failed_strategies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDifficulty {
    pub source: String,
    pub scenarios: Vec<ScenarioDifficultyRow>,
}

pub fn build_scenario_difficulty(
    entries: &[BenchmarkEntry],
) -> Result<Vec<ScenarioDifficultyRow>, ViewError> {
    if entries.is_empty() {
        return Err(ViewError::no_data("benchmark"));
    }
    let mut rows: Vec<ScenarioDifficultyRow> =
        pass_counts(entries, |e| e.scenario_name.as_str(), |e| e.strategy_name.as_str())
            .into_iter()
            .map(|c| ScenarioDifficultyRow {
                accuracy: percentage(c.passed as f64, c.total as f64),
                scenario: c.name,
                passed: c.passed,
                total: c.total,
                failed_strategies: c.failed,
            })
            .collect();
    rows.sort_by(|a, b| a.accuracy.total_cmp(&b.accuracy));
    Ok(rows)
}

pub fn scenario_difficulty(source: &dyn IResultSource) -> Result<ScenarioDifficulty, ViewError> {
    let run = super::load_benchmark(source)?;
    let scenarios = build_scenario_difficulty(&run.data)?;
    Ok(ScenarioDifficulty {
        source: run.file,
        scenarios,
    })
}
