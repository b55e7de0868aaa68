//! Per-step token, overhead and latency series for one scenario.

use serde::Serialize;

use membench_core::types::BenchmarkEntry;
use membench_core::{IResultSource, ViewError};

use super::numeric::{round_cost, round_int};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepPoint {
    pub step: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub memory_overhead_tokens: u64,
    pub latency_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySteps {
    pub strategy: String,
    pub correct: bool,
    pub estimated_cost_usd: f64,
    pub steps: Vec<StepPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCostView {
    pub source: String,
    /// The scenario actually shown.
    pub scenario: String,
    /// Every scenario in the run, ascending.
    pub scenarios: Vec<String>,
    pub strategies: Vec<StrategySteps>,
}

/// Distinct scenario names, sorted ascending.
pub fn scenario_names(entries: &[BenchmarkEntry]) -> Vec<String> {
    let mut names: Vec<String> = entries.iter().map(|e| e.scenario_name.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Resolve the requested scenario. Absent or unknown names fall back to the
/// first scenario in ascending order, not the first one in file order.
pub fn resolve_scenario<'a>(scenarios: &'a [String], requested: Option<&str>) -> Option<&'a str> {
    requested
        .and_then(|r| scenarios.iter().find(|s| s.as_str() == r))
        .or_else(|| scenarios.first())
        .map(String::as_str)
}

pub fn build_token_cost(
    entries: &[BenchmarkEntry],
    requested: Option<&str>,
) -> Result<(String, Vec<String>, Vec<StrategySteps>), ViewError> {
    let scenarios = scenario_names(entries);
    let scenario = resolve_scenario(&scenarios, requested)
        .ok_or_else(|| ViewError::no_data("benchmark"))?
        .to_string();

    let strategies = entries
        .iter()
        .filter(|e| e.scenario_name == scenario)
        .map(|e| StrategySteps {
            strategy: e.strategy_name.clone(),
            correct: e.correct,
            estimated_cost_usd: round_cost(e.estimated_cost_usd),
            steps: e
                .steps
                .iter()
                .map(|s| StepPoint {
                    step: s.step,
                    input_tokens: s.input_tokens,
                    output_tokens: s.output_tokens,
                    memory_overhead_tokens: s.memory_overhead_tokens,
                    latency_ms: round_int(s.latency_ms),
                })
                .collect(),
        })
        .collect();

    Ok((scenario, scenarios, strategies))
}

pub fn token_cost(
    source: &dyn IResultSource,
    requested: Option<&str>,
) -> Result<TokenCostView, ViewError> {
    let run = super::load_benchmark(source)?;
    if let Some(r) = requested {
        if !run.data.iter().any(|e| e.scenario_name == r) {
            tracing::debug!(requested = r, "unknown scenario, falling back to first");
        }
    }
    let (scenario, scenarios, strategies) = build_token_cost(&run.data, requested)?;
    Ok(TokenCostView {
        source: run.file,
        scenario,
        scenarios,
        strategies,
    })
}
