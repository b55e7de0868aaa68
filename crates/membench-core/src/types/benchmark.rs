//! Benchmark run records: one entry per (strategy, scenario) run.

use serde::Serialize;

/// One turn of a strategy run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkStep {
    pub step: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub memory_overhead_tokens: u64,
    pub latency_ms: f64,
}

/// One (strategy, scenario) run. Never constructed with an empty strategy or scenario name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkEntry {
    pub strategy_name: String,
    pub scenario_name: String,
    pub correct: bool,
    pub total_input_tokens: u64,
    pub total_overhead_tokens: u64,
    pub total_latency_ms: f64,
    pub estimated_cost_usd: f64,
    pub steps: Vec<BenchmarkStep>,
}
