//! Benchmark run parser.

use serde_json::Value;

use membench_core::types::{BenchmarkEntry, BenchmarkStep};

use super::coerce;

/// Collection key when the runs are wrapped in an object.
pub const RESULTS_KEY: &str = "results";

/// Parse benchmark entries. Entries without a strategy or scenario name are dropped.
pub fn parse_benchmark(value: &Value) -> Vec<BenchmarkEntry> {
    coerce::objects(value, RESULTS_KEY)
        .filter_map(|row| {
            let strategy_name = coerce::string(row, "strategyName");
            let scenario_name = coerce::string(row, "scenarioName");
            if strategy_name.is_empty() || scenario_name.is_empty() {
                return None;
            }
            let steps = coerce::nested_objects(row, "steps")
                .map(|step| BenchmarkStep {
                    step: coerce::count(step, "step"),
                    input_tokens: coerce::count(step, "inputTokens"),
                    output_tokens: coerce::count(step, "outputTokens"),
                    memory_overhead_tokens: coerce::count(step, "memoryOverheadTokens"),
                    latency_ms: coerce::number(step, "latencyMs"),
                })
                .collect();
            Some(BenchmarkEntry {
                strategy_name,
                scenario_name,
                correct: coerce::flag(row, "correct"),
                total_input_tokens: coerce::count(row, "totalInputTokens"),
                total_overhead_tokens: coerce::count(row, "totalOverheadTokens"),
                total_latency_ms: coerce::number(row, "totalLatencyMs"),
                estimated_cost_usd: coerce::number(row, "estimatedCostUsd"),
                steps,
            })
        })
        .collect()
}
