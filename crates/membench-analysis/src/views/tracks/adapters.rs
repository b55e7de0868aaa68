//! Track adapters: each normalizes one benchmark's own result shape into
//! `ParallelBenchmarkRow`s. Rows without a strategy name are dropped.

use std::fmt;

use serde_json::{Map, Value};

use membench_core::constants::{
    CROSS_SESSION_PREFIX, FRACTION_PASS_THRESHOLD_PCT, INTERNAL_RETENTION_PREFIX, LOCOMO_PREFIX,
    LONGMEMEVAL_PREFIX, MEMORY_AGENT_BENCH_PREFIX, MULTI_HOP_PREFIX, NIAH_PREFIX,
    TOOL_STATE_PREFIX,
};
use membench_core::types::{ParallelBenchmarkRow, TrackKind};

use crate::parsers::coerce;

use super::super::numeric::{mean, percentage, round1, round_cost};
use super::format::{format_fraction, format_pass_fail};

type Object = Map<String, Value>;

/// One external or internal benchmark track.
#[derive(Clone, Copy)]
pub struct TrackAdapter {
    pub track: &'static str,
    pub kind: TrackKind,
    pub prefix: &'static str,
    pub normalize: fn(&TrackAdapter, &Value) -> Vec<ParallelBenchmarkRow>,
}

pub const TRACK_ADAPTERS: &[TrackAdapter] = &[
    TrackAdapter {
        track: "LongMemEval",
        kind: TrackKind::Industry,
        prefix: LONGMEMEVAL_PREFIX,
        normalize: normalize_longmemeval,
    },
    TrackAdapter {
        track: "LoCoMo",
        kind: TrackKind::Industry,
        prefix: LOCOMO_PREFIX,
        normalize: normalize_locomo,
    },
    TrackAdapter {
        track: "NIAH",
        kind: TrackKind::Industry,
        prefix: NIAH_PREFIX,
        normalize: normalize_niah,
    },
    TrackAdapter {
        track: "MemoryAgentBench",
        kind: TrackKind::Industry,
        prefix: MEMORY_AGENT_BENCH_PREFIX,
        normalize: normalize_memory_agent_bench,
    },
    TrackAdapter {
        track: "Probe Retention",
        kind: TrackKind::Internal,
        prefix: INTERNAL_RETENTION_PREFIX,
        normalize: normalize_internal_retention,
    },
    TrackAdapter {
        track: "Cross-Session",
        kind: TrackKind::Internal,
        prefix: CROSS_SESSION_PREFIX,
        normalize: normalize_cross_session,
    },
    TrackAdapter {
        track: "Tool State",
        kind: TrackKind::Internal,
        prefix: TOOL_STATE_PREFIX,
        normalize: normalize_tool_state,
    },
    TrackAdapter {
        track: "Multi-Hop",
        kind: TrackKind::Internal,
        prefix: MULTI_HOP_PREFIX,
        normalize: normalize_multi_hop,
    },
];

impl fmt::Debug for TrackAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackAdapter")
            .field("track", &self.track)
            .field("kind", &self.kind)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl TrackAdapter {
    pub fn normalize(&self, value: &Value) -> Vec<ParallelBenchmarkRow> {
        (self.normalize)(self, value)
    }

    /// Row for a fraction-scored track; passes at or above the threshold.
    fn fraction_row(
        &self,
        strategy: String,
        numerator: u64,
        denominator: u64,
        latency_ms: f64,
        cost_usd: f64,
    ) -> ParallelBenchmarkRow {
        let pct = percentage(numerator as f64, denominator as f64);
        ParallelBenchmarkRow {
            track: self.track.to_string(),
            kind: self.kind,
            strategy,
            score: format_fraction(numerator, denominator),
            passed: pct >= FRACTION_PASS_THRESHOLD_PCT,
            mean_latency_ms: round1(latency_ms),
            cost_usd: round_cost(cost_usd),
        }
    }

    fn pass_fail_row(
        &self,
        strategy: String,
        passed: bool,
        matched: u64,
        total: u64,
        latency_ms: f64,
        cost_usd: f64,
    ) -> ParallelBenchmarkRow {
        ParallelBenchmarkRow {
            track: self.track.to_string(),
            kind: self.kind,
            strategy,
            score: format_pass_fail(passed, matched, total),
            passed,
            mean_latency_ms: round1(latency_ms),
            cost_usd: round_cost(cost_usd),
        }
    }
}

/// Object rows of `value` under `key` that carry a non-empty `name_key`.
fn named_rows<'a>(
    value: &'a Value,
    key: &'a str,
    name_key: &'a str,
) -> impl Iterator<Item = (String, &'a Object)> + 'a {
    coerce::objects(value, key).filter_map(move |row| {
        let name = coerce::string(row, name_key);
        (!name.is_empty()).then_some((name, row))
    })
}

/// `strategies[]` with per-question results.
fn normalize_longmemeval(adapter: &TrackAdapter, value: &Value) -> Vec<ParallelBenchmarkRow> {
    named_rows(value, "strategies", "strategy")
        .map(|(strategy, row)| {
            let questions: Vec<&Object> = coerce::nested_objects(row, "questions").collect();
            let correct = questions.iter().filter(|q| coerce::flag(q, "correct")).count() as u64;
            let latency: f64 = questions.iter().map(|q| coerce::number(q, "latencyMs")).sum();
            let cost: f64 = questions.iter().map(|q| coerce::number(q, "costUsd")).sum();
            adapter.fraction_row(
                strategy,
                correct,
                questions.len() as u64,
                mean(latency, questions.len()),
                cost,
            )
        })
        .collect()
}

fn normalize_locomo(adapter: &TrackAdapter, value: &Value) -> Vec<ParallelBenchmarkRow> {
    named_rows(value, "results", "strategyName")
        .map(|(strategy, row)| {
            adapter.fraction_row(
                strategy,
                coerce::count(row, "questionsCorrect"),
                coerce::count(row, "questionsTotal"),
                coerce::number(row, "meanLatencyMs"),
                coerce::number(row, "totalCostUsd"),
            )
        })
        .collect()
}

fn normalize_niah(adapter: &TrackAdapter, value: &Value) -> Vec<ParallelBenchmarkRow> {
    named_rows(value, "runs", "strategy")
        .map(|(strategy, row)| {
            adapter.fraction_row(
                strategy,
                coerce::count(row, "needlesFound"),
                coerce::count(row, "needlesTotal"),
                coerce::number(row, "latencyMs"),
                coerce::number(row, "costUsd"),
            )
        })
        .collect()
}

fn normalize_memory_agent_bench(
    adapter: &TrackAdapter,
    value: &Value,
) -> Vec<ParallelBenchmarkRow> {
    named_rows(value, "results", "strategy")
        .map(|(strategy, row)| {
            adapter.pass_fail_row(
                strategy,
                coerce::flag(row, "passed"),
                coerce::count(row, "matched"),
                coerce::count(row, "total"),
                coerce::number(row, "latencyMs"),
                coerce::number(row, "costUsd"),
            )
        })
        .collect()
}

fn normalize_internal_retention(
    adapter: &TrackAdapter,
    value: &Value,
) -> Vec<ParallelBenchmarkRow> {
    named_rows(value, "strategies", "name")
        .map(|(strategy, row)| {
            adapter.fraction_row(
                strategy,
                coerce::count(row, "retained"),
                coerce::count(row, "probes"),
                coerce::number(row, "avgLatencyMs"),
                coerce::number(row, "costUsd"),
            )
        })
        .collect()
}

fn normalize_cross_session(adapter: &TrackAdapter, value: &Value) -> Vec<ParallelBenchmarkRow> {
    named_rows(value, "results", "strategy")
        .map(|(strategy, row)| {
            adapter.pass_fail_row(
                strategy,
                coerce::flag(row, "pass"),
                coerce::count(row, "recalled"),
                coerce::count(row, "expected"),
                coerce::number(row, "latencyMs"),
                coerce::number(row, "cost"),
            )
        })
        .collect()
}

/// `results[]` with per-task outcomes.
fn normalize_tool_state(adapter: &TrackAdapter, value: &Value) -> Vec<ParallelBenchmarkRow> {
    named_rows(value, "results", "strategy")
        .map(|(strategy, row)| {
            let tasks: Vec<&Object> = coerce::nested_objects(row, "tasks").collect();
            let succeeded = tasks.iter().filter(|t| coerce::flag(t, "success")).count() as u64;
            let latency: f64 = tasks.iter().map(|t| coerce::number(t, "latencyMs")).sum();
            let cost: f64 = tasks.iter().map(|t| coerce::number(t, "costUsd")).sum();
            adapter.fraction_row(
                strategy,
                succeeded,
                tasks.len() as u64,
                mean(latency, tasks.len()),
                cost,
            )
        })
        .collect()
}

/// Passes only when every chain resolved.
fn normalize_multi_hop(adapter: &TrackAdapter, value: &Value) -> Vec<ParallelBenchmarkRow> {
    named_rows(value, "results", "strategy")
        .map(|(strategy, row)| {
            let resolved = coerce::count(row, "chainsResolved");
            let total = coerce::count(row, "chainsTotal");
            adapter.pass_fail_row(
                strategy,
                total > 0 && resolved == total,
                resolved,
                total,
                coerce::number(row, "latencyMs"),
                coerce::number(row, "costUsd"),
            )
        })
        .collect()
}
