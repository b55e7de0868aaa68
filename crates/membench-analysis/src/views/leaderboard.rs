//! Strategy leaderboard: accuracy first, cheaper breaks ties.

use serde::Serialize;

use membench_core::types::BenchmarkEntry;
use membench_core::{IResultSource, ViewError};

use super::numeric::{round_cost, round_int};
use super::stats::group_by_strategy;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    /// Dense 1-based rank; rows tied on both accuracy and cost share one.
    pub rank: usize,
    pub strategy: String,
    /// `correct / total` as a ratio in `[0, 1]`.
    pub accuracy: f64,
    pub correct: u64,
    pub total: u64,
    pub avg_input_tokens: i64,
    pub avg_overhead_tokens: i64,
    pub avg_latency_ms: i64,
    pub total_cost_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub source: String,
    pub rows: Vec<LeaderboardRow>,
}

/// Rank strategies by accuracy (descending), then total cost (ascending).
pub fn build_leaderboard(entries: &[BenchmarkEntry]) -> Result<Vec<LeaderboardRow>, ViewError> {
    if entries.is_empty() {
        return Err(ViewError::no_data("benchmark"));
    }

    let mut rows: Vec<LeaderboardRow> = group_by_strategy(entries)
        .into_iter()
        .map(|g| LeaderboardRow {
            rank: 0,
            accuracy: g.accuracy(),
            correct: g.correct,
            total: g.total,
            avg_input_tokens: round_int(g.mean_input_tokens()),
            avg_overhead_tokens: round_int(g.mean_overhead_tokens()),
            avg_latency_ms: round_int(g.mean_latency_ms()),
            total_cost_usd: round_cost(g.cost_usd),
            strategy: g.strategy,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.accuracy
            .total_cmp(&a.accuracy)
            .then(a.total_cost_usd.total_cmp(&b.total_cost_usd))
    });
    let mut rank = 0;
    let mut previous: Option<(f64, f64)> = None;
    for row in rows.iter_mut() {
        let key = (row.accuracy, row.total_cost_usd);
        if previous != Some(key) {
            rank += 1;
            previous = Some(key);
        }
        row.rank = rank;
    }
    Ok(rows)
}

pub fn leaderboard(source: &dyn IResultSource) -> Result<Leaderboard, ViewError> {
    let run = super::load_benchmark(source)?;
    let rows = build_leaderboard(&run.data)?;
    tracing::debug!(file = %run.file, strategies = rows.len(), "built leaderboard");
    Ok(Leaderboard {
        source: run.file,
        rows,
    })
}
