//! Cost vs accuracy per strategy, with the Pareto frontier.

use serde::Serialize;

use membench_core::types::BenchmarkEntry;
use membench_core::{IResultSource, ViewError};

use super::numeric::{round_cost, round_int};
use super::stats::group_by_strategy;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAccuracyPoint {
    pub strategy: String,
    /// Percentage, one decimal.
    pub accuracy: f64,
    pub total_cost_usd: f64,
    pub avg_tokens: i64,
    pub avg_latency_ms: i64,
    pub on_frontier: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAccuracy {
    pub source: String,
    /// Cheapest first.
    pub points: Vec<CostAccuracyPoint>,
    /// The frontier subset of `points`, cheapest first; accuracy strictly increases.
    pub frontier: Vec<CostAccuracyPoint>,
}

/// Mark frontier points in cost-sorted input.
///
/// Sweeping left to right, a point joins the frontier only when its accuracy is
/// strictly greater than every cheaper point's. Equal accuracy does not re-enter.
pub fn mark_frontier(points: &mut [CostAccuracyPoint]) {
    let mut best = f64::NEG_INFINITY;
    for point in points.iter_mut() {
        point.on_frontier = point.accuracy > best;
        if point.on_frontier {
            best = point.accuracy;
        }
    }
}

pub fn build_cost_accuracy(
    entries: &[BenchmarkEntry],
) -> Result<(Vec<CostAccuracyPoint>, Vec<CostAccuracyPoint>), ViewError> {
    if entries.is_empty() {
        return Err(ViewError::no_data("benchmark"));
    }
    let mut points: Vec<CostAccuracyPoint> = group_by_strategy(entries)
        .into_iter()
        .map(|g| CostAccuracyPoint {
            accuracy: g.accuracy_percentage(),
            total_cost_usd: round_cost(g.cost_usd),
            avg_tokens: round_int(g.mean_input_tokens()),
            avg_latency_ms: round_int(g.mean_latency_ms()),
            on_frontier: false,
            strategy: g.strategy,
        })
        .collect();
    points.sort_by(|a, b| a.total_cost_usd.total_cmp(&b.total_cost_usd));
    mark_frontier(&mut points);
    let frontier = points.iter().filter(|p| p.on_frontier).cloned().collect();
    Ok((points, frontier))
}

pub fn cost_accuracy(source: &dyn IResultSource) -> Result<CostAccuracy, ViewError> {
    let run = super::load_benchmark(source)?;
    let (points, frontier) = build_cost_accuracy(&run.data)?;
    tracing::debug!(points = points.len(), frontier = frontier.len(), "built cost/accuracy frontier");
    Ok(CostAccuracy {
        source: run.file,
        points,
        frontier,
    })
}
