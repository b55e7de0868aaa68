//! View builders.
//!
//! Each view has a pure `build_*` function over parsed records and a loader
//! that discovers, parses and selects the documents it needs from an
//! `IResultSource`. Builders raise `ViewError::NoData` when their input is
//! empty and nothing else.

pub mod baseline_comparison;
pub mod code_analysis;
pub mod collate;
pub mod cost_accuracy;
pub mod depth;
pub mod difficulty;
pub mod heatmap;
pub mod leaderboard;
pub mod numeric;
pub mod retention;
pub mod stats;
pub mod token_cost;
pub mod tracks;

use membench_core::constants::BENCHMARK_PREFIX;
use membench_core::types::BenchmarkEntry;
use membench_core::{IResultSource, ViewError};

use crate::parsers::parse_benchmark;
use crate::selection::{select_best_parsed, Selected};

pub use baseline_comparison::{baseline_comparison, build_baseline_comparison, BaselineComparison};
pub use code_analysis::{build_code_analysis, code_analysis, CodeAnalysisView};
pub use cost_accuracy::{build_cost_accuracy, cost_accuracy, CostAccuracy};
pub use depth::{build_depth_comparison, depth_comparison, DepthComparison};
pub use difficulty::{build_scenario_difficulty, scenario_difficulty, ScenarioDifficulty};
pub use heatmap::{build_scenario_heatmap, scenario_heatmap, ScenarioHeatmap};
pub use leaderboard::{build_leaderboard, leaderboard, Leaderboard};
pub use retention::{
    build_retention_by_type, build_retention_curve, retention_by_type, retention_curve,
    RetentionByType, RetentionCurve,
};
pub use token_cost::{build_token_cost, token_cost, TokenCostView};
pub use tracks::{build_parallel_benchmarks, parallel_benchmarks, ParallelBenchmarks};

/// The most complete benchmark run: the file with the most well-formed entries.
pub(crate) fn load_benchmark(
    source: &dyn IResultSource,
) -> Result<Selected<Vec<BenchmarkEntry>>, ViewError> {
    select_best_parsed(source, BENCHMARK_PREFIX, parse_benchmark, |entries| {
        entries.len() as f64
    })?
    .filter(|s| !s.data.is_empty())
    .ok_or_else(|| ViewError::no_data(BENCHMARK_PREFIX))
}
