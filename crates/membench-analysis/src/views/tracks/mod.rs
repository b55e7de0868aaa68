//! Cross-track ("parallel benchmarks") view.
//!
//! Every track has its own result shape. Each adapter picks its most complete
//! file, normalizes it into uniform rows, and the view concatenates them.
//! Tracks are independent, so they load concurrently.

pub mod adapters;
pub mod format;

use std::collections::BTreeSet;

use rayon::prelude::*;
use serde::Serialize;

use membench_core::errors::DiscoveryError;
use membench_core::types::{ParallelBenchmarkRow, TrackKind};
use membench_core::{IResultSource, ViewError};

use crate::selection::{select_best_parsed, Selected};

use super::collate::locale_cmp;

pub use adapters::{TrackAdapter, TRACK_ADAPTERS};
pub use format::{format_fraction, format_pass_fail};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSource {
    pub track: String,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSummary {
    pub industry_rows: usize,
    pub internal_rows: usize,
    /// Distinct tracks that contributed at least one row.
    pub tracks: usize,
    pub passed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelBenchmarks {
    pub rows: Vec<ParallelBenchmarkRow>,
    pub summary: TrackSummary,
    pub sources: Vec<TrackSource>,
}

/// Sort rows by kind, track, then strategy (names in locale order) and summarize them.
pub fn build_parallel_benchmarks(
    mut rows: Vec<ParallelBenchmarkRow>,
) -> Result<(Vec<ParallelBenchmarkRow>, TrackSummary), ViewError> {
    if rows.is_empty() {
        return Err(ViewError::no_data("parallel benchmark"));
    }

    rows.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| locale_cmp(&a.track, &b.track))
            .then_with(|| locale_cmp(&a.strategy, &b.strategy))
    });

    let of_kind = |kind: TrackKind| rows.iter().filter(|r| r.kind == kind).count();
    let summary = TrackSummary {
        industry_rows: of_kind(TrackKind::Industry),
        internal_rows: of_kind(TrackKind::Internal),
        tracks: rows
            .iter()
            .map(|r| r.track.as_str())
            .collect::<BTreeSet<_>>()
            .len(),
        passed: rows.iter().filter(|r| r.passed).count(),
    };
    Ok((rows, summary))
}

/// Load one track: its best file by normalized row count, if any.
fn load_track(
    source: &dyn IResultSource,
    adapter: &TrackAdapter,
) -> Result<Option<Selected<Vec<ParallelBenchmarkRow>>>, DiscoveryError> {
    let best = select_best_parsed(
        source,
        adapter.prefix,
        |value| adapter.normalize(value),
        |rows| rows.len() as f64,
    )?;
    Ok(best.filter(|s| !s.data.is_empty()))
}

pub fn parallel_benchmarks(source: &dyn IResultSource) -> Result<ParallelBenchmarks, ViewError> {
    let loaded: Vec<(&TrackAdapter, Option<Selected<Vec<ParallelBenchmarkRow>>>)> = TRACK_ADAPTERS
        .par_iter()
        .map(|adapter| load_track(source, adapter).map(|best| (adapter, best)))
        .collect::<Result<_, DiscoveryError>>()?;

    let mut rows = Vec::new();
    let mut sources = Vec::new();
    for (adapter, best) in loaded {
        match best {
            Some(selected) => {
                sources.push(TrackSource {
                    track: adapter.track.to_string(),
                    file: selected.file,
                });
                rows.extend(selected.data);
            }
            None => tracing::debug!(track = adapter.track, "no results for track"),
        }
    }

    let (rows, summary) = build_parallel_benchmarks(rows)?;
    tracing::debug!(
        rows = rows.len(),
        tracks = summary.tracks,
        "built parallel benchmarks"
    );
    Ok(ParallelBenchmarks {
        rows,
        summary,
        sources,
    })
}
