//! Depth-1 vs depth-2 delegation retention, merged across every depth file.
//!
//! Unlike the other views this one does not pick a single best file: for each
//! scenario it keeps, per depth, the row with the highest retained count seen
//! in any file.

use std::collections::HashMap;

use serde::Serialize;

use membench_core::constants::DEPTH_COMPARISON_PREFIX;
use membench_core::types::DepthEntry;
use membench_core::{IResultSource, ViewError};

use crate::parsers::parse_depth;
use crate::selection::parse_all;

use super::numeric::percentage;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthResult {
    pub retained: u64,
    pub total_probes: u64,
    pub percentage: f64,
}

impl DepthResult {
    fn new(retained: u64, total_probes: u64) -> Self {
        Self {
            retained,
            total_probes,
            percentage: percentage(retained as f64, total_probes as f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthScenarioRow {
    pub scenario: String,
    pub depth1: Option<DepthResult>,
    pub depth2: Option<DepthResult>,
    /// `depth2.retained - depth1.retained`; a missing side counts as 0.
    pub delta: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthComparison {
    pub files: Vec<String>,
    pub scenarios: Vec<DepthScenarioRow>,
    pub depth1: DepthResult,
    pub depth2: DepthResult,
}

#[derive(Default)]
struct ScenarioBest<'a> {
    depth1: Option<&'a DepthEntry>,
    depth2: Option<&'a DepthEntry>,
}

fn keep_max<'a>(slot: &mut Option<&'a DepthEntry>, candidate: &'a DepthEntry) {
    let replace = slot.map_or(true, |current| candidate.retained > current.retained);
    if replace {
        *slot = Some(candidate);
    }
}

/// Merge depth rows from any number of files, in file order.
pub fn build_depth_comparison(
    files: &[Vec<DepthEntry>],
) -> Result<(Vec<DepthScenarioRow>, DepthResult, DepthResult), ViewError> {
    let mut order: Vec<&str> = Vec::new();
    let mut best: HashMap<&str, ScenarioBest<'_>> = HashMap::new();

    for entry in files.iter().flatten() {
        if entry.depth != 1 && entry.depth != 2 {
            continue;
        }
        let slot = best.entry(entry.scenario_name.as_str()).or_insert_with(|| {
            order.push(entry.scenario_name.as_str());
            ScenarioBest::default()
        });
        if entry.depth == 1 {
            keep_max(&mut slot.depth1, entry);
        } else {
            keep_max(&mut slot.depth2, entry);
        }
    }

    if order.is_empty() {
        return Err(ViewError::no_data(DEPTH_COMPARISON_PREFIX));
    }

    let (mut d1_retained, mut d1_total, mut d2_retained, mut d2_total) = (0u64, 0u64, 0u64, 0u64);
    let rows: Vec<DepthScenarioRow> = order
        .iter()
        .map(|name| {
            let slot = &best[name];
            let depth1 = slot.depth1.map(|e| DepthResult::new(e.retained, e.total_probes));
            let depth2 = slot.depth2.map(|e| DepthResult::new(e.retained, e.total_probes));
            if let Some(d) = depth1 {
                d1_retained += d.retained;
                d1_total += d.total_probes;
            }
            if let Some(d) = depth2 {
                d2_retained += d.retained;
                d2_total += d.total_probes;
            }
            let delta = depth2.map_or(0, |d| d.retained as i64) - depth1.map_or(0, |d| d.retained as i64);
            DepthScenarioRow {
                scenario: name.to_string(),
                depth1,
                depth2,
                delta,
            }
        })
        .collect();

    Ok((
        rows,
        DepthResult::new(d1_retained, d1_total),
        DepthResult::new(d2_retained, d2_total),
    ))
}

pub fn depth_comparison(source: &dyn IResultSource) -> Result<DepthComparison, ViewError> {
    let parsed = parse_all(source, DEPTH_COMPARISON_PREFIX, parse_depth)?;
    let files: Vec<String> = parsed.iter().map(|s| s.file.clone()).collect();
    let rows: Vec<Vec<DepthEntry>> = parsed.into_iter().map(|s| s.data).collect();
    let (scenarios, depth1, depth2) = build_depth_comparison(&rows)?;
    tracing::debug!(files = files.len(), scenarios = scenarios.len(), "built depth comparison");
    Ok(DepthComparison {
        files,
        scenarios,
        depth1,
        depth2,
    })
}
