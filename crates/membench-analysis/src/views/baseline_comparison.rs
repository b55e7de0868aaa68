//! Hand-rolled baseline vs code-generation extraction, aligned by scenario name.

use serde::Serialize;

use membench_core::constants::{NANO_BASELINE_PREFIX, RLLM_EXTRACTION_PREFIX};
use membench_core::types::{NanoBaselineData, RllmExtractionData};
use membench_core::{IResultSource, ViewError};

use crate::parsers::{parse_nano_baseline, parse_rllm_extraction};
use crate::selection::select_best_parsed;

use super::numeric::percentage;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionTally {
    pub retained: u64,
    pub total: u64,
    pub percentage: f64,
}

impl RetentionTally {
    fn new(retained: u64, total: u64) -> Self {
        Self {
            retained,
            total,
            percentage: percentage(retained as f64, total as f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub scenario: String,
    pub hand_rolled: Option<RetentionTally>,
    pub code_gen: Option<RetentionTally>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineComparison {
    pub hand_rolled_source: String,
    pub code_gen_source: String,
    pub scenarios: Vec<ScenarioComparison>,
    /// Aggregate over the scenarios present on each side.
    pub hand_rolled: RetentionTally,
    pub code_gen: RetentionTally,
    /// The overall percentage the baseline file reports about itself.
    pub reported_hand_rolled_percentage: f64,
}

/// Scenarios follow baseline order; code-gen-only scenarios are appended in their own order.
pub fn build_baseline_comparison(
    baseline: &NanoBaselineData,
    extraction: &RllmExtractionData,
) -> Result<(Vec<ScenarioComparison>, RetentionTally, RetentionTally), ViewError> {
    if baseline.scenarios.is_empty() {
        return Err(ViewError::no_data(NANO_BASELINE_PREFIX));
    }
    if extraction.scenarios.is_empty() {
        return Err(ViewError::no_data(RLLM_EXTRACTION_PREFIX));
    }

    let code_gen_for = |name: &str| {
        extraction
            .scenarios
            .iter()
            .find(|s| s.name == name)
            .map(|s| RetentionTally::new(s.retained_count(), s.probes.len() as u64))
    };

    let mut rows: Vec<ScenarioComparison> = Vec::new();
    for entry in &baseline.scenarios {
        if rows.iter().any(|r| r.scenario == entry.name) {
            continue;
        }
        rows.push(ScenarioComparison {
            scenario: entry.name.clone(),
            hand_rolled: Some(RetentionTally::new(entry.retained, entry.total)),
            code_gen: code_gen_for(&entry.name),
        });
    }
    for scenario in &extraction.scenarios {
        if rows.iter().any(|r| r.scenario == scenario.name) {
            continue;
        }
        rows.push(ScenarioComparison {
            scenario: scenario.name.clone(),
            hand_rolled: None,
            code_gen: code_gen_for(&scenario.name),
        });
    }

    let sum = |pick: fn(&ScenarioComparison) -> Option<RetentionTally>| {
        let (retained, total) = rows
            .iter()
            .filter_map(pick)
            .fold((0u64, 0u64), |(r, t), tally| (r + tally.retained, t + tally.total));
        RetentionTally::new(retained, total)
    };
    let hand_rolled = sum(|r| r.hand_rolled);
    let code_gen = sum(|r| r.code_gen);

    Ok((rows, hand_rolled, code_gen))
}

pub fn baseline_comparison(source: &dyn IResultSource) -> Result<BaselineComparison, ViewError> {
    let baseline = select_best_parsed(source, NANO_BASELINE_PREFIX, parse_nano_baseline, |d| {
        d.overall.percentage
    })?
    .ok_or_else(|| ViewError::no_data(NANO_BASELINE_PREFIX))?;
    let extraction = select_best_parsed(source, RLLM_EXTRACTION_PREFIX, parse_rllm_extraction, |d| {
        d.scenarios.len() as f64
    })?
    .ok_or_else(|| ViewError::no_data(RLLM_EXTRACTION_PREFIX))?;

    let (scenarios, hand_rolled, code_gen) =
        build_baseline_comparison(&baseline.data, &extraction.data)?;

    Ok(BaselineComparison {
        hand_rolled_source: baseline.file,
        code_gen_source: extraction.file,
        scenarios,
        hand_rolled,
        code_gen,
        reported_hand_rolled_percentage: baseline.data.overall.percentage,
    })
}
