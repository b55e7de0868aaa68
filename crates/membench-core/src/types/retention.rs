//! Retention records: per fact-type summaries and per-depth scenario results.

use serde::Serialize;

/// A probe that stopped being recoverable at some cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LostFact {
    pub scenario: String,
    pub fact: String,
    pub cycle_lost: u64,
}

/// Retention stats for one fact type across a run.
///
/// Ratios are raw values in `[0, 1]`; rounding happens in the view builders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionTypeEntry {
    pub type_name: String,
    pub total_probes: u64,
    /// Index `i` holds the ratio after cycle `i + 1`.
    pub retention_by_cycle: Vec<f64>,
    pub overall_retention: f64,
    pub lost_facts: Vec<LostFact>,
}

/// Retention at one delegation depth for one scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthEntry {
    pub scenario_name: String,
    pub depth: u64,
    pub retained: u64,
    pub total_probes: u64,
}
