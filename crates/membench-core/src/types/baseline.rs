//! Hand-rolled baseline and code-generation extraction results.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NanoBaselineEntry {
    pub name: String,
    pub retained: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NanoOverall {
    pub retained: u64,
    pub total: u64,
    pub percentage: f64,
}

/// Hand-rolled baseline retention per scenario, plus the reported overall figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NanoBaselineData {
    pub scenarios: Vec<NanoBaselineEntry>,
    pub overall: NanoOverall,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RllmProbe {
    pub fact: String,
    /// One flag per compression cycle, in cycle order.
    pub retained_by_cycle: Vec<bool>,
}

impl RllmProbe {
    /// A probe counts as retained when it survived the final cycle.
    pub fn retained_at_end(&self) -> bool {
        self.retained_by_cycle.last().copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RllmScenario {
    pub name: String,
    pub probes: Vec<RllmProbe>,
}

impl RllmScenario {
    pub fn retained_count(&self) -> u64 {
        self.probes.iter().filter(|p| p.retained_at_end()).count() as u64
    }
}

/// Code-generation extraction results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RllmExtractionData {
    pub scenarios: Vec<RllmScenario>,
}
