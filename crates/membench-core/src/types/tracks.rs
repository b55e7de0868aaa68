//! Unified cross-track benchmark rows.

use std::fmt;

use serde::Serialize;

/// Whether a track is a published benchmark or one of ours.
///
/// Ordering puts `Industry` before `Internal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Industry,
    Internal,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Industry => write!(f, "industry"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// One (track, strategy) result, normalized from a track-specific shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelBenchmarkRow {
    pub track: String,
    pub kind: TrackKind,
    pub strategy: String,
    /// Human-readable score, e.g. `"7/10 (70.0%)"` or `"PASS (4/4)"`.
    pub score: String,
    pub passed: bool,
    pub mean_latency_ms: f64,
    pub cost_usd: f64,
}
