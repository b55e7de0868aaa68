//! File-name prefixes and markers shared by discovery and the view builders.

/// Filename substring marking an incomplete run. Such files are never discovered.
pub const DEFAULT_PARTIAL_MARKER: &str = "partial";

/// Default results directory, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Extension every result file carries.
pub const RESULT_EXTENSION: &str = "json";

// ---- Core datasets ----

pub const BENCHMARK_PREFIX: &str = "benchmark";
pub const RETENTION_BY_TYPE_PREFIX: &str = "retention-by-type";
pub const DEPTH_COMPARISON_PREFIX: &str = "depth-comparison";
pub const NANO_BASELINE_PREFIX: &str = "nano-baseline";
pub const RLLM_EXTRACTION_PREFIX: &str = "rllm-extraction";
pub const CODE_ANALYSIS_PREFIX: &str = "code-analysis";

// ---- Cross-track adapters ----

pub const LONGMEMEVAL_PREFIX: &str = "longmemeval";
pub const LOCOMO_PREFIX: &str = "locomo";
pub const NIAH_PREFIX: &str = "niah";
pub const MEMORY_AGENT_BENCH_PREFIX: &str = "memory-agent-bench";
pub const INTERNAL_RETENTION_PREFIX: &str = "internal-retention";
pub const CROSS_SESSION_PREFIX: &str = "cross-session";
pub const TOOL_STATE_PREFIX: &str = "tool-state";
pub const MULTI_HOP_PREFIX: &str = "multi-hop";

/// Fraction-scored tracks count a strategy as passing at or above this percentage.
pub const FRACTION_PASS_THRESHOLD_PCT: f64 = 50.0;
