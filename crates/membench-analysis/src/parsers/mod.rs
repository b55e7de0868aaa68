//! Lenient schema parsers.
//!
//! Every parser accepts any `serde_json::Value` and never fails: wrong-typed
//! fields fall back to defaults, and rows missing their identity field are
//! dropped. The result is always the well-formed subset of the input.

pub mod baseline;
pub mod benchmark;
pub mod code_analysis;
pub mod coerce;
pub mod retention;

pub use baseline::{parse_nano_baseline, parse_rllm_extraction};
pub use benchmark::parse_benchmark;
pub use code_analysis::parse_code_analysis;
pub use retention::{parse_depth, parse_retention_by_type};
