//! Record types built fresh from result files on every request.
//! None of them are mutated after construction.

pub mod baseline;
pub mod benchmark;
pub mod code_analysis;
pub mod file_pattern;
pub mod result_file;
pub mod retention;
pub mod tracks;

pub use baseline::{NanoBaselineData, NanoBaselineEntry, NanoOverall, RllmExtractionData, RllmProbe, RllmScenario};
pub use benchmark::{BenchmarkEntry, BenchmarkStep};
pub use code_analysis::{CodeAnalysisBlock, CodeFeature};
pub use file_pattern::ResultFilePattern;
pub use result_file::ResultFile;
pub use retention::{DepthEntry, LostFact, RetentionTypeEntry};
pub use tracks::{ParallelBenchmarkRow, TrackKind};
