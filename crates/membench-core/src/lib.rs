//! # membench-core
//!
//! Foundation crate for the membench analytics engine.
//! Defines the record types, the result-source trait, errors, config,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::MembenchConfig;
pub use errors::error_code::MembenchErrorCode;
pub use errors::{ConfigError, DiscoveryError, ViewError};
pub use traits::{IResultSource, InMemoryResultSource};
pub use types::result_file::ResultFile;
