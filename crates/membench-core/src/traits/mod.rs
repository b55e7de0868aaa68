//! Shared traits used across membench crates.

pub mod in_memory;
pub mod result_source;

pub use in_memory::InMemoryResultSource;
pub use result_source::IResultSource;
