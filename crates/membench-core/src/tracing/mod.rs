//! Tracing subscriber setup.

pub mod setup;

pub use setup::{init_tracing, LOG_ENV_VAR};
