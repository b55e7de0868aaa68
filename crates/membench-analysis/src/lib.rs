//! # membench-analysis
//!
//! Analytics engine over benchmark result files: discovery, lenient schema
//! parsers, best-run selection, and the view builders consumed by the
//! presentation layer.

#![allow(clippy::module_inception)]

pub mod api;
pub mod discovery;
pub mod parsers;
pub mod selection;
pub mod views;

pub use api::{render, respond, ResponseStatus, UnknownView, View, ViewRequest, ViewResponse};
pub use discovery::DirectoryResultSource;
pub use selection::{select_best, Selected};
