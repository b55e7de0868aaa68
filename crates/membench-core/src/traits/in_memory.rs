//! `InMemoryResultSource`: fixture-backed `IResultSource`.
//!
//! Applies the same name matching and partial-run exclusion as the directory
//! source so views behave identically against fixtures.

use serde_json::Value;

use crate::constants::DEFAULT_PARTIAL_MARKER;
use crate::errors::DiscoveryError;
use crate::types::{ResultFile, ResultFilePattern};

use super::result_source::IResultSource;

#[derive(Debug, Clone)]
pub struct InMemoryResultSource {
    files: Vec<ResultFile>,
    partial_marker: String,
}

impl InMemoryResultSource {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            partial_marker: DEFAULT_PARTIAL_MARKER.to_string(),
        }
    }

    pub fn with_partial_marker(mut self, marker: impl Into<String>) -> Self {
        self.partial_marker = marker.into();
        self
    }

    /// Add a decoded file.
    pub fn insert(&mut self, name: impl Into<String>, payload: Value) {
        self.files.push(ResultFile::new(name, payload));
    }

    /// Builder-style `insert`.
    pub fn with_file(mut self, name: impl Into<String>, payload: Value) -> Self {
        self.insert(name, payload);
        self
    }

    /// Add a file from raw bytes; malformed JSON becomes a `Null` payload.
    pub fn insert_raw(&mut self, name: impl Into<String>, bytes: &[u8]) {
        self.files.push(ResultFile::from_bytes(name, bytes));
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Default for InMemoryResultSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IResultSource for InMemoryResultSource {
    fn list_candidates(&self, prefix: &str) -> Result<Vec<ResultFile>, DiscoveryError> {
        let pattern = ResultFilePattern::new(prefix, &self.partial_marker)?;
        let mut matched: Vec<ResultFile> = self
            .files
            .iter()
            .filter(|f| pattern.matches(&f.name))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matched)
    }
}
