//! Directory-backed `IResultSource`.
//!
//! Lists `{prefix}-*.json` in a single directory (no recursion) and decodes the
//! matching files in parallel. Nothing is cached: every call re-reads the
//! directory.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde_json::Value;

use membench_core::config::ResultsConfig;
use membench_core::constants::DEFAULT_PARTIAL_MARKER;
use membench_core::errors::DiscoveryError;
use membench_core::types::{ResultFile, ResultFilePattern};
use membench_core::IResultSource;

#[derive(Debug, Clone)]
pub struct DirectoryResultSource {
    root: PathBuf,
    partial_marker: String,
}

impl DirectoryResultSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            partial_marker: DEFAULT_PARTIAL_MARKER.to_string(),
        }
    }

    pub fn from_config(config: &ResultsConfig) -> Self {
        Self {
            root: config.effective_dir().to_path_buf(),
            partial_marker: config.effective_partial_marker().to_string(),
        }
    }

    pub fn with_partial_marker(mut self, marker: impl Into<String>) -> Self {
        self.partial_marker = marker.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Matching file names, sorted.
    fn matching_names(&self, pattern: &ResultFilePattern) -> Result<Vec<String>, DiscoveryError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| DiscoveryError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let name = match entry.file_name().into_string() {
                Ok(n) => n,
                Err(_) => continue,
            };
            if !pattern.matches(&name) {
                if name.contains(&self.partial_marker) {
                    tracing::trace!(file = %name, "skipping partial run");
                }
                continue;
            }
            if !entry.path().is_file() {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }
}

impl IResultSource for DirectoryResultSource {
    fn list_candidates(&self, prefix: &str) -> Result<Vec<ResultFile>, DiscoveryError> {
        let pattern = ResultFilePattern::new(prefix, &self.partial_marker)?;
        let names = self.matching_names(&pattern)?;

        let files: Vec<ResultFile> = names
            .par_iter()
            .map(|name| {
                let path = self.root.join(name);
                match std::fs::read(&path) {
                    Ok(bytes) => ResultFile::from_bytes(name.as_str(), &bytes),
                    Err(e) => {
                        tracing::debug!(file = %name, error = %e, "result file unreadable");
                        ResultFile::new(name.as_str(), Value::Null)
                    }
                }
            })
            .collect();

        tracing::debug!(
            prefix,
            root = %self.root.display(),
            candidates = files.len(),
            "discovered result files"
        );
        Ok(files)
    }
}
