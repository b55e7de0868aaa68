//! Results directory configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PARTIAL_MARKER, DEFAULT_RESULTS_DIR};
use crate::errors::ConfigError;

/// Where result files live and which of them to skip.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResultsConfig {
    /// Results directory. Default: "results".
    pub dir: Option<PathBuf>,
    /// Filename substring marking an incomplete run. Default: "partial".
    pub partial_marker: Option<String>,
}

impl ResultsConfig {
    /// Returns the effective results directory.
    pub fn effective_dir(&self) -> &Path {
        self.dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_RESULTS_DIR))
    }

    /// Returns the effective partial-run marker.
    pub fn effective_partial_marker(&self) -> &str {
        self.partial_marker
            .as_deref()
            .unwrap_or(DEFAULT_PARTIAL_MARKER)
    }

    /// An empty marker would match every filename.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.partial_marker.as_deref() == Some("") {
            return Err(ConfigError::Invalid {
                field: "results.partial_marker".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
