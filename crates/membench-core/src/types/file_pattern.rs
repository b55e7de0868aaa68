//! `{prefix}-*.json` matching with partial-run exclusion.

use glob::Pattern;

use crate::constants::RESULT_EXTENSION;
use crate::errors::DiscoveryError;

/// Decides whether a file name belongs to a dataset prefix.
#[derive(Debug, Clone)]
pub struct ResultFilePattern {
    pattern: Pattern,
    partial_marker: String,
}

impl ResultFilePattern {
    pub fn new(prefix: &str, partial_marker: &str) -> Result<Self, DiscoveryError> {
        if prefix.is_empty() {
            return Err(DiscoveryError::InvalidPrefix {
                prefix: prefix.to_string(),
                reason: "prefix must not be empty".to_string(),
            });
        }
        let glob = format!("{}-*.{}", Pattern::escape(prefix), RESULT_EXTENSION);
        let pattern = Pattern::new(&glob).map_err(|e| DiscoveryError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            pattern,
            partial_marker: partial_marker.to_string(),
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches(file_name)
            && (self.partial_marker.is_empty() || !file_name.contains(&self.partial_marker))
    }
}
