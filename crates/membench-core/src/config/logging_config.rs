//! Logging configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `MEMBENCH_LOG` is unset. Default: "info".
    pub filter: Option<String>,
    /// Emit JSON lines instead of human-readable output. Default: false.
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or("info")
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(false)
    }
}
