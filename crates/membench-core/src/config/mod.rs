pub mod logging_config;
pub mod results_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use logging_config::LoggingConfig;
pub use results_config::ResultsConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MembenchConfig {
    pub results: ResultsConfig,
    pub logging: LoggingConfig,
}

impl MembenchConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file on disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.results.validate()
    }
}
