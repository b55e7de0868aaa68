//! Configuration loading errors.

use std::path::PathBuf;

use super::error_code::{self, MembenchErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl MembenchErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Parse(_) => error_code::CONFIG_PARSE,
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
        }
    }
}
