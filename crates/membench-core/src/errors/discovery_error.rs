//! Discovery errors. These are terminal: an unreadable results directory is a
//! process-level fault, never a "no data" condition.

use std::path::PathBuf;

use super::error_code::{self, MembenchErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Failed to read results directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid result prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },
}

impl MembenchErrorCode for DiscoveryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::DISCOVERY_IO,
            Self::InvalidPrefix { .. } => error_code::INVALID_PREFIX,
        }
    }
}
