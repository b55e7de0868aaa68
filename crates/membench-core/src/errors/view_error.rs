//! View builder errors.

use super::error_code::{self, MembenchErrorCode};
use super::DiscoveryError;

/// The only condition a builder raises itself is `NoData`; discovery failures
/// pass through untouched.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("No {dataset} data found")]
    NoData { dataset: String },

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ViewError {
    pub fn no_data(dataset: impl Into<String>) -> Self {
        Self::NoData {
            dataset: dataset.into(),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}

impl MembenchErrorCode for ViewError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoData { .. } => error_code::NO_DATA,
            Self::Discovery(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION,
        }
    }
}
