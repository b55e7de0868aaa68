//! Classified code fragments from code-generation runs.

use std::fmt;

use serde::Serialize;

/// One classified code fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAnalysisBlock {
    /// Distinct category labels, in first-seen order.
    pub categories: Vec<String>,
    pub has_recursive_call: bool,
    pub has_regex: bool,
    pub has_chunking: bool,
    pub has_sub_query: bool,
}

impl CodeAnalysisBlock {
    pub fn has(&self, feature: CodeFeature) -> bool {
        match feature {
            CodeFeature::RecursiveCall => self.has_recursive_call,
            CodeFeature::Regex => self.has_regex,
            CodeFeature::Chunking => self.has_chunking,
            CodeFeature::SubQuery => self.has_sub_query,
        }
    }
}

/// The four boolean feature flags carried by every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeFeature {
    RecursiveCall,
    Regex,
    Chunking,
    SubQuery,
}

impl CodeFeature {
    pub const ALL: [CodeFeature; 4] = [
        CodeFeature::RecursiveCall,
        CodeFeature::Regex,
        CodeFeature::Chunking,
        CodeFeature::SubQuery,
    ];

    /// JSON key of the flag in the raw block.
    pub fn key(self) -> &'static str {
        match self {
            Self::RecursiveCall => "hasRecursiveCall",
            Self::Regex => "hasRegex",
            Self::Chunking => "hasChunking",
            Self::SubQuery => "hasSubQuery",
        }
    }
}

impl fmt::Display for CodeFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecursiveCall => write!(f, "recursive_call"),
            Self::Regex => write!(f, "regex"),
            Self::Chunking => write!(f, "chunking"),
            Self::SubQuery => write!(f, "sub_query"),
        }
    }
}
