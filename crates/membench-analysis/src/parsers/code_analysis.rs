//! Code-block classification parser.

use serde_json::Value;

use membench_core::types::{CodeAnalysisBlock, CodeFeature};

use super::coerce;

pub const BLOCKS_KEY: &str = "blocks";

/// Parse classified code blocks. Every object row is kept; there is no identity field.
pub fn parse_code_analysis(value: &Value) -> Vec<CodeAnalysisBlock> {
    coerce::objects(value, BLOCKS_KEY)
        .map(|row| CodeAnalysisBlock {
            categories: coerce::string_set(row, "categories"),
            has_recursive_call: coerce::flag(row, CodeFeature::RecursiveCall.key()),
            has_regex: coerce::flag(row, CodeFeature::Regex.key()),
            has_chunking: coerce::flag(row, CodeFeature::Chunking.key()),
            has_sub_query: coerce::flag(row, CodeFeature::SubQuery.key()),
        })
        .collect()
}
