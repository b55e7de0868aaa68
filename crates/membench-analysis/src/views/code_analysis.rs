//! Category and feature-flag distribution over classified code blocks.
//!
//! Reads the first discovered code-analysis file, not the best of several.

use std::collections::HashMap;

use serde::Serialize;

use membench_core::constants::CODE_ANALYSIS_PREFIX;
use membench_core::types::{CodeAnalysisBlock, CodeFeature};
use membench_core::{IResultSource, ViewError};

use crate::parsers::parse_code_analysis;

use super::numeric::percentage;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    pub count: u64,
    /// Share of all blocks; a block may carry several categories.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureShare {
    pub feature: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAnalysisView {
    pub source: String,
    pub total_blocks: usize,
    /// Most frequent first; equal counts by name.
    pub categories: Vec<CategoryShare>,
    /// Always the four flags, in fixed order.
    pub features: Vec<FeatureShare>,
}

pub fn build_code_analysis(
    blocks: &[CodeAnalysisBlock],
) -> Result<(Vec<CategoryShare>, Vec<FeatureShare>), ViewError> {
    if blocks.is_empty() {
        return Err(ViewError::no_data(CODE_ANALYSIS_PREFIX));
    }
    let total = blocks.len() as f64;

    let mut counts: HashMap<&str, u64> = HashMap::new();
    for category in blocks.iter().flat_map(|b| b.categories.iter()) {
        *counts.entry(category.as_str()).or_insert(0) += 1;
    }
    let mut categories: Vec<CategoryShare> = counts
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category: category.to_string(),
            count,
            percentage: percentage(count as f64, total),
        })
        .collect();
    categories.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));

    let features = CodeFeature::ALL
        .iter()
        .map(|&feature| {
            let count = blocks.iter().filter(|b| b.has(feature)).count() as u64;
            FeatureShare {
                feature: feature.to_string(),
                count,
                percentage: percentage(count as f64, total),
            }
        })
        .collect();

    Ok((categories, features))
}

pub fn code_analysis(source: &dyn IResultSource) -> Result<CodeAnalysisView, ViewError> {
    let first = source
        .list_candidates(CODE_ANALYSIS_PREFIX)?
        .into_iter()
        .next()
        .ok_or_else(|| ViewError::no_data(CODE_ANALYSIS_PREFIX))?;
    let blocks = parse_code_analysis(&first.payload);
    let (categories, features) = build_code_analysis(&blocks)?;
    Ok(CodeAnalysisView {
        source: first.name,
        total_blocks: blocks.len(),
        categories,
        features,
    })
}
