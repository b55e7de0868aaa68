//! Retention by fact type and the per-cycle retention curve.
//!
//! Both views read the retention file with the most type rows.

use std::collections::BTreeMap;

use serde::Serialize;

use membench_core::constants::RETENTION_BY_TYPE_PREFIX;
use membench_core::types::{LostFact, RetentionTypeEntry};
use membench_core::{IResultSource, ViewError};

use crate::parsers::parse_retention_by_type;
use crate::selection::{select_best_parsed, Selected};

use super::numeric::{ratio_to_percentage, round_int};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRetentionRow {
    #[serde(rename = "type")]
    pub type_name: String,
    pub total_probes: u64,
    pub retained: u64,
    pub percentage: f64,
    pub lost_facts: Vec<LostFact>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionByType {
    pub source: String,
    /// Worst-retained type first.
    pub types: Vec<TypeRetentionRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionCurvePoint {
    /// 1-based cycle number.
    pub cycle: usize,
    /// Retention percentage per type at this cycle; 0 where a type has no data.
    pub retention: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionCurve {
    pub source: String,
    /// Type names in file order.
    pub types: Vec<String>,
    pub points: Vec<RetentionCurvePoint>,
}

fn load_retention(
    source: &dyn IResultSource,
) -> Result<Selected<Vec<RetentionTypeEntry>>, ViewError> {
    select_best_parsed(
        source,
        RETENTION_BY_TYPE_PREFIX,
        parse_retention_by_type,
        |types| types.len() as f64,
    )?
    .filter(|s| !s.data.is_empty())
    .ok_or_else(|| ViewError::no_data(RETENTION_BY_TYPE_PREFIX))
}

pub fn build_retention_by_type(
    types: &[RetentionTypeEntry],
) -> Result<Vec<TypeRetentionRow>, ViewError> {
    if types.is_empty() {
        return Err(ViewError::no_data(RETENTION_BY_TYPE_PREFIX));
    }
    let mut rows: Vec<TypeRetentionRow> = types
        .iter()
        .map(|t| TypeRetentionRow {
            type_name: t.type_name.clone(),
            total_probes: t.total_probes,
            retained: round_int(t.overall_retention * t.total_probes as f64).max(0) as u64,
            percentage: ratio_to_percentage(t.overall_retention),
            lost_facts: t.lost_facts.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.percentage.total_cmp(&b.percentage));
    Ok(rows)
}

/// One point per cycle up to the longest series observed across all types.
pub fn build_retention_curve(
    types: &[RetentionTypeEntry],
) -> Result<Vec<RetentionCurvePoint>, ViewError> {
    let max_cycles = types
        .iter()
        .map(|t| t.retention_by_cycle.len())
        .max()
        .unwrap_or(0);
    if max_cycles == 0 {
        return Err(ViewError::no_data(RETENTION_BY_TYPE_PREFIX));
    }

    let points = (0..max_cycles)
        .map(|i| {
            let mut retention = BTreeMap::new();
            for t in types {
                let value = t
                    .retention_by_cycle
                    .get(i)
                    .map(|r| ratio_to_percentage(*r))
                    .unwrap_or(0.0);
                retention.entry(t.type_name.clone()).or_insert(value);
            }
            RetentionCurvePoint {
                cycle: i + 1,
                retention,
            }
        })
        .collect();
    Ok(points)
}

pub fn retention_by_type(source: &dyn IResultSource) -> Result<RetentionByType, ViewError> {
    let run = load_retention(source)?;
    let types = build_retention_by_type(&run.data)?;
    Ok(RetentionByType {
        source: run.file,
        types,
    })
}

pub fn retention_curve(source: &dyn IResultSource) -> Result<RetentionCurve, ViewError> {
    let run = load_retention(source)?;
    let points = build_retention_curve(&run.data)?;
    let mut types: Vec<String> = Vec::new();
    for t in &run.data {
        if !types.contains(&t.type_name) {
            types.push(t.type_name.clone());
        }
    }
    Ok(RetentionCurve {
        source: run.file,
        types,
        points,
    })
}
