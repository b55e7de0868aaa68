//! Retention-by-type and depth-comparison parsers.

use serde_json::Value;

use membench_core::types::{DepthEntry, LostFact, RetentionTypeEntry};

use super::coerce;

pub const BY_TYPE_KEY: &str = "byType";
pub const DEPTH_KEY: &str = "results";

/// Parse per-type retention rows. Rows without a type name are dropped.
pub fn parse_retention_by_type(value: &Value) -> Vec<RetentionTypeEntry> {
    coerce::objects(value, BY_TYPE_KEY)
        .filter_map(|row| {
            let type_name = coerce::string(row, "type");
            if type_name.is_empty() {
                return None;
            }
            let lost_facts = coerce::nested_objects(row, "lostFacts")
                .map(|lost| LostFact {
                    scenario: coerce::string(lost, "scenario"),
                    fact: coerce::string(lost, "fact"),
                    cycle_lost: coerce::count(lost, "cycleLost"),
                })
                .collect();
            Some(RetentionTypeEntry {
                type_name,
                total_probes: coerce::count(row, "totalProbes"),
                retention_by_cycle: coerce::number_list(row, "retentionByCycle"),
                overall_retention: coerce::number(row, "overallRetention"),
                lost_facts,
            })
        })
        .collect()
}

/// Parse depth-comparison rows. Rows without a scenario name are dropped.
pub fn parse_depth(value: &Value) -> Vec<DepthEntry> {
    coerce::objects(value, DEPTH_KEY)
        .filter_map(|row| {
            let scenario_name = coerce::string(row, "scenarioName");
            if scenario_name.is_empty() {
                return None;
            }
            Some(DepthEntry {
                scenario_name,
                depth: coerce::count(row, "depth"),
                retained: coerce::count(row, "retained"),
                total_probes: coerce::count(row, "totalProbes"),
            })
        })
        .collect()
}
