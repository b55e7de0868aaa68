//! Hand-rolled baseline and code-generation extraction parsers.

use serde_json::Value;

use membench_core::types::{
    NanoBaselineData, NanoBaselineEntry, NanoOverall, RllmExtractionData, RllmProbe, RllmScenario,
};

use super::coerce;

pub const SCENARIOS_KEY: &str = "scenarios";

/// Parse a hand-rolled baseline document. Scenarios without a name are dropped;
/// a missing or malformed `overall` block reads as all zeros.
pub fn parse_nano_baseline(value: &Value) -> NanoBaselineData {
    let scenarios = coerce::objects(value, SCENARIOS_KEY)
        .filter_map(|row| {
            let name = coerce::string(row, "name");
            if name.is_empty() {
                return None;
            }
            Some(NanoBaselineEntry {
                name,
                retained: coerce::count(row, "retained"),
                total: coerce::count(row, "total"),
            })
        })
        .collect();

    let overall = value
        .get("overall")
        .and_then(Value::as_object)
        .map(|o| NanoOverall {
            retained: coerce::count(o, "retained"),
            total: coerce::count(o, "total"),
            percentage: coerce::number(o, "percentage"),
        })
        .unwrap_or_default();

    NanoBaselineData { scenarios, overall }
}

/// Parse code-generation extraction results. Scenarios without a name are dropped.
pub fn parse_rllm_extraction(value: &Value) -> RllmExtractionData {
    let scenarios = coerce::objects(value, SCENARIOS_KEY)
        .filter_map(|row| {
            let name = coerce::string(row, "name");
            if name.is_empty() {
                return None;
            }
            let probes = coerce::nested_objects(row, "probes")
                .map(|probe| RllmProbe {
                    fact: coerce::string(probe, "fact"),
                    retained_by_cycle: coerce::flag_list(probe, "retainedByCycle"),
                })
                .collect();
            Some(RllmScenario { name, probes })
        })
        .collect();

    RllmExtractionData { scenarios }
}
