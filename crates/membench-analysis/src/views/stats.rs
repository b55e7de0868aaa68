//! Per-strategy and per-scenario groupings of benchmark entries.
//!
//! Groups keep first-seen order; callers sort as their view requires.

use std::collections::HashMap;

use membench_core::types::BenchmarkEntry;

use super::numeric;

/// Totals for one strategy across every scenario it ran.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyStats {
    pub strategy: String,
    pub correct: u64,
    pub total: u64,
    pub input_tokens: u64,
    pub overhead_tokens: u64,
    pub latency_ms: f64,
    pub cost_usd: f64,
}

impl StrategyStats {
    pub fn accuracy(&self) -> f64 {
        numeric::ratio(self.correct as f64, self.total as f64)
    }

    pub fn accuracy_percentage(&self) -> f64 {
        numeric::percentage(self.correct as f64, self.total as f64)
    }

    pub fn mean_input_tokens(&self) -> f64 {
        numeric::mean(self.input_tokens as f64, self.total as usize)
    }

    pub fn mean_overhead_tokens(&self) -> f64 {
        numeric::mean(self.overhead_tokens as f64, self.total as usize)
    }

    pub fn mean_latency_ms(&self) -> f64 {
        numeric::mean(self.latency_ms, self.total as usize)
    }
}

/// Pass counts for one group (a strategy or a scenario).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassCount {
    pub name: String,
    pub passed: u64,
    pub total: u64,
    /// Members of the group that failed, distinct, in first-seen order.
    pub failed: Vec<String>,
}

pub fn group_by_strategy(entries: &[BenchmarkEntry]) -> Vec<StrategyStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<StrategyStats> = Vec::new();
    for entry in entries {
        let slot = *index.entry(entry.strategy_name.as_str()).or_insert_with(|| {
            groups.push(StrategyStats {
                strategy: entry.strategy_name.clone(),
                ..Default::default()
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.total += 1;
        if entry.correct {
            group.correct += 1;
        }
        group.input_tokens += entry.total_input_tokens;
        group.overhead_tokens += entry.total_overhead_tokens;
        group.latency_ms += entry.total_latency_ms;
        group.cost_usd += entry.estimated_cost_usd;
    }
    groups
}

/// Pass counts grouped by `key`, recording `member` of each failing entry.
pub fn pass_counts<K, M>(entries: &[BenchmarkEntry], key: K, member: M) -> Vec<PassCount>
where
    K: Fn(&BenchmarkEntry) -> &str,
    M: Fn(&BenchmarkEntry) -> &str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<PassCount> = Vec::new();
    for entry in entries {
        let name = key(entry);
        let slot = *index.entry(name).or_insert_with(|| {
            groups.push(PassCount {
                name: name.to_string(),
                ..Default::default()
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.total += 1;
        if entry.correct {
            group.passed += 1;
        } else {
            let failed = member(entry);
            if !group.failed.iter().any(|f| f == failed) {
                group.failed.push(failed.to_string());
            }
        }
    }
    groups
}
