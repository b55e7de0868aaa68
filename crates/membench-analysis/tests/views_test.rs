//! View builders over in-memory fixtures.

use serde_json::{json, Value};

use membench_analysis::views::{
    baseline_comparison, code_analysis, cost_accuracy, depth_comparison, leaderboard,
    retention_by_type, retention_curve, scenario_difficulty, scenario_heatmap, token_cost,
};
use membench_core::{InMemoryResultSource, ViewError};

// ============================================================================
// Helpers
// ============================================================================

fn run(strategy: &str, scenario: &str, correct: bool, cost: f64) -> Value {
    json!({
        "strategyName": strategy,
        "scenarioName": scenario,
        "correct": correct,
        "totalInputTokens": 1000,
        "totalOverheadTokens": 200,
        "totalLatencyMs": 500,
        "estimatedCostUsd": cost,
        "steps": [
            {"step": 1, "inputTokens": 400, "outputTokens": 40, "memoryOverheadTokens": 80, "latencyMs": 200.4},
            {"step": 2, "inputTokens": 600, "outputTokens": 60, "memoryOverheadTokens": 120, "latencyMs": 299.6}
        ]
    })
}

/// `n` runs of one strategy over scenarios `s0..`, the first `correct` of them passing.
fn runs(strategy: &str, n: usize, correct: usize, cost_each: f64) -> Vec<Value> {
    (0..n)
        .map(|i| run(strategy, &format!("s{i}"), i < correct, cost_each))
        .collect()
}

fn benchmark_source(files: &[(&str, Vec<Value>)]) -> InMemoryResultSource {
    let mut source = InMemoryResultSource::new();
    for (name, rows) in files {
        source.insert(*name, json!({ "results": rows }));
    }
    source
}

fn assert_no_data<T: std::fmt::Debug>(result: Result<T, ViewError>, dataset: &str) {
    match result {
        Err(ViewError::NoData { dataset: d }) => assert_eq!(d, dataset),
        other => panic!("expected NoData({dataset}), got {other:?}"),
    }
}

// ============================================================================
// Leaderboard
// ============================================================================

#[test]
fn leaderboard_reads_the_largest_run() {
    let source = benchmark_source(&[
        ("benchmark-a.json", runs("window", 8, 6, 0.01)),
        ("benchmark-b.json", runs("window", 4, 4, 0.01)),
    ]);
    let board = leaderboard(&source).unwrap();
    assert_eq!(board.source, "benchmark-a.json");
    assert_eq!(board.rows.len(), 1);
    assert_eq!(board.rows[0].accuracy, 0.75);
    assert_eq!(board.rows[0].correct, 6);
    assert_eq!(board.rows[0].total, 8);
}

#[test]
fn leaderboard_orders_by_accuracy_then_cost() {
    let mut rows = runs("pricey", 4, 2, 0.05);
    rows.extend(runs("cheap", 4, 2, 0.01));
    rows.extend(runs("smart", 4, 4, 0.10));
    let source = benchmark_source(&[("benchmark-x.json", rows)]);

    let board = leaderboard(&source).unwrap();
    let order: Vec<(usize, &str)> = board
        .rows
        .iter()
        .map(|r| (r.rank, r.strategy.as_str()))
        .collect();
    assert_eq!(order, vec![(1, "smart"), (2, "cheap"), (3, "pricey")]);
    assert_eq!(board.rows[1].avg_input_tokens, 1000);
    assert_eq!(board.rows[1].avg_overhead_tokens, 200);
    assert_eq!(board.rows[1].avg_latency_ms, 500);
    assert_eq!(board.rows[1].total_cost_usd, 0.04);
}

#[test]
fn leaderboard_rank_is_dense_over_ties() {
    let mut rows = runs("alpha", 4, 2, 0.01);
    rows.extend(runs("beta", 4, 2, 0.01));
    rows.extend(runs("gamma", 4, 1, 0.01));
    rows.extend(runs("delta", 4, 4, 0.02));
    let source = benchmark_source(&[("benchmark-x.json", rows)]);

    let board = leaderboard(&source).unwrap();
    let ranks: Vec<(&str, usize)> = board
        .rows
        .iter()
        .map(|r| (r.strategy.as_str(), r.rank))
        .collect();
    assert_eq!(
        ranks,
        vec![("delta", 1), ("alpha", 2), ("beta", 2), ("gamma", 3)]
    );
}

#[test]
fn leaderboard_without_files_is_no_data() {
    assert_no_data(leaderboard(&InMemoryResultSource::new()), "benchmark");
}

#[test]
fn leaderboard_with_only_invalid_rows_is_no_data() {
    let source = InMemoryResultSource::new()
        .with_file("benchmark-a.json", json!([{"strategyName": "x"}]))
        .with_file("benchmark-b.json", json!("garbage"));
    assert_no_data(leaderboard(&source), "benchmark");
}

#[test]
fn partial_run_is_ignored_even_when_larger() {
    let source = benchmark_source(&[
        ("benchmark-partial-big.json", runs("window", 20, 0, 0.01)),
        ("benchmark-small.json", runs("window", 2, 1, 0.01)),
    ]);
    let board = leaderboard(&source).unwrap();
    assert_eq!(board.source, "benchmark-small.json");
    assert_eq!(board.rows[0].total, 2);
}

// ============================================================================
// Retention
// ============================================================================

fn retention_source() -> InMemoryResultSource {
    InMemoryResultSource::new().with_file(
        "retention-by-type-1.json",
        json!({
            "byType": [
                {"type": "name", "totalProbes": 10, "retentionByCycle": [1.0, 0.9, 0.8], "overallRetention": 0.8},
                {"type": "number", "totalProbes": 8, "retentionByCycle": [0.75, 0.5], "overallRetention": 0.5,
                 "lostFacts": [{"scenario": "s1", "fact": "budget", "cycleLost": 2}]},
                {"type": "date", "totalProbes": 3, "retentionByCycle": [1.0], "overallRetention": 0.667}
            ]
        }),
    )
}

#[test]
fn retention_by_type_sorted_worst_first() {
    let view = retention_by_type(&retention_source()).unwrap();
    let summary: Vec<(&str, u64, f64)> = view
        .types
        .iter()
        .map(|t| (t.type_name.as_str(), t.retained, t.percentage))
        .collect();
    assert_eq!(
        summary,
        vec![("number", 4, 50.0), ("date", 2, 66.7), ("name", 8, 80.0)]
    );
    assert_eq!(view.types[0].lost_facts.len(), 1);
}

#[test]
fn retention_curve_pads_short_series_with_zero() {
    let curve = retention_curve(&retention_source()).unwrap();
    assert_eq!(curve.types, vec!["name", "number", "date"]);
    assert_eq!(curve.points.len(), 3);
    let third = &curve.points[2];
    assert_eq!(third.cycle, 3);
    assert_eq!(third.retention["name"], 80.0);
    assert_eq!(third.retention["number"], 0.0);
    assert_eq!(third.retention["date"], 0.0);
    assert_eq!(curve.points[0].retention["number"], 75.0);
}

#[test]
fn retention_curve_without_cycles_is_no_data() {
    let source = InMemoryResultSource::new().with_file(
        "retention-by-type-1.json",
        json!({"byType": [{"type": "name", "totalProbes": 4, "overallRetention": 1.0}]}),
    );
    assert!(retention_by_type(&source).is_ok());
    assert_no_data(retention_curve(&source), "retention-by-type");
}

// ============================================================================
// Depth comparison
// ============================================================================

#[test]
fn depth_keeps_maximum_across_files() {
    let source = InMemoryResultSource::new()
        .with_file(
            "depth-comparison-a.json",
            json!([{"scenarioName": "Early Fact Recall", "depth": 1, "retained": 1, "totalProbes": 10}]),
        )
        .with_file(
            "depth-comparison-b.json",
            json!({"results": [
                {"scenarioName": "Early Fact Recall", "depth": 1, "retained": 2, "totalProbes": 10},
                {"scenarioName": "Early Fact Recall", "depth": 2, "retained": 5, "totalProbes": 10}
            ]}),
        )
        .with_file(
            "depth-comparison-c.json",
            json!([{"scenarioName": "Early Fact Recall", "depth": 1, "retained": 1, "totalProbes": 10}]),
        );

    let view = depth_comparison(&source).unwrap();
    assert_eq!(view.files.len(), 3);
    assert_eq!(view.scenarios.len(), 1);
    let row = &view.scenarios[0];
    assert_eq!(row.depth1.unwrap().retained, 2);
    assert_eq!(row.depth2.unwrap().retained, 5);
    assert_eq!(row.delta, 3);
    assert_eq!(view.depth1.retained, 2);
    assert_eq!(view.depth1.percentage, 20.0);
}

#[test]
fn depth_missing_side_counts_as_zero() {
    let source = InMemoryResultSource::new().with_file(
        "depth-comparison-a.json",
        json!([
            {"scenarioName": "only-deep", "depth": 2, "retained": 3, "totalProbes": 4},
            {"scenarioName": "only-shallow", "depth": 1, "retained": 2, "totalProbes": 4},
            {"scenarioName": "ignored", "depth": 3, "retained": 9, "totalProbes": 9}
        ]),
    );
    let view = depth_comparison(&source).unwrap();
    let deltas: Vec<(&str, i64)> = view
        .scenarios
        .iter()
        .map(|r| (r.scenario.as_str(), r.delta))
        .collect();
    assert_eq!(deltas, vec![("only-deep", 3), ("only-shallow", -2)]);
    assert!(view.scenarios[0].depth1.is_none());
}

#[test]
fn depth_without_rows_is_no_data() {
    assert_no_data(
        depth_comparison(&InMemoryResultSource::new()),
        "depth-comparison",
    );
}

// ============================================================================
// Baseline comparison
// ============================================================================

#[test]
fn baseline_aligns_by_scenario_name() {
    let source = InMemoryResultSource::new()
        .with_file(
            "nano-baseline-1.json",
            json!({
                "scenarios": [{"name": "s1", "retained": 8, "total": 10}, {"name": "s2", "retained": 5, "total": 10}],
                "overall": {"retained": 13, "total": 20, "percentage": 65.0}
            }),
        )
        .with_file(
            "nano-baseline-2.json",
            json!({"scenarios": [{"name": "s1", "retained": 1, "total": 10}], "overall": {"percentage": 10.0}}),
        )
        .with_file(
            "rllm-extraction-1.json",
            json!({"scenarios": [
                {"name": "s2", "probes": [
                    {"fact": "a", "retainedByCycle": [true, true]},
                    {"fact": "b", "retainedByCycle": [true, false]}
                ]},
                {"name": "s3", "probes": [{"fact": "c", "retainedByCycle": [true]}]}
            ]}),
        );

    let view = baseline_comparison(&source).unwrap();
    assert_eq!(view.hand_rolled_source, "nano-baseline-1.json");
    let names: Vec<&str> = view.scenarios.iter().map(|s| s.scenario.as_str()).collect();
    assert_eq!(names, vec!["s1", "s2", "s3"]);
    assert!(view.scenarios[0].code_gen.is_none());
    assert_eq!(view.scenarios[1].code_gen.unwrap().retained, 1);
    assert!(view.scenarios[2].hand_rolled.is_none());
    assert_eq!(view.hand_rolled.retained, 13);
    assert_eq!(view.code_gen.retained, 2);
    assert_eq!(view.code_gen.total, 3);
    assert_eq!(view.code_gen.percentage, 66.7);
    assert_eq!(view.reported_hand_rolled_percentage, 65.0);
}

#[test]
fn baseline_needs_both_sides() {
    let source = InMemoryResultSource::new().with_file(
        "nano-baseline-1.json",
        json!({"scenarios": [{"name": "s1", "retained": 1, "total": 2}]}),
    );
    assert_no_data(baseline_comparison(&source), "rllm-extraction");
}

// ============================================================================
// Token cost
// ============================================================================

#[test]
fn token_cost_unknown_scenario_falls_back_to_sorted_first() {
    let source = benchmark_source(&[(
        "benchmark-a.json",
        vec![
            run("window", "zeta", true, 0.01),
            run("window", "alpha", false, 0.02),
            run("summary", "alpha", true, 0.03),
        ],
    )]);

    let view = token_cost(&source, Some("nope")).unwrap();
    assert_eq!(view.scenario, "alpha");
    assert_eq!(view.scenarios, vec!["alpha", "zeta"]);
    assert_eq!(view.strategies.len(), 2);
    assert_eq!(view.strategies[0].steps[0].latency_ms, 200);
    assert_eq!(view.strategies[0].steps[1].latency_ms, 300);

    let unspecified = token_cost(&source, None).unwrap();
    assert_eq!(unspecified.scenario, "alpha");

    let chosen = token_cost(&source, Some("zeta")).unwrap();
    assert_eq!(chosen.strategies.len(), 1);
    assert!(chosen.strategies[0].correct);
}

// ============================================================================
// Code analysis
// ============================================================================

#[test]
fn code_analysis_counts_categories_and_features() {
    let source = InMemoryResultSource::new()
        .with_file(
            "code-analysis-a.json",
            json!({"blocks": [
                {"categories": ["search", "filter"], "hasRegex": true},
                {"categories": ["search", "search"], "hasRegex": true, "hasChunking": true},
                {"categories": ["aggregate"], "hasSubQuery": true},
                {"categories": ["filter"]}
            ]}),
        )
        .with_file("code-analysis-b.json", json!({"blocks": []}));

    let view = code_analysis(&source).unwrap();
    assert_eq!(view.source, "code-analysis-a.json");
    assert_eq!(view.total_blocks, 4);
    let cats: Vec<(&str, u64, f64)> = view
        .categories
        .iter()
        .map(|c| (c.category.as_str(), c.count, c.percentage))
        .collect();
    assert_eq!(
        cats,
        vec![("filter", 2, 50.0), ("search", 2, 50.0), ("aggregate", 1, 25.0)]
    );
    let features: Vec<(&str, u64)> = view
        .features
        .iter()
        .map(|f| (f.feature.as_str(), f.count))
        .collect();
    assert_eq!(
        features,
        vec![("recursive_call", 0), ("regex", 2), ("chunking", 1), ("sub_query", 1)]
    );
}

#[test]
fn code_analysis_uses_first_file_even_if_empty() {
    let source = InMemoryResultSource::new()
        .with_file("code-analysis-a.json", json!({"blocks": []}))
        .with_file("code-analysis-b.json", json!({"blocks": [{"categories": ["x"]}]}));
    assert_no_data(code_analysis(&source), "code-analysis");
}

// ============================================================================
// Heatmap, cost/accuracy, difficulty
// ============================================================================

fn grid_source() -> InMemoryResultSource {
    benchmark_source(&[(
        "benchmark-grid.json",
        vec![
            run("window", "easy", true, 0.01),
            run("window", "hard", false, 0.01),
            run("summary", "easy", true, 0.02),
            run("summary", "hard", true, 0.02),
            run("full", "easy", true, 0.05),
            run("full", "hard", false, 0.05),
        ],
    )])
}

#[test]
fn heatmap_cells_and_pass_rates() {
    let view = scenario_heatmap(&grid_source()).unwrap();
    assert_eq!(view.cells.len(), 6);
    assert_eq!(view.cells[1].strategy, "window");
    assert!(!view.cells[1].correct);
    assert_eq!(view.cells[1].tokens, 1000);

    assert_eq!(view.strategies[0].name, "summary");
    assert_eq!(view.strategies[0].accuracy, 100.0);
    let scenarios: Vec<(&str, u64, u64)> = view
        .scenarios
        .iter()
        .map(|s| (s.name.as_str(), s.passed, s.total))
        .collect();
    assert_eq!(scenarios, vec![("easy", 3, 3), ("hard", 1, 3)]);
}

#[test]
fn difficulty_hardest_first_with_failures() {
    let view = scenario_difficulty(&grid_source()).unwrap();
    assert_eq!(view.scenarios[0].scenario, "hard");
    assert_eq!(view.scenarios[0].accuracy, 33.3);
    assert_eq!(view.scenarios[0].failed_strategies, vec!["window", "full"]);
    assert!(view.scenarios[1].failed_strategies.is_empty());
}

#[test]
fn cost_accuracy_equal_accuracy_does_not_join_frontier() {
    let mut rows = runs("cheap", 10, 7, 0.001);
    rows.extend(runs("pricey", 10, 7, 0.002));
    rows.extend(runs("premium", 10, 9, 0.003));
    let source = benchmark_source(&[("benchmark-pareto.json", rows)]);

    let view = cost_accuracy(&source).unwrap();
    let points: Vec<(&str, f64, f64, bool)> = view
        .points
        .iter()
        .map(|p| (p.strategy.as_str(), p.total_cost_usd, p.accuracy, p.on_frontier))
        .collect();
    assert_eq!(
        points,
        vec![
            ("cheap", 0.01, 70.0, true),
            ("pricey", 0.02, 70.0, false),
            ("premium", 0.03, 90.0, true),
        ]
    );
    let frontier: Vec<&str> = view.frontier.iter().map(|p| p.strategy.as_str()).collect();
    assert_eq!(frontier, vec!["cheap", "premium"]);
}
