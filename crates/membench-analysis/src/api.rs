//! View dispatch: the boundary the presentation layer talks to.
//!
//! `render` produces a view's JSON payload. `respond` wraps it into a
//! status + body pair where "no data" is a `NotFound` response rather than an
//! error; anything else (discovery I/O, serialization) stays an `Err`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{json, Value};

use membench_core::{IResultSource, MembenchErrorCode, ViewError};

use crate::views;

/// Every view the engine can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Leaderboard,
    RetentionByType,
    DepthComparison,
    RetentionCurve,
    NanoVsRllm,
    TokenCost,
    CodeAnalysis,
    ScenarioHeatmap,
    CostAccuracy,
    ScenarioDifficulty,
    ParallelBenchmarks,
}

impl View {
    pub const ALL: [View; 11] = [
        View::Leaderboard,
        View::RetentionByType,
        View::DepthComparison,
        View::RetentionCurve,
        View::NanoVsRllm,
        View::TokenCost,
        View::CodeAnalysis,
        View::ScenarioHeatmap,
        View::CostAccuracy,
        View::ScenarioDifficulty,
        View::ParallelBenchmarks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            View::Leaderboard => "leaderboard",
            View::RetentionByType => "retention-by-type",
            View::DepthComparison => "depth-comparison",
            View::RetentionCurve => "retention-curve",
            View::NanoVsRllm => "nano-vs-rllm",
            View::TokenCost => "token-cost",
            View::CodeAnalysis => "code-analysis",
            View::ScenarioHeatmap => "scenario-heatmap",
            View::CostAccuracy => "cost-accuracy",
            View::ScenarioDifficulty => "scenario-difficulty",
            View::ParallelBenchmarks => "parallel-benchmarks",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    pub view: View,
    /// Only meaningful for `token-cost`; ignored elsewhere.
    pub scenario: Option<String>,
}

impl ViewRequest {
    pub fn new(view: View) -> Self {
        Self {
            view,
            scenario: None,
        }
    }

    pub fn with_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = Some(scenario.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Ok,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewResponse {
    pub status: ResponseStatus,
    pub body: Value,
}

impl ViewResponse {
    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }
}

fn to_json<T: Serialize>(payload: Result<T, ViewError>) -> Result<Value, ViewError> {
    Ok(serde_json::to_value(payload?)?)
}

/// Build the requested view and serialize it.
pub fn render(source: &dyn IResultSource, request: &ViewRequest) -> Result<Value, ViewError> {
    let span = tracing::info_span!("view", name = %request.view);
    let _enter = span.enter();

    match request.view {
        View::Leaderboard => to_json(views::leaderboard(source)),
        View::RetentionByType => to_json(views::retention_by_type(source)),
        View::DepthComparison => to_json(views::depth_comparison(source)),
        View::RetentionCurve => to_json(views::retention_curve(source)),
        View::NanoVsRllm => to_json(views::baseline_comparison(source)),
        View::TokenCost => to_json(views::token_cost(source, request.scenario.as_deref())),
        View::CodeAnalysis => to_json(views::code_analysis(source)),
        View::ScenarioHeatmap => to_json(views::scenario_heatmap(source)),
        View::CostAccuracy => to_json(views::cost_accuracy(source)),
        View::ScenarioDifficulty => to_json(views::scenario_difficulty(source)),
        View::ParallelBenchmarks => to_json(views::parallel_benchmarks(source)),
    }
}

/// Like `render`, but "no data" becomes a `NotFound` response.
pub fn respond(
    source: &dyn IResultSource,
    request: &ViewRequest,
) -> Result<ViewResponse, ViewError> {
    match render(source, request) {
        Ok(body) => Ok(ViewResponse {
            status: ResponseStatus::Ok,
            body,
        }),
        Err(e) if e.is_no_data() => {
            tracing::info!(view = %request.view, "{e}");
            Ok(ViewResponse {
                status: ResponseStatus::NotFound,
                body: json!({ "error": e.to_string(), "code": e.error_code() }),
            })
        }
        Err(e) => Err(e),
    }
}
