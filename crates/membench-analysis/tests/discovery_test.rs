//! Directory discovery: name matching, partial-run exclusion, lenient reads.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;

use membench_analysis::DirectoryResultSource;
use membench_core::config::ResultsConfig;
use membench_core::{DiscoveryError, IResultSource, MembenchErrorCode};

// ============================================================================
// Helpers
// ============================================================================

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn names(source: &dyn IResultSource, prefix: &str) -> Vec<String> {
    source
        .list_candidates(prefix)
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect()
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn matches_prefix_and_extension_only() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "benchmark-2024-01.json", "[]");
    write(dir.path(), "benchmark-2024-02.json", "[]");
    write(dir.path(), "benchmark.json", "[]");
    write(dir.path(), "benchmark-2024-03.txt", "[]");
    write(dir.path(), "other-benchmark-1.json", "[]");
    write(dir.path(), "depth-comparison-1.json", "[]");

    let source = DirectoryResultSource::new(dir.path());
    assert_eq!(
        names(&source, "benchmark"),
        vec!["benchmark-2024-01.json", "benchmark-2024-02.json"]
    );
    assert_eq!(names(&source, "depth-comparison"), vec!["depth-comparison-1.json"]);
    assert!(names(&source, "niah").is_empty());
}

#[test]
fn partial_runs_are_never_discovered() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "benchmark-full.json", "[]");
    write(dir.path(), "benchmark-partial.json", "[]");
    write(dir.path(), "benchmark-run-partial-3.json", "[]");

    let source = DirectoryResultSource::new(dir.path());
    assert_eq!(names(&source, "benchmark"), vec!["benchmark-full.json"]);
}

#[test]
fn custom_partial_marker_from_config() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "niah-a.json", "{}");
    write(dir.path(), "niah-wip.json", "{}");
    write(dir.path(), "niah-partial.json", "{}");

    let config = ResultsConfig {
        dir: Some(dir.path().to_path_buf()),
        partial_marker: Some("wip".to_string()),
    };
    let source = DirectoryResultSource::from_config(&config);
    assert_eq!(source.root(), dir.path());
    assert_eq!(names(&source, "niah"), vec!["niah-a.json", "niah-partial.json"]);
}

#[test]
fn directories_with_matching_names_are_skipped() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("locomo-nested.json")).unwrap();
    write(dir.path(), "locomo-real.json", "[]");

    let source = DirectoryResultSource::new(dir.path());
    assert_eq!(names(&source, "locomo"), vec!["locomo-real.json"]);
}

// ============================================================================
// Payloads
// ============================================================================

#[test]
fn malformed_json_becomes_null_and_does_not_abort() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "benchmark-a.json", "{not json");
    write(dir.path(), "benchmark-b.json", r#"{"results": [{"strategyName": "x"}]}"#);

    let source = DirectoryResultSource::new(dir.path());
    let files = source.list_candidates("benchmark").unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].payload, Value::Null);
    assert_eq!(files[1].payload, json!({"results": [{"strategyName": "x"}]}));
}

#[test]
fn every_call_rereads_the_directory() {
    let dir = TempDir::new().unwrap();
    let source = DirectoryResultSource::new(dir.path());
    assert!(names(&source, "multi-hop").is_empty());

    write(dir.path(), "multi-hop-1.json", "[]");
    assert_eq!(names(&source, "multi-hop"), vec!["multi-hop-1.json"]);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn missing_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let source = DirectoryResultSource::new(dir.path().join("does-not-exist"));
    let err = source.list_candidates("benchmark").unwrap_err();
    assert!(matches!(err, DiscoveryError::Io { .. }));
    assert_eq!(err.error_code(), "DISCOVERY_IO");
}

#[test]
fn empty_prefix_rejected() {
    let dir = TempDir::new().unwrap();
    let source = DirectoryResultSource::new(dir.path());
    let err = source.list_candidates("").unwrap_err();
    assert!(matches!(err, DiscoveryError::InvalidPrefix { .. }));
    assert_eq!(err.error_code(), "INVALID_PREFIX");
}
