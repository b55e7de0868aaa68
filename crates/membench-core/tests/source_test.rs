//! Result-source trait objects and tracing setup.

use std::sync::Arc;

use serde_json::{json, Value};

use membench_core::config::LoggingConfig;
use membench_core::tracing::init_tracing;
use membench_core::{IResultSource, InMemoryResultSource};

fn fixture() -> InMemoryResultSource {
    let mut source = InMemoryResultSource::new();
    source.insert("niah-b.json", json!([1]));
    source.insert("niah-a.json", json!([2]));
    source.insert("niah-partial.json", json!([3]));
    source.insert_raw("niah-c.json", b"{broken");
    source
}

#[test]
fn candidates_sorted_and_filtered_through_trait_object() {
    let shared: Arc<dyn IResultSource> = Arc::new(fixture());
    let files = shared.list_candidates("niah").unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["niah-a.json", "niah-b.json", "niah-c.json"]);
    assert_eq!(files[2].payload, Value::Null);
}

#[test]
fn source_is_shareable_across_threads() {
    let shared = Arc::new(fixture());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let source = Arc::clone(&shared);
            std::thread::spawn(move || source.list_candidates("niah").unwrap().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}

#[test]
fn tracing_init_is_idempotent() {
    let config = LoggingConfig {
        filter: Some("membench=debug".to_string()),
        json: Some(true),
    };
    init_tracing(&config);
    init_tracing(&LoggingConfig::default());
}
