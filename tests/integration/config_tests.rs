//! Config file → pipeline: overrides from JSON change classification.

use std::io::Write;

use litterbox::adapters::{JsonConfigFile, JsonLinesSink};
use litterbox::app::events::EventKind;
use litterbox::app::ports::{ConfigError, ConfigPort};
use litterbox::config::EventOutput;
use litterbox::pipeline;

use crate::mock_ports::{MockMetrics, RecordingSink, timed};

fn config_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

/// 10 lb for a second, then 32 lb for a second, at 100 ms ticks.
fn ten_then_thirty_two() -> Vec<(u64, f64)> {
    (0..20u64)
        .map(|i| (i * 100, if i < 10 { 10.0 } else { 32.0 }))
        .collect()
}

#[test]
fn widened_cat_range_recognises_heavier_cat() {
    let file = config_file(
        r#"{
            "stable_duration_ms": 500,
            "ranges": { "cat": { "min": 9, "max": 25 } }
        }"#,
    );
    let config = JsonConfigFile::new(file.path()).load().unwrap();

    let (scale, clock) = timed(&ten_then_thirty_two());
    let metrics = MockMetrics::new();
    let mut sink = RecordingSink::new();
    pipeline::run(&config, scale, &clock, &metrics, &mut sink).unwrap();

    assert_eq!(sink.kinds(), [EventKind::Init, EventKind::CatOn]);
}

#[test]
fn default_cat_range_rejects_same_jump() {
    let file = config_file(r#"{ "stable_duration_ms": 500 }"#);
    let config = JsonConfigFile::new(file.path()).load().unwrap();

    let (scale, clock) = timed(&ten_then_thirty_two());
    let metrics = MockMetrics::new();
    let mut sink = RecordingSink::new();
    pipeline::run(&config, scale, &clock, &metrics, &mut sink).unwrap();

    assert_eq!(sink.kinds(), [EventKind::Init, EventKind::Unrecognized]);
}

#[test]
fn inverted_range_is_rejected_at_load() {
    let file = config_file(r#"{ "ranges": { "scoop": { "min": 0, "max": -2 } } }"#);
    let result = JsonConfigFile::new(file.path()).load();
    assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
}

#[test]
fn json_lines_output_through_pipeline() {
    let file = config_file(r#"{ "stable_duration_ms": 500, "event_output": "json_lines" }"#);
    let config = JsonConfigFile::new(file.path()).load().unwrap();
    assert_eq!(config.event_output, EventOutput::JsonLines);

    let (scale, clock) = timed(&ten_then_thirty_two());
    let metrics = MockMetrics::new();
    let mut sink = JsonLinesSink::new(Vec::new());
    pipeline::run(&config, scale, &clock, &metrics, &mut sink).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let kinds: Vec<String> = text
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["kind"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(kinds, ["init", "unrecognized"]);
}
