//! End-to-end pipeline runs: scripted scale → filter → classifier → sink.

use std::io::Cursor;

use litterbox::app::events::EventKind;
use litterbox::app::ports::{Counter, Gauge};
use litterbox::classifier::LitterBoxState;
use litterbox::config::SystemConfig;
use litterbox::error::{Error, SensorError};
use litterbox::pipeline::{self, PipelineSummary};
use litterbox::sensors::LineScale;

use crate::mock_ports::{MockMetrics, RecordingSink, ScriptClock, ScriptScale, timed};

const TICK_MS: u64 = 200;

/// Readings at a fixed 200 ms cadence.
#[derive(Default)]
struct Trace {
    at_ms: u64,
    readings: Vec<(u64, f64)>,
}

impl Trace {
    /// Repeat `weight` for `ms` milliseconds.
    fn hold(mut self, weight: f64, ms: u64) -> Self {
        for _ in 0..ms / TICK_MS {
            self.push(weight);
        }
        self
    }

    /// One reading per value, e.g. a cat climbing in.
    fn bounce(mut self, weights: &[f64]) -> Self {
        for &w in weights {
            self.push(w);
        }
        self
    }

    fn push(&mut self, weight: f64) {
        self.readings.push((self.at_ms, weight));
        self.at_ms += TICK_MS;
    }

    fn run(&self, config: &SystemConfig) -> (PipelineSummary, MockMetrics, RecordingSink) {
        let (scale, clock) = timed(&self.readings);
        let metrics = MockMetrics::new();
        let mut sink = RecordingSink::new();
        let summary = pipeline::run(config, scale, &clock, &metrics, &mut sink).unwrap();
        (summary, metrics, sink)
    }
}

// ── Full visit ────────────────────────────────────────────────

#[test]
fn cat_visit_and_scoop_produce_events_in_order() {
    let trace = Trace::default()
        .hold(10.0, 4000)
        .bounce(&[14.0, 19.5, 23.0, 21.5])
        .hold(22.0, 4000)
        .bounce(&[17.0, 12.5])
        .hold(10.0, 4000)
        .bounce(&[8.0, 11.0])
        .hold(9.5, 4000);
    let (summary, metrics, sink) = trace.run(&SystemConfig::default());

    assert_eq!(
        sink.kinds(),
        [EventKind::Init, EventKind::CatOn, EventKind::CatOff, EventKind::Scooped]
    );
    assert_eq!(sink.weights(), [10.0, 22.0, 10.0, 9.5]);
    assert_eq!(sink.events.last().map(|e| e.state), Some(LitterBoxState::Normal));

    assert_eq!(summary.samples, trace.readings.len() as u64);
    assert_eq!(summary.settled, 4);
    assert_eq!(summary.events, 4);

    assert_eq!(metrics.increments(), [Counter::CatWent, Counter::Scoops]);
    assert_eq!(metrics.last_gauge(Gauge::CatWeight), Some(12.0));
    assert_eq!(metrics.last_gauge(Gauge::CurrentWeight), Some(9.5));
}

#[test]
fn brief_spike_does_not_repeat_settled_value() {
    let trace = Trace::default()
        .hold(10.0, 4000)
        .bounce(&[30.0])
        .hold(10.0, 4000);
    let (summary, metrics, sink) = trace.run(&SystemConfig::default());

    assert_eq!(sink.kinds(), [EventKind::Init]);
    assert_eq!(summary.settled, 1);
    assert!(metrics.increments().is_empty());
}

#[test]
fn empty_then_refill() {
    let trace = Trace::default()
        .hold(10.0, 4000)
        .bounce(&[4.0])
        .hold(1.0, 4000)
        .bounce(&[6.0])
        .hold(10.0, 4000);
    let (_, metrics, sink) = trace.run(&SystemConfig::default());

    assert_eq!(
        sink.kinds(),
        [EventKind::Init, EventKind::Emptied, EventKind::Refilled]
    );
    assert_eq!(metrics.increments(), [Counter::Emptied, Counter::Refilled]);
}

#[test]
fn unrecognised_weight_keeps_state_and_pipeline_runs_on() {
    let trace = Trace::default()
        .hold(10.0, 4000)
        .bounce(&[40.0])
        .hold(35.0, 4000)
        .bounce(&[20.0])
        .hold(10.0, 4000);
    let (_, _, sink) = trace.run(&SystemConfig::default());

    // 10 → 35 is too big a jump for a cat; 35 → 10 then reads as litter
    // removed far beyond a scoop.
    assert_eq!(
        sink.kinds(),
        [EventKind::Init, EventKind::Unrecognized, EventKind::Unrecognized]
    );
    assert!(sink.events.iter().all(|e| e.state == LitterBoxState::Normal));
}

// ── Cold start ────────────────────────────────────────────────

#[test]
fn first_reading_settles_immediately_by_default() {
    let trace = Trace::default().bounce(&[10.0, 20.0]);
    let (_, _, sink) = trace.run(&SystemConfig::default());
    assert_eq!(sink.weights(), [10.0]);
}

#[test]
fn min_span_defers_first_settle() {
    let config = SystemConfig {
        min_stable_span_ms: 1000,
        ..SystemConfig::default()
    };

    let (_, _, sink) = Trace::default().bounce(&[10.0, 20.0]).run(&config);
    assert!(sink.events.is_empty());

    let (_, _, sink) = Trace::default().hold(10.0, 2000).run(&config);
    assert_eq!(sink.weights(), [10.0]);
}

// ── Termination ───────────────────────────────────────────────

#[test]
fn empty_source_finishes_cleanly() {
    let metrics = MockMetrics::new();
    let mut sink = RecordingSink::new();
    let clock = ScriptClock::new([]);
    let summary = pipeline::run(
        &SystemConfig::default(),
        ScriptScale::new(Vec::new()),
        &clock,
        &metrics,
        &mut sink,
    )
    .unwrap();
    assert_eq!(summary, PipelineSummary::default());
    assert!(metrics.calls().is_empty());
}

#[test]
fn fatal_read_error_is_returned_after_drain() {
    let scale = ScriptScale::new(vec![
        Ok(10.0),
        Err(SensorError::Malformed),
        Ok(10.0),
        Err(SensorError::ShortReport(3)),
        Ok(22.0),
    ]);
    let clock = ScriptClock::new((0..2).map(|i| std::time::Duration::from_millis(200 * i)));
    let metrics = MockMetrics::new();
    let mut sink = RecordingSink::new();

    let result = pipeline::run(&SystemConfig::default(), scale, &clock, &metrics, &mut sink);

    assert_eq!(result, Err(Error::Sensor(SensorError::ShortReport(3))));
    assert_eq!(sink.kinds(), [EventKind::Init]);
    assert_eq!(metrics.last_gauge(Gauge::CurrentWeight), Some(10.0));
}

#[test]
fn line_replay_skips_garbage() {
    let input = Cursor::new("10.0\n\nnot-a-weight\n10.0\ninf\n10.0\n");
    let metrics = MockMetrics::new();
    let mut sink = RecordingSink::new();
    let clock = ScriptClock::new((0..3).map(|i| std::time::Duration::from_millis(200 * i)));

    let summary = pipeline::run(
        &SystemConfig::default(),
        LineScale::new(input),
        &clock,
        &metrics,
        &mut sink,
    )
    .unwrap();

    assert_eq!(summary.samples, 3);
    assert_eq!(sink.kinds(), [EventKind::Init]);
}
