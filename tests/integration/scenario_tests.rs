//! Reference classification scenarios against the default ranges.

use litterbox::app::events::EventKind;
use litterbox::app::ports::{Counter, Gauge};
use litterbox::classifier::{EventClassifier, LitterBoxState, WeightRanges};

use crate::mock_ports::{MetricsCall, MockMetrics};

fn classify_from(
    state: LitterBoxState,
    last_weight: f64,
    weight: f64,
) -> (EventKind, LitterBoxState, f64, bool, MockMetrics) {
    let metrics = MockMetrics::new();
    let mut classifier = EventClassifier::with_state(WeightRanges::default(), state, last_weight);
    let event = classifier.classify(weight, &metrics);
    assert_eq!(classifier.state(), event.state);
    assert_eq!(classifier.last_weight(), weight);
    (event.kind, event.state, event.weight, event.low_litter, metrics)
}

#[test]
fn heavy_first_reading_means_cat_already_on() {
    let (kind, state, weight, low, metrics) = classify_from(LitterBoxState::Init, 0.0, 25.0);
    assert_eq!((kind, state, weight, low), (EventKind::Init, LitterBoxState::WithCat, 25.0, false));
    assert!(metrics.calls().is_empty());
}

#[test]
fn small_drop_is_a_scoop() {
    let (kind, state, weight, low, metrics) = classify_from(LitterBoxState::Normal, 5.0, 4.0);
    assert_eq!((kind, state, weight, low), (EventKind::Scooped, LitterBoxState::Normal, 4.0, true));
    assert_eq!(metrics.calls(), [MetricsCall::Increment(Counter::Scoops)]);
}

#[test]
fn cat_on_judges_litter_by_pre_cat_weight() {
    let (kind, state, weight, low, metrics) = classify_from(LitterBoxState::Normal, 5.0, 15.0);
    assert_eq!((kind, state, weight, low), (EventKind::CatOn, LitterBoxState::WithCat, 15.0, true));
    assert_eq!(metrics.last_gauge(Gauge::CatWeight), Some(10.0));
    assert!(metrics.increments().is_empty());
}

#[test]
fn cat_off_counts_a_visit() {
    let (kind, state, weight, low, metrics) = classify_from(LitterBoxState::WithCat, 15.0, 5.0);
    assert_eq!((kind, state, weight, low), (EventKind::CatOff, LitterBoxState::Normal, 5.0, true));
    assert_eq!(metrics.calls(), [MetricsCall::Increment(Counter::CatWent)]);
}

#[test]
fn refill_after_empty() {
    let (kind, state, weight, low, metrics) = classify_from(LitterBoxState::Empty, 1.0, 10.0);
    assert_eq!((kind, state, weight, low), (EventKind::Refilled, LitterBoxState::Normal, 10.0, false));
    assert_eq!(metrics.calls(), [MetricsCall::Increment(Counter::Refilled)]);
}

#[test]
fn same_inputs_same_outcome_regardless_of_history() {
    // A classifier that walked through a whole visit must agree with a
    // fresh one started at the same (state, last_weight).
    let metrics = MockMetrics::new();
    let mut walked = EventClassifier::new(WeightRanges::default());
    for w in [10.0, 21.0, 10.0, 9.0] {
        let _ = walked.classify(w, &metrics);
    }
    assert_eq!(walked.state(), LitterBoxState::Normal);

    let mut fresh =
        EventClassifier::with_state(WeightRanges::default(), walked.state(), walked.last_weight());
    assert_eq!(walked.classify(19.5, &metrics), fresh.classify(19.5, &metrics));
}

#[test]
fn hid_readings_on_range_bounds_classify_exactly() {
    use litterbox::app::ports::ScalePort;
    use litterbox::sensors::HidScale;

    let report = |tenths: u16| {
        let [lo, hi] = tenths.to_le_bytes();
        [3u8, 4, 12, 0, lo, hi]
    };
    let mut bytes = Vec::new();
    for tenths in [42, 162, 43, 23] {
        bytes.extend_from_slice(&report(tenths));
    }
    let mut scale = HidScale::new(std::io::Cursor::new(bytes));
    let mut read = || scale.read().unwrap();

    let (cat_last, cat_on, scoop_last, scooped) = (read(), read(), read(), read());

    let (kind, ..) = classify_from(LitterBoxState::Normal, cat_last, cat_on);
    assert_eq!(kind, EventKind::CatOn);
    let (kind, ..) = classify_from(LitterBoxState::Normal, scoop_last, scooped);
    assert_eq!(kind, EventKind::Scooped);
}
