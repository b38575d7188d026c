//! Fuzz target: `StabilityFilter::push`
//!
//! Interprets the input as (gap, weight) pairs and checks the filter's
//! invariants after every push: the window stays within the configured
//! duration and a value is never emitted twice in a row.
//!
//! cargo fuzz run fuzz_stability_filter

#![no_main]

use std::time::{Duration, Instant};

use libfuzzer_sys::fuzz_target;
use litterbox::stability::{Sample, StabilityFilter};

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let stable = Duration::from_millis(100 + u64::from(first) * 20);
    let mut filter = StabilityFilter::new(stable);
    let mut at = Instant::now();
    let mut last = None;

    for pair in rest.chunks_exact(2) {
        at += Duration::from_millis(u64::from(pair[0]) * 10);
        // Few distinct weights so stable runs actually occur.
        let weight = f64::from(pair[1] % 8);
        if let Some(v) = filter.push(Sample::new(at, weight)) {
            assert_ne!(Some(v), last, "value emitted twice in a row");
            last = Some(v);
        }
        assert!(filter.window().all(|s| at.duration_since(s.at) <= stable));
    }
});
