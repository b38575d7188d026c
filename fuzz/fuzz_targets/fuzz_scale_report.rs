//! Fuzz target: `decode_report` and `HidScale::read`
//!
//! Feeds arbitrary bytes both as a single report and as a device stream
//! chopped into reads.  Decoding must never panic, and any weight it
//! returns must be finite and non-negative.
//!
//! cargo fuzz run fuzz_scale_report

#![no_main]

use libfuzzer_sys::fuzz_target;
use litterbox::app::ports::ScalePort;
use litterbox::error::SensorError;
use litterbox::sensors::{HidScale, decode_report};

fuzz_target!(|data: &[u8]| {
    if let Ok(w) = decode_report(data) {
        assert!(w.is_finite() && w >= 0.0, "decoded weight out of range: {w}");
    }

    let mut scale = HidScale::new(std::io::Cursor::new(data.to_vec()));
    loop {
        match scale.read() {
            Ok(w) => assert!(w.is_finite()),
            Err(SensorError::EndOfStream) => break,
            Err(SensorError::ShortReport(len)) => assert_ne!(len, 6),
            Err(_) => break,
        }
    }
});
