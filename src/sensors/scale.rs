//! USB HID postal scale driver.
//!
//! The scale streams fixed 6-byte input reports as fast as it measures
//! (roughly six per second).  On Linux each report is one `read()` from
//! the `/dev/hidrawN` node.
//!
//! ## Report layout
//!
//! | Byte | Meaning                                  |
//! |------|------------------------------------------|
//! | 0    | report id                                |
//! | 1    | status                                   |
//! | 2    | unit (3 = kilograms, otherwise pounds)   |
//! | 3    | scaling exponent (ignored)               |
//! | 4..6 | weight, little-endian, tenths of a unit  |
//!
//! Kilogram readings are converted to pounds and rounded to hundredths so
//! the classifier always sees a single unit.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::{info, warn};

use crate::app::ports::ScalePort;
use crate::error::{Error, SensorError};

/// Length of one HID input report.
pub const REPORT_LEN: usize = 6;

/// Unit byte value reported while the scale is in kilogram mode.
const KG_MODE: u8 = 3;

const LB_PER_KG: f64 = 2.20462;

/// Decode one input report into a weight in pounds.
pub fn decode_report(report: &[u8]) -> Result<f64, SensorError> {
    if report.len() != REPORT_LEN {
        return Err(SensorError::ShortReport(report.len()));
    }
    let tenths = u16::from_le_bytes([report[4], report[5]]);
    let mut weight = f64::from(tenths) / 10.0;
    if report[2] == KG_MODE {
        weight = (100.0 * weight * LB_PER_KG + 0.5).floor() / 100.0;
    }
    Ok(weight)
}

/// Scale driver over any byte source that yields whole reports per read.
pub struct HidScale<R> {
    device: R,
    reports: u64,
}

impl HidScale<File> {
    /// Open a hidraw device node.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                info!("Scale: opened {}", path.display());
                Ok(Self::new(file))
            }
            Err(e) => {
                warn!("Scale: cannot open {}: {}", path.display(), e);
                Err(Error::Init("cannot open scale device"))
            }
        }
    }
}

impl<R: Read> HidScale<R> {
    pub fn new(device: R) -> Self {
        Self { device, reports: 0 }
    }

    /// Reports successfully decoded so far.
    pub fn reports(&self) -> u64 {
        self.reports
    }
}

impl<R: Read> ScalePort for HidScale<R> {
    fn read(&mut self) -> Result<f64, SensorError> {
        let mut buf = [0u8; REPORT_LEN];
        let len = loop {
            match self.device.read(&mut buf) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("Scale: read error: {}", e);
                    return Err(SensorError::ReadFailed);
                }
            }
        };
        if len == 0 {
            return Err(SensorError::EndOfStream);
        }
        let weight = decode_report(&buf[..len])?;
        self.reports = self.reports.saturating_add(1);
        Ok(weight)
    }
}
