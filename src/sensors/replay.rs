//! Replay sources: readings from text or memory instead of a device.
//!
//! [`LineScale`] reads one reading per line (stdin or a recorded log);
//! [`ReplayScale`] serves a fixed list and is what the host tests drive
//! the pipeline with.

use std::io::BufRead;

use log::warn;

use crate::app::ports::ScalePort;
use crate::error::SensorError;

/// One reading per line.  Blank lines are skipped.
pub struct LineScale<R> {
    input: R,
    line: String,
    line_no: u64,
}

impl<R: BufRead> LineScale<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> ScalePort for LineScale<R> {
    fn read(&mut self) -> Result<f64, SensorError> {
        loop {
            self.line.clear();
            match self.input.read_line(&mut self.line) {
                Ok(0) => return Err(SensorError::EndOfStream),
                Ok(_) => {}
                Err(e) => {
                    warn!("Replay: read error after line {}: {}", self.line_no, e);
                    return Err(SensorError::ReadFailed);
                }
            }
            self.line_no += 1;

            let text = self.line.trim();
            if text.is_empty() {
                continue;
            }
            return match text.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => {
                    warn!("Replay: line {} is not a reading: {:?}", self.line_no, text);
                    Err(SensorError::Malformed)
                }
            };
        }
    }
}

/// In-memory reading list, served in order.
pub struct ReplayScale {
    readings: std::vec::IntoIter<f64>,
}

impl ReplayScale {
    pub fn new(readings: impl Into<Vec<f64>>) -> Self {
        Self {
            readings: readings.into().into_iter(),
        }
    }
}

impl ScalePort for ReplayScale {
    fn read(&mut self) -> Result<f64, SensorError> {
        self.readings.next().ok_or(SensorError::EndOfStream)
    }
}
