//! JSON-lines event sink adapter.
//!
//! Writes one JSON object per event, newline terminated, to any
//! [`Write`]: stdout for the binary, a buffer in tests.  Write failures
//! are logged and the event dropped; a broken consumer never stops the
//! pipeline.

use std::io::Write;

use log::warn;

use crate::app::events::LitterBoxEvent;
use crate::app::ports::EventSink;

pub struct JsonLinesSink<W> {
    out: W,
    failures: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, failures: 0 }
    }

    /// Events that could not be written.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, event: &LitterBoxEvent) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn emit(&mut self, event: &LitterBoxEvent) {
        if let Err(e) = self.write_line(event) {
            self.failures += 1;
            warn!("JSON sink: dropping {} event: {}", event.kind, e);
        }
    }
}
