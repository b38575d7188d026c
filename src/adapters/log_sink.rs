//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each classified event to the `log`
//! facade.  The binary routes those records to stderr through
//! `tracing-subscriber`.

use log::{info, warn};

use crate::app::events::{EventKind, LitterBoxEvent};
use crate::app::ports::EventSink;

/// Adapter that logs every [`LitterBoxEvent`].
pub struct LogEventSink {
    emitted: u64,
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self { emitted: 0 }
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &LitterBoxEvent) {
        self.emitted += 1;
        let litter = if event.low_litter { "LOW" } else { "OK" };
        match event.kind {
            EventKind::Unrecognized => warn!(
                "EVENT | {} | state={:?} | weight={:.2}lb | litter={}",
                event.kind, event.state, event.weight, litter
            ),
            _ => info!(
                "EVENT | {} | state={:?} | weight={:.2}lb | litter={}",
                event.kind, event.state, event.weight, litter
            ),
        }
    }
}
