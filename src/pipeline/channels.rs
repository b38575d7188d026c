//! Inter-stage channels.
//!
//! Each hop of the pipeline is an `embassy-sync` bounded channel of depth
//! one, so a producer can run at most one item ahead of its consumer.
//! Channels are owned by a single [`run`](super::run) call rather than
//! being statics, so independent pipelines can coexist in one process.
//!
//! ```text
//!  reader ──Pipe<Sample>──▶ stability ──Pipe<f64>──▶ classifier ──Pipe<LitterBoxEvent>──▶ sink
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::app::events::LitterBoxEvent;
use crate::stability::Sample;

/// Items a stage may hold before its producer blocks.
pub const PIPE_DEPTH: usize = 1;

/// Stream item.  `End` is sent exactly once, after the last item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message<T> {
    Item(T),
    End,
}

pub type Pipe<T> = Channel<CriticalSectionRawMutex, Message<T>, PIPE_DEPTH>;

/// The three hops of one pipeline run.
pub struct Pipes {
    pub raw: Pipe<Sample>,
    pub settled: Pipe<f64>,
    pub events: Pipe<LitterBoxEvent>,
}

impl Pipes {
    pub const fn new() -> Self {
        Self {
            raw: Channel::new(),
            settled: Channel::new(),
            events: Channel::new(),
        }
    }
}

impl Default for Pipes {
    fn default() -> Self {
        Self::new()
    }
}
