//! Clock adapters.
//!
//! - [`MonotonicClock`] wraps `std::time::Instant` for live runs.
//! - [`SimulatedClock`] advances a fixed step on every call, so replayed
//!   readings get evenly spaced, reproducible timestamps.

use core::sync::atomic::{AtomicU32, Ordering};
use core::time::Duration;
use std::time::Instant;

use crate::app::ports::ClockPort;

/// Wall-independent monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl MonotonicClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that ticks `step` per `now()` call, starting at its creation time.
pub struct SimulatedClock {
    origin: Instant,
    step: Duration,
    ticks: AtomicU32,
}

impl SimulatedClock {
    pub fn new(step: Duration) -> Self {
        Self::starting_at(Instant::now(), step)
    }

    pub fn starting_at(origin: Instant, step: Duration) -> Self {
        Self {
            origin,
            step,
            ticks: AtomicU32::new(0),
        }
    }

    /// Number of timestamps handed out so far.
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl ClockPort for SimulatedClock {
    fn now(&self) -> Instant {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        self.origin + self.step * tick
    }
}
