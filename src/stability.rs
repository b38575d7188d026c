//! Stability filter: debounces the raw scale stream into settled weights.
//!
//! The scale reports several times per second and every touch of the box
//! makes the reading bounce.  The filter keeps a sliding window of the
//! readings from the last `stable_duration` and reports a value once the
//! whole window agrees on it.
//!
//! ```text
//!  readings ─▶ [ window: now − stable_duration .. now ] ─▶ constant? ─▶ settled
//! ```
//!
//! ## Modes
//!
//! | Mode     | Window constant | Action                                   |
//! |----------|-----------------|------------------------------------------|
//! | Changing | yes             | → Stable; emit if ≠ last emitted value   |
//! | Stable   | no              | → Changing                               |
//! | any      | unchanged       | nothing                                  |
//!
//! ## Cold start
//!
//! Stability is judged on whatever the window currently holds, so with
//! `min_span == 0` the very first reading is a one-sample window and is
//! reported immediately.  A non-zero `min_span` additionally requires the
//! oldest in-window sample to be at least that old.

use core::time::Duration;
use std::collections::VecDeque;
use std::time::Instant;

use log::debug;

/// One raw reading stamped with its arrival time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub at: Instant,
    pub value: f64,
}

impl Sample {
    pub const fn new(at: Instant, value: f64) -> Self {
        Self { at, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Changing,
    Stable,
}

pub struct StabilityFilter {
    stable_duration: Duration,
    min_span: Duration,
    /// Time-ordered, oldest first.
    window: VecDeque<Sample>,
    mode: Mode,
    /// `None` until the first emission.
    last_emitted: Option<f64>,
}

impl StabilityFilter {
    pub fn new(stable_duration: Duration) -> Self {
        Self::with_min_span(stable_duration, Duration::ZERO)
    }

    pub fn with_min_span(stable_duration: Duration, min_span: Duration) -> Self {
        Self {
            stable_duration,
            min_span,
            window: VecDeque::new(),
            mode: Mode::Changing,
            last_emitted: None,
        }
    }

    /// Feed one reading.  Returns the settled value when the window has
    /// just become constant on a value different from the last one emitted.
    ///
    /// Samples must arrive in non-decreasing time order.
    pub fn push(&mut self, sample: Sample) -> Option<f64> {
        self.window.push_back(sample);
        self.prune(sample.at);
        let stable = self.is_stable(sample.at);

        match self.mode {
            Mode::Changing if stable => {
                self.mode = Mode::Stable;
                if self.last_emitted != Some(sample.value) {
                    debug!(
                        "Stability: settled at {:.2} ({} samples in window)",
                        sample.value,
                        self.window.len()
                    );
                    self.last_emitted = Some(sample.value);
                    return Some(sample.value);
                }
            }
            Mode::Stable if !stable => {
                self.mode = Mode::Changing;
            }
            _ => {}
        }
        None
    }

    /// Drop samples older than `now - stable_duration` from the front.
    fn prune(&mut self, now: Instant) {
        while let Some(oldest) = self.window.front() {
            if now.saturating_duration_since(oldest.at) > self.stable_duration {
                self.window.pop_front();
            } else {
                break;
            }
        }
    }

    // Readings are quantized by the scale, so exact comparison is intended.
    #[allow(clippy::float_cmp)]
    fn is_stable(&self, now: Instant) -> bool {
        let Some(first) = self.window.front() else {
            return false;
        };
        if now.saturating_duration_since(first.at) < self.min_span {
            return false;
        }
        self.window.iter().all(|s| s.value == first.value)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_emitted(&self) -> Option<f64> {
        self.last_emitted
    }

    /// Samples currently in the window, oldest first.
    pub fn window(&self) -> impl Iterator<Item = &Sample> {
        self.window.iter()
    }

    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    pub fn stable_duration(&self) -> Duration {
        self.stable_duration
    }
}
