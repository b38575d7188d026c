//! Event classifier: persistent litter box state machine.
//!
//! ```text
//!            ┌────────── refilled ───────────┐
//!            ▼                               │
//!  Init ──▶ Normal ── emptied ──────────▶  Empty
//!   │  │     │  ▲ ◀─ scooped / litter_added
//!   │  │  cat_on  cat_off
//!   │  │     ▼  │
//!   │  └──▶ WithCat
//!   └───────────────────────────────────▶ Empty
//! ```
//!
//! The rule table itself is the pure [`transitions::transition`]
//! function.  [`EventClassifier`] is the thin stateful shell around it:
//! it remembers the state and the last settled weight, applies the
//! returned effects through a [`MetricsPort`], and logs weights the
//! model cannot explain.

pub mod ranges;
pub mod transitions;

use log::{debug, warn};
use serde::Serialize;

use crate::app::events::LitterBoxEvent;
use crate::app::ports::MetricsPort;

pub use ranges::{WeightRange, WeightRanges};
pub use transitions::{Effect, Transition, transition};

/// Classifier state.  Lives for the lifetime of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LitterBoxState {
    /// No settled weight seen yet.
    #[default]
    Init,
    /// Box holds litter and no cat.
    Normal,
    /// A cat is on the box.
    WithCat,
    /// Box has been emptied.
    Empty,
}

impl LitterBoxState {
    pub const ALL: [Self; 4] = [Self::Init, Self::Normal, Self::WithCat, Self::Empty];
}

/// Stateful shell around the rule table.
pub struct EventClassifier {
    ranges: WeightRanges,
    state: LitterBoxState,
    /// Previous settled weight; starts at 0.
    last_weight: f64,
    /// Settled weights processed so far.
    processed: u64,
}

impl EventClassifier {
    pub fn new(ranges: WeightRanges) -> Self {
        Self::with_state(ranges, LitterBoxState::Init, 0.0)
    }

    /// Start from an explicit `(state, last_weight)` pair.
    pub fn with_state(ranges: WeightRanges, state: LitterBoxState, last_weight: f64) -> Self {
        Self {
            ranges,
            state,
            last_weight,
            processed: 0,
        }
    }

    /// Classify one settled weight, advance the state machine and apply
    /// counter/gauge effects to `metrics`.
    pub fn classify(&mut self, weight: f64, metrics: &impl MetricsPort) -> LitterBoxEvent {
        let t = transition(&self.ranges, self.state, self.last_weight, weight);

        if !t.recognised {
            warn!(
                "Unrecognized weight {:.2} in {:?} (last {:.2}, delta {:+.2})",
                weight,
                self.state,
                self.last_weight,
                weight - self.last_weight
            );
        } else if t.next != self.state {
            debug!("Classifier: {:?} -> {:?} ({})", self.state, t.next, t.kind);
        }

        for effect in t.effects.iter() {
            match *effect {
                Effect::Increment(counter) => metrics.increment(counter),
                Effect::SetGauge(gauge, value) => metrics.set_gauge(gauge, value),
            }
        }

        self.last_weight = weight;
        self.state = t.next;
        self.processed = self.processed.saturating_add(1);

        LitterBoxEvent {
            kind: t.kind,
            state: self.state,
            weight,
            low_litter: t.low_litter,
        }
    }

    pub fn state(&self) -> LitterBoxState {
        self.state
    }

    pub fn last_weight(&self) -> f64 {
        self.last_weight
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }
}
