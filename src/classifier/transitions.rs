//! Pure transition function: the rule table of the litter box FSM.
//!
//! Each state checks its rules in priority order and the first match wins;
//! ranges overlap, so the order below is part of the behaviour.
//!
//! | State   | Rule (in order)            | Kind         | Next    |
//! |---------|----------------------------|--------------|---------|
//! | Init    | w ∈ normal                 | Init         | Normal  |
//! |         | w > normal.max             | Init         | WithCat |
//! |         | w ∈ empty                  | Init         | Empty   |
//! | Normal  | Δ ∈ cat                    | CatOn        | WithCat |
//! |         | Δ ∈ scoop                  | Scooped      | Normal  |
//! |         | Δ ∈ litter_added           | LitterAdded  | Normal  |
//! |         | w ∈ empty                  | Emptied      | Empty   |
//! | WithCat | −Δ ∈ cat                   | CatOff       | Normal  |
//! | Empty   | w ∈ normal                 | Refilled     | Normal  |
//!
//! A weight that matches no rule keeps the current state.  Init reports
//! kind `Init`, the other states report `Unrecognized`.
//!
//! Nothing here mutates anything: counter and gauge updates come back as
//! [`Effect`]s for the caller to apply.

use heapless::Vec;

use crate::app::events::EventKind;
use crate::app::ports::{Counter, Gauge};

use super::LitterBoxState;
use super::ranges::WeightRanges;

/// Upper bound on effects produced by a single transition.
pub const MAX_EFFECTS: usize = 1;

/// A side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Increment(Counter),
    SetGauge(Gauge, f64),
}

pub type Effects = Vec<Effect, MAX_EFFECTS>;

/// Outcome of feeding one settled weight into the rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub kind: EventKind,
    pub next: LitterBoxState,
    /// Litter-only weight (excluding a cat that just stepped on).
    pub litter_weight: f64,
    pub low_litter: bool,
    /// `false` when no rule matched and the state was kept.
    pub recognised: bool,
    pub effects: Effects,
}

/// Evaluate the rule table for `weight` given the current state and the
/// previous settled weight.
pub fn transition(
    ranges: &WeightRanges,
    state: LitterBoxState,
    last_weight: f64,
    weight: f64,
) -> Transition {
    use EventKind as K;
    use LitterBoxState as S;

    let delta = weight - last_weight;
    let mut litter_weight = weight;

    let matched = match state {
        S::Init => {
            if ranges.normal.contains(weight) {
                Some((K::Init, S::Normal, None))
            } else if ranges.normal.is_above(weight) {
                Some((K::Init, S::WithCat, None))
            } else if ranges.empty.contains(weight) {
                Some((K::Init, S::Empty, None))
            } else {
                None
            }
        }
        S::Normal => {
            if ranges.cat.contains(delta) {
                litter_weight = last_weight;
                Some((K::CatOn, S::WithCat, Some(Effect::SetGauge(Gauge::CatWeight, delta))))
            } else if ranges.scoop.contains(delta) {
                Some((K::Scooped, S::Normal, Some(Effect::Increment(Counter::Scoops))))
            } else if ranges.litter_added.contains(delta) {
                Some((K::LitterAdded, S::Normal, Some(Effect::Increment(Counter::LitterAdded))))
            } else if ranges.empty.contains(weight) {
                Some((K::Emptied, S::Empty, Some(Effect::Increment(Counter::Emptied))))
            } else {
                None
            }
        }
        S::WithCat => {
            if ranges.cat.contains(-delta) {
                Some((K::CatOff, S::Normal, Some(Effect::Increment(Counter::CatWent))))
            } else {
                None
            }
        }
        S::Empty => {
            if ranges.normal.contains(weight) {
                Some((K::Refilled, S::Normal, Some(Effect::Increment(Counter::Refilled))))
            } else {
                None
            }
        }
    };

    let recognised = matched.is_some();
    let (kind, next, effect) = matched.unwrap_or_else(|| {
        let kind = if state == S::Init { K::Init } else { K::Unrecognized };
        (kind, state, None)
    });

    Transition {
        kind,
        next,
        litter_weight,
        low_litter: ranges.low_litter.contains(litter_weight),
        recognised,
        // At most one effect per rule.
        effects: effect.into_iter().collect(),
    }
}
