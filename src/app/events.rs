//! Outbound domain events.
//!
//! The classifier emits one [`LitterBoxEvent`] per settled weight through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log them, print JSON lines, etc.

use core::fmt;

use serde::Serialize;

use crate::classifier::LitterBoxState;

/// What the classifier concluded happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// First settled reading; establishes the starting state.
    Init,
    CatOn,
    CatOff,
    Scooped,
    LitterAdded,
    Emptied,
    Refilled,
    /// The weight change matched no rule for the current state.
    Unrecognized,
}

impl EventKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::CatOn => "cat_on",
            Self::CatOff => "cat_off",
            Self::Scooped => "scooped",
            Self::LitterAdded => "litter_added",
            Self::Emptied => "emptied",
            Self::Refilled => "refilled",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified settled weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LitterBoxEvent {
    pub kind: EventKind,
    /// State the classifier is in after this event.
    pub state: LitterBoxState,
    /// The settled weight that triggered the event (pounds).
    pub weight: f64,
    /// Litter-only weight is in the low-litter range.
    pub low_litter: bool,
}
