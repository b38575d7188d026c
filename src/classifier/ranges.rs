//! Inclusive weight ranges: the classification vocabulary.
//!
//! Every rule in the transition table is a membership or threshold test
//! against one of six named ranges.  Ranges overlap on purpose (a cat
//! delta also fits `litter_added`); rule priority decides.

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` interval in pounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

impl WeightRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min <= value <= max`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Strictly above the upper bound.
    pub fn is_above(&self, value: f64) -> bool {
        value > self.max
    }

    /// Both bounds are finite and ordered.
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// The six ranges the classifier matches against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightRanges {
    /// Weight delta of a cat stepping on or off.
    pub cat: WeightRange,
    /// Weight delta of a scoop (removal of waste).
    pub scoop: WeightRange,
    /// Absolute weight of a box with a normal amount of litter.
    pub normal: WeightRange,
    /// Litter-only weight that warrants a low-litter warning.
    pub low_litter: WeightRange,
    /// Weight delta of fresh litter being topped up.
    pub litter_added: WeightRange,
    /// Absolute weight of an empty box.
    pub empty: WeightRange,
}

impl Default for WeightRanges {
    fn default() -> Self {
        Self {
            cat: WeightRange::new(9.0, 12.0),
            scoop: WeightRange::new(-2.0, 0.0),
            normal: WeightRange::new(2.0, 20.0),
            low_litter: WeightRange::new(2.0, 7.0),
            litter_added: WeightRange::new(0.0, 20.0),
            empty: WeightRange::new(0.0, 2.0),
        }
    }
}

impl WeightRanges {
    /// Name of the first malformed range, if any.
    pub fn first_malformed(&self) -> Option<&'static str> {
        [
            ("ranges.cat", self.cat),
            ("ranges.scoop", self.scoop),
            ("ranges.normal", self.normal),
            ("ranges.low_litter", self.low_litter),
            ("ranges.litter_added", self.litter_added),
            ("ranges.empty", self.empty),
        ]
        .into_iter()
        .find(|(_, range)| !range.is_well_formed())
        .map(|(name, _)| name)
    }
}
