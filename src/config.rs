//! System configuration parameters
//!
//! All tunable parameters for the litter box monitor.  Every field has a
//! default; a JSON file only needs to name the values it overrides.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::classifier::WeightRanges;

/// Where classified events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOutput {
    /// One structured log line per event.
    #[default]
    Log,
    /// One JSON object per line on stdout.
    JsonLines,
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Stability filter ---
    /// How long a reading must hold before it counts as settled (milliseconds)
    pub stable_duration_ms: u32,
    /// Minimum span the window must cover before it may be declared stable
    /// (milliseconds).  0 keeps the single-sample cold-start behaviour.
    pub min_stable_span_ms: u32,

    // --- Classification ---
    /// Weight ranges (pounds) matched by the event classifier
    pub ranges: WeightRanges,

    // --- Collaborators ---
    /// hidraw device node of the USB scale; stdin is replayed when unset
    pub scale_device: Option<String>,
    /// Event sink selection
    pub event_output: EventOutput,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            stable_duration_ms: 3000,
            min_stable_span_ms: 0,
            ranges: WeightRanges::default(),
            scale_device: None,
            event_output: EventOutput::Log,
        }
    }
}

impl SystemConfig {
    pub fn stable_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.stable_duration_ms))
    }

    pub fn min_stable_span(&self) -> Duration {
        Duration::from_millis(u64::from(self.min_stable_span_ms))
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(100..=60_000).contains(&self.stable_duration_ms) {
            return Err(ConfigError::ValidationFailed(
                "stable_duration_ms must be 100–60000",
            ));
        }
        if self.min_stable_span_ms >= self.stable_duration_ms {
            return Err(ConfigError::ValidationFailed(
                "min_stable_span_ms must be < stable_duration_ms",
            ));
        }
        if let Some(name) = self.ranges.first_malformed() {
            log::warn!("Config: {} is not a finite min <= max pair", name);
            return Err(ConfigError::ValidationFailed(
                "ranges must be finite with min <= max",
            ));
        }
        Ok(())
    }
}
