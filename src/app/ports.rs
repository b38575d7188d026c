//! Port traits: the hexagonal boundary between the pipeline and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ pipeline stages (domain)
//! ```
//!
//! Driven adapters (scale, clock, counter store, event sinks, config
//! storage) implement these traits.  The pipeline consumes them via
//! generics, so the filter and classifier never touch a device directly.

use std::time::Instant;

use crate::config::SystemConfig;
use crate::error::SensorError;

use super::events::LitterBoxEvent;

// ───────────────────────────────────────────────────────────────
// Scale port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Blocking source of raw weight readings.
pub trait ScalePort {
    /// Block until the next reading (pounds) is available.
    ///
    /// [`SensorError::EndOfStream`] ends the pipeline; see
    /// [`SensorError::is_fatal`] for the other variants.
    fn read(&mut self) -> Result<f64, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic time source used to stamp readings on arrival.
pub trait ClockPort {
    fn now(&self) -> Instant;
}

// ───────────────────────────────────────────────────────────────
// Metrics port (driven adapter: domain → counter store)
// ───────────────────────────────────────────────────────────────

/// Monotonic event tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    /// A cat left the box.
    CatWent,
    Scoops,
    Emptied,
    Refilled,
    LitterAdded,
}

impl Counter {
    pub const ALL: [Self; 5] = [
        Self::CatWent,
        Self::Scoops,
        Self::Emptied,
        Self::Refilled,
        Self::LitterAdded,
    ];

    /// Exported metric name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CatWent => "cat_went",
            Self::Scoops => "scoops",
            Self::Emptied => "emptied",
            Self::Refilled => "refilled",
            Self::LitterAdded => "litter_added",
        }
    }
}

/// Last-value measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gauge {
    /// Latest raw reading of the box with contents.
    CurrentWeight,
    /// Cat weight estimated from the last cat-on delta.
    CatWeight,
}

impl Gauge {
    pub const ALL: [Self; 2] = [Self::CurrentWeight, Self::CatWeight];

    /// Exported metric name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CurrentWeight => "current_weight",
            Self::CatWeight => "cat_weight",
        }
    }
}

/// Counter store injected into the classifier and the reader.
///
/// Methods take `&self`: the store is shared between the reader thread
/// and the executor thread, so implementations must be `Sync`.
pub trait MetricsPort {
    fn increment(&self, counter: Counter);
    fn set_gauge(&self, gauge: Gauge, value: f64);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / consumers)
// ───────────────────────────────────────────────────────────────

/// The classifier stage emits every [`LitterBoxEvent`] through this port.
pub trait EventSink {
    fn emit(&mut self, event: &LitterBoxEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads system configuration.
///
/// Implementations MUST run [`SystemConfig::validate`] before returning a
/// config; invalid ranges are rejected, not clamped.
pub trait ConfigPort {
    /// Returns [`ConfigError::NotFound`] if no stored config exists.
    fn load(&self) -> Result<SystemConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found in storage.
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
