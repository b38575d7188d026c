//! Unified error types for the litter box monitor.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! binary's top-level error handling uniform.  All variants are `Copy` so
//! they can be handed across the reader thread boundary without allocation.

use core::fmt;

use crate::app::ports::ConfigError;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The scale could not be read or returned an unusable report.
    Sensor(SensorError),
    /// Configuration is invalid or could not be loaded.
    Config(ConfigError),
    /// A collaborator could not be set up (device node, logger).
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The underlying device read returned an I/O error.
    ReadFailed,
    /// A HID report arrived with the wrong length (carries the length read).
    ShortReport(usize),
    /// A replayed line could not be parsed as a reading.
    Malformed,
    /// The source has no more readings.
    EndOfStream,
}

impl SensorError {
    /// Whether the reader should stop after this error.
    ///
    /// `Malformed` is skipped; everything else ends the stream.
    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Malformed)
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "scale read failed"),
            Self::ShortReport(len) => write!(f, "short HID report ({len} bytes)"),
            Self::Malformed => write!(f, "malformed reading"),
            Self::EndOfStream => write!(f, "end of stream"),
        }
    }
}

impl std::error::Error for SensorError {}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
