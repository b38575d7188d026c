//! Application boundary: domain events and the port traits.
//!
//! The pipeline stages in [`crate::pipeline`] interact with the scale,
//! clock, counter store and event consumers only through the **port
//! traits** defined in [`ports`], keeping the core fully testable without
//! a real scale.

pub mod events;
pub mod ports;
