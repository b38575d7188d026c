//! Litter box monitor library.
//!
//! Turns a stream of raw scale readings into litter box events:
//!
//! ```text
//!  ScalePort ─▶ StabilityFilter ─▶ EventClassifier ─▶ EventSink
//!                                        │
//!                                        └─▶ MetricsPort
//! ```
//!
//! The modules are exposed for the binary, integration tests, and fuzz
//! targets.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod classifier;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod sensors;
pub mod stability;
