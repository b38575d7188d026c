//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                 |
//! |----------------|--------------|-----------------------------|
//! | `config_file`  | ConfigPort   | JSON file on disk           |
//! | `json_sink`    | EventSink    | JSON lines on any `Write`   |
//! | `log_sink`     | EventSink    | `log` facade                |
//! | `metrics`      | MetricsPort  | in-process atomic counters  |
//! | `time`         | ClockPort    | `Instant` / simulated steps |
//!
//! Scale sources live in [`crate::sensors`].

pub mod config_file;
pub mod json_sink;
pub mod log_sink;
pub mod metrics;
pub mod time;

pub use config_file::JsonConfigFile;
pub use json_sink::JsonLinesSink;
pub use log_sink::LogEventSink;
pub use metrics::{AtomicMetrics, MetricsSnapshot};
pub use time::{MonotonicClock, SimulatedClock};
