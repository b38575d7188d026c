//! Litter box monitor: main entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HidScale / LineScale   MonotonicClock   AtomicMetrics         │
//! │  (ScalePort)            (ClockPort)      (MetricsPort)         │
//! │  LogEventSink / JsonLinesSink            JsonConfigFile        │
//! │  (EventSink)                             (ConfigPort)          │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │   pipeline::run: StabilityFilter ─▶ EventClassifier    │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `litterbox [CONFIG.json]`.  Without an argument the path comes
//! from `LITTERBOX_CONFIG`, then `litterbox.json`.  Log verbosity follows
//! `RUST_LOG` (default `info`).

use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use litterbox::adapters::{AtomicMetrics, JsonConfigFile, JsonLinesSink, LogEventSink, MonotonicClock};
use litterbox::app::ports::ScalePort;
use litterbox::config::{EventOutput, SystemConfig};
use litterbox::pipeline::{self, PipelineSummary};
use litterbox::sensors::{HidScale, LineScale};

#[derive(Parser, Debug)]
#[command(name = "litterbox")]
#[command(about = "Litter box scale monitor")]
#[command(version)]
struct Cli {
    /// JSON config file; missing file means defaults
    #[arg(env = "LITTERBOX_CONFIG", default_value = "litterbox.json")]
    config: PathBuf,
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── 1. Logging ────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("litterbox v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = JsonConfigFile::new(&cli.config)
        .load_or_default()
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // ── 3. Adapters + pipeline ────────────────────────────────
    let metrics = AtomicMetrics::new();
    let summary = match &config.scale_device {
        Some(device) => {
            let scale = HidScale::open(device).with_context(|| format!("opening {device}"))?;
            run_with_sink(&config, scale, &metrics)?
        }
        None => {
            info!("No scale_device configured, reading weights from stdin");
            let scale = LineScale::new(BufReader::new(std::io::stdin()));
            run_with_sink(&config, scale, &metrics)?
        }
    };

    // ── 4. Final report ───────────────────────────────────────
    info!(
        "Done: {} samples, {} settled, {} events",
        summary.samples, summary.settled, summary.events
    );
    info!("Metrics: {}", serde_json::to_string(&metrics.snapshot())?);
    Ok(())
}

fn run_with_sink<S: ScalePort + Send>(
    config: &SystemConfig,
    scale: S,
    metrics: &AtomicMetrics,
) -> Result<PipelineSummary> {
    let clock = MonotonicClock::new();
    let summary = match config.event_output {
        EventOutput::Log => {
            let mut sink = LogEventSink::new();
            pipeline::run(config, scale, &clock, metrics, &mut sink)?
        }
        EventOutput::JsonLines => {
            let mut sink = JsonLinesSink::new(std::io::stdout());
            pipeline::run(config, scale, &clock, metrics, &mut sink)?
        }
    };
    Ok(summary)
}
