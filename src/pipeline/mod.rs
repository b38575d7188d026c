//! Pipeline wiring: reader thread plus three cooperative async stages.
//!
//! ```text
//!  ┌──────────────┐            ┌───────────────────────────────────────────────────────┐
//!  │ Reader thread│            │  Calling thread: edge_executor::LocalExecutor         │
//!  │              │  Sample    │  ┌───────────┐   f64   ┌────────────┐ event ┌──────┐  │
//!  │ ScalePort ───┼───────────▶│  │ stability │───────▶│ classifier │──────▶│ sink │  │
//!  │ + ClockPort  │  (depth 1) │  └───────────┘        └────────────┘       └──────┘  │
//!  └──────────────┘            └───────────────────────────────────────────────────────┘
//! ```
//!
//! [`run`] returns once the scale stream has ended and every stage has
//! drained.  Readings flow strictly in order; the only buffering is one
//! item per channel.  If a stage or the sink panics, the reader is
//! cancelled and unblocked before the panic is re-raised.

pub mod channels;
pub mod reader;
pub mod stages;

use core::sync::atomic::{AtomicBool, Ordering};
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};
use std::thread::ScopedJoinHandle;

use log::{error, info};

use crate::app::ports::{ClockPort, EventSink, MetricsPort, ScalePort};
use crate::classifier::EventClassifier;
use crate::config::SystemConfig;
use crate::error::{Error, Result};
use crate::stability::{Sample, StabilityFilter};

use channels::{Pipe, Pipes};

/// Item counts at each hop of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineSummary {
    /// Raw readings accepted from the scale.
    pub samples: u64,
    /// Settled weights emitted by the stability filter.
    pub settled: u64,
    /// Events delivered to the sink.
    pub events: u64,
}

/// Run the pipeline to completion.
///
/// Blocks until the scale reports end of stream or fails.  A fatal scale
/// error is returned after the downstream stages have drained everything
/// read before it.
pub fn run<S, C, M, K>(
    config: &SystemConfig,
    mut scale: S,
    clock: &C,
    metrics: &M,
    sink: &mut K,
) -> Result<PipelineSummary>
where
    S: ScalePort + Send,
    C: ClockPort + Sync,
    M: MetricsPort + Sync,
    K: EventSink,
{
    let pipes = Pipes::new();
    let cancel = AtomicBool::new(false);
    let filter = StabilityFilter::with_min_span(config.stable_duration(), config.min_stable_span());
    let classifier = EventClassifier::new(config.ranges);

    info!(
        "Pipeline: starting (stable for {:?}, min span {:?})",
        config.stable_duration(),
        config.min_stable_span()
    );

    std::thread::scope(|s| {
        let reader = std::thread::Builder::new()
            .name("scale-reader".into())
            .spawn_scoped(s, || {
                reader::read_loop(&mut scale, clock, metrics, &pipes.raw, &cancel)
            })
            .map_err(|_| Error::Init("cannot spawn reader thread"))?;

        let executor: edge_executor::LocalExecutor<'_, 8> = edge_executor::LocalExecutor::new();
        let stability = executor.spawn(stages::stability_stage(&pipes.raw, &pipes.settled, filter));
        let classify = executor.spawn(stages::classifier_stage(
            &pipes.settled,
            &pipes.events,
            classifier,
            metrics,
        ));
        let deliver = executor.spawn(stages::sink_stage(&pipes.events, sink));

        let stages = catch_unwind(AssertUnwindSafe(|| {
            futures_lite::future::block_on(executor.run(async {
                // Classifier count equals sink count; only the sink's is kept.
                let (settled, _, events) = (stability.await, classify.await, deliver.await);
                (settled, events)
            }))
        }));
        let (settled, events) = match stages {
            Ok(counts) => counts,
            Err(panic) => {
                error!("Pipeline: stage panicked, stopping reader");
                stop_reader(&pipes.raw, &cancel, &reader);
                resume_unwind(panic)
            }
        };

        let samples = reader.join().unwrap_or_else(|panic| resume_unwind(panic))?;

        let summary = PipelineSummary {
            samples,
            settled,
            events,
        };
        info!(
            "Pipeline: finished ({} samples, {} settled, {} events)",
            summary.samples, summary.settled, summary.events
        );
        Ok(summary)
    })
}

/// Cancel the reader and discard whatever it still sends until its thread
/// exits.  The thread scope joins the reader before a panic leaves
/// [`run`], so a reader parked on a full pipe would otherwise block forever.
fn stop_reader<T>(raw: &Pipe<Sample>, cancel: &AtomicBool, reader: &ScopedJoinHandle<'_, T>) {
    cancel.store(true, Ordering::Relaxed);
    while !reader.is_finished() {
        if raw.try_receive().is_err() {
            std::thread::yield_now();
        }
    }
}
