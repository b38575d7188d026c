//! Scale reader loop.
//!
//! The only blocking stage.  Runs on its own thread, stamps every reading
//! with the clock on arrival, and pushes it into the raw pipe.  Channel
//! sends are awaited with `block_on`, so a slow consumer stalls the
//! reader rather than growing a queue.
//!
//! | Read result             | Action                            |
//! |-------------------------|-----------------------------------|
//! | `Ok(w)`                 | set `current_weight`, send sample |
//! | `Malformed`             | warn, skip                        |
//! | `EndOfStream`           | stop cleanly                      |
//! | any other error         | log error, stop, return the error |
//!
//! `End` is sent on every exit path, including a panic in the scale
//! driver, so downstream stages always terminate.  Setting `cancel` makes
//! the loop stop before its next read.

use core::sync::atomic::{AtomicBool, Ordering};

use futures_lite::future::block_on;
use log::{error, info, warn};

use crate::app::ports::{ClockPort, Gauge, MetricsPort, ScalePort};
use crate::error::SensorError;
use crate::stability::Sample;

use super::channels::{Message, Pipe};

/// Sends `End` when dropped.
struct EndOnDrop<'a>(&'a Pipe<Sample>);

impl Drop for EndOnDrop<'_> {
    fn drop(&mut self) {
        block_on(self.0.send(Message::End));
    }
}

/// Drain `scale` into `raw`.  Returns the number of samples sent.
pub fn read_loop<S, C, M>(
    scale: &mut S,
    clock: &C,
    metrics: &M,
    raw: &Pipe<Sample>,
    cancel: &AtomicBool,
) -> Result<u64, SensorError>
where
    S: ScalePort + ?Sized,
    C: ClockPort + ?Sized,
    M: MetricsPort + ?Sized,
{
    let _end = EndOnDrop(raw);
    let mut sent = 0u64;
    let mut skipped = 0u64;

    loop {
        if cancel.load(Ordering::Relaxed) {
            warn!("Reader: cancelled after {} samples", sent);
            return Ok(sent);
        }
        match scale.read() {
            Ok(weight) => {
                let sample = Sample::new(clock.now(), weight);
                metrics.set_gauge(Gauge::CurrentWeight, weight);
                block_on(raw.send(Message::Item(sample)));
                sent += 1;
            }
            Err(SensorError::EndOfStream) => {
                info!("Reader: end of stream after {} samples ({} skipped)", sent, skipped);
                return Ok(sent);
            }
            Err(e) if !e.is_fatal() => {
                skipped += 1;
                warn!("Reader: skipping reading: {}", e);
            }
            Err(e) => {
                error!("Reader: scale failed after {} samples: {}", sent, e);
                return Err(e);
            }
        }
    }
}
