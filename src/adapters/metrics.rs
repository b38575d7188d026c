//! Lock-free counter store.
//!
//! Implements [`MetricsPort`] with one atomic per metric so the reader
//! thread (current weight gauge) and the classifier stage (counters) can
//! update it concurrently without a lock.  Gauges store the `f64` bit
//! pattern in an `AtomicU64`.

use core::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::app::ports::{Counter, Gauge, MetricsPort};

pub struct AtomicMetrics {
    counters: [AtomicU64; Counter::ALL.len()],
    gauges: [AtomicU64; Gauge::ALL.len()],
}

impl Default for AtomicMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicMetrics {
    pub fn new() -> Self {
        Self {
            counters: core::array::from_fn(|_| AtomicU64::new(0)),
            gauges: core::array::from_fn(|_| AtomicU64::new(0f64.to_bits())),
        }
    }

    pub fn counter(&self, counter: Counter) -> u64 {
        self.counters[counter_index(counter)].load(Ordering::Relaxed)
    }

    pub fn gauge(&self, gauge: Gauge) -> f64 {
        f64::from_bits(self.gauges[gauge_index(gauge)].load(Ordering::Relaxed))
    }

    /// Point-in-time copy of every metric.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cat_went: self.counter(Counter::CatWent),
            scoops: self.counter(Counter::Scoops),
            emptied: self.counter(Counter::Emptied),
            refilled: self.counter(Counter::Refilled),
            litter_added: self.counter(Counter::LitterAdded),
            current_weight: self.gauge(Gauge::CurrentWeight),
            cat_weight: self.gauge(Gauge::CatWeight),
        }
    }
}

impl MetricsPort for AtomicMetrics {
    fn increment(&self, counter: Counter) {
        self.counters[counter_index(counter)].fetch_add(1, Ordering::Relaxed);
    }

    fn set_gauge(&self, gauge: Gauge, value: f64) {
        self.gauges[gauge_index(gauge)].store(value.to_bits(), Ordering::Relaxed);
    }
}

/// Serialisable view, keyed by exported metric name.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MetricsSnapshot {
    pub cat_went: u64,
    pub scoops: u64,
    pub emptied: u64,
    pub refilled: u64,
    pub litter_added: u64,
    pub current_weight: f64,
    pub cat_weight: f64,
}

const fn counter_index(counter: Counter) -> usize {
    match counter {
        Counter::CatWent => 0,
        Counter::Scoops => 1,
        Counter::Emptied => 2,
        Counter::Refilled => 3,
        Counter::LitterAdded => 4,
    }
}

const fn gauge_index(gauge: Gauge) -> usize {
    match gauge {
        Gauge::CurrentWeight => 0,
        Gauge::CatWeight => 1,
    }
}
