//! Async pipeline stages.
//!
//! Every stage loops on `receive().await` until it sees
//! [`Message::End`], forwards `End` downstream (where it has a
//! downstream) and returns how many items it produced.  None of them
//! block the thread, so all three run cooperatively on one executor.

use log::info;

use crate::app::events::LitterBoxEvent;
use crate::app::ports::{EventSink, MetricsPort};
use crate::classifier::EventClassifier;
use crate::stability::{Sample, StabilityFilter};

use super::channels::{Message, Pipe};

/// Raw samples in, settled weights out.
pub async fn stability_stage(
    input: &Pipe<Sample>,
    output: &Pipe<f64>,
    mut filter: StabilityFilter,
) -> u64 {
    let mut settled = 0;
    while let Message::Item(sample) = input.receive().await {
        if let Some(weight) = filter.push(sample) {
            settled += 1;
            output.send(Message::Item(weight)).await;
        }
    }
    output.send(Message::End).await;
    settled
}

/// Settled weights in, one event per weight out.
pub async fn classifier_stage<M: MetricsPort>(
    input: &Pipe<f64>,
    output: &Pipe<LitterBoxEvent>,
    mut classifier: EventClassifier,
    metrics: &M,
) -> u64 {
    let mut produced = 0;
    while let Message::Item(weight) = input.receive().await {
        let event = classifier.classify(weight, metrics);
        produced += 1;
        output.send(Message::Item(event)).await;
    }
    output.send(Message::End).await;
    info!(
        "Classifier: stream ended in {:?} after {} weights",
        classifier.state(),
        classifier.processed()
    );
    produced
}

/// Terminal stage: hands each event to the sink.
pub async fn sink_stage<S: EventSink>(input: &Pipe<LitterBoxEvent>, sink: &mut S) -> u64 {
    let mut delivered = 0;
    while let Message::Item(event) = input.receive().await {
        sink.emit(&event);
        delivered += 1;
    }
    delivered
}
