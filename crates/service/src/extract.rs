//! Event extraction from transaction receipts.

use abi::{decode_sequence, decode_topic, AbiError, Event, Value};
use alloy_primitives::B256;
use client::rpc::{Log, TransactionReceipt};

/// One event occurrence, decoded against its declared layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent {
    /// Values recovered from the indexed topic words, in declaration order.
    pub indexed: Vec<Value>,
    /// Values decoded from the data payload, in declaration order.
    pub data: Vec<Value>,
}

/// Decode every log in `receipt` that `event` emitted.
///
/// `topic` is the event's precomputed signature hash. Logs whose first
/// topic differs, or that carry no topics at all, belong to other events
/// and are skipped rather than treated as errors.
pub fn extract_events(
    receipt: &TransactionReceipt,
    event: &Event,
    topic: B256,
) -> Result<Vec<DecodedEvent>, AbiError> {
    receipt
        .logs
        .iter()
        .filter(|log| log.topics.first() == Some(&topic))
        .map(|log| decode_log(log, event))
        .collect()
}

fn decode_log(log: &Log, event: &Event) -> Result<DecodedEvent, AbiError> {
    let expected = event.indexed.len() + 1;
    if log.topics.len() != expected {
        return Err(AbiError::TopicCount {
            expected,
            actual: log.topics.len(),
        });
    }
    let indexed = log.topics[1..]
        .iter()
        .zip(event.indexed)
        .map(|(word, kind)| decode_topic(*word, *kind))
        .collect::<Result<Vec<_>, _>>()?;
    let data = decode_sequence(&log.data, event.data)?;
    Ok(DecodedEvent { indexed, data })
}
