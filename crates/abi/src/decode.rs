//! Response and log payload decoding.

use crate::encode::WORD;
use crate::{AbiError, ParamType, Value};
use alloy_primitives::{Address, B256, U256};

/// Decode a single return value from raw call output.
///
/// An empty response is surfaced as [`AbiError::EmptyValue`]: the node
/// answered with nothing, which is not the same as a zero value.
pub fn decode_single(data: &[u8], kind: ParamType) -> Result<Value, AbiError> {
    if data.is_empty() {
        return Err(AbiError::EmptyValue);
    }
    decode_at(data, 0, kind)
}

/// Decode an ordered value sequence, e.g. an event's non-indexed payload.
pub fn decode_sequence(data: &[u8], kinds: &[ParamType]) -> Result<Vec<Value>, AbiError> {
    kinds
        .iter()
        .enumerate()
        .map(|(index, kind)| decode_at(data, index * WORD, *kind))
        .collect()
}

/// Decode one indexed topic word.
///
/// Indexed dynamic values are stored in topics as their hash, so only static
/// kinds can be recovered here.
pub fn decode_topic(topic: B256, kind: ParamType) -> Result<Value, AbiError> {
    match kind {
        ParamType::Address => Ok(Value::Address(Address::from_word(topic))),
        ParamType::Uint(bits) => Ok(Value::Uint(U256::from_be_bytes(topic.0), bits)),
        ParamType::String | ParamType::Bytes => Err(AbiError::DynamicTopic(kind)),
    }
}

fn decode_at(data: &[u8], offset: usize, kind: ParamType) -> Result<Value, AbiError> {
    let word = read_word(data, offset)?;
    match kind {
        ParamType::Address => Ok(Value::Address(Address::from_word(word.into()))),
        ParamType::Uint(bits) => Ok(Value::Uint(U256::from_be_bytes(word), bits)),
        ParamType::String => {
            let bytes = read_dynamic(data, word)?;
            String::from_utf8(bytes)
                .map(Value::String)
                .map_err(|_| AbiError::InvalidUtf8)
        }
        ParamType::Bytes => read_dynamic(data, word).map(Value::Bytes),
    }
}

fn read_word(data: &[u8], offset: usize) -> Result<[u8; WORD], AbiError> {
    let slice = data
        .get(offset..offset.saturating_add(WORD))
        .ok_or(AbiError::OutOfBounds {
            offset,
            needed: WORD,
            have: data.len(),
        })?;
    let mut word = [0u8; WORD];
    word.copy_from_slice(slice);
    Ok(word)
}

/// Follow an offset word into the tail: a length word, then that many
/// payload bytes.
fn read_dynamic(data: &[u8], offset_word: [u8; WORD]) -> Result<Vec<u8>, AbiError> {
    let offset = word_to_usize(offset_word)?;
    let len = word_to_usize(read_word(data, offset)?)?;
    let start = offset + WORD;
    let end = start.checked_add(len).ok_or(AbiError::OutOfBounds {
        offset: start,
        needed: len,
        have: data.len(),
    })?;
    data.get(start..end)
        .map(<[u8]>::to_vec)
        .ok_or(AbiError::OutOfBounds {
            offset: start,
            needed: len,
            have: data.len(),
        })
}

fn word_to_usize(word: [u8; WORD]) -> Result<usize, AbiError> {
    let value = U256::from_be_bytes(word);
    usize::try_from(value).map_err(|_| AbiError::OffsetTooLarge(value))
}
