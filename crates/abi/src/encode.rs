//! Head/tail argument encoding.

use crate::{AbiError, Value};
use alloy_primitives::{Address, U256};

pub(crate) const WORD: usize = 32;

/// Encode an ordered argument list into the standard head/tail layout.
///
/// Static values occupy one 32-byte word in the head. Dynamic values place a
/// byte offset (relative to the start of the block) in the head and append a
/// length-prefixed, word-aligned payload to the tail.
pub fn encode_args(args: &[Value]) -> Result<Vec<u8>, AbiError> {
    let head_len = args.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for arg in args {
        match arg {
            Value::Address(address) => head.extend_from_slice(&address_word(*address)),
            Value::Uint(value, bits) => head.extend_from_slice(&uint_word(*value, *bits)?),
            Value::String(s) => {
                head.extend_from_slice(&offset_word(head_len + tail.len()));
                append_dynamic(&mut tail, s.as_bytes());
            }
            Value::Bytes(bytes) => {
                head.extend_from_slice(&offset_word(head_len + tail.len()));
                append_dynamic(&mut tail, bytes);
            }
        }
    }

    head.extend_from_slice(&tail);
    Ok(head)
}

/// 20 address bytes left-padded to one word.
fn address_word(address: Address) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - Address::len_bytes()..].copy_from_slice(address.as_slice());
    word
}

/// Big-endian value padded to one word, rejected if it overflows the
/// declared width.
fn uint_word(value: U256, bits: usize) -> Result<[u8; WORD], AbiError> {
    if value.bit_len() > bits {
        return Err(AbiError::UintTooLarge { value, bits });
    }
    Ok(value.to_be_bytes::<WORD>())
}

fn offset_word(offset: usize) -> [u8; WORD] {
    U256::from(offset).to_be_bytes::<WORD>()
}

/// Length word followed by the payload, zero-padded to a word boundary.
fn append_dynamic(tail: &mut Vec<u8>, data: &[u8]) {
    tail.extend_from_slice(&U256::from(data.len()).to_be_bytes::<WORD>());
    tail.extend_from_slice(data);
    let rem = data.len() % WORD;
    if rem != 0 {
        tail.resize(tail.len() + WORD - rem, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, hex};

    #[test]
    fn test_encode_static_args() {
        let args = [
            Value::Address(address!("9f4fbb5b88b4ae33eb64e6b45d7b9dd7a290c0e5")),
            Value::uint256(U256::from(1000)),
        ];
        let expected = hex::decode(concat!(
            "0000000000000000000000009f4fbb5b88b4ae33eb64e6b45d7b9dd7a290c0e5",
            "00000000000000000000000000000000000000000000000000000000000003e8",
        ))
        .unwrap();
        assert_eq!(encode_args(&args).unwrap(), expected);
    }

    #[test]
    fn test_encode_dynamic_string() {
        let args = [Value::String("Quorum Token".to_owned())];
        let expected = hex::decode(concat!(
            "0000000000000000000000000000000000000000000000000000000000000020",
            "000000000000000000000000000000000000000000000000000000000000000c",
            "51756f72756d20546f6b656e0000000000000000000000000000000000000000",
        ))
        .unwrap();
        assert_eq!(encode_args(&args).unwrap(), expected);
    }

    #[test]
    fn test_encode_mixed_static_and_dynamic() {
        // Constructor-shaped argument list: two dynamic strings interleaved
        // with two uints, offsets counted from the start of the block.
        let args = [
            Value::uint256(U256::from(1_000_000)),
            Value::String("Quorum Token".to_owned()),
            Value::Uint(U256::from(6), 8),
            Value::String("QT".to_owned()),
        ];
        let expected = hex::decode(concat!(
            "00000000000000000000000000000000000000000000000000000000000f4240",
            "0000000000000000000000000000000000000000000000000000000000000080",
            "0000000000000000000000000000000000000000000000000000000000000006",
            "00000000000000000000000000000000000000000000000000000000000000c0",
            "000000000000000000000000000000000000000000000000000000000000000c",
            "51756f72756d20546f6b656e0000000000000000000000000000000000000000",
            "0000000000000000000000000000000000000000000000000000000000000002",
            "5154000000000000000000000000000000000000000000000000000000000000",
        ))
        .unwrap();
        assert_eq!(encode_args(&args).unwrap(), expected);
    }

    #[test]
    fn test_encode_bytes_word_multiple_gets_no_padding() {
        let args = [Value::Bytes(vec![0xaa; WORD])];
        let encoded = encode_args(&args).unwrap();
        // offset word + length word + exactly one payload word
        assert_eq!(encoded.len(), 3 * WORD);
        assert_eq!(&encoded[2 * WORD..], &[0xaa; WORD]);
    }

    #[test]
    fn test_encode_empty_args() {
        assert_eq!(encode_args(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encode_rejects_uint_over_width() {
        let err = encode_args(&[Value::Uint(U256::from(256), 8)]).unwrap_err();
        assert_eq!(
            err,
            AbiError::UintTooLarge {
                value: U256::from(256),
                bits: 8
            }
        );
        // Boundary value still fits.
        assert!(encode_args(&[Value::Uint(U256::from(255), 8)]).is_ok());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let args = [
            Value::Address(address!("9f4fbb5b88b4ae33eb64e6b45d7b9dd7a290c0e5")),
            Value::uint256(U256::from(12345)),
        ];
        assert_eq!(encode_args(&args).unwrap(), encode_args(&args).unwrap());
    }
}
