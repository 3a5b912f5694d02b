//! Contract ABI calling convention.
//!
//! Encoding and decoding for the four primitive kinds the token contract
//! uses (addresses, unsigned integers, strings, byte arrays), plus the
//! function and event descriptors built on top of them:
//!
//! - [`encode_args`] / [`Function::encode_call`]: head/tail argument encoding
//!   with a 4-byte selector prefix
//! - [`decode_single`] / [`decode_sequence`] / [`decode_topic`]: return-value
//!   and log-payload decoding
//! - [`Function`] / [`Event`]: static descriptors with canonical signatures,
//!   selectors and topic hashes

pub mod decode;
pub mod encode;
pub mod function;
pub mod value;

pub use decode::{decode_sequence, decode_single, decode_topic};
pub use encode::encode_args;
pub use function::{Event, Function};
pub use value::{ParamType, Value};

use alloy_primitives::U256;
use thiserror::Error;

/// Errors raised while encoding arguments or decoding node responses.
///
/// Everything on the encoding side is detected before a transaction is
/// submitted; nothing malformed reaches the node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// A uint value does not fit its declared bit width.
    #[error("value {value} does not fit in uint{bits}")]
    UintTooLarge { value: U256, bits: usize },

    /// An argument list does not match the descriptor's parameter count.
    #[error("{function} takes {expected} arguments, got {actual}")]
    ArityMismatch {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An argument's kind does not match the descriptor.
    #[error("{function} argument {index} must be {expected}")]
    KindMismatch {
        function: &'static str,
        index: usize,
        expected: ParamType,
    },

    /// The node answered a read-only query with no data at all. This is a
    /// distinct condition from a zero value and is never coerced to one.
    #[error("empty return data")]
    EmptyValue,

    /// The response is shorter than the layout requires.
    #[error("response truncated: need {needed} bytes at offset {offset}, have {have}")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        have: usize,
    },

    /// A dynamic-section offset or length word does not fit in memory.
    #[error("offset word {0} exceeds addressable response length")]
    OffsetTooLarge(U256),

    /// A decoded string is not valid UTF-8.
    #[error("decoded string is not valid utf-8")]
    InvalidUtf8,

    /// Indexed dynamic values are stored in topics as their hash and cannot
    /// be recovered.
    #[error("indexed {0} values are hashed and cannot be decoded from a topic")]
    DynamicTopic(ParamType),

    /// A log carries a different number of topics than the event declares.
    #[error("log has {actual} topics, event declares {expected}")]
    TopicCount { expected: usize, actual: usize },

    /// A function with no declared return value was used as a query.
    #[error("{0} does not return a value")]
    NoReturnValue(&'static str),
}
