//! Typed values and their kinds.

use alloy_primitives::{Address, U256};
use std::fmt;

/// The primitive kinds appearing in the token contract's interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// 20-byte account or contract address.
    Address,
    /// Unsigned integer of the given bit width.
    Uint(usize),
    /// UTF-8 string, dynamically sized.
    String,
    /// Raw byte array, dynamically sized.
    Bytes,
}

impl ParamType {
    /// Canonical name as it appears in signatures, e.g. `uint256`.
    pub fn canonical(&self) -> String {
        match self {
            Self::Address => "address".to_owned(),
            Self::Uint(bits) => format!("uint{bits}"),
            Self::String => "string".to_owned(),
            Self::Bytes => "bytes".to_owned(),
        }
    }

    /// Whether values of this kind live in the tail section behind an
    /// offset word.
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::String | Self::Bytes)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// A typed value crossing the contract boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Address(Address),
    /// Unsigned integer together with its declared bit width. The width is
    /// enforced at encode time.
    Uint(U256, usize),
    String(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// Shorthand for a full-width unsigned value.
    pub const fn uint256(value: U256) -> Self {
        Self::Uint(value, 256)
    }

    /// The kind this value encodes as.
    pub const fn kind(&self) -> ParamType {
        match self {
            Self::Address(_) => ParamType::Address,
            Self::Uint(_, bits) => ParamType::Uint(*bits),
            Self::String(_) => ParamType::String,
            Self::Bytes(_) => ParamType::Bytes,
        }
    }

    pub const fn as_address(&self) -> Option<Address> {
        match self {
            Self::Address(address) => Some(*address),
            _ => None,
        }
    }

    pub const fn as_uint(&self) -> Option<U256> {
        match self {
            Self::Uint(value, _) => Some(*value),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}
