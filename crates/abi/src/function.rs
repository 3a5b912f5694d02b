//! Function and event descriptors.

use crate::{encode, AbiError, ParamType, Value};
use alloy_primitives::{keccak256, Bytes, B256};

/// A callable contract function: canonical name, ordered argument kinds,
/// and the single return kind of read-only queries (`None` for write
/// methods, whose results arrive as events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Function {
    pub name: &'static str,
    pub inputs: &'static [ParamType],
    pub output: Option<ParamType>,
}

impl Function {
    pub const fn new(
        name: &'static str,
        inputs: &'static [ParamType],
        output: Option<ParamType>,
    ) -> Self {
        Self {
            name,
            inputs,
            output,
        }
    }

    /// Canonical signature string, e.g. `transfer(address,uint256)`.
    pub fn signature(&self) -> String {
        signature(self.name, self.inputs.iter())
    }

    /// First 4 bytes of the keccak-256 hash of the canonical signature.
    /// Computed exactly as the ledger's dispatch convention expects.
    pub fn selector(&self) -> [u8; 4] {
        let hash = keccak256(self.signature().as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    /// Selector followed by the encoded arguments, validated against this
    /// descriptor before anything is built.
    pub fn encode_call(&self, args: &[Value]) -> Result<Bytes, AbiError> {
        self.check_args(args)?;
        let mut data = Vec::with_capacity(4 + args.len() * 32);
        data.extend_from_slice(&self.selector());
        data.extend_from_slice(&encode::encode_args(args)?);
        Ok(data.into())
    }

    fn check_args(&self, args: &[Value]) -> Result<(), AbiError> {
        if args.len() != self.inputs.len() {
            return Err(AbiError::ArityMismatch {
                function: self.name,
                expected: self.inputs.len(),
                actual: args.len(),
            });
        }
        for (index, (arg, kind)) in args.iter().zip(self.inputs).enumerate() {
            if arg.kind() != *kind {
                return Err(AbiError::KindMismatch {
                    function: self.name,
                    index,
                    expected: *kind,
                });
            }
        }
        Ok(())
    }
}

/// A contract event. Indexed fields arrive as topics, the remaining fields
/// ABI-encoded in the log's data payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub name: &'static str,
    pub indexed: &'static [ParamType],
    pub data: &'static [ParamType],
}

impl Event {
    pub const fn new(
        name: &'static str,
        indexed: &'static [ParamType],
        data: &'static [ParamType],
    ) -> Self {
        Self {
            name,
            indexed,
            data,
        }
    }

    /// Canonical signature over all fields, indexed first.
    pub fn signature(&self) -> String {
        signature(self.name, self.indexed.iter().chain(self.data.iter()))
    }

    /// Signature hash, matched against a log's first topic.
    pub fn topic(&self) -> B256 {
        keccak256(self.signature().as_bytes())
    }
}

fn signature<'a>(name: &str, kinds: impl Iterator<Item = &'a ParamType>) -> String {
    let params = kinds.map(ParamType::canonical).collect::<Vec<_>>().join(",");
    format!("{name}({params})")
}
