//! Wire types for the node's JSON-RPC boundary.
//!
//! The node dialect is Quorum's: `eth_sendTransaction` accepts a
//! `privateFor` member and the node signs with its own managed account, and
//! receipts predate the typed-transaction fields, so the envelope, receipt
//! and log are small serde structs here rather than a stock rpc-types model.

use alloy_primitives::{Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// Envelope for `eth_sendTransaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateTransactionRequest {
    pub from: Address,
    /// Absent for contract deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    pub gas: U256,
    pub gas_price: U256,
    pub data: Bytes,
    /// Recipient keys of the nodes allowed to read the payload. Omitted
    /// when empty, making the transaction public.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub private_for: Vec<String>,
}

/// Read-only execution request for `eth_call`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub to: Address,
    pub data: Bytes,
}

/// The subset of `eth_getTransactionReceipt` the service consumes.
/// Unknown receipt members are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    /// Created contract, present only for deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,
    /// Post-execution status word; zero means reverted. Absent on chains
    /// predating status reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<U64>,
    #[serde(default)]
    pub logs: Vec<Log>,
}

impl TransactionReceipt {
    /// Whether execution succeeded. A receipt without a status word counts
    /// as successful.
    pub fn is_status_ok(&self) -> bool {
        self.status.is_none_or(|status| status != U64::ZERO)
    }
}

/// One emitted event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Contract that emitted the record.
    pub address: Address,
    /// Indexed words; the first is the event signature hash.
    #[serde(default)]
    pub topics: Vec<B256>,
    /// ABI-encoded non-indexed fields.
    pub data: Bytes,
}
