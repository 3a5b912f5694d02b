//! Typed responses for state-changing operations.

use crate::extract::DecodedEvent;
use crate::ServiceError;
use abi::Value;
use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

/// Outcome of a state-changing operation: the transaction hash, plus the
/// event the contract emitted for it when one could be recovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse<E> {
    pub transaction_hash: B256,
    /// `None` when the contract emitted nothing for the caller. The token
    /// signals a refused transfer this way instead of reverting.
    pub event: Option<E>,
}

/// `Transfer(from, to, value)` occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub value: u64,
}

/// `Approval(owner, spender, value)` occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalEvent {
    pub owner: Address,
    pub spender: Address,
    pub value: u64,
}

impl TryFrom<DecodedEvent> for TransferEvent {
    type Error = ServiceError;

    fn try_from(event: DecodedEvent) -> Result<Self, ServiceError> {
        let (from, to, value) = event_fields(&event)?;
        Ok(Self { from, to, value })
    }
}

impl TryFrom<DecodedEvent> for ApprovalEvent {
    type Error = ServiceError;

    fn try_from(event: DecodedEvent) -> Result<Self, ServiceError> {
        let (owner, spender, value) = event_fields(&event)?;
        Ok(Self {
            owner,
            spender,
            value,
        })
    }
}

/// Both token events share one shape: two indexed addresses and a single
/// uint256 in the data payload.
fn event_fields(event: &DecodedEvent) -> Result<(Address, Address, u64), ServiceError> {
    match (event.indexed.as_slice(), event.data.as_slice()) {
        ([Value::Address(first), Value::Address(second)], [Value::Uint(value, _)]) => {
            Ok((*first, *second, checked_u64(*value)?))
        }
        _ => Err(ServiceError::MalformedEvent),
    }
}

/// Narrow a contract word to the service's 64-bit value range.
pub(crate) fn checked_u64(value: U256) -> Result<u64, ServiceError> {
    u64::try_from(value).map_err(|_| ServiceError::ValueOverflow { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn decoded(value: U256) -> DecodedEvent {
        DecodedEvent {
            indexed: vec![
                Value::Address(address!("ed9d02e382b34818e88b88a309c7fe71e65f419d")),
                Value::Address(address!("0fbdc686b912d7722dc86510934589e0aaf3b55a")),
            ],
            data: vec![Value::uint256(value)],
        }
    }

    #[test]
    fn test_transfer_event_fields() {
        let event = TransferEvent::try_from(decoded(U256::from(750))).unwrap();
        assert_eq!(
            event.from,
            address!("ed9d02e382b34818e88b88a309c7fe71e65f419d")
        );
        assert_eq!(
            event.to,
            address!("0fbdc686b912d7722dc86510934589e0aaf3b55a")
        );
        assert_eq!(event.value, 750);
    }

    #[test]
    fn test_approval_event_fields() {
        let event = ApprovalEvent::try_from(decoded(U256::from(u64::MAX))).unwrap();
        assert_eq!(event.value, u64::MAX);
    }

    #[test]
    fn test_value_wider_than_u64_overflows() {
        let too_wide = U256::from(u64::MAX) + U256::from(1);
        let err = TransferEvent::try_from(decoded(too_wide)).unwrap_err();
        assert!(matches!(err, ServiceError::ValueOverflow { value } if value == too_wide));
    }

    #[test]
    fn test_unexpected_shape_is_malformed() {
        let event = DecodedEvent {
            indexed: vec![Value::Address(Address::ZERO)],
            data: vec![Value::uint256(U256::from(1))],
        };
        assert!(matches!(
            TransferEvent::try_from(event).unwrap_err(),
            ServiceError::MalformedEvent
        ));
    }

    #[test]
    fn test_response_serialization_shape() {
        let response = TransactionResponse {
            transaction_hash: B256::ZERO,
            event: Some(TransferEvent {
                from: Address::ZERO,
                to: Address::ZERO,
                value: 9,
            }),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("transactionHash").is_some());
        assert_eq!(value["event"]["value"], 9);
    }
}
