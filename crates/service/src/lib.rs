//! Token operations against a privacy-enabled ledger node.
//!
//! [`TokenService`] drives a deployed Human Standard Token contract:
//! deployment, read-only queries, and state-changing submissions whose
//! emitted events are folded into typed responses. Privacy follows the
//! node's transaction model, so every state-changing operation takes the
//! recipient key list to share the payload with.

pub mod extract;
pub mod response;

pub use extract::{extract_events, DecodedEvent};
pub use response::{ApprovalEvent, TransactionResponse, TransferEvent};

use abi::{decode_single, AbiError, Function, ParamType, Value};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use binding::token;
use client::rpc::TransactionReceipt;
use config::NodeConfig;
use thiserror::Error;
use tracing::{debug, info};
use txmgr::{ClientTransactionManager, TxError};

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Arguments or response bytes violated the calling convention.
    #[error("ABI error: {0}")]
    Encoding(AbiError),

    /// A read-only query answered with no data at all, which usually means
    /// there is no contract behind the address. Distinct from a zero value.
    #[error("Empty value (0x) returned from contract")]
    EmptyValue,

    /// Submission or receipt polling failed.
    #[error(transparent)]
    Transaction(#[from] TxError),

    /// A contract word does not fit the declared result range.
    #[error("value {value} exceeds the representable result range")]
    ValueOverflow { value: U256 },

    /// An emitted event did not match its declared layout.
    #[error("malformed event record")]
    MalformedEvent,
}

impl From<AbiError> for ServiceError {
    fn from(e: AbiError) -> Self {
        match e {
            AbiError::EmptyValue => Self::EmptyValue,
            other => Self::Encoding(other),
        }
    }
}

/// High-level interface to one node's view of the token.
///
/// Read-only queries run as calls against the latest block. State-changing
/// operations are signed and submitted by the node itself, then confirmed
/// by polling for the receipt.
#[derive(Debug, Clone)]
pub struct TokenService<P> {
    provider: P,
    config: NodeConfig,
}

impl<P: Provider + Clone> TokenService<P> {
    pub fn new(provider: P, config: NodeConfig) -> Self {
        Self { provider, config }
    }

    pub const fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Deploy a fresh token contract and return its address.
    ///
    /// `decimal_units` beyond the contract's `uint8` range is rejected
    /// before anything reaches the node.
    pub async fn deploy(
        &self,
        private_for: Vec<String>,
        initial_amount: U256,
        token_name: &str,
        decimal_units: u64,
        token_symbol: &str,
    ) -> Result<Address, ServiceError> {
        let data = token::encode_deploy(initial_amount, token_name, decimal_units, token_symbol)?;
        info!(token_name, token_symbol, "Deploying token contract");
        let (address, _receipt) = self.manager(private_for).deploy(data).await?;
        Ok(address)
    }

    /// Token name, e.g. "Quorum Token".
    pub async fn name(&self, contract: Address) -> Result<String, ServiceError> {
        self.query_string(contract, &token::NAME).await
    }

    /// Ticker symbol, e.g. "QT".
    pub async fn symbol(&self, contract: Address) -> Result<String, ServiceError> {
        self.query_string(contract, &token::SYMBOL).await
    }

    /// Interface version string of the deployed contract.
    pub async fn version(&self, contract: Address) -> Result<String, ServiceError> {
        self.query_string(contract, &token::VERSION).await
    }

    /// Display decimals of the token unit.
    pub async fn decimals(&self, contract: Address) -> Result<u8, ServiceError> {
        let value = self.query_uint(contract, &token::DECIMALS, &[]).await?;
        u8::try_from(value).map_err(|_| ServiceError::ValueOverflow { value })
    }

    /// Total number of token units in existence.
    pub async fn total_supply(&self, contract: Address) -> Result<u64, ServiceError> {
        let value = self.query_uint(contract, &token::TOTAL_SUPPLY, &[]).await?;
        response::checked_u64(value)
    }

    /// Balance of `owner`.
    pub async fn balance_of(
        &self,
        contract: Address,
        owner: Address,
    ) -> Result<u64, ServiceError> {
        let value = self
            .query_uint(contract, &token::BALANCE_OF, &[Value::Address(owner)])
            .await?;
        response::checked_u64(value)
    }

    /// Remaining amount `spender` may draw from `owner`.
    pub async fn allowance(
        &self,
        contract: Address,
        owner: Address,
        spender: Address,
    ) -> Result<u64, ServiceError> {
        let value = self
            .query_uint(
                contract,
                &token::ALLOWANCE,
                &[Value::Address(owner), Value::Address(spender)],
            )
            .await?;
        response::checked_u64(value)
    }

    /// Authorize `spender` to draw up to `value` from the caller's balance.
    pub async fn approve(
        &self,
        private_for: Vec<String>,
        contract: Address,
        spender: Address,
        value: U256,
    ) -> Result<TransactionResponse<ApprovalEvent>, ServiceError> {
        let data =
            token::APPROVE.encode_call(&[Value::Address(spender), Value::uint256(value)])?;
        let receipt = self.manager(private_for).submit(Some(contract), data).await?;
        approval_response(&receipt)
    }

    /// Move `value` from the sending account to `to`.
    ///
    /// A transfer the contract refuses (insufficient balance) still mines;
    /// it shows up as a response without an event.
    pub async fn transfer(
        &self,
        private_for: Vec<String>,
        contract: Address,
        to: Address,
        value: U256,
    ) -> Result<TransactionResponse<TransferEvent>, ServiceError> {
        let data = token::TRANSFER.encode_call(&[Value::Address(to), Value::uint256(value)])?;
        let receipt = self.manager(private_for).submit(Some(contract), data).await?;
        transfer_response(&receipt)
    }

    /// Move `value` from `from` to `to` within the sender's allowance.
    pub async fn transfer_from(
        &self,
        private_for: Vec<String>,
        contract: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<TransactionResponse<TransferEvent>, ServiceError> {
        let data = token::TRANSFER_FROM.encode_call(&[
            Value::Address(from),
            Value::Address(to),
            Value::uint256(value),
        ])?;
        let receipt = self.manager(private_for).submit(Some(contract), data).await?;
        transfer_response(&receipt)
    }

    /// Approve `spender` and notify it in the same transaction, passing
    /// `extra_data` through to the spender contract.
    pub async fn approve_and_call(
        &self,
        private_for: Vec<String>,
        contract: Address,
        spender: Address,
        value: U256,
        extra_data: &[u8],
    ) -> Result<TransactionResponse<ApprovalEvent>, ServiceError> {
        let data = token::APPROVE_AND_CALL.encode_call(&[
            Value::Address(spender),
            Value::uint256(value),
            Value::Bytes(extra_data.to_vec()),
        ])?;
        let receipt = self.manager(private_for).submit(Some(contract), data).await?;
        approval_response(&receipt)
    }

    fn manager(&self, private_for: Vec<String>) -> ClientTransactionManager<P> {
        ClientTransactionManager::new(
            self.provider.clone(),
            self.config.from_address,
            private_for,
        )
    }

    async fn query(
        &self,
        contract: Address,
        function: &'static Function,
        args: &[Value],
    ) -> Result<Value, ServiceError> {
        let kind = function
            .output
            .ok_or(AbiError::NoReturnValue(function.name))?;
        let data = function.encode_call(args)?;
        debug!(function = function.name, contract = %contract, "Querying contract");
        let output = self.manager(Vec::new()).call(contract, data).await?;
        Ok(decode_single(&output, kind)?)
    }

    async fn query_string(
        &self,
        contract: Address,
        function: &'static Function,
    ) -> Result<String, ServiceError> {
        self.query(contract, function, &[])
            .await?
            .into_string()
            .ok_or_else(|| unexpected_kind(function, ParamType::String))
    }

    async fn query_uint(
        &self,
        contract: Address,
        function: &'static Function,
        args: &[Value],
    ) -> Result<U256, ServiceError> {
        self.query(contract, function, args)
            .await?
            .as_uint()
            .ok_or_else(|| unexpected_kind(function, ParamType::Uint(256)))
    }
}

fn unexpected_kind(function: &'static Function, expected: ParamType) -> ServiceError {
    ServiceError::Encoding(AbiError::KindMismatch {
        function: function.name,
        index: 0,
        expected,
    })
}

fn transfer_response(
    receipt: &TransactionReceipt,
) -> Result<TransactionResponse<TransferEvent>, ServiceError> {
    let events = extract_events(receipt, &token::TRANSFER_EVENT, *token::TRANSFER_TOPIC)?;
    event_response(receipt, events)
}

fn approval_response(
    receipt: &TransactionReceipt,
) -> Result<TransactionResponse<ApprovalEvent>, ServiceError> {
    let events = extract_events(receipt, &token::APPROVAL_EVENT, *token::APPROVAL_TOPIC)?;
    event_response(receipt, events)
}

/// Fold a receipt and its decoded events into a response. A contract that
/// emits several matching events per call is reported by the first one.
fn event_response<E: TryFrom<DecodedEvent, Error = ServiceError>>(
    receipt: &TransactionReceipt,
    events: Vec<DecodedEvent>,
) -> Result<TransactionResponse<E>, ServiceError> {
    let event = events.into_iter().next().map(E::try_from).transpose()?;
    Ok(TransactionResponse {
        transaction_hash: receipt.transaction_hash,
        event,
    })
}
