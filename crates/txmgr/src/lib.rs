//! Transaction submission through a node-managed account.
//!
//! The node holds the signing key: `eth_sendTransaction` hands the unsigned
//! envelope to the node, which signs with the configured account and answers
//! with the transaction hash. The manager then polls for the receipt at a
//! fixed interval until it appears or the attempt budget runs out. The
//! submission itself is never repeated; a transaction reaches the node at
//! most once per call.

use std::time::Duration;

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_provider::Provider;
use alloy_transport::TransportError;
use client::rpc::{CallRequest, PrivateTransactionRequest, TransactionReceipt};
use thiserror::Error;
use tokio_retry::{strategy::FixedInterval, RetryIf};
use tracing::{debug, info};

/// Gas price attached to every submission, in wei.
pub const GAS_PRICE: u64 = 22_000_000_000;

/// Gas limit attached to every submission.
pub const GAS_LIMIT: u64 = 4_300_000;

/// Default number of receipt polls before giving up.
pub const DEFAULT_POLL_ATTEMPTS: usize = 40;

/// Default pause between receipt polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);

#[derive(Error, Debug)]
pub enum TxError {
    /// The node rejected a request or the transport failed. Submission
    /// errors are terminal; they are never retried.
    #[error("RPC error: {0}")]
    Rpc(#[from] TransportError),

    /// The transaction was mined but execution reverted.
    #[error("transaction {hash} reverted")]
    Reverted { hash: B256 },

    /// The receipt did not appear within the polling budget. The
    /// transaction may still be mined later.
    #[error("no receipt for transaction {hash} after {attempts} polls")]
    ReceiptTimeout { hash: B256, attempts: usize },

    /// A deployment receipt arrived without a contract address.
    #[error("deployment receipt {hash} carries no contract address")]
    MissingContractAddress { hash: B256 },
}

/// Sends transactions from an account the connected node manages.
///
/// Every submission carries the fixed [`GAS_PRICE`] and [`GAS_LIMIT`] and
/// the manager's `privateFor` recipient list. An empty list makes the
/// transaction public.
#[derive(Debug, Clone)]
pub struct ClientTransactionManager<P> {
    provider: P,
    from: Address,
    private_for: Vec<String>,
    poll_attempts: usize,
    poll_interval: Duration,
}

impl<P: Provider> ClientTransactionManager<P> {
    /// Create a manager sending from `from` on behalf of the given privacy
    /// recipients.
    pub fn new(provider: P, from: Address, private_for: Vec<String>) -> Self {
        Self {
            provider,
            from,
            private_for,
            poll_attempts: DEFAULT_POLL_ATTEMPTS,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the receipt polling schedule. At least one poll is always
    /// made, even with `attempts` of zero.
    pub fn with_polling(mut self, attempts: usize, interval: Duration) -> Self {
        self.poll_attempts = attempts;
        self.poll_interval = interval;
        self
    }

    /// Submit a transaction and wait for its receipt.
    ///
    /// `to` is `None` for contract deployment. A mined-but-reverted
    /// transaction is reported as [`TxError::Reverted`], not as a receipt.
    pub async fn submit(
        &self,
        to: Option<Address>,
        data: Bytes,
    ) -> Result<TransactionReceipt, TxError> {
        let request = PrivateTransactionRequest {
            from: self.from,
            to,
            gas: U256::from(GAS_LIMIT),
            gas_price: U256::from(GAS_PRICE),
            data,
            private_for: self.private_for.clone(),
        };

        let hash: B256 = self
            .provider
            .raw_request("eth_sendTransaction".into(), (request,))
            .await?;

        info!(
            tx_hash = %hash,
            private = !self.private_for.is_empty(),
            "Transaction accepted by node"
        );

        let receipt = self.wait_for_receipt(hash).await?;
        if !receipt.is_status_ok() {
            return Err(TxError::Reverted { hash });
        }
        Ok(receipt)
    }

    /// Deploy a contract and return its address along with the receipt.
    pub async fn deploy(&self, data: Bytes) -> Result<(Address, TransactionReceipt), TxError> {
        let receipt = self.submit(None, data).await?;
        let address = receipt
            .contract_address
            .ok_or(TxError::MissingContractAddress {
                hash: receipt.transaction_hash,
            })?;

        info!(
            contract_address = %address,
            tx_hash = %receipt.transaction_hash,
            "Contract deployed"
        );

        Ok((address, receipt))
    }

    /// Execute a read-only call against the latest block and return the raw
    /// output bytes.
    pub async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, TxError> {
        let request = CallRequest { to, data };
        let output: Bytes = self
            .provider
            .raw_request("eth_call".into(), (request, "latest"))
            .await?;
        Ok(output)
    }

    /// Poll for the receipt at a fixed interval. Only a missing receipt is
    /// retried; node errors surface immediately.
    async fn wait_for_receipt(&self, hash: B256) -> Result<TransactionReceipt, TxError> {
        let retry_strategy =
            FixedInterval::new(self.poll_interval).take(self.poll_attempts.saturating_sub(1));

        RetryIf::spawn(
            retry_strategy,
            || self.fetch_receipt(hash),
            |e: &TxError| matches!(e, TxError::ReceiptTimeout { .. }),
        )
        .await
    }

    async fn fetch_receipt(&self, hash: B256) -> Result<TransactionReceipt, TxError> {
        let receipt: Option<TransactionReceipt> = self
            .provider
            .raw_request("eth_getTransactionReceipt".into(), (hash,))
            .await?;

        receipt.ok_or_else(|| {
            debug!(tx_hash = %hash, "Receipt not yet available");
            TxError::ReceiptTimeout {
                hash,
                attempts: self.poll_attempts,
            }
        })
    }
}
