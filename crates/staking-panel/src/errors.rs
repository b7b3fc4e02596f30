//! Errors raised while talking to the wallet or the farming-pool contract.

use alloy::{primitives::TxHash, providers::PendingTransactionError, transports::TransportError};
use thiserror::Error;

/// Failure of any step between requesting account access and confirming a transaction.
///
/// None of these are retried; they end the action that raised them.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The wallet refused to expose an account.
    #[error("wallet refused account access: {0}")]
    AccessDenied(String),

    /// The wallet granted access but exposed no account.
    #[error("wallet exposed no accounts")]
    NoAccounts,

    /// The amount could not be encoded as a `uint256`.
    #[error("invalid amount {amount:?}: {reason}")]
    InvalidAmount {
        /// The raw field value.
        amount: String,

        /// Why it was rejected.
        reason: String,
    },

    /// The configured private key is not a valid secp256k1 key.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// The RPC endpoint is not a valid URL.
    #[error("invalid rpc url {0:?}")]
    InvalidRpcUrl(String),

    /// Error from the JSON-RPC transport.
    #[error("transport: {0}")]
    Transport(#[from] TransportError),

    /// Error while waiting for the transaction to be included.
    #[error("confirmation: {0}")]
    Confirmation(#[from] PendingTransactionError),

    /// The transaction was mined but its execution failed.
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
}
