//! The boundary between the panel and whatever holds the user's keys.
//!
//! A [`WalletProvider`] hands out account access and signer-bound [`StakingContract`] handles;
//! every contract method returns a [`PendingTransaction`] that resolves once the chain includes
//! it.

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;

use crate::errors::WalletError;

/// A source of accounts and signers, such as a local key or a wallet-managing node.
#[async_trait]
pub trait WalletProvider: Send + Sync + 'static {
    /// Signer-bound contract handle produced by [`Self::connect`].
    type Contract: StakingContract;

    /// Asks the wallet to expose its accounts, prompting for authorization if needed.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Derives a signer for `account` and binds it to the contract at `contract`.
    async fn connect(
        &self,
        account: Address,
        contract: Address,
    ) -> Result<Self::Contract, WalletError>;
}

/// The three calls the farming-pool contract exposes.
///
/// Amounts are passed through exactly as the user typed them; converting them to `uint256` is the
/// binding's job.
#[async_trait]
pub trait StakingContract: Send + Sync {
    /// Transaction handle returned by each call.
    type Pending: PendingTransaction;

    /// Submits `deposit(amount)`.
    async fn deposit(&self, amount: &str) -> Result<Self::Pending, WalletError>;

    /// Submits `withdraw(amount)`.
    async fn withdraw(&self, amount: &str) -> Result<Self::Pending, WalletError>;

    /// Submits `claim()`.
    async fn claim(&self) -> Result<Self::Pending, WalletError>;
}

/// A submitted transaction that has not been confirmed yet.
#[async_trait]
pub trait PendingTransaction: Send {
    /// Hash of the submitted transaction.
    fn tx_hash(&self) -> TxHash;

    /// Waits until the transaction is included on chain.
    async fn confirm(self) -> Result<Confirmation, WalletError>;
}

/// Proof that a transaction was included and executed successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    /// Hash of the confirmed transaction.
    pub tx_hash: TxHash,

    /// Block the transaction was included in, if the node reported it.
    pub block_number: Option<u64>,
}
