//! Wallet-bound action panel for a single farming-pool contract.
//!
//! The panel holds the two amount fields a user edits and turns each of the three presses (stake,
//! withdraw, claim) into exactly one contract call made through a [`WalletProvider`]. All balance
//! accounting and reward logic stays inside the on-chain contract.

pub mod constants;
#[allow(missing_docs)]
pub mod contract;
pub mod errors;
pub mod panel;
pub mod rpc;
pub mod wallet;

pub use errors::WalletError;
pub use panel::{Action, ActionHandle, ActionOutcome, ActionPanel, ContractCall, SkipReason};
pub use rpc::{RpcWallet, WalletMode};
pub use wallet::{Confirmation, PendingTransaction, StakingContract, WalletProvider};
