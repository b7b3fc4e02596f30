//! The action panel: two amount fields and three buttons bound to contract calls.
//!
//! Every press snapshots the field it needs, then runs on its own task:
//!
//! 1. request account access from the wallet,
//! 2. derive a signer and bind it to the contract,
//! 3. submit exactly one contract call,
//! 4. wait for the transaction to be confirmed.
//!
//! Presses are not coordinated with each other. An empty amount or a missing wallet turns the press
//! into a no-op.

use std::{fmt, sync::Arc};

use alloy::primitives::Address;
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::{
    errors::WalletError,
    wallet::{Confirmation, PendingTransaction, StakingContract, WalletProvider},
};

/// The three buttons on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Deposits the stake amount.
    Stake,

    /// Withdraws the withdraw amount.
    Withdraw,

    /// Claims accrued rewards.
    Claim,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Stake => write!(f, "stake"),
            Action::Withdraw => write!(f, "withdraw"),
            Action::Claim => write!(f, "claim"),
        }
    }
}

/// The single contract call a press resolves to, with the amount captured at press time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    /// `deposit(amount)`.
    Deposit(String),

    /// `withdraw(amount)`.
    Withdraw(String),

    /// `claim()`.
    Claim,
}

impl ContractCall {
    /// The amount argument, if the call takes one.
    pub fn amount(&self) -> Option<&str> {
        match self {
            ContractCall::Deposit(amount) | ContractCall::Withdraw(amount) => Some(amount),
            ContractCall::Claim => None,
        }
    }
}

impl fmt::Display for ContractCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractCall::Deposit(amount) => write!(f, "deposit({amount})"),
            ContractCall::Withdraw(amount) => write!(f, "withdraw({amount})"),
            ContractCall::Claim => write!(f, "claim()"),
        }
    }
}

/// Why a press did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The amount field was empty.
    EmptyAmount,

    /// No wallet provider is available.
    NoWallet,
}

/// What a press ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Nothing was sent.
    Skipped(SkipReason),

    /// The call was mined.
    Confirmed(Confirmation),
}

/// Handle to the task spawned by a press.
pub type ActionHandle = JoinHandle<Result<ActionOutcome, WalletError>>;

/// A text field holding the most recently written amount.
#[derive(Debug, Default)]
struct AmountField(RwLock<String>);

impl AmountField {
    fn set(&self, value: String) {
        *self.0.write() = value;
    }

    fn get(&self) -> String {
        self.0.read().clone()
    }
}

/// Runs contract calls against the fixed contract through an optional wallet.
#[derive(Debug)]
struct Dispatcher<W> {
    wallet: Option<Arc<W>>,
    contract_address: Address,
}

// derive would require `W: Clone`
impl<W> Clone for Dispatcher<W> {
    fn clone(&self) -> Self {
        Self {
            wallet: self.wallet.clone(),
            contract_address: self.contract_address,
        }
    }
}

impl<W: WalletProvider> Dispatcher<W> {
    async fn run(&self, call: ContractCall) -> Result<ActionOutcome, WalletError> {
        if call.amount().is_some_and(str::is_empty) {
            debug!(%call, "amount is empty, ignoring press");
            return Ok(ActionOutcome::Skipped(SkipReason::EmptyAmount));
        }

        let Some(wallet) = &self.wallet else {
            debug!(%call, "no wallet provider, ignoring press");
            return Ok(ActionOutcome::Skipped(SkipReason::NoWallet));
        };

        info!(%call, "requesting account access");
        let accounts = wallet.request_accounts().await?;
        let account = *accounts.first().ok_or(WalletError::NoAccounts)?;

        let contract = wallet.connect(account, self.contract_address).await?;

        info!(%call, %account, contract = %self.contract_address, "sending transaction");
        let pending = match &call {
            ContractCall::Deposit(amount) => contract.deposit(amount).await?,
            ContractCall::Withdraw(amount) => contract.withdraw(amount).await?,
            ContractCall::Claim => contract.claim().await?,
        };

        let tx_hash = pending.tx_hash();
        info!(%call, %tx_hash, "waiting for transaction to be confirmed");
        let confirmation = pending.confirm().await?;

        info!(%call, %tx_hash, block_number = ?confirmation.block_number, "transaction confirmed");
        Ok(ActionOutcome::Confirmed(confirmation))
    }
}

/// Two amount fields and three buttons bound to a farming-pool contract.
#[derive(Debug)]
pub struct ActionPanel<W> {
    dispatcher: Dispatcher<W>,
    stake_amount: AmountField,
    withdraw_amount: AmountField,
}

impl<W: WalletProvider> ActionPanel<W> {
    /// Creates a panel for the contract at `contract_address`.
    ///
    /// With `wallet` set to `None` every press is a no-op, as when no wallet is installed.
    pub fn new(wallet: Option<W>, contract_address: Address) -> Self {
        Self {
            dispatcher: Dispatcher {
                wallet: wallet.map(Arc::new),
                contract_address,
            },
            stake_amount: AmountField::default(),
            withdraw_amount: AmountField::default(),
        }
    }

    /// The contract every press targets.
    pub fn contract_address(&self) -> Address {
        self.dispatcher.contract_address
    }

    /// Whether a wallet provider is present.
    pub fn has_wallet(&self) -> bool {
        self.dispatcher.wallet.is_some()
    }

    /// Overwrites the stake amount field.
    pub fn set_stake_amount(&self, value: impl Into<String>) {
        self.stake_amount.set(value.into());
    }

    /// Overwrites the withdraw amount field.
    pub fn set_withdraw_amount(&self, value: impl Into<String>) {
        self.withdraw_amount.set(value.into());
    }

    /// Current stake amount field.
    pub fn stake_amount(&self) -> String {
        self.stake_amount.get()
    }

    /// Current withdraw amount field.
    pub fn withdraw_amount(&self) -> String {
        self.withdraw_amount.get()
    }

    /// Resolves `action` to a call using the current field values.
    pub fn snapshot(&self, action: Action) -> ContractCall {
        match action {
            Action::Stake => ContractCall::Deposit(self.stake_amount.get()),
            Action::Withdraw => ContractCall::Withdraw(self.withdraw_amount.get()),
            Action::Claim => ContractCall::Claim,
        }
    }

    /// Runs `call` to completion on the current task.
    pub async fn run(&self, call: ContractCall) -> Result<ActionOutcome, WalletError> {
        self.dispatcher.run(call).await
    }

    /// Presses the button for `action`, spawning its work on the tokio runtime.
    ///
    /// The field is read before this returns, so later edits do not affect the spawned call.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn press(&self, action: Action) -> ActionHandle {
        let call = self.snapshot(action);
        let dispatcher = self.dispatcher.clone();

        tokio::spawn(async move { dispatcher.run(call).await })
    }

    /// Presses Stake.
    pub fn stake(&self) -> ActionHandle {
        self.press(Action::Stake)
    }

    /// Presses Withdraw.
    pub fn withdraw(&self) -> ActionHandle {
        self.press(Action::Withdraw)
    }

    /// Presses Claim.
    pub fn claim(&self) -> ActionHandle {
        self.press(Action::Claim)
    }
}
