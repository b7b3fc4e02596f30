//! [`WalletProvider`] backed by an Ethereum JSON-RPC endpoint.

use std::{fmt, str::FromStr};

use alloy::{
    network::{Ethereum, EthereumWallet, ReceiptResponse, TransactionBuilder},
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    sol_types::SolCall,
    transports::{http::reqwest::Url, TransportError},
};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    constants::USER_REJECTED_REQUEST_CODE,
    contract::FarmingPool,
    errors::WalletError,
    wallet::{Confirmation, PendingTransaction, StakingContract, WalletProvider},
};

/// Where the keys that sign transactions live.
#[derive(Debug, Clone)]
pub enum WalletMode {
    /// A key held by this process; transactions are signed locally and sent raw.
    PrivateKey(PrivateKeySigner),

    /// The endpoint manages the accounts (a wallet bridge or dev node) and signs on request.
    Node,
}

impl WalletMode {
    /// Builds a [`WalletMode::PrivateKey`] from a hex-encoded key, with or without `0x`.
    pub fn from_private_key(key: &str) -> Result<Self, WalletError> {
        let signer = PrivateKeySigner::from_str(key.trim())
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;

        Ok(Self::PrivateKey(signer))
    }
}

/// Wallet reached over JSON-RPC.
#[derive(Clone)]
pub struct RpcWallet {
    provider: DynProvider,
    mode: WalletMode,
    required_confirmations: u64,
}

impl fmt::Debug for RpcWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcWallet")
            .field("mode", &self.mode)
            .field("required_confirmations", &self.required_confirmations)
            .finish_non_exhaustive()
    }
}

impl RpcWallet {
    /// Connects to `rpc_url`, signing with the keys described by `mode`.
    pub fn new(
        rpc_url: &str,
        mode: WalletMode,
        required_confirmations: u64,
    ) -> Result<Self, WalletError> {
        let url =
            Url::parse(rpc_url).map_err(|_| WalletError::InvalidRpcUrl(rpc_url.to_string()))?;

        let provider = match &mode {
            WalletMode::PrivateKey(signer) => ProviderBuilder::new()
                .wallet(EthereumWallet::new(signer.clone()))
                .on_http(url)
                .erased(),
            WalletMode::Node => ProviderBuilder::new().on_http(url).erased(),
        };
        debug!(%rpc_url, ?mode, "constructed rpc wallet");

        Ok(Self {
            provider,
            mode,
            required_confirmations,
        })
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    type Contract = RpcStakingContract;

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        match &self.mode {
            WalletMode::PrivateKey(signer) => Ok(vec![signer.address()]),
            WalletMode::Node => self
                .provider
                .raw_request::<_, Vec<Address>>("eth_requestAccounts".into(), ())
                .await
                .map_err(classify_access_error),
        }
    }

    async fn connect(
        &self,
        account: Address,
        contract: Address,
    ) -> Result<Self::Contract, WalletError> {
        debug!(%account, %contract, "binding signer to contract");

        Ok(RpcStakingContract {
            provider: self.provider.clone(),
            address: contract,
            from: account,
            required_confirmations: self.required_confirmations,
        })
    }
}

/// The farming-pool contract bound to one signing account.
#[derive(Clone)]
pub struct RpcStakingContract {
    provider: DynProvider,
    address: Address,
    from: Address,
    required_confirmations: u64,
}

impl fmt::Debug for RpcStakingContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcStakingContract")
            .field("address", &self.address)
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl RpcStakingContract {
    /// Builds the transaction carrying `call` from the bound account to the contract.
    fn transaction_request<C: SolCall>(&self, call: C) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.from)
            .with_to(self.address)
            .with_input(call.abi_encode())
    }

    async fn submit(&self, tx: TransactionRequest) -> Result<RpcPendingTransaction, WalletError> {
        let inner = self.provider.send_transaction(tx).await?;
        info!(tx_hash = %inner.tx_hash(), contract = %self.address, "transaction submitted");

        Ok(RpcPendingTransaction {
            inner,
            required_confirmations: self.required_confirmations,
        })
    }
}

#[async_trait]
impl StakingContract for RpcStakingContract {
    type Pending = RpcPendingTransaction;

    async fn deposit(&self, amount: &str) -> Result<Self::Pending, WalletError> {
        let tx = self.transaction_request(FarmingPool::depositCall {
            _amount: parse_amount(amount)?,
        });

        self.submit(tx).await
    }

    async fn withdraw(&self, amount: &str) -> Result<Self::Pending, WalletError> {
        let tx = self.transaction_request(FarmingPool::withdrawCall {
            _amount: parse_amount(amount)?,
        });

        self.submit(tx).await
    }

    async fn claim(&self) -> Result<Self::Pending, WalletError> {
        let tx = self.transaction_request(FarmingPool::claimCall {});

        self.submit(tx).await
    }
}

/// A transaction sent through [`RpcStakingContract`].
pub struct RpcPendingTransaction {
    inner: PendingTransactionBuilder<Ethereum>,
    required_confirmations: u64,
}

impl fmt::Debug for RpcPendingTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcPendingTransaction")
            .field("tx_hash", self.inner.tx_hash())
            .field("required_confirmations", &self.required_confirmations)
            .finish()
    }
}

#[async_trait]
impl PendingTransaction for RpcPendingTransaction {
    fn tx_hash(&self) -> TxHash {
        *self.inner.tx_hash()
    }

    async fn confirm(self) -> Result<Confirmation, WalletError> {
        let receipt = self
            .inner
            .with_required_confirmations(self.required_confirmations)
            .get_receipt()
            .await?;

        confirmation_from_receipt(&receipt)
    }
}

/// Turns a mined receipt into a [`Confirmation`], failing if execution reverted.
fn confirmation_from_receipt(receipt: &TransactionReceipt) -> Result<Confirmation, WalletError> {
    if !receipt.status() {
        return Err(WalletError::Reverted(receipt.transaction_hash));
    }

    Ok(Confirmation {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
    })
}

/// Converts a user-entered amount to `uint256`, accepting decimal or `0x`-prefixed hex.
pub fn parse_amount(amount: &str) -> Result<U256, WalletError> {
    U256::from_str(amount).map_err(|e| WalletError::InvalidAmount {
        amount: amount.to_string(),
        reason: e.to_string(),
    })
}

fn classify_access_error(err: TransportError) -> WalletError {
    match err.as_error_resp() {
        Some(payload) if payload.code == USER_REJECTED_REQUEST_CODE => {
            WalletError::AccessDenied(payload.message.to_string())
        }
        _ => WalletError::Transport(err),
    }
}
