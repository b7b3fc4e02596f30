pub(crate) mod action;
pub(crate) mod console;

use anyhow::{Context, Result};
use staking_panel::{ActionPanel, RpcWallet};
use tracing::{info, warn};

use crate::config::Config;

/// Builds the panel described by `config`.
///
/// A config without a wallet yields a panel whose presses do nothing.
pub(crate) fn build_panel(config: &Config) -> Result<ActionPanel<RpcWallet>> {
    let contract_address = config.contract_address()?;

    let wallet = config
        .wallet_mode()?
        .map(|mode| RpcWallet::new(&config.rpc_url, mode, config.required_confirmations))
        .transpose()
        .context("connect wallet")?;

    match &wallet {
        Some(wallet) => {
            info!(rpc_url = %config.rpc_url, ?wallet, %contract_address, "wallet attached")
        }
        None => warn!("no wallet configured, actions will be ignored"),
    }

    Ok(ActionPanel::new(wallet, contract_address))
}
