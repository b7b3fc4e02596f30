//! CLI for staking into, withdrawing from and claiming rewards on the farming pool.

mod cli;
mod config;
mod handlers;

use anyhow::{Error, Result};
use clap::Parser;
use staking_panel::Action;
use staking_panel_common::logging::{self, LoggerConfig};
use tracing::debug;

use crate::{
    cli::{Cli, Commands},
    config::Config,
    handlers::{action, console},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init(
        LoggerConfig::with_base_name("staking-cli").with_otlp_url(logging::get_otlp_url_from_env()),
    );

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::parse_toml::<Config>(path)?,
        None => Config::default(),
    }
    .with_overrides(&cli.wallet_args);
    debug!(rpc_url = %config.rpc_url, "resolved configuration");

    let panel = handlers::build_panel(&config)?;

    match cli.command {
        Commands::Stake(args) => {
            action::handle_action(&panel, Action::Stake, Some(args.amount)).await
        }
        Commands::Withdraw(args) => {
            action::handle_action(&panel, Action::Withdraw, Some(args.amount)).await
        }
        Commands::Claim => action::handle_action(&panel, Action::Claim, None).await,
        Commands::Panel => console::run(&panel).await,
    }
}
