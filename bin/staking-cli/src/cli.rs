use std::path::PathBuf;

use clap::{crate_version, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "staking-cli",
    about = "Stake, withdraw and claim rewards on the farming pool",
    version = crate_version!()
)]
pub(crate) struct Cli {
    #[arg(
        long,
        short = 'c',
        env = "STAKING_CONFIG",
        help = "the TOML file containing the panel configuration"
    )]
    pub(crate) config: Option<PathBuf>,

    #[clap(flatten)]
    pub(crate) wallet_args: WalletArgs,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    #[command(about = "Deposit the given amount into the farming pool")]
    Stake(AmountArgs),

    #[command(about = "Withdraw the given amount from the farming pool")]
    Withdraw(AmountArgs),

    #[command(about = "Claim accrued rewards")]
    Claim,

    #[command(about = "Open an interactive panel reading commands from stdin")]
    Panel,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct AmountArgs {
    #[arg(
        long,
        default_value = "",
        help = "the amount to pass to the contract, in the token's base units"
    )]
    pub(crate) amount: String,
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct WalletArgs {
    #[arg(
        long,
        env = "STAKING_RPC_URL",
        help = "the url of the ethereum json-rpc endpoint"
    )]
    pub(crate) rpc_url: Option<String>,

    #[arg(
        long,
        env = "STAKING_PRIVATE_KEY",
        hide_env_values = true,
        conflicts_with = "node_wallet",
        help = "hex-encoded private key used to sign transactions"
    )]
    pub(crate) private_key: Option<String>,

    #[arg(
        long,
        help = "let the rpc endpoint manage accounts and sign transactions"
    )]
    pub(crate) node_wallet: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn stake_amount_is_kept_verbatim() {
        let cli = Cli::try_parse_from(["staking-cli", "stake", "--amount", "0x64"]).unwrap();
        let Commands::Stake(args) = cli.command else {
            panic!("expected stake command");
        };
        assert_eq!(args.amount, "0x64");
    }

    #[test]
    fn missing_amount_is_empty() {
        let cli = Cli::try_parse_from(["staking-cli", "withdraw"]).unwrap();
        let Commands::Withdraw(args) = cli.command else {
            panic!("expected withdraw command");
        };
        assert!(args.amount.is_empty());
    }

    #[test]
    fn private_key_conflicts_with_node_wallet() {
        let res = Cli::try_parse_from([
            "staking-cli",
            "--private-key",
            "00",
            "--node-wallet",
            "claim",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn amount_commands_describe_themselves() {
        let cli = Cli::command();
        let about = |name: &str| {
            cli.find_subcommand(name)
                .and_then(|cmd| cmd.get_about())
                .map(ToString::to_string)
        };

        assert_eq!(
            about("stake").as_deref(),
            Some("Deposit the given amount into the farming pool")
        );
        assert_eq!(
            about("withdraw").as_deref(),
            Some("Withdraw the given amount from the farming pool")
        );
    }
}
