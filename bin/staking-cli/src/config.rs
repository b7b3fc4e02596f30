use std::{fmt, fs, path::Path, str::FromStr};

use alloy::primitives::Address;
use anyhow::{anyhow, Context};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use staking_panel::{
    constants::{CONTRACT_ADDRESS, DEFAULT_REQUIRED_CONFIRMATIONS, DEFAULT_RPC_URL},
    WalletMode,
};
use tracing::{debug, trace};

use crate::cli::WalletArgs;

/// The configuration values for the staking panel.
///
/// Every field has a default, so an empty file (or no file at all) yields a panel pointed at a
/// local node with no wallet attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Config {
    /// The ethereum json-rpc endpoint.
    #[serde(default = "default_rpc_url")]
    pub(crate) rpc_url: String,

    /// Overrides the compiled-in farming-pool address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) contract_address: Option<String>,

    /// The number of blocks a transaction must be buried under to count as confirmed.
    #[serde(default = "default_required_confirmations")]
    pub(crate) required_confirmations: u64,

    /// The wallet used to sign transactions. Absent means no wallet provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) wallet: Option<WalletConfig>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum WalletConfig {
    /// Sign locally with a hex-encoded key.
    PrivateKey { private_key: String },

    /// Let the endpoint hold the accounts.
    Node,
}

// keeps the key out of the logs
impl fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletConfig::PrivateKey { .. } => f
                .debug_struct("PrivateKey")
                .field("private_key", &"<redacted>")
                .finish(),
            WalletConfig::Node => write!(f, "Node"),
        }
    }
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

const fn default_required_confirmations() -> u64 {
    DEFAULT_REQUIRED_CONFIRMATIONS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            contract_address: None,
            required_confirmations: default_required_confirmations(),
            wallet: None,
        }
    }
}

impl Config {
    /// Applies command-line overrides on top of the file values.
    pub(crate) fn with_overrides(mut self, args: &WalletArgs) -> Self {
        if let Some(rpc_url) = &args.rpc_url {
            self.rpc_url = rpc_url.clone();
        }

        if let Some(private_key) = &args.private_key {
            self.wallet = Some(WalletConfig::PrivateKey {
                private_key: private_key.clone(),
            });
        } else if args.node_wallet {
            self.wallet = Some(WalletConfig::Node);
        }

        self
    }

    /// The contract to target, falling back to the compiled-in deployment.
    pub(crate) fn contract_address(&self) -> anyhow::Result<Address> {
        match &self.contract_address {
            Some(addr) => Address::from_str(addr)
                .map_err(|e| anyhow!("invalid contract address {addr:?}: {e}")),
            None => Ok(CONTRACT_ADDRESS),
        }
    }

    /// The wallet mode to use, if any wallet is configured.
    pub(crate) fn wallet_mode(&self) -> anyhow::Result<Option<WalletMode>> {
        self.wallet
            .as_ref()
            .map(|wallet| match wallet {
                WalletConfig::PrivateKey { private_key } => {
                    WalletMode::from_private_key(private_key).context("load private key")
                }
                WalletConfig::Node => Ok(WalletMode::Node),
            })
            .transpose()
    }
}

/// Reads and parses a TOML file from the given path into the given type `T`.
pub(crate) fn parse_toml<T>(path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: std::fmt::Debug + DeserializeOwned,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read TOML file {}", path.display()))?;
    trace!(?contents, "read file");

    let parsed = toml::from_str::<T>(&contents)
        .with_context(|| format!("failed to parse TOML file {}", path.display()))?;
    debug!(?parsed, "parsed TOML file");

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_config_serde_toml() {
        let config = r#"
            rpc_url = "http://localhost:8545"
            contract_address = "0xfDA1cF6261DcAbAa29b3e464f78717FFb54b8A63"
            required_confirmations = 3

            [wallet]
            kind = "private_key"
            private_key = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
        "#;

        let config = toml::from_str::<Config>(config);
        assert!(
            config.is_ok(),
            "must be able to deserialize config from toml but got: {}",
            config.unwrap_err()
        );

        let config = config.unwrap();
        assert_eq!(config.required_confirmations, 3);
        assert_eq!(config.contract_address().unwrap(), CONTRACT_ADDRESS);

        let serialized = toml::to_string(&config).unwrap();
        let deserialized = toml::from_str::<Config>(&serialized).unwrap();
        assert_eq!(
            deserialized, config,
            "must be able to serialize and deserialize config to toml"
        );
    }

    #[test]
    fn empty_config_has_no_wallet() {
        let config = toml::from_str::<Config>("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.contract_address().unwrap(), CONTRACT_ADDRESS);
        assert!(config.wallet_mode().unwrap().is_none());
    }

    #[test]
    fn node_wallet_kind() {
        let config = toml::from_str::<Config>("[wallet]\nkind = \"node\"").unwrap();

        assert_eq!(config.wallet, Some(WalletConfig::Node));
        assert!(matches!(config.wallet_mode().unwrap(), Some(WalletMode::Node)));
    }

    #[test]
    fn cli_overrides_file_values() {
        let config = Config {
            wallet: Some(WalletConfig::Node),
            ..Config::default()
        };
        let args = WalletArgs {
            rpc_url: Some("http://example.com:8545".to_string()),
            private_key: Some(DEV_KEY.to_string()),
            node_wallet: false,
        };

        let config = config.with_overrides(&args);

        assert_eq!(config.rpc_url, "http://example.com:8545");
        assert!(matches!(
            config.wallet_mode().unwrap(),
            Some(WalletMode::PrivateKey(_))
        ));
    }

    #[test]
    fn no_overrides_keeps_file_values() {
        let config = Config {
            wallet: Some(WalletConfig::Node),
            ..Config::default()
        };

        let overridden = config.clone().with_overrides(&WalletArgs::default());

        assert_eq!(overridden, config);
    }

    #[test]
    fn debug_output_hides_private_key() {
        let wallet = WalletConfig::PrivateKey {
            private_key: DEV_KEY.to_string(),
        };

        assert!(!format!("{wallet:?}").contains(DEV_KEY));
    }

    #[test]
    fn bad_contract_address_is_reported() {
        let config = Config {
            contract_address: Some("0x1234".to_string()),
            ..Config::default()
        };

        assert!(config.contract_address().is_err());
    }

    #[test]
    fn bad_private_key_is_reported() {
        let config = Config {
            wallet: Some(WalletConfig::PrivateKey {
                private_key: "zz".to_string(),
            }),
            ..Config::default()
        };

        assert!(config.wallet_mode().is_err());
    }
}
