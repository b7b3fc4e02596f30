//! Compiled-in values for the farming-pool deployment.

use alloy::primitives::{address, Address};

/// Address of the farming-pool contract the panel talks to.
pub const CONTRACT_ADDRESS: Address = address!("fda1cf6261dcabaa29b3e464f78717ffb54b8a63");

/// JSON-RPC endpoint used when none is configured.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Blocks a transaction must be buried under before it counts as confirmed.
pub const DEFAULT_REQUIRED_CONFIRMATIONS: u64 = 1;

/// EIP-1193 error code returned when the user rejects a wallet request.
pub const USER_REJECTED_REQUEST_CODE: i64 = 4001;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn contract_address_matches_deployment() {
        let deployed = Address::from_str("0xfDA1cF6261DcAbAa29b3e464f78717FFb54b8A63")
            .expect("must be a valid 20-byte address");
        assert_eq!(deployed, CONTRACT_ADDRESS);
    }
}
