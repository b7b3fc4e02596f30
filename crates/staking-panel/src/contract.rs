//! ABI binding for the farming-pool contract.

use alloy::sol;

sol! {
    /// The subset of the farming-pool ABI the panel calls.
    interface FarmingPool {
        function deposit(uint256 _amount) external;
        function withdraw(uint256 _amount) external;
        function claim() external;
    }
}

#[cfg(test)]
mod tests {
    use alloy::{primitives::U256, sol_types::SolCall};

    use super::FarmingPool;

    #[test]
    fn selectors_match_contract_abi() {
        assert_eq!(FarmingPool::depositCall::SELECTOR, [0xb6, 0xb5, 0x5f, 0x25]);
        assert_eq!(FarmingPool::withdrawCall::SELECTOR, [0x2e, 0x1a, 0x7d, 0x4d]);
        assert_eq!(FarmingPool::claimCall::SELECTOR, [0x4e, 0x71, 0xd9, 0x2d]);
    }

    #[test]
    fn deposit_encodes_amount_as_single_word() {
        let call = FarmingPool::depositCall {
            _amount: U256::from(100),
        };
        let data = call.abi_encode();

        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], FarmingPool::depositCall::SELECTOR.as_slice());
        assert_eq!(data[35], 100);
        assert!(data[4..35].iter().all(|b| *b == 0));
    }

    #[test]
    fn claim_has_no_arguments() {
        let data = FarmingPool::claimCall {}.abi_encode();
        assert_eq!(data, FarmingPool::claimCall::SELECTOR.to_vec());
    }
}
