use alloy_primitives::{address, Address};

/// Staking contract address (deterministic, pre-assigned).
///
/// Holds the prestaked validator set and the sum of their deposits as its balance.
pub const STAKING_CONTRACT_ADDRESS: Address = address!("0000000000000000000000000000000000001001");
