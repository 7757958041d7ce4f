/// Default chain ID for prestaked networks
pub const DEFAULT_CHAIN_ID: u64 = 100;
/// Default block gas limit (5,242,880)
pub const DEFAULT_GAS_LIMIT: u64 = 5_242_880;
/// Default validator set capacity; the staking contract stores it as a uint32
pub const DEFAULT_MAX_VALIDATORS: u64 = u32::MAX as u64;
/// Upper bound on array entries read back from storage; the stored length is untrusted
pub const MAX_VALIDATOR_READ: u64 = 10_000;
