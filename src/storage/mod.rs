//! Staking Contract Storage
//!
//! Computes the storage indexes the EVM uses for the staking contract's variables and
//! reads the resulting state back out of a storage map.
//!
//! Layout rules (Solidity):
//!   value type at slot S          → S
//!   mapping at slot S, key K      → keccak256(pad32(K) . pad32(S))
//!   dynamic array at slot S       → length at S, element i at keccak256(pad32(S)) + i
//!
//! Storage layout must match the staking contract bytecode embedded in genesis.

pub mod index;
pub mod providers;
pub mod readers;
pub mod slots;
pub mod word;

pub use index::{
    address_mapping_index, array_length_index, dynamic_array_base, mapping_index, offset_index,
    scalar_index, GlobalIndexes, StorageIndexes,
};
pub use providers::{AccountStorageReader, GenesisStorageReader};
pub use readers::{
    is_validator_on_chain, read_staked_amount, read_validator_index, read_validator_set,
    ValidatorSet,
};
pub use slots::{SlotRole, StakingLayout};
pub use word::{
    decode_address, decode_bool, decode_u256, decode_u64, encode_address, encode_bool,
    encode_u256, encode_u64, pad_left_or_trim, to_word,
};

use alloy_primitives::{Address, B256};

/// Trait for reading contract storage slots.
///
/// Implemented over genesis allocs and single-account storage maps.
pub trait StorageReader {
    /// Read a storage slot value from a contract address.
    /// Returns None if the contract or slot doesn't exist.
    fn read_storage(&self, address: Address, key: B256) -> Option<B256>;

    /// Whether the contract at `address` has any storage to read.
    fn has_storage(&self, address: Address) -> bool;
}
