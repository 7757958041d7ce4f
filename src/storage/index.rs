//! Storage index calculation for the staking contract.
//!
//! See <https://docs.soliditylang.org/en/latest/internals/layout_in_storage.html>.

use super::slots::StakingLayout;
use super::word::{pad_left_or_trim, to_word, WORD_SIZE};
use alloy_primitives::{keccak256, Address, B256, U256};

/// Index of a value-type variable: the slot number itself as a word.
pub fn scalar_index(slot: u64) -> B256 {
    to_word(&slot.to_be_bytes())
}

/// Index of `mapping[key]` declared at `slot`.
///
///   index = keccak256(pad32(key) . pad32(slot))
///
/// Key comes first; swapping the operands addresses a different slot.
pub fn mapping_index(key: &[u8], slot: u64) -> B256 {
    let mut preimage = Vec::with_capacity(2 * WORD_SIZE);
    preimage.extend_from_slice(&pad_left_or_trim(key, WORD_SIZE));
    preimage.extend_from_slice(&pad_left_or_trim(&slot.to_be_bytes(), WORD_SIZE));
    keccak256(preimage)
}

/// Index of `mapping(address => ...)[address]` declared at `slot`.
pub fn address_mapping_index(address: Address, slot: u64) -> B256 {
    mapping_index(address.as_slice(), slot)
}

/// Base index of a dynamic array's data: keccak256(pad32(slot)).
pub fn dynamic_array_base(slot: u64) -> B256 {
    keccak256(pad_left_or_trim(&slot.to_be_bytes(), WORD_SIZE))
}

/// Add `offset` to a 256-bit index, wrapping at 2^256.
pub fn offset_index(base: B256, offset: u64) -> B256 {
    let index = U256::from_be_bytes(base.0).wrapping_add(U256::from(offset));
    B256::from(index.to_be_bytes())
}

/// Index of the dynamic array's length word.
///
/// The length lives at the declared slot. Only the low byte of the slot number is kept.
pub fn array_length_index(slot: u64) -> B256 {
    to_word(&[slot as u8])
}

/// Storage indexes touched by a single validator's deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageIndexes {
    /// `_validators[position]`
    pub validators: B256,
    /// `_validators.length`
    pub validators_array_size: B256,
    /// `_addressToIsValidator[address]`
    pub address_to_is_validator: B256,
    /// `_addressToStakedAmount[address]`
    pub address_to_staked_amount: B256,
    /// `_addressToValidatorIndex[address]`
    pub address_to_validator_index: B256,
    /// `_stakedAmount`
    pub staked_amount: B256,
    /// `_maximumNumValidators`
    pub maximum_num_validators: B256,
}

impl StorageIndexes {
    /// Compute the indexes for the validator stored at `position` of the validators array.
    pub fn for_validator(layout: &StakingLayout, address: Address, position: u64) -> Self {
        Self {
            validators: offset_index(dynamic_array_base(layout.validators), position),
            validators_array_size: array_length_index(layout.validators),
            address_to_is_validator: address_mapping_index(address, layout.is_validator),
            address_to_staked_amount: address_mapping_index(address, layout.staked_amount),
            address_to_validator_index: address_mapping_index(address, layout.validator_index),
            staked_amount: scalar_index(layout.total_staked),
            maximum_num_validators: scalar_index(layout.max_validators),
        }
    }

    /// Indexes that do not depend on the validator.
    pub fn globals(layout: &StakingLayout) -> GlobalIndexes {
        GlobalIndexes {
            validators_array_size: array_length_index(layout.validators),
            staked_amount: scalar_index(layout.total_staked),
            maximum_num_validators: scalar_index(layout.max_validators),
        }
    }
}

/// Contract-global storage indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalIndexes {
    /// `_validators.length`
    pub validators_array_size: B256,
    /// `_stakedAmount`
    pub staked_amount: B256,
    /// `_maximumNumValidators`
    pub maximum_num_validators: B256,
}
