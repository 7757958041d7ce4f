use super::index::{address_mapping_index, dynamic_array_base, offset_index, StorageIndexes};
use super::slots::StakingLayout;
use super::word::{decode_address, decode_bool, decode_u256, decode_u64};
use super::StorageReader;
use crate::constants::MAX_VALIDATOR_READ;
use alloy_primitives::{Address, B256, U256};

/// Validator set as seen by the staking contract's storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorSet {
    /// Ordered `_validators` array
    pub validators: Vec<Address>,
    /// `_stakedAmount`, the sum of all deposits
    pub total_staked: U256,
    /// `_maximumNumValidators`
    pub max_validators: u64,
}

/// Read the validator array, total stake and capacity of the staking contract at `contract`.
///
/// Returns `None` if the contract has no storage. Unset slots read as zero, which is what
/// the EVM returns for them. At most [`MAX_VALIDATOR_READ`] array entries are read, whatever
/// length the storage claims.
pub fn read_validator_set(
    reader: &impl StorageReader,
    contract: Address,
    layout: &StakingLayout,
) -> Option<ValidatorSet> {
    if !reader.has_storage(contract) {
        return None;
    }

    let globals = StorageIndexes::globals(layout);
    let length = decode_u64(read_or_zero(reader, contract, globals.validators_array_size));
    let total_staked = decode_u256(read_or_zero(reader, contract, globals.staked_amount));
    let max_validators = decode_u64(read_or_zero(reader, contract, globals.maximum_num_validators));

    let base = dynamic_array_base(layout.validators);
    let validators = (0..length.min(MAX_VALIDATOR_READ))
        .map(|i| decode_address(read_or_zero(reader, contract, offset_index(base, i))))
        .collect();

    Some(ValidatorSet { validators, total_staked, max_validators })
}

/// Check `_addressToIsValidator[address]`.
pub fn is_validator_on_chain(
    reader: &impl StorageReader,
    contract: Address,
    layout: &StakingLayout,
    address: Address,
) -> bool {
    let key = address_mapping_index(address, layout.is_validator);
    decode_bool(read_or_zero(reader, contract, key))
}

/// Read `_addressToStakedAmount[address]`.
pub fn read_staked_amount(
    reader: &impl StorageReader,
    contract: Address,
    layout: &StakingLayout,
    address: Address,
) -> U256 {
    let key = address_mapping_index(address, layout.staked_amount);
    decode_u256(read_or_zero(reader, contract, key))
}

/// Read `_addressToValidatorIndex[address]`.
pub fn read_validator_index(
    reader: &impl StorageReader,
    contract: Address,
    layout: &StakingLayout,
    address: Address,
) -> u64 {
    let key = address_mapping_index(address, layout.validator_index);
    decode_u64(read_or_zero(reader, contract, key))
}

fn read_or_zero(reader: &impl StorageReader, contract: Address, key: B256) -> B256 {
    reader.read_storage(contract, key).unwrap_or(B256::ZERO)
}
