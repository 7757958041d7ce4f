//! Staking contract predeploy.
//!
//! Pre-populates the staking contract's storage as if every validator had called `stake()`
//! once, in list order, with the default deposit. No contract code runs.

use alloy_genesis::GenesisAccount;
use alloy_primitives::{Address, Bytes, B256, U256};
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;
use tracing::{debug, info, warn};

use super::addresses::STAKING_CONTRACT_ADDRESS;
use crate::errors::StakingError;
use crate::storage::{
    encode_address, encode_bool, encode_u256, encode_u64, StakingLayout, StorageIndexes,
};

/// Default stake deposited by each prestaked validator (10 ETH in wei).
pub const DEFAULT_STAKED_BALANCE: &str = "0x8AC7230489E80000";

/// Runtime bytecode of the staking contract, hex encoded.
///
/// Storage layout: [`StakingLayout::V1`].
pub const STAKING_CONTRACT_BYTECODE: &str = include_str!("../bytecodes/staking.hex");

/// Parse a stake amount given as a decimal or `0x`-prefixed hex literal.
pub fn parse_stake(literal: &str) -> Result<U256, StakingError> {
    U256::from_str(literal.trim()).map_err(|e| StakingError::InvalidDefaultStake {
        literal: literal.to_string(),
        reason: e.to_string(),
    })
}

/// Decode the embedded staking contract bytecode.
pub fn staking_contract_bytecode() -> Result<Bytes, StakingError> {
    let hex_code = STAKING_CONTRACT_BYTECODE.trim();
    let code = hex::decode(hex_code.strip_prefix("0x").unwrap_or(hex_code))?;
    Ok(Bytes::from(code))
}

/// Inputs for the prestaked staking contract account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakingGenesis {
    /// Validators in deposit order
    pub validators: Vec<Address>,
    /// Validator set capacity (clamped to u32::MAX when written)
    pub max_validator_count: u64,
    /// Deposit made by each validator
    pub default_stake: U256,
    /// Storage layout of the contract bytecode
    pub layout: StakingLayout,
}

/// Code, storage and balance of the staking contract at genesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakingAlloc {
    /// Contract runtime bytecode
    pub code: Bytes,
    /// Pre-populated storage
    pub storage: BTreeMap<B256, B256>,
    /// Native balance, equal to the total stake
    pub balance: U256,
}

impl StakingAlloc {
    /// Convert into a genesis alloc entry.
    pub fn into_genesis_account(self) -> GenesisAccount {
        GenesisAccount {
            balance: self.balance,
            nonce: None,
            code: Some(self.code),
            storage: Some(self.storage),
            private_key: None,
        }
    }
}

impl StakingGenesis {
    /// Prestake `validators` with [`DEFAULT_STAKED_BALANCE`] each, using [`StakingLayout::V1`].
    pub fn new(validators: Vec<Address>, max_validator_count: u64) -> Result<Self, StakingError> {
        Ok(Self {
            validators,
            max_validator_count,
            default_stake: parse_stake(DEFAULT_STAKED_BALANCE)?,
            layout: StakingLayout::V1,
        })
    }

    /// Builder method to set the per-validator deposit
    pub fn with_default_stake(mut self, stake: U256) -> Self {
        self.default_stake = stake;
        self
    }

    /// Builder method to set the contract storage layout
    pub fn with_layout(mut self, layout: StakingLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Capacity as stored by the contract (`uint32`).
    pub fn clamped_max_validators(&self) -> u64 {
        self.max_validator_count.min(u32::MAX as u64)
    }

    /// Compute the staking contract's code, storage and balance.
    ///
    /// Each validator's own stake is one deposit; validators listed twice deposit twice into
    /// the total but keep a single-deposit personal stake.
    pub fn build(&self) -> Result<StakingAlloc, StakingError> {
        self.layout.validate()?;
        let code = staking_contract_bytecode()?;

        let mut storage = BTreeMap::new();
        let mut total_staked = U256::ZERO;
        let mut seen = HashSet::with_capacity(self.validators.len());

        for (position, validator) in self.validators.iter().enumerate() {
            let position = position as u64;
            total_staked = total_staked.wrapping_add(self.default_stake);

            if !seen.insert(*validator) {
                warn!(
                    target: "genesis::staking",
                    %validator,
                    position,
                    "Validator listed more than once"
                );
            }

            let indexes = StorageIndexes::for_validator(&self.layout, *validator, position);

            // _validators[position] = validator
            storage.insert(indexes.validators, encode_address(*validator));
            // _addressToIsValidator[validator] = true
            storage.insert(indexes.address_to_is_validator, encode_bool(true));
            // _addressToStakedAmount[validator] = stake
            storage.insert(indexes.address_to_staked_amount, encode_u256(self.default_stake));
            // _addressToValidatorIndex[validator] = position
            storage.insert(indexes.address_to_validator_index, encode_u64(position));

            debug!(
                target: "genesis::staking",
                %validator,
                position,
                array_slot = %indexes.validators,
                %total_staked,
                "Prestaked validator"
            );
        }

        // Globals hold the state after the last deposit; written even for an empty set.
        let globals = StorageIndexes::globals(&self.layout);
        storage.insert(globals.validators_array_size, encode_u64(self.validators.len() as u64));
        storage.insert(globals.staked_amount, encode_u256(total_staked));
        storage.insert(globals.maximum_num_validators, encode_u64(self.clamped_max_validators()));

        info!(
            target: "genesis::staking",
            validators = self.validators.len(),
            %total_staked,
            max_validators = self.clamped_max_validators(),
            slots = storage.len(),
            layout = self.layout.version,
            "Built staking contract storage"
        );

        Ok(StakingAlloc { code, storage, balance: total_staked })
    }
}

/// Build the staking contract account with `validators` prestaked at the default stake.
pub fn predeploy_staking_contract(
    validators: &[Address],
    max_validator_count: u64,
) -> Result<GenesisAccount, StakingError> {
    let alloc = StakingGenesis::new(validators.to_vec(), max_validator_count)?.build()?;
    Ok(alloc.into_genesis_account())
}

/// Returns the staking contract alloc for genesis, keyed by [`STAKING_CONTRACT_ADDRESS`].
pub fn staking_contract_alloc(
    staking: &StakingGenesis,
) -> Result<BTreeMap<Address, GenesisAccount>, StakingError> {
    let account = staking.build()?.into_genesis_account();
    Ok(BTreeMap::from([(STAKING_CONTRACT_ADDRESS, account)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LayoutError;
    use crate::storage::{
        address_mapping_index, decode_address, decode_u256, decode_u64, dynamic_array_base,
        offset_index, read_validator_set, scalar_index, AccountStorageReader,
    };
    use alloy_primitives::{address, b256};

    const A1: Address = address!("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA01");
    const A2: Address = address!("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA02");

    fn ten_eth() -> U256 {
        U256::from(10u64) * U256::from(10u64).pow(U256::from(18u64))
    }

    fn get(alloc: &StakingAlloc, key: B256) -> B256 {
        *alloc.storage.get(&key).unwrap_or_else(|| panic!("missing slot {key}"))
    }

    #[test]
    fn test_default_stake_literal_is_ten_eth() {
        assert_eq!(parse_stake(DEFAULT_STAKED_BALANCE).unwrap(), ten_eth());
    }

    #[test]
    fn test_parse_stake_accepts_decimal() {
        assert_eq!(parse_stake("10000000000000000000").unwrap(), ten_eth());
    }

    #[test]
    fn test_parse_stake_rejects_garbage() {
        let err = parse_stake("0xnot-a-number").unwrap_err();
        assert!(matches!(err, StakingError::InvalidDefaultStake { .. }));
        assert!(err.to_string().contains("0xnot-a-number"));
    }

    #[test]
    fn test_bytecode_decodes() {
        let code = staking_contract_bytecode().unwrap();
        assert!(!code.is_empty());
        // PUSH1 0x80 PUSH1 0x40 MSTORE
        assert_eq!(&code[..5], &[0x60u8, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn test_two_validator_scenario() {
        let staking = StakingGenesis::new(vec![A1, A2], 4).unwrap();
        let alloc = staking.build().unwrap();
        let layout = StakingLayout::V1;

        // _validators.length
        assert_eq!(get(&alloc, B256::ZERO), encode_u64(2));
        // _stakedAmount = 20 ETH
        assert_eq!(
            get(&alloc, scalar_index(4)),
            b256!("000000000000000000000000000000000000000000000001158e460913d00000")
        );
        // _maximumNumValidators
        assert_eq!(get(&alloc, scalar_index(5)), encode_u64(4));

        for (i, v) in [A1, A2].into_iter().enumerate() {
            assert_eq!(
                get(&alloc, address_mapping_index(v, layout.staked_amount)),
                b256!("0000000000000000000000000000000000000000000000008ac7230489e80000")
            );
            assert_eq!(
                get(&alloc, address_mapping_index(v, layout.validator_index)),
                encode_u64(i as u64)
            );
            assert_eq!(get(&alloc, address_mapping_index(v, layout.is_validator)), encode_u64(1));
        }

        assert_eq!(alloc.balance, ten_eth() * U256::from(2));
        // 2 * (array element + 3 mappings) + 3 globals
        assert_eq!(alloc.storage.len(), 11);
    }

    #[test]
    fn test_array_elements_decode_to_validators() {
        let validators = vec![A1, A2, address!("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA03")];
        let alloc = StakingGenesis::new(validators.clone(), 10).unwrap().build().unwrap();
        let base = dynamic_array_base(0);

        for (i, v) in validators.iter().enumerate() {
            assert_eq!(decode_address(get(&alloc, offset_index(base, i as u64))), *v);
        }
        assert_eq!(decode_u64(get(&alloc, B256::ZERO)), 3);
    }

    #[test]
    fn test_total_staked_equals_balance() {
        let validators: Vec<Address> = (1u8..=7).map(|i| Address::repeat_byte(i)).collect();
        let alloc = StakingGenesis::new(validators, 10).unwrap().build().unwrap();
        let total = decode_u256(get(&alloc, scalar_index(4)));
        assert_eq!(total, ten_eth() * U256::from(7));
        assert_eq!(alloc.balance, total);
    }

    #[test]
    fn test_empty_validator_list() {
        let alloc = StakingGenesis::new(vec![], 4).unwrap().build().unwrap();

        assert_eq!(alloc.storage.len(), 3);
        assert_eq!(get(&alloc, B256::ZERO), encode_u64(0));
        assert_eq!(get(&alloc, scalar_index(4)), encode_u64(0));
        assert_eq!(get(&alloc, scalar_index(5)), encode_u64(4));
        assert_eq!(alloc.balance, U256::ZERO);
        assert!(!alloc.code.is_empty());
    }

    #[test]
    fn test_max_validator_count_is_clamped() {
        let staking = StakingGenesis::new(vec![A1], u64::MAX).unwrap();
        assert_eq!(staking.clamped_max_validators(), u32::MAX as u64);

        let alloc = staking.build().unwrap();
        assert_eq!(
            get(&alloc, scalar_index(5)),
            b256!("00000000000000000000000000000000000000000000000000000000ffffffff")
        );
    }

    #[test]
    fn test_max_validator_count_at_limit_is_kept() {
        let alloc = StakingGenesis::new(vec![A1], u32::MAX as u64).unwrap().build().unwrap();
        assert_eq!(decode_u64(get(&alloc, scalar_index(5))), u32::MAX as u64);
    }

    #[test]
    fn test_custom_stake() {
        let stake = U256::from(123u64);
        let alloc = StakingGenesis::new(vec![A1, A2], 4)
            .unwrap()
            .with_default_stake(stake)
            .build()
            .unwrap();
        assert_eq!(get(&alloc, address_mapping_index(A2, 2)), encode_u64(123));
        assert_eq!(alloc.balance, U256::from(246u64));
    }

    #[test]
    fn test_duplicate_validator_counts_two_deposits() {
        let alloc = StakingGenesis::new(vec![A1, A1], 4).unwrap().build().unwrap();

        assert_eq!(decode_u64(get(&alloc, B256::ZERO)), 2);
        assert_eq!(alloc.balance, ten_eth() * U256::from(2));
        // personal stake stays at one deposit, index points at the last entry
        assert_eq!(decode_u256(get(&alloc, address_mapping_index(A1, 2))), ten_eth());
        assert_eq!(decode_u64(get(&alloc, address_mapping_index(A1, 3))), 1);
    }

    #[test]
    fn test_alternate_layout() {
        let layout = StakingLayout {
            version: 2,
            validators: 1,
            is_validator: 2,
            staked_amount: 3,
            validator_index: 4,
            total_staked: 5,
            max_validators: 6,
        };
        let alloc = StakingGenesis::new(vec![A1], 4)
            .unwrap()
            .with_layout(layout)
            .build()
            .unwrap();

        assert_eq!(get(&alloc, scalar_index(1)), encode_u64(1));
        assert_eq!(get(&alloc, offset_index(dynamic_array_base(1), 0)), encode_address(A1));
        assert_eq!(get(&alloc, address_mapping_index(A1, 2)), encode_u64(1));
        assert_eq!(get(&alloc, scalar_index(6)), encode_u64(4));
        assert!(!alloc.storage.contains_key(&B256::ZERO));
    }

    #[test]
    fn test_invalid_layout_aborts_build() {
        let layout = StakingLayout { max_validators: 0, ..StakingLayout::V1 };
        let err = StakingGenesis::new(vec![A1], 4)
            .unwrap()
            .with_layout(layout)
            .build()
            .unwrap_err();
        assert!(matches!(err, StakingError::Layout(LayoutError::DuplicateSlot { slot: 0, .. })));
    }

    #[test]
    fn test_array_length_key_collision_aborts_build() {
        // without the check the total stake would overwrite the array length
        let layout = StakingLayout { validators: 260, ..StakingLayout::V1 };
        let err = StakingGenesis::new(vec![A1, A2], 4)
            .unwrap()
            .with_layout(layout)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            StakingError::Layout(LayoutError::KeyCollision { second: "_stakedAmount", .. })
        ));
    }

    #[test]
    fn test_predeploy_account_shape() {
        let account = predeploy_staking_contract(&[A1, A2], 4).unwrap();
        assert_eq!(account.balance, ten_eth() * U256::from(2));
        assert!(account.code.is_some());
        assert_eq!(account.storage.as_ref().map(|s| s.len()), Some(11));
    }

    #[test]
    fn test_alloc_round_trips_through_readers() {
        let staking = StakingGenesis::new(vec![A1, A2], 4).unwrap();
        let alloc = staking_contract_alloc(&staking).unwrap();
        let account = &alloc[&STAKING_CONTRACT_ADDRESS];
        let storage = account.storage.as_ref().unwrap();
        let reader = AccountStorageReader::new(STAKING_CONTRACT_ADDRESS, storage);

        let set = read_validator_set(&reader, STAKING_CONTRACT_ADDRESS, &StakingLayout::V1).unwrap();
        assert_eq!(set.validators, vec![A1, A2]);
        assert_eq!(set.total_staked, account.balance);
        assert_eq!(set.max_validators, 4);
    }
}
