//! Staking contract storage layout.
//!
//! Slot numbers follow the declaration order of the staking contract's state variables:
//!
//! ```text
//! slot 0: address[] _validators
//! slot 1: mapping(address => bool) _addressToIsValidator
//! slot 2: mapping(address => uint256) _addressToStakedAmount
//! slot 3: mapping(address => uint256) _addressToValidatorIndex
//! slot 4: uint256 _stakedAmount
//! slot 5: uint32 _maximumNumValidators
//! ```
//!
//! The embedded bytecode and this table must change together.

use super::index::{array_length_index, scalar_index};
use crate::errors::LayoutError;

/// A storage variable of the staking contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRole {
    /// `address[]` of active validators (length at the slot, elements at keccak(slot) + i)
    Validators,
    /// `mapping(address => bool)` membership flag
    IsValidator,
    /// `mapping(address => uint256)` per-validator stake
    StakedAmount,
    /// `mapping(address => uint256)` position in the validators array
    ValidatorIndex,
    /// `uint256` total stake held by the contract
    TotalStaked,
    /// `uint32` validator set capacity
    MaxValidators,
}

impl SlotRole {
    /// All roles in declaration order.
    pub const ALL: [SlotRole; 6] = [
        SlotRole::Validators,
        SlotRole::IsValidator,
        SlotRole::StakedAmount,
        SlotRole::ValidatorIndex,
        SlotRole::TotalStaked,
        SlotRole::MaxValidators,
    ];

    /// Solidity variable name of the role.
    pub fn name(&self) -> &'static str {
        match self {
            SlotRole::Validators => "_validators",
            SlotRole::IsValidator => "_addressToIsValidator",
            SlotRole::StakedAmount => "_addressToStakedAmount",
            SlotRole::ValidatorIndex => "_addressToValidatorIndex",
            SlotRole::TotalStaked => "_stakedAmount",
            SlotRole::MaxValidators => "_maximumNumValidators",
        }
    }
}

/// Slot numbers of the staking contract's state variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakingLayout {
    /// Layout revision, bumped whenever the contract source reorders its storage
    pub version: u32,
    /// slot of `_validators` (dynamic array)
    pub validators: u64,
    /// slot of `_addressToIsValidator`
    pub is_validator: u64,
    /// slot of `_addressToStakedAmount`
    pub staked_amount: u64,
    /// slot of `_addressToValidatorIndex`
    pub validator_index: u64,
    /// slot of `_stakedAmount`
    pub total_staked: u64,
    /// slot of `_maximumNumValidators`
    pub max_validators: u64,
}

impl StakingLayout {
    /// Layout of the staking contract shipped in [`crate::genesis::STAKING_CONTRACT_BYTECODE`].
    pub const V1: StakingLayout = StakingLayout {
        version: 1,
        validators: 0,
        is_validator: 1,
        staked_amount: 2,
        validator_index: 3,
        total_staked: 4,
        max_validators: 5,
    };

    /// Slot number assigned to `role`.
    pub fn slot(&self, role: SlotRole) -> u64 {
        match role {
            SlotRole::Validators => self.validators,
            SlotRole::IsValidator => self.is_validator,
            SlotRole::StakedAmount => self.staked_amount,
            SlotRole::ValidatorIndex => self.validator_index,
            SlotRole::TotalStaked => self.total_staked,
            SlotRole::MaxValidators => self.max_validators,
        }
    }

    /// Iterate `(role, slot)` pairs in declaration order.
    pub fn roles(&self) -> impl Iterator<Item = (SlotRole, u64)> + '_ {
        SlotRole::ALL.into_iter().map(move |role| (role, self.slot(role)))
    }

    /// Reject layouts where two variables share a slot, or where two globals would be
    /// written to the same storage key.
    ///
    /// The array length is keyed by the low byte of its slot, so a `validators` slot above
    /// 0xff can land on a scalar slot even though the slot numbers differ.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let roles: Vec<_> = self.roles().collect();
        for (i, (first, slot)) in roles.iter().enumerate() {
            if let Some((second, _)) = roles[i + 1..].iter().find(|(_, other)| other == slot) {
                return Err(LayoutError::DuplicateSlot {
                    version: self.version,
                    first: first.name(),
                    second: second.name(),
                    slot: *slot,
                });
            }
        }

        let keys = [
            (SlotRole::Validators, array_length_index(self.validators)),
            (SlotRole::TotalStaked, scalar_index(self.total_staked)),
            (SlotRole::MaxValidators, scalar_index(self.max_validators)),
        ];
        for (i, (first, key)) in keys.iter().enumerate() {
            if let Some((second, _)) = keys[i + 1..].iter().find(|(_, other)| other == key) {
                return Err(LayoutError::KeyCollision {
                    version: self.version,
                    first: first.name(),
                    second: second.name(),
                    key: *key,
                });
            }
        }
        Ok(())
    }
}

impl Default for StakingLayout {
    fn default() -> Self {
        Self::V1
    }
}
