//! Genesis Configuration for a Prestaked Chain
//!
//! This module builds genesis documents whose staking contract already holds the initial
//! validator set, so the chain starts with its validators staked and no bootstrap
//! transactions have to run.

pub mod accounts;
pub mod addresses;
pub mod staking;

// Re-export public API
pub use accounts::{
    default_prefund_balance, dev_accounts, dev_validators, prefund_validators, DEV_VALIDATOR_COUNT,
};
pub use addresses::STAKING_CONTRACT_ADDRESS;
pub use staking::{
    parse_stake, predeploy_staking_contract, staking_contract_alloc, staking_contract_bytecode,
    StakingAlloc, StakingGenesis, DEFAULT_STAKED_BALANCE, STAKING_CONTRACT_BYTECODE,
};

use crate::constants::{DEFAULT_CHAIN_ID, DEFAULT_GAS_LIMIT, DEFAULT_MAX_VALIDATORS};
use crate::errors::StakingError;
use alloy_genesis::{Genesis, GenesisAccount};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Create a development genesis configuration
pub fn create_dev_genesis() -> Result<Genesis, StakingError> {
    create_genesis(GenesisConfig::dev())
}

/// Configuration for creating a genesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenesisConfig {
    /// Chain ID
    pub chain_id: u64,
    /// Gas limit for the genesis block
    pub gas_limit: u64,
    /// Accounts to prefund with their balances
    pub prefunded_accounts: BTreeMap<Address, U256>,
    /// Validators prestaked in the staking contract, in deposit order
    pub validators: Vec<Address>,
    /// Validator set capacity written to the staking contract
    pub max_validator_count: u64,
    /// Deposit per validator (defaults to [`DEFAULT_STAKED_BALANCE`])
    pub default_stake: Option<U256>,
    /// Optional extra vanity data (32 bytes)
    pub vanity: [u8; 32],
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            gas_limit: DEFAULT_GAS_LIMIT,
            prefunded_accounts: BTreeMap::new(),
            validators: vec![],
            max_validator_count: DEFAULT_MAX_VALIDATORS,
            default_stake: None,
            vanity: [0u8; 32],
        }
    }
}

impl GenesisConfig {
    /// Create a development configuration: every dev account prefunded, the first
    /// [`DEV_VALIDATOR_COUNT`] of them prestaked as validators
    pub fn dev() -> Self {
        Self {
            prefunded_accounts: prefund_validators(&dev_accounts()),
            validators: dev_validators(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, StakingError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Builder method to add a prefunded account
    pub fn with_prefunded_account(mut self, address: Address, balance: U256) -> Self {
        self.prefunded_accounts.insert(address, balance);
        self
    }

    /// Builder method to set validators
    pub fn with_validators(mut self, validators: Vec<Address>) -> Self {
        self.validators = validators;
        self
    }

    /// Builder method to set chain ID
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Builder method to set the validator set capacity
    pub fn with_max_validator_count(mut self, max: u64) -> Self {
        self.max_validator_count = max;
        self
    }

    /// Builder method to set the per-validator deposit
    pub fn with_default_stake(mut self, stake: U256) -> Self {
        self.default_stake = Some(stake);
        self
    }

    /// Builder method to set vanity data
    pub fn with_vanity(mut self, vanity: [u8; 32]) -> Self {
        self.vanity = vanity;
        self
    }

    /// Staking contract inputs derived from this configuration
    pub fn staking(&self) -> Result<StakingGenesis, StakingError> {
        let mut staking = StakingGenesis::new(self.validators.clone(), self.max_validator_count)?;
        if let Some(stake) = self.default_stake {
            staking = staking.with_default_stake(stake);
        }
        Ok(staking)
    }
}

/// Create a genesis configuration from the config
pub fn create_genesis(config: GenesisConfig) -> Result<Genesis, StakingError> {
    // Convert prefunded accounts to genesis alloc format
    let mut alloc = BTreeMap::new();
    for (address, balance) in &config.prefunded_accounts {
        alloc.insert(
            *address,
            GenesisAccount {
                balance: *balance,
                nonce: None,
                code: None,
                storage: None,
                private_key: None,
            },
        );
    }

    // Staking contract with the validators already deposited
    alloc.extend(staking_contract_alloc(&config.staking()?)?);

    // Build the chain config JSON
    let chain_config = serde_json::json!({
        "chainId": config.chain_id,
        "homesteadBlock": 0,
        "eip150Block": 0,
        "eip155Block": 0,
        "eip158Block": 0,
        "byzantiumBlock": 0,
        "constantinopleBlock": 0,
        "petersburgBlock": 0,
        "istanbulBlock": 0,
        "berlinBlock": 0,
        "londonBlock": 0,
        "terminalTotalDifficulty": 0,
        "terminalTotalDifficultyPassed": true,
        "shanghaiTime": 0,
        "cancunTime": 0,
        "pragueTime": 0,
        // Staking contract location (stored in extra fields)
        "staking": {
            "contract": STAKING_CONTRACT_ADDRESS,
            "maxValidators": config.max_validator_count.min(u32::MAX as u64)
        }
    });

    Ok(Genesis {
        config: serde_json::from_value(chain_config)?,
        nonce: 0,
        timestamp: 0,
        extra_data: config.vanity.to_vec().into(),
        gas_limit: config.gas_limit,
        difficulty: U256::from(1),
        mix_hash: Default::default(),
        coinbase: Address::ZERO,
        alloc,
        number: None,
        parent_hash: None,
        base_fee_per_gas: Some(875_000_000), // EIP-1559 initial base fee (0.875 gwei)
        excess_blob_gas: Some(0),
        blob_gas_used: Some(0),
    })
}

/// Helper to serialize genesis to JSON (for use with other tools)
pub fn genesis_to_json(genesis: &Genesis) -> Result<String, StakingError> {
    Ok(serde_json::to_string_pretty(genesis)?)
}

/// Helper to create a genesis file on disk
pub fn write_genesis_file(genesis: &Genesis, path: &std::path::Path) -> Result<(), StakingError> {
    let json = genesis_to_json(genesis)?;
    std::fs::write(path, json)?;
    Ok(())
}
