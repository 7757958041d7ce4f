use crate::genesis::{parse_stake, prefund_validators, GenesisConfig};
use alloy_primitives::Address;
use clap::Parser;
use eyre::{Context, Result};
use std::path::PathBuf;

/// CLI arguments for the genesis generator
#[derive(Parser, Debug)]
#[command(
    name = "prestake-genesis",
    about = "Generate a genesis file with validators prestaked in the staking contract"
)]
pub struct Cli {
    /// JSON genesis configuration to start from.
    ///
    /// Flags below override the values it contains. Without a config file and
    /// without `--validators`, the dev validator set is used.
    #[arg(long, env = "PRESTAKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Comma-separated validator addresses, in deposit order.
    #[arg(long, value_delimiter = ',', env = "PRESTAKE_VALIDATORS")]
    pub validators: Option<Vec<Address>>,

    /// Validator set capacity (values above 4294967295 are clamped).
    #[arg(long)]
    pub max_validators: Option<u64>,

    /// Deposit per validator in wei, decimal or 0x-prefixed hex.
    /// Defaults to 10 ETH (0x8AC7230489E80000).
    #[arg(long)]
    pub stake: Option<String>,

    /// Chain ID for the network
    #[arg(long)]
    pub chain_id: Option<u64>,

    /// Block gas limit of the genesis block
    #[arg(long)]
    pub gas_limit: Option<u64>,

    /// Prefund each validator with 10,000 ETH for gas.
    #[arg(long)]
    pub prefund_validators: bool,

    /// Path of the genesis file to write
    #[arg(long, short, default_value = "genesis.json")]
    pub output: PathBuf,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable structured JSON logging instead of human-readable output.
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Resolve the genesis configuration from the config file and flag overrides.
    pub fn genesis_config(&self) -> Result<GenesisConfig> {
        let mut config = match (&self.config, &self.validators) {
            (Some(path), _) => GenesisConfig::from_json_file(path)
                .wrap_err_with(|| format!("Failed to load config {}", path.display()))?,
            (None, None) => GenesisConfig::dev(),
            (None, Some(_)) => GenesisConfig::default(),
        };

        if let Some(validators) = &self.validators {
            config.validators = validators.clone();
        }
        if let Some(max) = self.max_validators {
            config.max_validator_count = max;
        }
        if let Some(stake) = &self.stake {
            config.default_stake = Some(parse_stake(stake)?);
        }
        if let Some(chain_id) = self.chain_id {
            config.chain_id = chain_id;
        }
        if let Some(gas_limit) = self.gas_limit {
            config.gas_limit = gas_limit;
        }
        if self.prefund_validators {
            let prefunded = prefund_validators(&config.validators);
            config.prefunded_accounts.extend(prefunded);
        }

        Ok(config)
    }
}
