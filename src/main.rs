use prestake_genesis::cli::Cli;
use prestake_genesis::genesis::{self, STAKING_CONTRACT_ADDRESS};
use prestake_genesis::output;
use prestake_genesis::storage::{read_validator_set, GenesisStorageReader, StakingLayout};

use clap::Parser;
use eyre::{eyre, Context};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Main entry point for the genesis generator
fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(&cli.log_level, cli.log_json);

    let config = cli.genesis_config()?;
    let staking = config.staking()?;

    output::print_banner(config.chain_id, &STAKING_CONTRACT_ADDRESS);
    if staking.validators.is_empty() {
        output::print_empty_validator_warning();
    }
    if staking.clamped_max_validators() != staking.max_validator_count {
        output::print_clamped_warning(
            staking.max_validator_count,
            staking.clamped_max_validators(),
        );
    }
    if staking.validators.len() as u64 > staking.clamped_max_validators() {
        output::print_over_capacity_warning(
            staking.validators.len(),
            staking.clamped_max_validators(),
        );
    }

    let genesis = genesis::create_genesis(config).wrap_err("Failed to build genesis")?;

    // Read the staking state back through the same layout the contract uses
    let reader = GenesisStorageReader::from_genesis(&genesis);
    let set = read_validator_set(&reader, STAKING_CONTRACT_ADDRESS, &StakingLayout::V1)
        .ok_or_else(|| eyre!("Staking contract missing from genesis alloc"))?;
    output::print_validator_set(&set, staking.default_stake);

    genesis::write_genesis_file(&genesis, &cli.output)
        .wrap_err_with(|| format!("Failed to write {}", cli.output.display()))?;

    let slots = genesis
        .alloc
        .get(&STAKING_CONTRACT_ADDRESS)
        .and_then(|account| account.storage.as_ref())
        .map_or(0, |storage| storage.len());
    info!(target: "prestake", path = %cli.output.display(), slots, "Genesis written");
    output::print_written(&cli.output, slots);

    Ok(())
}

fn init_tracing(log_level: &str, json: bool) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
