//! Colored console output for the genesis generator.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use crate::storage::ValidatorSet;
use alloy_primitives::{Address, U256};
use colored::Colorize;
use std::path::Path;

// ── Helpers ────────────────────────────────────────────────────────

/// Format a wei amount as whole tokens.
///
/// - Whole amounts → `"20 ETH"`
/// - Fractional amounts keep significant decimals → `"1.5 ETH"`
pub fn format_ether(wei: U256) -> String {
    let unit = U256::from(10u64).pow(U256::from(18u64));
    let whole = wei / unit;
    let frac = wei % unit;
    if frac.is_zero() {
        return format!("{whole} ETH");
    }
    let decimals = format!("{:0>18}", frac.to_string());
    format!("{whole}.{} ETH", decimals.trim_end_matches('0'))
}

// ── Banner & Identity ──────────────────────────────────────────────

/// Print the startup banner with chain identity.
pub fn print_banner(chain_id: u64, staking_contract: &Address) {
    println!();
    println!("{}", "=== Prestaked Genesis ===".blue().bold());
    println!("  Chain ID:         {}", chain_id.to_string().cyan());
    println!("  Staking contract: {}", format!("{staking_contract}").cyan());
}

// ── Validator Info ─────────────────────────────────────────────────

/// Print the prestaked validator set as read back from genesis storage.
pub fn print_validator_set(set: &ValidatorSet, stake: U256) {
    println!();
    println!(
        "{} ({}):",
        "Prestaked validators".blue().bold(),
        set.validators.len().to_string().cyan()
    );
    for (i, validator) in set.validators.iter().enumerate() {
        println!(
            "    {}. {} {}",
            i.to_string().dimmed(),
            format!("{validator}").cyan(),
            format_ether(stake).dimmed()
        );
    }
    println!("  {} {}", "Total staked:  ".dimmed(), format_ether(set.total_staked).cyan());
    println!("  {} {}", "Max validators:".dimmed(), set.max_validators.to_string().cyan());
}

/// Print a warning when the staking contract holds no validators.
pub fn print_empty_validator_warning() {
    println!(
        "  {} No validators prestaked. The chain cannot seal blocks until someone stakes.",
        "WARNING:".yellow().bold()
    );
}

/// Print a warning when the requested capacity was clamped.
pub fn print_clamped_warning(requested: u64, stored: u64) {
    println!(
        "  {} Max validators {} exceeds uint32, stored as {}",
        "WARNING:".yellow().bold(),
        requested.to_string().yellow(),
        stored.to_string().cyan()
    );
}

/// Print a warning when more validators are prestaked than the contract accepts.
pub fn print_over_capacity_warning(validators: usize, max: u64) {
    println!(
        "  {} {} validators prestaked but capacity is {}",
        "WARNING:".yellow().bold(),
        validators.to_string().yellow(),
        max.to_string().cyan()
    );
}

// ── Result ─────────────────────────────────────────────────────────

/// Print confirmation that the genesis file was written.
pub fn print_written(path: &Path, slots: usize) {
    println!();
    println!(
        "  {} Genesis written to {} ({} staking slots)",
        "OK".green().bold(),
        path.display().to_string().cyan(),
        slots.to_string().cyan()
    );
}
