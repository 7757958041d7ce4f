//! Error types for prestaked genesis construction.

use alloy_primitives::B256;
use thiserror::Error;

/// Errors raised while validating a staking contract storage layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Two storage roles were assigned the same slot number
    #[error("Layout v{version}: {first} and {second} both use slot {slot}")]
    DuplicateSlot {
        /// Layout version being validated
        version: u32,
        /// Role that claimed the slot first
        first: &'static str,
        /// Role that collided with it
        second: &'static str,
        /// The shared slot number
        slot: u64,
    },

    /// Two global variables would be written to the same storage key
    #[error("Layout v{version}: {first} and {second} both write key {key}")]
    KeyCollision {
        /// Layout version being validated
        version: u32,
        /// Role whose key was computed first
        first: &'static str,
        /// Role that maps onto the same key
        second: &'static str,
        /// The shared storage key
        key: B256,
    },
}

/// Errors raised while building the staking contract genesis account.
///
/// Any of these aborts genesis construction; a half-populated staking account is never returned.
#[derive(Debug, Error)]
pub enum StakingError {
    /// The default stake literal could not be parsed as a 256-bit integer
    #[error("Unable to parse default staked balance {literal:?}: {reason}")]
    InvalidDefaultStake {
        /// The literal that failed to parse
        literal: String,
        /// Parser error message
        reason: String,
    },

    /// The embedded contract bytecode is not valid hex
    #[error("Invalid staking contract bytecode: {0}")]
    InvalidBytecode(#[from] hex::FromHexError),

    /// The storage layout is inconsistent
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The genesis document could not be converted to or from JSON
    #[error("Genesis JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A config or genesis file could not be read or written
    #[error("Genesis file I/O error: {0}")]
    Io(#[from] std::io::Error),
}
