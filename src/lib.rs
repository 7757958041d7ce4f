//! # Prestake Genesis - Prestaked Validator Genesis Library
//!
//! Builds genesis state for a chain whose staking contract already holds its initial
//! validator set. The contract's storage is computed with the EVM's Solidity layout rules
//! instead of executing `stake()` transactions at block 0.

pub mod cli;
pub mod constants;
pub mod errors;
pub mod genesis;
pub mod output;
pub mod storage;
