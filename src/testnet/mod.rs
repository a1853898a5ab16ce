//! Test helpers for ledger scenarios
//!
//! This module provides shared fixtures for ledger tests: minted outputs,
//! pre-funded wallets and small mined chains.

pub mod test_utils;

pub use test_utils::*;
