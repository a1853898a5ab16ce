//! Configuration management
//!
//! This module handles the runtime settings of the ledger demo: the mining
//! difficulty and the value minted by the genesis transaction.
//!
//! Settings are seeded from the environment and overridable from the CLI.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
