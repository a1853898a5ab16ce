//! Command-line interface
//!
//! This module contains the argument parsing for the ledger demo binary.

pub mod commands;

pub use commands::Opt;
