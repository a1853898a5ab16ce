//! Wallet management
//!
//! This module handles wallet state: the inputs a named holder can spend,
//! receiving outputs, and building transfers out of them.

#[allow(clippy::module_inception)]
pub mod wallet;

pub use wallet::Wallet;
