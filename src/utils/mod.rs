//! Utility functions and helpers
//!
//! This module contains the cryptographic utilities and the JSON rendering
//! helper used throughout the ledger.

pub mod crypto;
pub mod serialization;

pub use crypto::{current_timestamp, sha256_digest, sha256_hex};

pub use serialization::to_pretty_json;
