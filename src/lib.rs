//! # Pocket Ledger - My Minimal Proof-of-Work UTXO Ledger
//!
//! This is my single-node, in-memory ledger. When I come back to this
//! code, here's what I need to remember:
//!
//! ## What I Built
//! - **UTXO Model**: every transaction consumes owned inputs and emits
//!   exactly two outputs (change to the sender, payment to the recipient)
//! - **Proof-of-Work**: accepted hashes carry a leading run of zero hex
//!   characters; the nonce always advances before the first probe
//! - **Named Wallets**: plain string identities with greedy, arrival-order
//!   input selection and atomic settlement
//! - **Chain Audit**: a boolean validity walk that re-derives every hash
//!   and link from the genesis sentinel up
//!
//! ## How I Organized My Code
//! - `core/`: the heart of the ledger (transactions, blocks, mining, chain)
//! - `wallet/`: UTXO ownership, transfers and balances
//! - `config/`: runtime settings (difficulty, genesis value)
//! - `utils/`: hashing and JSON rendering helpers
//! - `cli/`: flag parsing for the demo binary
//!
//! ## Key Design Decisions I Made
//! - Content hashes concatenate Display-rendered fields in fixed orders,
//!   so every id re-derives from what it names
//! - Construction failures are errors; tampering is a validation `false`
//! - Value is conserved by shape: inputs are consumed whole and change is
//!   always emitted, even at zero

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
pub mod wallet;

#[cfg(test)]
pub mod testnet;

// Re-export commonly used types for convenience
pub use cli::Opt;
pub use config::{Config, GLOBAL_CONFIG};
pub use core::{
    Block, Blockchain, ProofOfWork, Transaction, TransactionInput, TransactionOutput,
    GENESIS_SENTINEL,
};
pub use error::{LedgerError, Result};
pub use utils::{current_timestamp, sha256_digest, sha256_hex, to_pretty_json};
pub use wallet::Wallet;
