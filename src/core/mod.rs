//! Core ledger functionality
//!
//! This module contains the fundamental ledger components including
//! blocks, transactions, chain management, and proof-of-work consensus.

pub mod block;
pub mod blockchain;
pub mod proof_of_work;
pub mod transaction;

pub use block::Block;
pub use blockchain::{Blockchain, GENESIS_SENTINEL};
pub use proof_of_work::ProofOfWork;
pub use transaction::{Transaction, TransactionInput, TransactionOutput};
