//! Error handling for the ledger
//!
//! This module provides the error types for all ledger operations.

use std::fmt;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Error types for ledger operations
#[derive(Debug, Clone)]
pub enum LedgerError {
    /// Transaction construction errors
    Transaction(String),
    /// Cryptographic operation errors
    Crypto(String),
    /// Serialization errors
    Serialization(String),
    /// Insufficient funds for a transfer
    InsufficientFunds { required: u64, available: u64 },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Transaction(msg) => write!(f, "Transaction error: {msg}"),
            LedgerError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            LedgerError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            LedgerError::InsufficientFunds {
                required,
                available,
            } => {
                write!(
                    f,
                    "Insufficient funds: required {required}, available {available}"
                )
            }
        }
    }
}

impl std::error::Error for LedgerError {}
