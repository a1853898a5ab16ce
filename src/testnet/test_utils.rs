//! Test utilities for ledger testing

use crate::core::{Blockchain, Transaction, TransactionInput, TransactionOutput, GENESIS_SENTINEL};
use crate::error::Result;
use crate::wallet::Wallet;

/// Mint an output out of thin air, parented at the genesis sentinel the
/// way the genesis transaction's backing output is.
pub fn mint_output(recipient: &str, value: u64) -> TransactionOutput {
    TransactionOutput::new(recipient, value, GENESIS_SENTINEL)
}

/// An input wrapping a freshly minted output.
pub fn minted_input(value: u64) -> TransactionInput {
    TransactionInput::new(&mint_output(GENESIS_SENTINEL, value))
}

/// A wallet holding one minted input per value, in the given order.
pub fn funded_wallet(name: &str, values: &[u64]) -> Wallet {
    let mut wallet = Wallet::new(name);
    for &value in values {
        wallet.receive(&mint_output(name, value));
    }
    wallet
}

/// The genesis recipe: a transaction from the sentinel sender paying
/// `value` to `recipient`, backed by a minted input of the same value.
pub fn genesis_transaction(recipient: &str, value: u64) -> Result<Transaction> {
    let seed = TransactionInput::new(&mint_output(GENESIS_SENTINEL, value));
    Transaction::new(GENESIS_SENTINEL, recipient, value, vec![seed])
}

/// A chain of `length` blocks mined at `difficulty` with correctly
/// threaded links.
pub fn mined_chain(length: usize, difficulty: usize) -> Result<Blockchain> {
    let mut chain = Blockchain::new();
    for height in 0..length {
        chain.mine_block(format!("payload-{height}"), difficulty)?;
    }
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funded_wallet_holds_the_given_values() {
        let wallet = funded_wallet("Alice", &[30, 20, 10]);

        assert_eq!(wallet.get_name(), "Alice");
        assert_eq!(wallet.balance(), 60);
        assert_eq!(wallet.get_utxos().len(), 3);
    }

    #[test]
    fn test_genesis_transaction_shape() {
        let tx = genesis_transaction("Alice", 100).unwrap();

        assert_eq!(tx.get_sender(), GENESIS_SENTINEL);
        assert_eq!(tx.change_output().get_value(), 0);
        assert_eq!(tx.payment_output().get_recipient(), "Alice");
        assert_eq!(tx.payment_output().get_value(), 100);
    }

    #[test]
    fn test_mined_chain_is_valid() {
        let chain = mined_chain(3, 1).unwrap();

        assert_eq!(chain.len(), 3);
        assert!(chain.is_valid());
    }
}
