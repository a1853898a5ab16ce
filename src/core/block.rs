use crate::core::ProofOfWork;
use crate::error::Result;
use crate::utils::{current_timestamp, sha256_hex, to_pretty_json};
use log::info;
use serde::Serialize;

// A block carries one pre-rendered transaction as opaque payload text;
// nothing in here inspects it beyond feeding it to the hash
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    transactions: String,  // Opaque payload, rendered by the caller
    previous_hash: String, // Link to the predecessor (the genesis sentinel for the first block)
    timestamp: i64,        // Millis since epoch, fixed at construction
    nonce: u64,            // Proof-of-work search variable
    hash: String,          // Accepted proof-of-work digest; empty until mined
}

impl Block {
    // A fresh block is unmined: nonce 0 and an empty hash that no search
    // will ever accept as a solution
    pub fn new(transactions: String, previous_hash: String) -> Result<Block> {
        Ok(Block {
            transactions,
            previous_hash,
            timestamp: current_timestamp()?,
            nonce: 0,
            hash: String::new(),
        })
    }

    /// Recompute the block's hash from its current fields and stored nonce.
    pub fn calculate_hash(&self) -> String {
        self.hash_for_nonce(self.nonce)
    }

    // The one place block fields are assembled for hashing, in this exact
    // order; the miner probes candidate nonces through here too
    pub(crate) fn hash_for_nonce(&self, nonce: u64) -> String {
        sha256_hex(&format!(
            "{}{}{}{}",
            self.transactions, self.previous_hash, self.timestamp, nonce
        ))
    }

    /// Run the proof-of-work search and store the accepted nonce and hash.
    pub fn mine(&mut self, difficulty: usize) {
        let pow = ProofOfWork::new(difficulty);
        let (nonce, hash) = pow.run(self);
        self.nonce = nonce;
        self.hash = hash;
        info!(
            "Proof-of-work completed for block: {} (difficulty: {difficulty}, nonce: {})",
            self.hash, self.nonce
        );
    }

    pub fn get_transactions(&self) -> &str {
        self.transactions.as_str()
    }

    pub fn get_previous_hash(&self) -> &str {
        self.previous_hash.as_str()
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn get_nonce(&self) -> u64 {
        self.nonce
    }

    pub fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    pub fn to_json(&self) -> Result<String> {
        to_pretty_json(self)
    }

    /// Corrupt the stored hash (for tamper tests only).
    #[cfg(test)]
    pub(crate) fn set_hash(&mut self, hash: &str) {
        self.hash = hash.to_string();
    }

    /// Corrupt the stored link (for tamper tests only).
    #[cfg(test)]
    pub(crate) fn set_previous_hash(&mut self, previous_hash: &str) {
        self.previous_hash = previous_hash.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::sha256_hex;

    #[test]
    fn test_new_block_starts_unmined() {
        let block = Block::new("payload".to_string(), "0".to_string())
            .expect("Block creation should work");

        assert_eq!(block.get_nonce(), 0);
        assert!(block.get_hash().is_empty());
        assert_eq!(block.get_transactions(), "payload");
        assert_eq!(block.get_previous_hash(), "0");
    }

    #[test]
    fn test_hash_covers_fields_in_canonical_order() {
        let block = Block::new("payload".to_string(), "0".to_string())
            .expect("Block creation should work");

        let expected = sha256_hex(&format!("payload0{}0", block.get_timestamp()));
        assert_eq!(block.calculate_hash(), expected);
    }

    #[test]
    fn test_hash_changes_with_nonce() {
        let block = Block::new("payload".to_string(), "0".to_string())
            .expect("Block creation should work");

        assert_ne!(block.hash_for_nonce(1), block.hash_for_nonce(2));
        assert_eq!(block.hash_for_nonce(7), block.hash_for_nonce(7));
    }

    #[test]
    fn test_mine_satisfies_difficulty_and_round_trips() {
        let mut block = Block::new("payload".to_string(), "0".to_string())
            .expect("Block creation should work");

        block.mine(2);

        assert!(block.get_hash().starts_with("00"));
        assert!(block.get_nonce() >= 1);
        assert_eq!(block.calculate_hash(), block.get_hash());
    }

    #[test]
    fn test_mine_at_zero_difficulty_still_searches() {
        let mut block = Block::new("payload".to_string(), "0".to_string())
            .expect("Block creation should work");

        block.mine(0);

        // Even with an always-accepting target the empty sentinel hash is
        // never examined, so one attempt happens and the round trip holds
        assert_eq!(block.get_nonce(), 1);
        assert!(!block.get_hash().is_empty());
        assert_eq!(block.calculate_hash(), block.get_hash());
    }
}
