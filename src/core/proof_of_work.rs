use crate::core::Block;
use log::debug;

// Difficulty is the number of leading zero hex characters an accepted
// hash must carry, so the target is just that prefix
pub struct ProofOfWork {
    target: String,
    difficulty: usize,
}

impl ProofOfWork {
    pub fn new(difficulty: usize) -> ProofOfWork {
        ProofOfWork {
            target: "0".repeat(difficulty),
            difficulty,
        }
    }

    /// Search nonces until the block's hash clears the target.
    ///
    /// The nonce advances before each probe, so the block's pre-mining
    /// sentinel hash is never examined and at least one attempt always
    /// happens, even at difficulty 0. The returned hash is therefore
    /// always one computed here from the returned nonce.
    pub fn run(&self, block: &Block) -> (u64, String) {
        debug!("Mining block at difficulty {}", self.difficulty);
        let mut nonce = block.get_nonce();
        loop {
            nonce += 1;
            let hash = block.hash_for_nonce(nonce);
            if self.accepts(&hash) {
                return (nonce, hash);
            }
        }
    }

    /// Whether a digest clears the difficulty target.
    pub fn accepts(&self, hash: &str) -> bool {
        hash.starts_with(&self.target)
    }

    /// Check one mined block: the stored hash must re-derive from the
    /// block's current fields and clear the target.
    pub fn validate(&self, block: &Block) -> bool {
        block.get_hash() == block.calculate_hash() && self.accepts(block.get_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_mined_block(difficulty: usize) -> Block {
        let mut block = Block::new("payload".to_string(), "0".to_string())
            .expect("Block creation should work");
        block.mine(difficulty);
        block
    }

    #[test]
    fn test_target_matches_difficulty() {
        assert_eq!(ProofOfWork::new(3).target, "000");
        assert_eq!(ProofOfWork::new(1).target, "0");
        assert_eq!(ProofOfWork::new(0).target, "");
    }

    #[test]
    fn test_accepts_checks_the_leading_prefix() {
        let pow = ProofOfWork::new(2);

        assert!(pow.accepts("00ab3f"));
        assert!(!pow.accepts("0ab3f0"));
        assert!(!pow.accepts(""));

        // An empty target accepts any digest
        let trivial = ProofOfWork::new(0);
        assert!(trivial.accepts("ff"));
        assert!(trivial.accepts(""));
    }

    #[test]
    fn test_run_finds_an_accepted_nonce() {
        let block = Block::new("payload".to_string(), "0".to_string())
            .expect("Block creation should work");
        let pow = ProofOfWork::new(1);

        let (nonce, hash) = pow.run(&block);

        assert!(nonce >= 1);
        assert!(hash.starts_with('0'));
        assert_eq!(block.hash_for_nonce(nonce), hash);
    }

    #[test]
    fn test_validate_accepts_a_mined_block() {
        let block = create_mined_block(1);

        assert!(ProofOfWork::new(1).validate(&block));
    }

    #[test]
    fn test_validate_rejects_a_tampered_hash() {
        let mut block = create_mined_block(1);

        // The forged hash clears the target but no longer matches the fields
        block.set_hash(&"0".repeat(64));

        assert!(!ProofOfWork::new(1).validate(&block));
    }

    #[test]
    fn test_validate_rejects_an_unmined_block() {
        let block = Block::new("payload".to_string(), "0".to_string())
            .expect("Block creation should work");

        // The empty sentinel hash never equals a real digest
        assert!(!ProofOfWork::new(0).validate(&block));
    }
}
