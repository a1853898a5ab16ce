// This is the chain itself - an in-memory sequence of mined blocks
// Linkage and hash consistency are never trusted as stored; is_valid
// re-derives both from scratch on every call

use crate::core::Block;
use crate::error::Result;
use crate::utils::to_pretty_json;
use log::{info, warn};
use serde::Serialize;

/// Previous-hash carried by the first block of a chain, and the parent id
/// of the minted output that seeds the genesis transaction.
pub const GENESIS_SENTINEL: &str = "0";

#[derive(Debug, Serialize)]
pub struct Blockchain {
    blocks: Vec<Block>,
}

impl Blockchain {
    pub fn new() -> Blockchain {
        Blockchain { blocks: Vec::new() }
    }

    /// The hash the next block should link to: the tip's hash, or the
    /// genesis sentinel while the chain is empty.
    pub fn get_tip_hash(&self) -> &str {
        self.blocks
            .last()
            .map(Block::get_hash)
            .unwrap_or(GENESIS_SENTINEL)
    }

    /// Append a block as-is. The caller threads the links; is_valid checks
    /// them afterwards.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Construct a block linked to the current tip, mine it at the given
    /// difficulty and append it. Returns a copy of the mined block.
    pub fn mine_block(&mut self, transactions: String, difficulty: usize) -> Result<Block> {
        let mut block = Block::new(transactions, self.get_tip_hash().to_string())?;
        block.mine(difficulty);
        info!(
            "Mined block at height {}: {}",
            self.blocks.len(),
            block.get_hash()
        );
        self.blocks.push(block.clone());
        Ok(block)
    }

    /// Whole-chain integrity check.
    ///
    /// Every stored hash must re-derive from the block's current fields and
    /// every previous-hash must name the predecessor's hash, starting from
    /// the genesis sentinel. An empty chain is valid.
    pub fn is_valid(&self) -> bool {
        let mut expected_previous_hash = GENESIS_SENTINEL;
        for (height, block) in self.blocks.iter().enumerate() {
            if block.get_hash() != block.calculate_hash() {
                warn!("Block {height} stored hash does not match its recomputed hash");
                return false;
            }
            if block.get_previous_hash() != expected_previous_hash {
                warn!("Block {height} does not link to its predecessor");
                return false;
            }
            expected_previous_hash = block.get_hash();
        }
        true
    }

    pub fn get_blocks(&self) -> &[Block] {
        self.blocks.as_slice()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        to_pretty_json(self)
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}
