use super::{Block, Transaction};

/// Sentinel previous-hash seeded into the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Proof carried by the genesis block; the first real mine searches against
/// it.
pub const GENESIS_PROOF: u64 = 100;

/// Append-only, hash-linked sequence of committed blocks. Never empty: the
/// constructor seeds the genesis block.
#[derive(Debug)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// A chain containing only the genesis block.
    pub fn new() -> Self {
        let genesis = Block::new(
            1,
            Vec::new(),
            GENESIS_PROOF,
            GENESIS_PREVIOUS_HASH.to_string(),
        );
        Chain {
            blocks: vec![genesis],
        }
    }

    /// Append a block carrying `transactions` and return it.
    ///
    /// Proof correctness is the miner's contract; commit trusts its caller
    /// and performs no validation.
    pub fn commit(
        &mut self,
        proof: u64,
        previous_hash: String,
        transactions: Vec<Transaction>,
    ) -> &Block {
        let block = Block::new(
            self.blocks.len() as u64 + 1,
            transactions,
            proof,
            previous_hash,
        );
        self.blocks.push(block);
        self.last()
    }

    /// The most recently committed block.
    pub fn last(&self) -> &Block {
        self.blocks.last().expect("chain always holds genesis")
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl Default for Chain {
    fn default() -> Self {
        Chain::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_only_the_genesis_block() {
        let chain = Chain::new();
        assert_eq!(chain.len(), 1);

        let genesis = chain.last();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.proof, GENESIS_PROOF);
        assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
        assert!(genesis.transactions.is_empty());
    }

    #[test]
    fn commit_appends_with_monotonic_indexes() {
        let mut chain = Chain::new();
        let prev = chain.last().digest();
        chain.commit(7, prev, Vec::new());
        let prev = chain.last().digest();
        chain.commit(9, prev, vec![Transaction::new("alice", "bob", 2)]);

        assert_eq!(chain.len(), 3);
        for (position, block) in chain.blocks().iter().enumerate() {
            assert_eq!(block.index, position as u64 + 1);
        }
        assert_eq!(chain.last().proof, 9);
        assert_eq!(chain.last().transactions.len(), 1);
    }

    #[test]
    fn commit_embeds_the_given_previous_hash() {
        let mut chain = Chain::new();
        let prev = chain.last().digest();
        let block = chain.commit(7, prev.clone(), Vec::new());
        assert_eq!(block.previous_hash, prev);
    }
}
