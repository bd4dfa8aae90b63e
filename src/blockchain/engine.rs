use std::sync::Mutex;

use tracing::{debug, info};
use uuid::Uuid;

use super::{miner, Block, Chain, Mempool, Transaction};

/// Process-wide handle over the ledger state, constructed once at startup
/// and shared by reference with every caller.
///
/// The chain and the pool sit behind separate locks, never acquired nested,
/// so submissions stay cheap while a mine cycle runs. A third mutex
/// serializes whole mine cycles: the proof search itself reads only the
/// predecessor's proof and runs without holding either state lock, but two
/// cycles must never interleave their drain-and-commit steps.
pub struct Engine {
    node_id: String,
    chain: Mutex<Chain>,
    pool: Mutex<Mempool>,
    mine_cycle: Mutex<()>,
}

impl Engine {
    /// Fresh engine: genesis chain, empty pool, random node identifier.
    pub fn new() -> Self {
        Engine {
            node_id: Uuid::new_v4().simple().to_string(),
            chain: Mutex::new(Chain::new()),
            pool: Mutex::new(Mempool::new()),
            mine_cycle: Mutex::new(()),
        }
    }

    /// Identifier credited by the reward transaction of every mined block.
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Queue a transaction for the next block and return the index it will
    /// occupy once that block is mined.
    pub fn submit(&self, sender: String, recipient: String, amount: u64) -> u64 {
        self.pool
            .lock()
            .unwrap()
            .push(Transaction::new(sender, recipient, amount));
        let next_index = self.chain.lock().unwrap().len() as u64 + 1;
        debug!(next_index, "transaction queued");
        next_index
    }

    /// Run one full mine cycle and return the committed block.
    ///
    /// A submission arriving while the proof search runs lands either in
    /// this block or in the pool for the next one, never nowhere.
    pub fn mine(&self) -> Block {
        let _cycle = self.mine_cycle.lock().unwrap();

        // Only mine cycles append to the chain and we hold the cycle lock,
        // so this read stays the tip for the whole search.
        let (last_proof, previous_hash) = {
            let chain = self.chain.lock().unwrap();
            let last = chain.last();
            (last.proof, last.digest())
        };

        let proof = miner::find_proof(last_proof);

        // Reward mint and drain under one pool-lock acquisition so no
        // submission can slip in between them.
        let transactions = {
            let mut pool = self.pool.lock().unwrap();
            pool.push(Transaction::reward(&self.node_id));
            pool.drain()
        };

        let block = {
            let mut chain = self.chain.lock().unwrap();
            chain.commit(proof, previous_hash, transactions).clone()
        };
        info!(
            index = block.index,
            proof = block.proof,
            transactions = block.transactions.len(),
            "mined block"
        );
        block
    }

    /// Snapshot of the committed chain for read-only callers.
    pub fn chain_snapshot(&self) -> Vec<Block> {
        self.chain.lock().unwrap().blocks().to_vec()
    }

    /// Number of committed blocks.
    pub fn chain_len(&self) -> usize {
        self.chain.lock().unwrap().len()
    }

    /// Number of transactions waiting for the next block.
    pub fn pending_count(&self) -> usize {
        self.pool.lock().unwrap().pending_count()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
