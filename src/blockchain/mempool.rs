use serde::{Deserialize, Serialize};

/// Reserved sender identifier used when the node mints a mining reward.
pub const REWARD_SENDER: &str = "system";

/// Amount credited to the node for every mined block.
pub const REWARD_AMOUNT: u64 = 1;

/// A transfer queued for inclusion in the next block. Identifier strings are
/// opaque; no balance tracking or signature checks happen at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: u64) -> Self {
        Transaction {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }

    /// The coinbase-style transaction credited to `recipient` each mine cycle.
    pub fn reward(recipient: &str) -> Self {
        Transaction::new(REWARD_SENDER, recipient, REWARD_AMOUNT)
    }

    pub fn is_reward(&self) -> bool {
        self.sender == REWARD_SENDER
    }
}

/// Ordered buffer of transactions submitted but not yet committed to a block.
#[derive(Debug, Default)]
pub struct Mempool {
    pending: Vec<Transaction>,
}

impl Mempool {
    pub fn new() -> Self {
        Mempool {
            pending: Vec::new(),
        }
    }

    /// Append a transaction, preserving submission order.
    pub fn push(&mut self, transaction: Transaction) {
        self.pending.push(transaction);
    }

    /// Return the pending transactions and leave the pool empty.
    pub fn drain(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_submission_order() {
        let mut pool = Mempool::new();
        pool.push(Transaction::new("alice", "bob", 5));
        pool.push(Transaction::new("bob", "carol", 3));
        pool.push(Transaction::new("carol", "alice", 8));

        let drained = pool.drain();
        let senders: Vec<&str> = drained.iter().map(|tx| tx.sender.as_str()).collect();
        assert_eq!(senders, ["alice", "bob", "carol"]);
    }

    #[test]
    fn drain_empties_the_pool() {
        let mut pool = Mempool::new();
        pool.push(Transaction::new("alice", "bob", 1));
        assert_eq!(pool.pending_count(), 1);

        let drained = pool.drain();
        assert_eq!(drained.len(), 1);
        assert!(pool.is_empty());
        assert!(pool.drain().is_empty());
    }

    #[test]
    fn reward_transaction_shape() {
        let reward = Transaction::reward("node-1");
        assert_eq!(reward.sender, REWARD_SENDER);
        assert_eq!(reward.recipient, "node-1");
        assert_eq!(reward.amount, REWARD_AMOUNT);
        assert!(reward.is_reward());
        assert!(!Transaction::new("alice", "bob", 1).is_reward());
    }
}
