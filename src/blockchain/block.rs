use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::Transaction;
use crate::utils::sha256_hex;

/// A committed ledger entry, immutable once appended to the chain.
///
/// Field order is load-bearing: the canonical digest hashes the JSON
/// serialization of this struct, so the declaration order below fixes the
/// byte representation every `previous_hash` link depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position in the chain.
    pub index: u64,
    /// Unix seconds at creation, informational only.
    pub timestamp: i64,
    /// Pool contents at commit time, in submission order. May be empty.
    pub transactions: Vec<Transaction>,
    /// Nonce satisfying the difficulty predicate against the predecessor's
    /// proof.
    pub proof: u64,
    /// Digest of the predecessor's canonical serialization; a fixed sentinel
    /// for genesis.
    pub previous_hash: String,
}

impl Block {
    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: String,
    ) -> Block {
        Block {
            index,
            timestamp: Utc::now().timestamp(),
            transactions,
            proof,
            previous_hash,
        }
    }

    /// Canonical content digest, embedded verbatim into the next block.
    pub fn digest(&self) -> String {
        let bytes = serde_json::to_vec(self).expect("block serializes to JSON");
        sha256_hex(bytes)
    }
}
