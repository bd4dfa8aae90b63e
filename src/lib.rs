//! pocketchain: a minimal append-only ledger with proof-of-work admission.
//!
//! The core is the [`blockchain::Engine`]: an ordered sequence of blocks,
//! each bound to its predecessor by a SHA-256 digest, fed from a pool of
//! pending transactions that is flushed into a new block whenever a mine
//! cycle completes. The [`api`] module puts an HTTP surface in front of the
//! engine; everything in between is deliberately small.
//!
//! State lives only in process memory and is discarded on exit. There is no
//! peer discovery, no fork resolution, and no signature verification here.

pub mod api;
pub mod blockchain;
pub mod error;
pub mod utils;
