pub mod block;
pub mod chain;
pub mod engine;
pub mod mempool;
pub mod miner;

pub use block::Block;
pub use chain::Chain;
pub use engine::Engine;
pub use mempool::{Mempool, Transaction};
