//! Batching: deterministic shuffling, the toy batch iterator, and the
//! encoded-batch serialization boundary.
//!
//! ## Key Types
//!
//! - `CorpusRng`: seeded ChaCha8 RNG with O(1) state capture
//! - `BatchIterator`: shuffle-and-slice cursor with an epoch counter
//! - `EncodedBatch`: bincode-framed formatted batch for a trainer

pub mod iterator;
pub mod rng;
pub mod store;

pub use iterator::BatchIterator;
pub use rng::{CorpusRng, CorpusRngState};
pub use store::EncodedBatch;
