//! # card-corpus
//!
//! Card dataset normalization and fixed-vocabulary encoding for
//! sequence-model training.
//!
//! The pipeline ingests a JSON document of release sets, flattens it into
//! uniquely named records, and encodes each record into parallel
//! representations a downstream model can consume.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Sets are visited in sorted set-code order, cards
//!    in document order, vocabularies are sorted - the same document and
//!    policy always produce the same dataset.
//!
//! 2. **Configuration Over Convention**: Nothing is filtered by default
//!    that callers cannot override; exclusion predicates are injected via
//!    `ExclusionPolicy`.
//!
//! 3. **Errors Are Values**: Every failure is a distinct `Error` variant;
//!    nothing is swallowed or stringly typed.
//!
//! ## Pipeline
//!
//! load -> exclude/dedup -> sanitize -> scan vocabulary -> normalize ->
//! format (text or hybrid) -> batch
//!
//! ## Modules
//!
//! - `corpus`: source document model, exclusion policy, loader, sanitizer
//! - `cards`: normalized `Card`, mana symbols, `Vocabulary`
//! - `encode`: `CardFormatter` strategies and their output types
//! - `batch`: deterministic shuffling, batch iterator, encoded-batch store
//! - `dataset`: the assembled end-to-end pipeline
//! - `error`: crate error taxonomy

pub mod batch;
pub mod cards;
pub mod corpus;
pub mod dataset;
pub mod encode;
pub mod error;

// Re-export commonly used types
pub use crate::batch::{BatchIterator, CorpusRng, CorpusRngState, EncodedBatch};
pub use crate::cards::{mana_symbols, Card, ColorIdentity, Vocabulary};
pub use crate::corpus::{
    load_corpus, ExclusionPolicy, RawCard, RawCorpus, RawSet, Sanitizer,
};
pub use crate::dataset::Dataset;
pub use crate::encode::{
    CardFormatter, DelimitedTextFormatter, FeatureVector, Field, HybridFormatter, ModelInput,
};
pub use crate::error::{Error, Result};
