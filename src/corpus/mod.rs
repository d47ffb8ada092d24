//! Corpus ingestion: source document model, exclusion policy, loader,
//! and text sanitizer.
//!
//! ## Key Types
//!
//! - `RawSet` / `RawCard`: serde mirror of the source document
//! - `ExclusionPolicy`: injectable set/type filtering strategy
//! - `RawCorpus`: deduplicated, insertion-ordered records
//! - `Sanitizer`: reminder-text and self-reference cleanup
//!
//! ## Determinism
//!
//! Sets are visited in sorted set-code order and cards within a set in
//! document order, so the first-seen-wins dedup rule is reproducible
//! across runs.

pub mod filter;
pub mod loader;
pub mod sanitizer;
pub mod source;

pub use filter::{ExclusionPolicy, DEFAULT_SET_DENYLIST, DEFAULT_TYPE_DENYLIST};
pub use loader::{flatten_sets, load_corpus, RawCorpus};
pub use sanitizer::{Sanitizer, DEFAULT_PLACEHOLDER};
pub use source::{RawCard, RawSet};
