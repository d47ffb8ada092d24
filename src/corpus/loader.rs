//! Corpus loading: one scoped file read, then a flattening pass.
//!
//! The source document groups cards by release set; the pipeline wants one
//! record per unique card name. Sets are visited in sorted set-code order
//! and cards within a set in document order, so "first seen wins" is a
//! deterministic rule rather than an accident of map iteration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

use super::filter::ExclusionPolicy;
use super::source::{RawCard, RawSet};

/// Deduplicated, insertion-ordered card records.
///
/// Preserves the order in which records were first accepted and supports
/// lookup by card name.
#[derive(Debug, Default)]
pub struct RawCorpus {
    records: Vec<RawCard>,
    by_name: FxHashMap<String, usize>,
}

impl RawCorpus {
    /// Create an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless a card of the same name was already accepted.
    ///
    /// Returns `true` if the record was inserted.
    pub fn insert_first(&mut self, card: RawCard) -> bool {
        if self.by_name.contains_key(&card.name) {
            return false;
        }
        self.by_name.insert(card.name.clone(), self.records.len());
        self.records.push(card);
        true
    }

    /// Look up a record by card name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RawCard> {
        self.by_name.get(name).map(|&idx| &self.records[idx])
    }

    /// Number of accepted records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the corpus is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in first-accepted order.
    pub fn iter(&self) -> impl Iterator<Item = &RawCard> {
        self.records.iter()
    }

    /// Iterate records mutably, in first-accepted order.
    ///
    /// Names must not be reassigned through this iterator; the name index
    /// is built at insertion time.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RawCard> {
        self.records.iter_mut()
    }
}

/// Load the source document and flatten it into a deduplicated corpus.
///
/// Fails with [`Error::MissingFile`] if `path` does not resolve to a file
/// and with [`Error::MalformedDocument`] if the content is not valid JSON.
/// Excluded sets are skipped whole; within accepted sets, cards with
/// excluded types and reprints of already-accepted names are dropped.
pub fn load_corpus(path: impl AsRef<Path>, policy: &ExclusionPolicy) -> Result<RawCorpus> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let sets: BTreeMap<String, RawSet> =
        serde_json::from_str(&content).map_err(|source| Error::MalformedDocument { source })?;

    Ok(flatten_sets(sets, policy))
}

/// Flatten parsed sets into a deduplicated corpus.
///
/// Separated from the file read so tests and in-memory callers can feed
/// documents directly. The `BTreeMap` fixes set visiting order.
pub fn flatten_sets(sets: BTreeMap<String, RawSet>, policy: &ExclusionPolicy) -> RawCorpus {
    let mut corpus = RawCorpus::new();

    for set in sets.into_values() {
        if policy.excludes_set(&set.name) {
            continue;
        }
        for card in set.cards {
            if policy.excludes_types(&card.types) {
                continue;
            }
            corpus.insert_first(card);
        }
    }

    corpus
}
