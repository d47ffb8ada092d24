//! The assembled pipeline: load, sanitize, scan, normalize.
//!
//! `Dataset::load` is the one-call entry point - the stages run in a
//! fixed order (exclusion and dedup, then sanitization, then the
//! vocabulary scan, then normalization) so every consumer sees the same
//! corpus for a given document and policy.

use std::path::Path;

use crate::batch::BatchIterator;
use crate::cards::{Card, Vocabulary};
use crate::corpus::{load_corpus, ExclusionPolicy, RawCorpus, Sanitizer};
use crate::encode::{CardFormatter, ModelInput};
use crate::error::Result;

/// A loaded corpus: normalized cards plus their scanned vocabulary.
///
/// ## Example
///
/// ```no_run
/// use card_corpus::corpus::ExclusionPolicy;
/// use card_corpus::Dataset;
///
/// let dataset = Dataset::load("AllSets.json", &ExclusionPolicy::new())?;
/// println!("{} cards, {} types", dataset.len(), dataset.vocabulary().types().len());
/// # Ok::<(), card_corpus::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Dataset {
    cards: Vec<Card>,
    vocabulary: Vocabulary,
}

impl Dataset {
    /// Load a source document with the default sanitizer.
    pub fn load(path: impl AsRef<Path>, policy: &ExclusionPolicy) -> Result<Self> {
        Self::load_with(path, policy, &Sanitizer::new())
    }

    /// Load a source document with a custom sanitizer.
    pub fn load_with(
        path: impl AsRef<Path>,
        policy: &ExclusionPolicy,
        sanitizer: &Sanitizer,
    ) -> Result<Self> {
        let corpus = load_corpus(path, policy)?;
        Ok(Self::from_corpus(corpus, sanitizer))
    }

    /// Build a dataset from an already-flattened corpus.
    ///
    /// Sanitizes in place, scans the vocabulary over the sanitized
    /// records, then normalizes to `Card` values in corpus order.
    #[must_use]
    pub fn from_corpus(mut corpus: RawCorpus, sanitizer: &Sanitizer) -> Self {
        for record in corpus.iter_mut() {
            sanitizer.sanitize(record);
        }

        let vocabulary = Vocabulary::scan(corpus.iter());
        let cards = corpus.iter().cloned().map(Card::from_raw).collect();

        Self { cards, vocabulary }
    }

    /// Normalized cards, in first-accepted corpus order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The scanned vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the dataset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// A seeded batch iterator over the cards.
    #[must_use]
    pub fn batches(&self, seed: u64) -> BatchIterator<Card> {
        BatchIterator::new(self.cards.clone(), seed)
    }

    /// Format every card with the given strategy, in corpus order.
    pub fn format_all(&self, formatter: &impl CardFormatter) -> Result<Vec<ModelInput>> {
        self.cards.iter().map(|card| formatter.format(card)).collect()
    }
}
