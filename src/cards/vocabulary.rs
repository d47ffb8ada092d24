//! Controlled vocabularies scanned from the corpus.
//!
//! One pass over the deduplicated records collects the distinct
//! supertypes, types, subtypes, and mana symbols. Each list is
//! lexicographically sorted, so index assignment for one-hot and count
//! encodings is deterministic for a given corpus.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::corpus::RawCard;

use super::mana::mana_symbols;

/// A sorted, duplicate-free token list with O(1) reverse lookup.
#[derive(Clone, Debug, Default)]
struct TokenList {
    tokens: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl TokenList {
    fn from_set(set: BTreeSet<String>) -> Self {
        // BTreeSet iteration is already sorted and distinct.
        let tokens: Vec<String> = set.into_iter().collect();
        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { tokens, index }
    }

    fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }
}

/// The four fixed index spaces used for encoding.
///
/// Built once per corpus, read-only afterward.
///
/// ## Example
///
/// ```
/// use card_corpus::cards::Vocabulary;
/// use card_corpus::corpus::RawCard;
///
/// let bear = RawCard {
///     name: "Bear".to_string(),
///     types: vec!["Creature".to_string()],
///     subtypes: vec!["Bear".to_string()],
///     mana_cost: Some("{1}{G}".to_string()),
///     ..RawCard::default()
/// };
///
/// let vocab = Vocabulary::scan([&bear]);
/// assert_eq!(vocab.types(), ["Creature"]);
/// assert_eq!(vocab.mana_symbols(), ["{1}", "{G}"]);
/// assert_eq!(vocab.mana_symbol_index("{G}"), Some(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    supertypes: TokenList,
    types: TokenList,
    subtypes: TokenList,
    mana_symbols: TokenList,
}

impl Vocabulary {
    /// Scan the deduplicated records and build all four lists.
    pub fn scan<'a>(records: impl IntoIterator<Item = &'a RawCard>) -> Self {
        let mut supertypes = BTreeSet::new();
        let mut types = BTreeSet::new();
        let mut subtypes = BTreeSet::new();
        let mut symbols = BTreeSet::new();

        for record in records {
            supertypes.extend(record.supertypes.iter().cloned());
            types.extend(record.types.iter().cloned());

            // Planeswalker subtypes are deliberately left out of the
            // subtype vocabulary.
            if !record.types.iter().any(|t| t == "Planeswalker") {
                subtypes.extend(record.subtypes.iter().cloned());
            }

            if let Some(cost) = &record.mana_cost {
                symbols.extend(mana_symbols(cost).iter().map(|s| s.to_string()));
            }
        }

        Self {
            supertypes: TokenList::from_set(supertypes),
            types: TokenList::from_set(types),
            subtypes: TokenList::from_set(subtypes),
            mana_symbols: TokenList::from_set(symbols),
        }
    }

    /// Sorted distinct supertypes.
    #[must_use]
    pub fn supertypes(&self) -> &[String] {
        &self.supertypes.tokens
    }

    /// Sorted distinct types.
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types.tokens
    }

    /// Sorted distinct subtypes (Planeswalker subtypes excluded).
    #[must_use]
    pub fn subtypes(&self) -> &[String] {
        &self.subtypes.tokens
    }

    /// Sorted distinct mana symbols.
    #[must_use]
    pub fn mana_symbols(&self) -> &[String] {
        &self.mana_symbols.tokens
    }

    /// Index of a supertype token, if present.
    #[must_use]
    pub fn supertype_index(&self, token: &str) -> Option<usize> {
        self.supertypes.index_of(token)
    }

    /// Index of a type token, if present.
    #[must_use]
    pub fn type_index(&self, token: &str) -> Option<usize> {
        self.types.index_of(token)
    }

    /// Index of a subtype token, if present.
    #[must_use]
    pub fn subtype_index(&self, token: &str) -> Option<usize> {
        self.subtypes.index_of(token)
    }

    /// Index of a mana-symbol token, if present.
    #[must_use]
    pub fn mana_symbol_index(&self, token: &str) -> Option<usize> {
        self.mana_symbols.index_of(token)
    }
}
