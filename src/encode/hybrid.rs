//! Hint-vector formatting.
//!
//! Hinted fields are carved out of the text portion and encoded into the
//! feature vector instead, concatenated in declared hint order:
//!
//! - `supertypes` / `types` / `subtypes`: one-hot over the matching
//!   vocabulary list, one slot set per value on the card
//! - `manacost`: the 5-slot W,U,B,R,G color-identity indicator followed by
//!   per-symbol counts over the mana-symbol vocabulary
//!
//! A card token absent from the vocabulary is a hard error. The vocabulary
//! is scanned from the corpus being encoded, so a miss means the caller
//! mixed corpora; dropping the token would corrupt training data silently.

use crate::cards::{mana_symbols, Card, ColorIdentity, Vocabulary};
use crate::error::{Error, Result};

use super::field::Field;
use super::text::DelimitedTextFormatter;
use super::traits::{CardFormatter, FeatureVector, ModelInput};

/// Formats a card as delimited text plus an auxiliary feature vector.
///
/// ## Example
///
/// ```
/// use card_corpus::cards::{Card, Vocabulary};
/// use card_corpus::corpus::RawCard;
/// use card_corpus::encode::{CardFormatter, Field, HybridFormatter};
///
/// let raw = RawCard {
///     name: "Bear".to_string(),
///     types: vec!["Creature".to_string()],
///     mana_cost: Some("{1}{G}".to_string()),
///     ..RawCard::default()
/// };
/// let vocab = Vocabulary::scan([&raw]);
/// let card = Card::from_raw(raw);
///
/// let formatter = HybridFormatter::new(vocab)
///     .with_fields(vec![Field::Name, Field::Types, Field::ManaCost])
///     .with_hints(vec![Field::ManaCost])
///     .unwrap();
///
/// let input = formatter.format(&card).unwrap();
/// assert_eq!(input.text, "|Bear|Creature|");
/// assert_eq!(input.features.as_slice(), [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Clone, Debug)]
pub struct HybridFormatter {
    vocabulary: Vocabulary,
    fields: Vec<Field>,
    hints: Vec<Field>,
}

impl HybridFormatter {
    /// Create a formatter over the default field order with no hints.
    ///
    /// Without hints this behaves like the pure text formatter; hints are
    /// added with [`HybridFormatter::with_hints`].
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            fields: Field::ALL.to_vec(),
            hints: Vec::new(),
        }
    }

    /// Replace the configured field list.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Designate hint fields, in feature-vector order.
    ///
    /// Only `supertypes`, `types`, `subtypes`, and `manacost` have vector
    /// encodings; hinting any other field fails here, at construction.
    pub fn with_hints(mut self, hints: Vec<Field>) -> Result<Self> {
        for &field in &hints {
            if !is_hintable(field) {
                return Err(Error::UnhintableField { field });
            }
        }
        self.hints = hints;
        Ok(self)
    }

    /// The fields emitted as text: configured order minus the hints.
    #[must_use]
    pub fn text_fields(&self) -> Vec<Field> {
        self.fields
            .iter()
            .copied()
            .filter(|f| !self.hints.contains(f))
            .collect()
    }

    /// Total feature-vector length for the configured hints.
    #[must_use]
    pub fn feature_len(&self) -> usize {
        self.hints.iter().map(|&h| self.hint_len(h)).sum()
    }

    /// The vocabulary this formatter encodes against.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn hint_len(&self, field: Field) -> usize {
        match field {
            Field::Supertypes => self.vocabulary.supertypes().len(),
            Field::Types => self.vocabulary.types().len(),
            Field::Subtypes => self.vocabulary.subtypes().len(),
            Field::ManaCost => 5 + self.vocabulary.mana_symbols().len(),
            _ => 0,
        }
    }

    fn encode_hint(&self, field: Field, card: &Card) -> Result<FeatureVector> {
        match field {
            Field::Supertypes => one_hot(field, &card.supertypes, self.vocabulary.supertypes().len(), |t| {
                self.vocabulary.supertype_index(t)
            }),
            Field::Types => one_hot(field, &card.types, self.vocabulary.types().len(), |t| {
                self.vocabulary.type_index(t)
            }),
            Field::Subtypes => one_hot(field, &card.subtypes, self.vocabulary.subtypes().len(), |t| {
                self.vocabulary.subtype_index(t)
            }),
            Field::ManaCost => self.mana_vector(card),
            _ => Err(Error::UnhintableField { field }),
        }
    }

    fn mana_vector(&self, card: &Card) -> Result<FeatureVector> {
        let mut vector = FeatureVector::zeros(self.hint_len(Field::ManaCost));
        let Some(cost) = &card.mana_cost else {
            return Ok(vector);
        };

        let identity = ColorIdentity::from_cost(cost);
        for (slot, &value) in identity.to_vector().iter().enumerate() {
            vector.set(slot, value);
        }

        for symbol in mana_symbols(cost) {
            let index =
                self.vocabulary
                    .mana_symbol_index(symbol)
                    .ok_or_else(|| Error::UnknownToken {
                        field: Field::ManaCost,
                        token: symbol.to_string(),
                    })?;
            vector.add(5 + index, 1.0);
        }

        Ok(vector)
    }
}

impl CardFormatter for HybridFormatter {
    fn format(&self, card: &Card) -> Result<ModelInput> {
        let text = DelimitedTextFormatter::render(&self.text_fields(), card);

        let mut features = FeatureVector::default();
        for &hint in &self.hints {
            features.extend(&self.encode_hint(hint, card)?);
        }

        Ok(ModelInput { text, features })
    }
}

fn is_hintable(field: Field) -> bool {
    matches!(
        field,
        Field::Supertypes | Field::Types | Field::Subtypes | Field::ManaCost
    )
}

fn one_hot(
    field: Field,
    values: &[String],
    len: usize,
    index_of: impl Fn(&str) -> Option<usize>,
) -> Result<FeatureVector> {
    let mut vector = FeatureVector::zeros(len);
    for value in values {
        let index = index_of(value.as_str()).ok_or_else(|| Error::UnknownToken {
            field,
            token: value.clone(),
        })?;
        vector.set(index, 1.0);
    }
    Ok(vector)
}
