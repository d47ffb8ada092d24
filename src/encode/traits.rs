//! The formatter capability and its output types.
//!
//! A formatter converts one normalized card into model input. The two
//! built-in strategies share this single interface; callers pick one and
//! map it over the corpus.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::error::Result;

/// Flat numeric feature data for one card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature values, concatenated per encoded field.
    values: Vec<f32>,
}

impl FeatureVector {
    /// Create from raw values.
    #[must_use]
    pub fn from_values(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Create a zero-filled vector of the given length.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Number of feature slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the vector carries no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a slot value.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Set a slot value. Out-of-range indexes are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        if index < self.values.len() {
            self.values[index] = value;
        }
    }

    /// Add to a slot value. Out-of-range indexes are ignored.
    pub fn add(&mut self, index: usize, delta: f32) {
        if index < self.values.len() {
            self.values[index] += delta;
        }
    }

    /// Append another vector's slots after this one's.
    pub fn extend(&mut self, other: &FeatureVector) {
        self.values.extend_from_slice(&other.values);
    }

    /// Append raw slots.
    pub fn extend_from_slice(&mut self, slots: &[f32]) {
        self.values.extend_from_slice(slots);
    }

    /// The underlying slots.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

/// One formatted record: delimited text plus auxiliary features.
///
/// The pure-text strategy leaves `features` empty; the hybrid strategy
/// carves its hint fields out of the text and into `features`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInput {
    /// Pipe-delimited text portion.
    pub text: String,

    /// Auxiliary numeric portion, empty when unused.
    pub features: FeatureVector,
}

impl ModelInput {
    /// A text-only input.
    #[must_use]
    pub fn text_only(text: String) -> Self {
        Self {
            text,
            features: FeatureVector::default(),
        }
    }
}

/// Strategy converting a normalized card into model input.
pub trait CardFormatter {
    /// Format one card.
    fn format(&self, card: &Card) -> Result<ModelInput>;
}
