//! Typed card-field identifiers.
//!
//! Formatters are configured with `Field` values instead of free-form
//! attribute names, so a typo is a construction-time error rather than a
//! formatting-time failure. `as_text` is the single mapping from field to
//! card value; sequence fields join their elements with one space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::error::Error;

/// One field of a normalized card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Supertypes,
    Types,
    Subtypes,
    ManaCost,
    Rarity,
    Power,
    Toughness,
    Text,
}

impl Field {
    /// Every field, in the default output order.
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Supertypes,
        Field::Types,
        Field::Subtypes,
        Field::ManaCost,
        Field::Rarity,
        Field::Power,
        Field::Toughness,
        Field::Text,
    ];

    /// The field's canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Supertypes => "supertypes",
            Field::Types => "types",
            Field::Subtypes => "subtypes",
            Field::ManaCost => "manacost",
            Field::Rarity => "rarity",
            Field::Power => "power",
            Field::Toughness => "toughness",
            Field::Text => "text",
        }
    }

    /// Read this field from a card as output text.
    ///
    /// Sequence fields are joined with a single space; absent optional
    /// fields become the empty string.
    #[must_use]
    pub fn as_text(self, card: &Card) -> String {
        match self {
            Field::Name => card.name.clone(),
            Field::Supertypes => card.supertypes.join(" "),
            Field::Types => card.types.join(" "),
            Field::Subtypes => card.subtypes.join(" "),
            Field::ManaCost => card.mana_cost.clone().unwrap_or_default(),
            Field::Rarity => card.rarity.clone().unwrap_or_default(),
            Field::Power => card.power.clone().unwrap_or_default(),
            Field::Toughness => card.toughness.clone().unwrap_or_default(),
            Field::Text => card.text.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::UnknownField {
                name: s.to_string(),
            })
    }
}
