//! Normalized card records.
//!
//! `Card` is the intermediate representation the formatters consume.
//! It is built once from a sanitized raw record and never mutated after;
//! absent optional fields are normalized to empty/`None` so downstream
//! code never branches on document shape.

use serde::{Deserialize, Serialize};

use crate::corpus::RawCard;

/// One uniquely named card, normalized for encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card name. Unique within a loaded corpus.
    pub name: String,

    /// Classification tiers, in document order. Empty when absent.
    pub supertypes: Vec<String>,
    pub types: Vec<String>,
    pub subtypes: Vec<String>,

    /// Combat stats as printed (values like `"*"` occur).
    pub power: Option<String>,
    pub toughness: Option<String>,

    /// Cost string holding `{...}` mana symbols.
    pub mana_cost: Option<String>,

    pub rarity: Option<String>,

    /// Sanitized oracle text.
    pub text: Option<String>,
}

impl Card {
    /// Build a normalized card from a (sanitized) raw record.
    #[must_use]
    pub fn from_raw(raw: RawCard) -> Self {
        Self {
            name: raw.name,
            supertypes: raw.supertypes,
            types: raw.types,
            subtypes: raw.subtypes,
            power: raw.power,
            toughness: raw.toughness,
            mana_cost: raw.mana_cost,
            rarity: raw.rarity,
            text: raw.text,
        }
    }

    /// Does this card's type line include `type_name`?
    #[must_use]
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }
}

impl From<RawCard> for Card {
    fn from(raw: RawCard) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_defaults() {
        let raw = RawCard {
            name: "Island".to_string(),
            ..RawCard::default()
        };
        let card = Card::from_raw(raw);

        assert_eq!(card.name, "Island");
        assert!(card.supertypes.is_empty());
        assert!(card.types.is_empty());
        assert!(card.subtypes.is_empty());
        assert!(card.power.is_none());
        assert!(card.toughness.is_none());
        assert!(card.mana_cost.is_none());
        assert!(card.rarity.is_none());
        assert!(card.text.is_none());
    }

    #[test]
    fn test_from_raw_carries_fields() {
        let raw = RawCard {
            name: "Bear".to_string(),
            types: vec!["Creature".to_string()],
            subtypes: vec!["Bear".to_string()],
            power: Some("2".to_string()),
            toughness: Some("2".to_string()),
            mana_cost: Some("{1}{G}".to_string()),
            rarity: Some("Common".to_string()),
            text: Some("@ rides a @. ".to_string()),
            ..RawCard::default()
        };
        let card = Card::from_raw(raw);

        assert_eq!(card.mana_cost.as_deref(), Some("{1}{G}"));
        assert!(card.has_type("Creature"));
        assert!(!card.has_type("Instant"));
    }

    #[test]
    fn test_serde_round_trip() {
        let card = Card::from_raw(RawCard {
            name: "Bear".to_string(),
            types: vec!["Creature".to_string()],
            ..RawCard::default()
        });

        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
