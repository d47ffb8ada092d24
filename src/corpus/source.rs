//! Source document model.
//!
//! The input is a single JSON document mapping set codes to release sets,
//! each carrying a card list. Only the fields the pipeline consumes are
//! modeled; everything else in the document is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// One release set as it appears in the source document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawSet {
    /// Display name of the set (the exclusion policy matches on this).
    pub name: String,

    /// Cards printed in this set, in document order.
    #[serde(default)]
    pub cards: Vec<RawCard>,
}

/// One card record as it appears in the source document.
///
/// Everything except `name` and `types` is optional in the wild; absent
/// fields default to empty so downstream code never branches on presence.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawCard {
    /// Card name. Unique after deduplication.
    pub name: String,

    /// Classification tiers. `types` is effectively always present.
    #[serde(default)]
    pub supertypes: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,

    /// Combat stats. Kept as strings: the source uses values like `"*"`.
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,

    /// Cost string holding `{...}` mana symbols.
    #[serde(default, rename = "manaCost")]
    pub mana_cost: Option<String>,

    #[serde(default)]
    pub rarity: Option<String>,

    /// Oracle text, sanitized in place before normalization.
    #[serde(default)]
    pub text: Option<String>,
}
