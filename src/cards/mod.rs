//! Card domain: normalized records, mana symbols, vocabularies.
//!
//! ## Key Types
//!
//! - `Card`: immutable normalized record
//! - `ColorIdentity`: fixed W,U,B,R,G indicator derived from a cost string
//! - `Vocabulary`: the four sorted index spaces used for encoding
//!
//! `mana_symbols` extracts the `{...}` tokens a cost string carries; the
//! vocabulary scanner and the hybrid formatter both build on it.

pub mod card;
pub mod mana;
pub mod vocabulary;

pub use card::Card;
pub use mana::{mana_symbols, ColorIdentity, COLORS};
pub use vocabulary::Vocabulary;
