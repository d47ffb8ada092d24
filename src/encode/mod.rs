//! Encoding: the formatter capability and its two built-in strategies.
//!
//! ## Key Types
//!
//! - `Field`: typed card-field identifier (construction-time validation)
//! - `CardFormatter`: the single capability both strategies implement
//! - `DelimitedTextFormatter`: pure `|f1|f2|...|fN|` text
//! - `HybridFormatter`: text plus one-hot / count hint vectors
//! - `FeatureVector` / `ModelInput`: formatter output
//!
//! ## Usage
//!
//! ```
//! use card_corpus::cards::Card;
//! use card_corpus::corpus::RawCard;
//! use card_corpus::encode::{CardFormatter, DelimitedTextFormatter};
//!
//! let card = Card::from_raw(RawCard {
//!     name: "Bear".to_string(),
//!     types: vec!["Creature".to_string()],
//!     ..RawCard::default()
//! });
//!
//! let line = DelimitedTextFormatter::new().format(&card).unwrap();
//! assert!(line.text.starts_with("|Bear|"));
//! ```

pub mod field;
pub mod hybrid;
pub mod text;
pub mod traits;

pub use field::Field;
pub use hybrid::HybridFormatter;
pub use text::DelimitedTextFormatter;
pub use traits::{CardFormatter, FeatureVector, ModelInput};
