//! Pure delimited-text formatting.
//!
//! Output shape: `|field1|field2|...|fieldN|` - every configured field's
//! text between pipe delimiters, N fields giving N+1 pipes.

use crate::cards::Card;
use crate::error::Result;

use super::field::Field;
use super::traits::{CardFormatter, ModelInput};

/// Formats a card as one pipe-delimited text line.
///
/// ## Example
///
/// ```
/// use card_corpus::cards::Card;
/// use card_corpus::corpus::RawCard;
/// use card_corpus::encode::{CardFormatter, DelimitedTextFormatter, Field};
///
/// let bear = Card::from_raw(RawCard {
///     name: "Bear".to_string(),
///     types: vec!["Creature".to_string()],
///     ..RawCard::default()
/// });
///
/// let formatter = DelimitedTextFormatter::new()
///     .with_fields(vec![Field::Name, Field::Types]);
/// let input = formatter.format(&bear).unwrap();
/// assert_eq!(input.text, "|Bear|Creature|");
/// ```
#[derive(Clone, Debug)]
pub struct DelimitedTextFormatter {
    fields: Vec<Field>,
}

impl DelimitedTextFormatter {
    /// Create a formatter over the default field order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Field::ALL.to_vec(),
        }
    }

    /// Replace the field list.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Build a formatter from field names, failing on unknown names.
    ///
    /// This is where a misspelled field surfaces - at construction, not
    /// per formatted card.
    pub fn from_names(names: &[&str]) -> Result<Self> {
        let fields = names
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Field>>>()?;
        Ok(Self { fields })
    }

    /// The configured fields, in output order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn render(fields: &[Field], card: &Card) -> String {
        let mut output = String::from("|");
        for field in fields {
            output.push_str(&field.as_text(card));
            output.push('|');
        }
        output
    }
}

impl Default for DelimitedTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFormatter for DelimitedTextFormatter {
    fn format(&self, card: &Card) -> Result<ModelInput> {
        Ok(ModelInput::text_only(Self::render(&self.fields, card)))
    }
}
