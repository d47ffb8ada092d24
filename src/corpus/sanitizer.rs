//! Per-record text cleanup prior to normalization.
//!
//! Two passes over the oracle text, strictly in this order:
//!
//! 1. Strip reminder text - every parenthesized substring is removed.
//! 2. Collapse self-references - every occurrence of the card's own name
//!    is replaced with a placeholder symbol.
//!
//! Reminder text may itself mention the card's name, so running the passes
//! in the other order would leave stray placeholders behind.

use super::source::RawCard;

/// Default placeholder for a card's own name in its text.
pub const DEFAULT_PLACEHOLDER: &str = "@";

/// Sanitizes raw records in place.
///
/// ## Example
///
/// ```
/// use card_corpus::corpus::{RawCard, Sanitizer};
///
/// let mut card = RawCard {
///     name: "Bear".to_string(),
///     text: Some("Bear rides a Bear. (Reminder.)".to_string()),
///     ..RawCard::default()
/// };
///
/// Sanitizer::new().sanitize(&mut card);
/// assert_eq!(card.text.as_deref(), Some("@ rides a @. "));
/// ```
#[derive(Clone, Debug)]
pub struct Sanitizer {
    placeholder: String,
}

impl Sanitizer {
    /// Create a sanitizer with the default `@` placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Override the self-reference placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Clean a record's text in place. No-op when the text is absent.
    pub fn sanitize(&self, card: &mut RawCard) {
        let Some(text) = card.text.take() else {
            return;
        };
        let stripped = strip_parentheticals(&text);
        card.text = Some(stripped.replace(&card.name, &self.placeholder));
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove every parenthesized group from `text`.
///
/// Each group runs from an opening paren to its matching close; nested
/// parens stay inside the group. An unmatched opening paren is kept
/// verbatim, matching the no-match behavior of the original pattern.
fn strip_parentheticals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices();

    while let Some((start, ch)) = chars.next() {
        if ch != '(' {
            out.push(ch);
            continue;
        }

        let mut depth = 1usize;
        let mut closed = false;
        for (_, inner) in chars.by_ref() {
            match inner {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        closed = true;
                        break;
                    }
                }
                _ => {}
            }
        }

        if !closed {
            // No matching close anywhere; keep the tail as written.
            out.push_str(&text[start..]);
            break;
        }
    }

    out
}
