//! Mana-cost symbol extraction and color identity.
//!
//! A mana symbol is a `{...}` token inside a cost string, e.g. `{2}`,
//! `{W}`, `{U/P}`. Color identity is a fixed 5-slot indicator over
//! W, U, B, R, G derived from substring presence in the cost string -
//! deliberately independent of the scanned symbol vocabulary.

use smallvec::SmallVec;

/// The color alphabet, in slot order.
pub const COLORS: [char; 5] = ['W', 'U', 'B', 'R', 'G'];

/// Extract every `{...}` symbol from a cost string, in order.
///
/// Symbols are matched non-greedily: `{1}{G}` yields `{1}` and `{G}`,
/// never `{1}{G}` as one token. Unterminated braces yield nothing for
/// the dangling tail.
#[must_use]
pub fn mana_symbols(cost: &str) -> SmallVec<[&str; 8]> {
    let mut symbols = SmallVec::new();
    let mut rest = cost;

    while let Some(open) = rest.find('{') {
        let after = &rest[open..];
        let Some(close) = after.find('}') else {
            break;
        };
        symbols.push(&after[..=close]);
        rest = &after[close + 1..];
    }

    symbols
}

/// 5-slot color indicator over the fixed W,U,B,R,G alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorIdentity {
    slots: [bool; 5],
}

impl ColorIdentity {
    /// Derive identity from substring presence in a cost string.
    #[must_use]
    pub fn from_cost(cost: &str) -> Self {
        let mut slots = [false; 5];
        for (slot, color) in COLORS.iter().enumerate() {
            slots[slot] = cost.contains(*color);
        }
        Self { slots }
    }

    /// Is the given slot (WUBRG order) set?
    #[must_use]
    pub const fn slot(&self, index: usize) -> bool {
        self.slots[index]
    }

    /// No color slot set.
    #[must_use]
    pub fn is_colorless(&self) -> bool {
        !self.slots.iter().any(|&s| s)
    }

    /// Indicator slots as encoder input.
    #[must_use]
    pub fn to_vector(&self) -> [f32; 5] {
        let mut out = [0.0; 5];
        for (slot, &set) in self.slots.iter().enumerate() {
            if set {
                out[slot] = 1.0;
            }
        }
        out
    }
}
