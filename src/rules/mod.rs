//! Deck-building rules.
//!
//! `DeckRules` decides whether a card may be added to a deck:
//! - The deck size limit (50 cards by default)
//! - The card's quota in the deck's format (0 = banned)
//! - The one-copy cap on unique cards
//!
//! It also audits whole decks, reporting each `Violation`.

pub mod validation;

pub use validation::{DeckRules, Violation};
