//! Deck-building legality rules.
//!
//! `DeckRules::can_add` is the gate every add passes through. It is a pure
//! function of the deck snapshot, the card definition and the format, and
//! is never cached: formats and catalog quotas may change between calls.
//!
//! `DeckRules::violations` audits a whole deck. Decks loaded from storage
//! or switched to a stricter format are accepted as-is and audited with it
//! rather than silently trimmed.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, CardDirectory, CardId, Format};
use crate::core::config::{DeckConfig, MAX_DECK_CARDS};
use crate::core::error::Rejection;
use crate::deck::Deck;

/// A rule a deck currently breaks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// More cards than the deck size limit.
    OverCapacity { total: u32, limit: u32 },
    /// A card with quota 0 in the deck's format.
    Banned { card: CardId, quantity: u32 },
    /// More copies than the card's effective cap.
    OverQuota { card: CardId, quantity: u32, cap: u8 },
    /// One logical card split across several entries.
    SplitVariants { base: CardId, entries: Vec<CardId> },
    /// Identifier the catalog does not know.
    UnknownCard(CardId),
}

/// Deck-building rules for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckRules {
    max_cards: u32,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self::new(MAX_DECK_CARDS)
    }
}

impl DeckRules {
    #[must_use]
    pub const fn new(max_cards: u32) -> Self {
        Self { max_cards }
    }

    #[must_use]
    pub fn from_config(config: &DeckConfig) -> Self {
        Self::new(config.max_cards)
    }

    /// Deck size limit.
    #[must_use]
    pub const fn max_cards(&self) -> u32 {
        self.max_cards
    }

    /// Can one more copy of `card` be added to `deck` in `format`?
    ///
    /// Checks, in order: the deck size limit, then the card's effective cap
    /// (quota for the format, at most 1 for unique cards).
    pub fn can_add(&self, deck: &Deck, card: &CardDefinition, format: Format) -> Result<(), Rejection> {
        if deck.total_cards() + 1 > self.max_cards {
            return Err(Rejection::DeckFull {
                limit: self.max_cards,
            });
        }

        let cap = card.effective_cap(format);
        if cap == 0 {
            return Err(Rejection::Banned {
                card: card.id.clone(),
                format,
            });
        }
        if deck.quantity_of(&card.id) >= u32::from(cap) {
            return Err(Rejection::QuotaExceeded {
                card: card.id.clone(),
                format,
                cap,
            });
        }

        Ok(())
    }

    /// Every rule the deck breaks in its own format.
    pub fn violations<D: CardDirectory + ?Sized>(&self, deck: &Deck, directory: &D) -> Vec<Violation> {
        let mut violations = Vec::new();

        let total = deck.total_cards();
        if total > self.max_cards {
            violations.push(Violation::OverCapacity {
                total,
                limit: self.max_cards,
            });
        }

        let mut by_base: FxHashMap<CardId, Vec<CardId>> = FxHashMap::default();
        let mut bases = Vec::new();

        for entry in deck.entries() {
            let Some(card) = directory.lookup(&entry.card_id) else {
                violations.push(Violation::UnknownCard(entry.card_id.clone()));
                continue;
            };

            let cap = card.effective_cap(deck.format);
            if cap == 0 {
                violations.push(Violation::Banned {
                    card: entry.card_id.clone(),
                    quantity: entry.quantity,
                });
            } else if entry.quantity > u32::from(cap) {
                violations.push(Violation::OverQuota {
                    card: entry.card_id.clone(),
                    quantity: entry.quantity,
                    cap,
                });
            }

            let base = directory.base_card_id(&entry.card_id);
            let group = by_base.entry(base.clone()).or_default();
            if group.is_empty() {
                bases.push(base);
            }
            group.push(entry.card_id.clone());
        }

        for base in bases {
            if let Some(entries) = by_base.remove(&base) {
                if entries.len() > 1 {
                    violations.push(Violation::SplitVariants { base, entries });
                }
            }
        }

        violations
    }

    /// Does the deck satisfy every rule?
    pub fn is_legal<D: CardDirectory + ?Sized>(&self, deck: &Deck, directory: &D) -> bool {
        self.violations(deck, directory).is_empty()
    }
}
