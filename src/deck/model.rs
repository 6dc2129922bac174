//! Deck data: a named, formatted multiset of cards.
//!
//! `Deck` keeps its entries in insertion order with one entry per card
//! identifier and no zero quantities. The quantity-changing methods are
//! crate-private: outside code goes through `DeckEditor`, which enforces
//! the deck-building rules before touching a `Deck`.
//!
//! Entries live in an `im::Vector`, so cloning a deck for a snapshot is
//! O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Format};

/// One line of a deck list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckEntry {
    pub card_id: CardId,
    /// Always greater than zero.
    pub quantity: u32,
}

impl DeckEntry {
    #[must_use]
    pub fn new(card_id: CardId, quantity: u32) -> Self {
        Self { card_id, quantity }
    }
}

/// A deck under construction.
///
/// Deserialized decks go through `from_entries`, so the entry invariants
/// hold for decks built from any serialized form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDeck")]
pub struct Deck {
    pub name: String,
    pub format: Format,
    entries: Vector<DeckEntry>,
}

/// Serialized shape of a `Deck`, before normalization.
#[derive(Deserialize)]
struct RawDeck {
    name: String,
    format: Format,
    entries: Vec<DeckEntry>,
}

impl From<RawDeck> for Deck {
    fn from(raw: RawDeck) -> Self {
        Self::from_entries(
            raw.name,
            raw.format,
            raw.entries.into_iter().map(|e| (e.card_id, e.quantity)),
        )
    }
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>, format: Format) -> Self {
        Self {
            name: name.into(),
            format,
            entries: Vector::new(),
        }
    }

    /// Build a deck from raw `(card, quantity)` pairs.
    ///
    /// Zero quantities are dropped and repeated identifiers are merged into
    /// their first occurrence. Merged quantities saturate at `u32::MAX`. No deck-building rule is checked; use
    /// `rules::violations` to audit the result.
    #[must_use]
    pub fn from_entries(
        name: impl Into<String>,
        format: Format,
        entries: impl IntoIterator<Item = (CardId, u32)>,
    ) -> Self {
        let mut deck = Self::new(name, format);
        for (card_id, quantity) in entries {
            deck.add_quantity(&card_id, quantity);
        }
        deck
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter()
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |total, e| total.saturating_add(e.quantity))
    }

    /// Quantity of a card identifier, 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, card_id: &CardId) -> u32 {
        self.entry(card_id).map_or(0, |e| e.quantity)
    }

    #[must_use]
    pub fn contains(&self, card_id: &CardId) -> bool {
        self.position(card_id).is_some()
    }

    /// Insertion index of a card identifier.
    #[must_use]
    pub fn position(&self, card_id: &CardId) -> Option<usize> {
        self.entries.iter().position(|e| &e.card_id == card_id)
    }

    #[must_use]
    pub fn entry(&self, card_id: &CardId) -> Option<&DeckEntry> {
        self.entries.iter().find(|e| &e.card_id == card_id)
    }

    /// Same name, format and entry set, ignoring entry order.
    #[must_use]
    pub fn same_contents(&self, other: &Deck) -> bool {
        self.name == other.name
            && self.format == other.format
            && self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|e| other.quantity_of(&e.card_id) == e.quantity)
    }

    /// Add `quantity` copies, appending a new entry if needed.
    ///
    /// Returns the resulting quantity.
    pub(crate) fn add_quantity(&mut self, card_id: &CardId, quantity: u32) -> u32 {
        if quantity == 0 {
            return self.quantity_of(card_id);
        }
        match self.position(card_id) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity = entry.quantity.saturating_add(quantity);
                entry.quantity
            }
            None => {
                self.entries.push_back(DeckEntry::new(card_id.clone(), quantity));
                quantity
            }
        }
    }

    /// Remove one copy, dropping the entry at zero.
    ///
    /// Returns the remaining quantity, or `None` if the card was absent.
    pub(crate) fn remove_one(&mut self, card_id: &CardId) -> Option<u32> {
        let index = self.position(card_id)?;
        let entry = &mut self.entries[index];
        entry.quantity = entry.quantity.saturating_sub(1);
        let remaining = entry.quantity;
        if remaining == 0 {
            self.entries.remove(index);
        }
        Some(remaining)
    }

    /// Move the full quantity of `old` onto `new`.
    ///
    /// If `new` already has an entry the two are merged into whichever comes
    /// first in insertion order; otherwise `new` takes `old`'s position.
    /// Returns the merged quantity, or `None` if `old` was absent.
    pub(crate) fn move_quantity(&mut self, old: &CardId, new: &CardId) -> Option<u32> {
        let old_index = self.position(old)?;
        if old == new {
            return Some(self.entries[old_index].quantity);
        }

        let moved = self.entries[old_index].quantity;
        match self.position(new) {
            Some(new_index) => {
                let total = moved.saturating_add(self.entries[new_index].quantity);
                let (keep, drop) = if old_index < new_index {
                    (old_index, new_index)
                } else {
                    (new_index, old_index)
                };
                self.entries.set(keep, DeckEntry::new(new.clone(), total));
                self.entries.remove(drop);
                Some(total)
            }
            None => {
                self.entries[old_index].card_id = new.clone();
                Some(moved)
            }
        }
    }

    pub(crate) fn clear_entries(&mut self) {
        self.entries.clear();
    }
}
