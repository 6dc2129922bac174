//! Alternate-art substitution.
//!
//! A deck shows each logical card under one printing. The
//! `SubstitutionMap` records, per canonical card, the variant currently
//! used for it. It is derived state: `rebuild` reconstructs it from a deck
//! by scanning its cosmetic entries, and `DeckEditor` keeps it current as
//! cards are replaced.

use rustc_hash::FxHashMap;

use crate::cards::{CardDirectory, CardId};
use crate::deck::Deck;

/// Canonical card id -> active variant id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    active: FxHashMap<CardId, CardId>,
}

impl SubstitutionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map for a loaded deck.
    ///
    /// Entries the directory does not know are skipped.
    #[must_use]
    pub fn rebuild<D: CardDirectory + ?Sized>(deck: &Deck, directory: &D) -> Self {
        let mut map = Self::new();
        for entry in deck.entries() {
            let cosmetic = directory
                .lookup(&entry.card_id)
                .is_some_and(|card| card.is_cosmetic());
            if cosmetic {
                map.set(directory.base_card_id(&entry.card_id), entry.card_id.clone());
            }
        }
        map
    }

    /// Printing used for `base`; `base` itself when none was chosen.
    #[must_use]
    pub fn current_variant<'a>(&'a self, base: &'a CardId) -> &'a CardId {
        self.active.get(base).unwrap_or(base)
    }

    /// The chosen variant for `base`, if any.
    #[must_use]
    pub fn get(&self, base: &CardId) -> Option<&CardId> {
        self.active.get(base)
    }

    /// Choose `variant` as the printing of `base`.
    ///
    /// Choosing the base itself clears the entry.
    pub fn set(&mut self, base: CardId, variant: CardId) {
        if base == variant {
            self.active.remove(&base);
        } else {
            self.active.insert(base, variant);
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// `(base, variant)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&CardId, &CardId)> {
        self.active.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardRegistry, CardType, Format};

    fn registry() -> CardRegistry {
        CardRegistry::from_cards(vec![
            CardDefinition::new("BASE-001", "Knight", CardType::Ally),
            CardDefinition::new("BASE-001-ALT", "Knight", CardType::Ally).variant_of("BASE-001"),
            CardDefinition::new("BASE-002", "Sword", CardType::Weapon),
        ])
        .unwrap()
    }

    #[test]
    fn test_identity_when_unset() {
        let map = SubstitutionMap::new();
        let base = CardId::new("BASE-001");
        assert_eq!(map.current_variant(&base), &base);
    }

    #[test]
    fn test_rebuild_from_cosmetic_entries() {
        let deck = Deck::from_entries(
            "",
            Format::Re,
            vec![
                (CardId::new("BASE-001-ALT"), 2),
                (CardId::new("BASE-002"), 1),
                (CardId::new("UNKNOWN-ALT"), 1),
            ],
        );

        let map = SubstitutionMap::rebuild(&deck, &registry());

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.current_variant(&CardId::new("BASE-001")),
            &CardId::new("BASE-001-ALT")
        );
        let sword = CardId::new("BASE-002");
        assert_eq!(map.current_variant(&sword), &sword);
    }

    #[test]
    fn test_set_base_clears_choice() {
        let mut map = SubstitutionMap::new();
        map.set(CardId::new("A"), CardId::new("A-ALT"));
        assert_eq!(map.get(&CardId::new("A")), Some(&CardId::new("A-ALT")));

        map.set(CardId::new("A"), CardId::new("A"));
        assert!(map.is_empty());
    }
}
