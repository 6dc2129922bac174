//! Deck statistics.
//!
//! `compute_stats` is pure and total: identifiers missing from the
//! directory (a catalog momentarily stale relative to a stored deck) are
//! skipped, never an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{CardDirectory, CardType};
use crate::deck::Deck;

/// Aggregate figures of a deck. All counts are quantity-weighted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckStatistics {
    /// Total copies across all entries.
    pub total_cards: u32,

    /// Sum of cost over every copy; cards without a cost count as 0.
    pub total_cost: u32,

    /// `total_cost / total_cards`, 0 for an empty deck.
    pub average_cost: f64,

    pub counts_by_type: BTreeMap<CardType, u32>,

    pub counts_by_edition: BTreeMap<String, u32>,

    /// Ally and Weapon copies per race.
    pub counts_by_race: BTreeMap<String, u32>,

    /// Copies per cost value, costed cards only.
    pub cost_curve: BTreeMap<u32, u32>,

    /// Distinct entries.
    pub unique_cards: usize,

    /// Deck holds a starter-eligible Gold card.
    pub has_starter_gold: bool,
}

impl DeckStatistics {
    /// Copies of a card type.
    #[must_use]
    pub fn count_of_type(&self, card_type: CardType) -> u32 {
        self.counts_by_type.get(&card_type).copied().unwrap_or(0)
    }
}

/// Derive statistics from a deck.
pub fn compute_stats<D: CardDirectory + ?Sized>(deck: &Deck, directory: &D) -> DeckStatistics {
    let total_cards = deck.total_cards();
    if total_cards == 0 {
        return DeckStatistics::default();
    }

    let mut stats = DeckStatistics {
        total_cards,
        unique_cards: deck.len(),
        ..DeckStatistics::default()
    };

    for entry in deck.entries() {
        let Some(card) = directory.lookup(&entry.card_id) else {
            continue;
        };
        let quantity = entry.quantity;

        stats.total_cost = stats
            .total_cost
            .saturating_add(quantity.saturating_mul(card.cost.unwrap_or(0)));
        bump(stats.counts_by_type.entry(card.card_type).or_default(), quantity);
        bump(stats.counts_by_edition.entry(card.edition.clone()).or_default(), quantity);

        if let Some(race) = &card.race {
            bump(stats.counts_by_race.entry(race.clone()).or_default(), quantity);
        }
        if let Some(cost) = card.cost {
            bump(stats.cost_curve.entry(cost).or_default(), quantity);
        }
        if card.is_starter_gold() {
            stats.has_starter_gold = true;
        }
    }

    stats.average_cost = f64::from(stats.total_cost) / f64::from(total_cards);
    stats
}

fn bump(count: &mut u32, quantity: u32) {
    *count = count.saturating_add(quantity);
}
