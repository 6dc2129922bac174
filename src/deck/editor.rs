//! Deck composition: the only way a deck's cards change.
//!
//! `DeckEditor` owns the deck being edited together with its substitution
//! map and a lazily computed statistics cache. Every operation is
//! synchronous and either applies completely or leaves the deck untouched,
//! returning an explicit outcome instead of failing.
//!
//! ## Logical cards
//!
//! A canonical card and its alternate arts are one logical card. Adds and
//! removes are routed to the entry that already represents the logical
//! card (or to the variant chosen for it), so a deck never holds the same
//! card under two printings through the editor.

use std::cell::OnceCell;

use tracing::{debug, info};

use super::model::Deck;
use super::substitution::SubstitutionMap;
use crate::cards::{CardDirectory, CardId, Format};
use crate::core::config::DeckConfig;
use crate::core::error::Rejection;
use crate::rules::{DeckRules, Violation};
use crate::stats::{compute_stats, DeckStatistics};

/// Result of `DeckEditor::add_card`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// A copy was added to `card`'s entry, which now holds `quantity`.
    Added { card: CardId, quantity: u32 },
    /// The deck is unchanged.
    Rejected(Rejection),
}

impl AddOutcome {
    #[must_use]
    pub const fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

/// Result of `DeckEditor::remove_card`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// One copy removed; the entry is gone when `remaining` is 0.
    Removed { card: CardId, remaining: u32 },
    /// The card was not in the deck.
    NotInDeck,
}

/// Result of `DeckEditor::replace_card`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The entry for `card` now holds `quantity`.
    Replaced { card: CardId, quantity: u32 },
    /// The card to replace was not in the deck.
    NotInDeck,
    /// The replacement is not in the catalog.
    Rejected(Rejection),
}

/// Owning context for the deck being edited.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::cards::{CardDefinition, CardId, CardRegistry, CardType, Quotas};
/// use ccg_deckbuilder::deck::DeckEditor;
///
/// let registry = CardRegistry::from_cards(vec![
///     CardDefinition::new("BASE-001", "Knight", CardType::Ally).with_quotas(Quotas::uniform(2)),
/// ]).unwrap();
///
/// let mut editor = DeckEditor::new(&registry);
/// let knight = CardId::new("BASE-001");
///
/// assert!(editor.add_card(&knight).is_added());
/// assert!(editor.add_card(&knight).is_added());
/// assert!(!editor.add_card(&knight).is_added());
/// assert_eq!(editor.deck().quantity_of(&knight), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DeckEditor<D: CardDirectory> {
    directory: D,
    rules: DeckRules,
    deck: Deck,
    substitutions: SubstitutionMap,
    stats: OnceCell<DeckStatistics>,
}

impl<D: CardDirectory> DeckEditor<D> {
    /// Create an editor for an empty deck with the default configuration.
    #[must_use]
    pub fn new(directory: D) -> Self {
        Self::from_config(directory, &DeckConfig::default())
    }

    /// Create an editor for an empty deck named and formatted per `config`.
    #[must_use]
    pub fn from_config(directory: D, config: &DeckConfig) -> Self {
        Self {
            directory,
            rules: DeckRules::from_config(config),
            deck: Deck::new(config.default_name.clone(), config.default_format),
            substitutions: SubstitutionMap::new(),
            stats: OnceCell::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn directory(&self) -> &D {
        &self.directory
    }

    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    #[must_use]
    pub fn substitutions(&self) -> &SubstitutionMap {
        &self.substitutions
    }

    /// Take the deck out of the editor.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    #[must_use]
    pub fn quantity_of(&self, card_id: &CardId) -> u32 {
        self.deck.quantity_of(card_id)
    }

    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.deck.total_cards()
    }

    /// Printing used for a canonical card in this deck.
    #[must_use]
    pub fn current_variant<'a>(&'a self, base: &'a CardId) -> &'a CardId {
        self.substitutions.current_variant(base)
    }

    /// Statistics of the current deck, recomputed after each mutation.
    #[must_use]
    pub fn current_stats(&self) -> &DeckStatistics {
        self.stats
            .get_or_init(|| compute_stats(&self.deck, &self.directory))
    }

    /// Rules the current deck breaks in its format.
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        self.rules.violations(&self.deck, &self.directory)
    }

    // === Mutations ===

    /// Add one copy of a card.
    ///
    /// Rejected when the card is unknown, the deck is full, or the card is
    /// at its cap for the deck's format.
    pub fn add_card(&mut self, card_id: &CardId) -> AddOutcome {
        if self.directory.lookup(card_id).is_none() {
            return self.reject(card_id, Rejection::UnknownCard(card_id.clone()));
        }

        let target = self.resolve(card_id);
        let card = match self.directory.lookup(&target) {
            Some(card) => card,
            None => return self.reject(card_id, Rejection::UnknownCard(target)),
        };

        if let Err(rejection) = self.rules.can_add(&self.deck, card, self.deck.format) {
            return self.reject(card_id, rejection);
        }

        let quantity = self.deck.add_quantity(&card.id, 1);
        if card.is_cosmetic() {
            let base = self.directory.base_card_id(&card.id);
            self.substitutions.set(base, card.id.clone());
        }
        let added = card.id.clone();
        self.invalidate();

        debug!(card = %added, quantity, "card added");
        AddOutcome::Added {
            card: added,
            quantity,
        }
    }

    /// Remove one copy of a card.
    pub fn remove_card(&mut self, card_id: &CardId) -> RemoveOutcome {
        let target = self.resolve(card_id);
        match self.deck.remove_one(&target) {
            Some(remaining) => {
                self.invalidate();
                debug!(card = %target, remaining, "card removed");
                RemoveOutcome::Removed {
                    card: target,
                    remaining,
                }
            }
            None => RemoveOutcome::NotInDeck,
        }
    }

    /// Swap every copy of `old` for `new`, typically an alternate art.
    ///
    /// Quotas are not re-checked: a variant shares its base card's rules,
    /// so the swap changes the printing, not the card count. If `new`
    /// already has an entry the two merge at the earlier position.
    pub fn replace_card(&mut self, old: &CardId, new: &CardId) -> ReplaceOutcome {
        if !self.deck.contains(old) {
            return ReplaceOutcome::NotInDeck;
        }
        if self.directory.lookup(new).is_none() {
            debug!(old = %old, new = %new, "replacement not in catalog");
            return ReplaceOutcome::Rejected(Rejection::UnknownCard(new.clone()));
        }

        let Some(quantity) = self.deck.move_quantity(old, new) else {
            return ReplaceOutcome::NotInDeck;
        };
        let base = self.directory.base_card_id(old);
        self.substitutions.set(base, new.clone());
        self.invalidate();

        debug!(old = %old, new = %new, quantity, "card replaced");
        ReplaceOutcome::Replaced {
            card: new.clone(),
            quantity,
        }
    }

    /// Remove every card and forget chosen variants.
    ///
    /// Name and format are left alone.
    pub fn clear(&mut self) {
        self.deck.clear_entries();
        self.substitutions.clear();
        self.invalidate();
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.deck.name = name.into();
    }

    /// Switch format. Cards over their new cap stay; see `violations`.
    pub fn set_format(&mut self, format: Format) {
        self.deck.format = format;
    }

    /// Replace the edited deck, rebuilding the substitution map.
    ///
    /// The deck is taken as-is; rule breaches are logged, not repaired.
    pub fn load(&mut self, deck: Deck) {
        self.substitutions = SubstitutionMap::rebuild(&deck, &self.directory);
        self.deck = deck;
        self.invalidate();

        let violations = self.violations();
        if violations.is_empty() {
            debug!(name = %self.deck.name, cards = self.deck.total_cards(), "deck loaded");
        } else {
            info!(
                name = %self.deck.name,
                violations = violations.len(),
                "deck loaded with rule violations"
            );
        }
    }

    // === Internals ===

    /// Entry id representing the same logical card as `requested`.
    ///
    /// A recorded substitution is only followed when it prints the same
    /// logical card; a replacement by an unrelated card leaves the original
    /// addressable by its own id.
    fn resolve(&self, requested: &CardId) -> CardId {
        if self.deck.contains(requested) {
            return requested.clone();
        }
        let base = self.directory.base_card_id(requested);
        if let Some(variant) = self.substitutions.get(&base) {
            if self.directory.base_card_id(variant) == base {
                return variant.clone();
            }
        }
        if self.deck.contains(&base) {
            return base;
        }
        requested.clone()
    }

    fn reject(&self, card_id: &CardId, rejection: Rejection) -> AddOutcome {
        debug!(card = %card_id, reason = %rejection, "add rejected");
        AddOutcome::Rejected(rejection)
    }

    fn invalidate(&mut self) {
        self.stats.take();
    }
}
