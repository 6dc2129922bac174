//! Card directory: read-only catalog lookup.
//!
//! `CardDirectory` is the boundary the deck engine consumes. The catalog
//! service itself is external; `CardRegistry` is the in-memory
//! implementation used to hold a loaded catalog.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardIdentity};
use crate::core::config::DeckConfig;
use crate::core::error::DirectoryError;

/// Default marker separating a base identifier from its variant suffix.
pub const DEFAULT_VARIANT_MARKER: &str = "-ALT";

/// Read-only card catalog.
///
/// ## Implementation Notes
///
/// - `lookup`: `None` for identifiers the catalog does not know
/// - `all`: must be restartable, each call yields the full catalog
/// - `base_card_id`: total and idempotent,
///   `base_card_id(base_card_id(x)) == base_card_id(x)` for every `x`
pub trait CardDirectory {
    /// Find a card definition.
    fn lookup(&self, id: &CardId) -> Option<&CardDefinition>;

    /// Iterate over every card definition.
    fn all(&self) -> Box<dyn Iterator<Item = &CardDefinition> + '_>;

    /// Canonical identifier of the logical card `id` prints.
    fn base_card_id(&self, id: &CardId) -> CardId;
}

impl<T: CardDirectory + ?Sized> CardDirectory for &T {
    fn lookup(&self, id: &CardId) -> Option<&CardDefinition> {
        (**self).lookup(id)
    }

    fn all(&self) -> Box<dyn Iterator<Item = &CardDefinition> + '_> {
        (**self).all()
    }

    fn base_card_id(&self, id: &CardId) -> CardId {
        (**self).base_card_id(id)
    }
}

impl<T: CardDirectory + ?Sized> CardDirectory for Arc<T> {
    fn lookup(&self, id: &CardId) -> Option<&CardDefinition> {
        (**self).lookup(id)
    }

    fn all(&self) -> Box<dyn Iterator<Item = &CardDefinition> + '_> {
        (**self).all()
    }

    fn base_card_id(&self, id: &CardId) -> CardId {
        (**self).base_card_id(id)
    }
}

/// In-memory card catalog.
///
/// Preserves registration order for iteration.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::cards::{CardDefinition, CardDirectory, CardId, CardRegistry, CardType};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new("BASE-001", "Knight", CardType::Ally)).unwrap();
/// registry
///     .register(CardDefinition::new("BASE-001-ALT", "Knight", CardType::Ally).variant_of("BASE-001"))
///     .unwrap();
///
/// let alt = CardId::new("BASE-001-ALT");
/// assert_eq!(registry.base_card_id(&alt), CardId::new("BASE-001"));
/// ```
#[derive(Clone, Debug)]
pub struct CardRegistry {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
    variant_markers: Vec<String>,
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            index: FxHashMap::default(),
            variant_markers: vec![DEFAULT_VARIANT_MARKER.to_string()],
        }
    }
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identifier markers used to derive base ids of cards the
    /// registry does not know.
    #[must_use]
    pub fn with_variant_markers(mut self, markers: Vec<String>) -> Self {
        self.variant_markers = markers.into_iter().filter(|m| !m.is_empty()).collect();
        self
    }

    /// Empty registry using the configured variant markers.
    #[must_use]
    pub fn from_config(config: &DeckConfig) -> Self {
        Self::new().with_variant_markers(config.variant_markers.clone())
    }

    /// Build a registry from a catalog dump.
    ///
    /// Canonical cards are registered before variants, so the dump may list
    /// them in any order.
    pub fn from_cards(
        cards: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, DirectoryError> {
        let mut registry = Self::new();
        registry.register_all(cards)?;
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Variants must reference an already-registered canonical card.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), DirectoryError> {
        if self.index.contains_key(&card.id) {
            return Err(DirectoryError::DuplicateCard(card.id));
        }

        if let CardIdentity::Variant { of } = &card.identity {
            match self.lookup(of) {
                None => {
                    return Err(DirectoryError::UnknownBase {
                        variant: card.id,
                        base: of.clone(),
                    })
                }
                Some(base) if base.is_cosmetic() => {
                    return Err(DirectoryError::NestedVariant {
                        variant: card.id,
                        base: of.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Register many cards, canonical ones first.
    pub fn register_all(
        &mut self,
        cards: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<(), DirectoryError> {
        let (variants, canonical): (Vec<_>, Vec<_>) =
            cards.into_iter().partition(CardDefinition::is_cosmetic);

        for card in canonical.into_iter().chain(variants) {
            self.register(card)?;
        }
        Ok(())
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Alternate arts registered for a canonical card.
    pub fn variants_of<'a>(&'a self, base: &'a CardId) -> impl Iterator<Item = &'a CardDefinition> {
        self.cards
            .iter()
            .filter(move |c| matches!(&c.identity, CardIdentity::Variant { of } if of == base))
    }

    /// Strip the first variant marker from an identifier.
    fn strip_marker<'a>(&self, id: &'a str) -> &'a str {
        self.variant_markers
            .iter()
            .filter_map(|marker| id.find(marker.as_str()))
            .filter(|&pos| pos > 0)
            .min()
            .map_or(id, |pos| &id[..pos])
    }
}

impl CardDirectory for CardRegistry {
    fn lookup(&self, id: &CardId) -> Option<&CardDefinition> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    fn all(&self) -> Box<dyn Iterator<Item = &CardDefinition> + '_> {
        Box::new(self.cards.iter())
    }

    fn base_card_id(&self, id: &CardId) -> CardId {
        if let Some(card) = self.lookup(id) {
            return card.base_id().clone();
        }

        // Unknown to the catalog: fall back to the identifier convention.
        let stripped = CardId::new(self.strip_marker(id.as_str()));
        match self.lookup(&stripped) {
            Some(card) => card.base_id().clone(),
            None => stripped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    fn knight() -> CardDefinition {
        CardDefinition::new("BASE-001", "Knight", CardType::Ally)
    }

    fn knight_alt() -> CardDefinition {
        CardDefinition::new("BASE-001-ALT", "Knight", CardType::Ally).variant_of("BASE-001")
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = CardRegistry::new();
        registry.register(knight()).unwrap();

        let found = registry.lookup(&CardId::new("BASE-001"));
        assert_eq!(found.map(|c| c.name.as_str()), Some("Knight"));
        assert!(registry.lookup(&CardId::new("NOPE")).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = CardRegistry::new();
        registry.register(knight()).unwrap();

        let err = registry.register(knight()).unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateCard(CardId::new("BASE-001")));
    }

    #[test]
    fn test_variant_requires_known_canonical_base() {
        let mut registry = CardRegistry::new();
        assert!(matches!(
            registry.register(knight_alt()),
            Err(DirectoryError::UnknownBase { .. })
        ));

        registry.register(knight()).unwrap();
        registry.register(knight_alt()).unwrap();

        let nested = CardDefinition::new("BASE-001-ALT2", "Knight", CardType::Ally)
            .variant_of("BASE-001-ALT");
        assert!(matches!(
            registry.register(nested),
            Err(DirectoryError::NestedVariant { .. })
        ));
    }

    #[test]
    fn test_from_cards_orders_canonical_first() {
        let registry = CardRegistry::from_cards(vec![knight_alt(), knight()]).unwrap();
        assert_eq!(registry.len(), 2);

        let ids: Vec<_> = registry.all().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["BASE-001", "BASE-001-ALT"]);
    }

    #[test]
    fn test_base_card_id_known_cards() {
        let registry = CardRegistry::from_cards(vec![knight(), knight_alt()]).unwrap();

        assert_eq!(registry.base_card_id(&CardId::new("BASE-001-ALT")), CardId::new("BASE-001"));
        assert_eq!(registry.base_card_id(&CardId::new("BASE-001")), CardId::new("BASE-001"));
    }

    #[test]
    fn test_base_card_id_fallback_is_idempotent() {
        let registry = CardRegistry::from_cards(vec![knight(), knight_alt()]).unwrap();

        for raw in ["PROMO-7-ALT", "PROMO-7-ALT-ALT", "PROMO-7", "BASE-001-ALT-GOLD", "-ALT"] {
            let id = CardId::new(raw);
            let once = registry.base_card_id(&id);
            let twice = registry.base_card_id(&once);
            assert_eq!(once, twice, "not idempotent for {raw}");
        }

        assert_eq!(registry.base_card_id(&CardId::new("PROMO-7-ALT")), CardId::new("PROMO-7"));
        assert_eq!(
            registry.base_card_id(&CardId::new("BASE-001-ALT-GOLD")),
            CardId::new("BASE-001")
        );
    }

    #[test]
    fn test_custom_variant_markers() {
        let registry = CardRegistry::new().with_variant_markers(vec!["_FOIL".into(), "-ALT".into()]);
        assert_eq!(registry.base_card_id(&CardId::new("X-9_FOIL")), CardId::new("X-9"));
        assert_eq!(registry.base_card_id(&CardId::new("X-9-ALT_FOIL")), CardId::new("X-9"));
    }

    #[test]
    fn test_from_config_markers() {
        let config = DeckConfig::from_toml_str("variant_markers = [\"-PROMO\"]").unwrap();
        let registry = CardRegistry::from_config(&config);
        assert_eq!(registry.base_card_id(&CardId::new("K-1-PROMO")), CardId::new("K-1"));
        assert_eq!(registry.base_card_id(&CardId::new("K-1-ALT")), CardId::new("K-1-ALT"));
    }

    #[test]
    fn test_variants_of() {
        let registry = CardRegistry::from_cards(vec![knight(), knight_alt()]).unwrap();
        let base = CardId::new("BASE-001");
        let variants: Vec<_> = registry.variants_of(&base).map(|c| c.id.as_str()).collect();
        assert_eq!(variants, vec!["BASE-001-ALT"]);
    }

    #[test]
    fn test_directory_through_arc() {
        let registry = Arc::new(CardRegistry::from_cards(vec![knight()]).unwrap());
        assert!(registry.lookup(&CardId::new("BASE-001")).is_some());
        assert_eq!(registry.all().count(), 1);
    }
}
