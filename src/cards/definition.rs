//! Card definitions - static catalog data.
//!
//! `CardDefinition` holds the immutable properties of a catalog card:
//! its type, cost, edition, uniqueness and ban-list quotas. Definitions are
//! loaded once per session and never mutated; decks only reference them by
//! `CardId`.

use serde::{Deserialize, Serialize};

use super::format::{Format, Quotas};

/// Catalog identifier of a card (e.g. `"BASE-001"`).
///
/// Alternate-art variants have their own identifier (e.g.
/// `"BASE-001-ALT"`) and point back to their canonical card through
/// `CardIdentity`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Card types of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardType {
    Ally,
    Weapon,
    Talisman,
    Totem,
    Gold,
}

impl CardType {
    /// Ally and Weapon cards carry cost, power and race.
    #[must_use]
    pub const fn has_stats(self) -> bool {
        matches!(self, CardType::Ally | CardType::Weapon)
    }
}

/// Canonical card or alternate-art variant of one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardIdentity {
    /// The base printing.
    #[default]
    Canonical,
    /// A rules-identical alternate art of `of`.
    Variant { of: CardId },
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::cards::{CardDefinition, CardType, Format, Quotas};
///
/// let knight = CardDefinition::new("BASE-001", "Knight", CardType::Ally)
///     .with_cost(2)
///     .with_power(3)
///     .with_race("Hero")
///     .with_quotas(Quotas::new(2, 3, 3));
///
/// assert_eq!(knight.quota(Format::Re), 2);
/// assert_eq!(knight.cost, Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique catalog identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    pub card_type: CardType,

    /// Gold cost. Only Ally and Weapon cards have one.
    pub cost: Option<u32>,

    /// Only Ally and Weapon cards have power.
    pub power: Option<u32>,

    /// Affinity/race. Only Ally and Weapon cards have one.
    pub race: Option<String>,

    /// Edition (set) the card was printed in.
    pub edition: String,

    /// Unique cards are capped at one copy regardless of quota.
    pub unique: bool,

    /// Ban-list values per format.
    pub quotas: Quotas,

    /// Canonical printing or alternate art.
    pub identity: CardIdentity,

    /// Gold card eligible as the deck's starting resource.
    pub starter: bool,
}

impl CardDefinition {
    /// Create a new card definition with default quotas (3 everywhere).
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type,
            cost: None,
            power: None,
            race: None,
            edition: String::new(),
            unique: false,
            quotas: Quotas::default(),
            identity: CardIdentity::Canonical,
            starter: false,
        }
    }

    /// Set the cost. Ignored for types without stats.
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        if self.card_type.has_stats() {
            self.cost = Some(cost);
        }
        self
    }

    /// Set the power. Ignored for types without stats.
    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        if self.card_type.has_stats() {
            self.power = Some(power);
        }
        self
    }

    /// Set the race. Ignored for types without stats.
    #[must_use]
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        if self.card_type.has_stats() {
            self.race = Some(race.into());
        }
        self
    }

    #[must_use]
    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = edition.into();
        self
    }

    #[must_use]
    pub fn with_quotas(mut self, quotas: Quotas) -> Self {
        self.quotas = quotas;
        self
    }

    /// Mark the card as unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark a Gold card as starter-eligible.
    #[must_use]
    pub fn starter(mut self) -> Self {
        self.starter = true;
        self
    }

    /// Make this card an alternate art of `base`.
    #[must_use]
    pub fn variant_of(mut self, base: impl Into<CardId>) -> Self {
        self.identity = CardIdentity::Variant { of: base.into() };
        self
    }

    /// Is this an alternate-art variant?
    #[must_use]
    pub fn is_cosmetic(&self) -> bool {
        matches!(self.identity, CardIdentity::Variant { .. })
    }

    /// The canonical card this definition prints, itself if canonical.
    #[must_use]
    pub fn base_id(&self) -> &CardId {
        match &self.identity {
            CardIdentity::Canonical => &self.id,
            CardIdentity::Variant { of } => of,
        }
    }

    /// Ban-list value for a format.
    #[must_use]
    pub fn quota(&self, format: Format) -> u8 {
        self.quotas.get(format)
    }

    /// Maximum legal copies in a format, accounting for uniqueness.
    #[must_use]
    pub fn effective_cap(&self, format: Format) -> u8 {
        let quota = self.quota(format);
        if self.unique {
            quota.min(1)
        } else {
            quota
        }
    }

    /// Is this a Gold card usable as the starting resource?
    #[must_use]
    pub fn is_starter_gold(&self) -> bool {
        self.card_type == CardType::Gold && self.starter
    }
}
