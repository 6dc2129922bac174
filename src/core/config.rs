//! Deck engine configuration.
//!
//! `DeckConfig` carries the knobs that are fixed by a game's rules or by
//! the hosting client: the deck size limit, the defaults a fresh deck
//! starts with, and where the in-progress deck is stored locally.
//!
//! Configuration can be built in code with the builder methods or parsed
//! from a TOML document:
//!
//! ```
//! use ccg_deckbuilder::core::DeckConfig;
//! use ccg_deckbuilder::cards::Format;
//!
//! let config = DeckConfig::from_toml_str(r#"
//!     max_cards = 40
//!     default_format = "RL"
//! "#).unwrap();
//!
//! assert_eq!(config.max_cards, 40);
//! assert_eq!(config.default_format, Format::Rl);
//! assert_eq!(config.storage_key, "deckbuilder.pending_deck");
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{Format, DEFAULT_VARIANT_MARKER};

/// Maximum number of cards in a deck.
pub const MAX_DECK_CARDS: u32 = 50;

/// Local store key the pending deck is written under.
pub const DEFAULT_STORAGE_KEY: &str = "deckbuilder.pending_deck";

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Maximum total quantity across all entries.
    pub max_cards: u32,

    /// Name of a fresh deck.
    pub default_name: String,

    /// Format of a fresh deck.
    pub default_format: Format,

    /// Key of the pending deck in the client-local store.
    pub storage_key: String,

    /// Identifier markers the catalog uses for alternate arts.
    pub variant_markers: Vec<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            max_cards: MAX_DECK_CARDS,
            default_name: String::new(),
            default_format: Format::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            variant_markers: vec![DEFAULT_VARIANT_MARKER.to_string()],
        }
    }
}

impl DeckConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cards == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_cards",
                reason: "must be at least 1".into(),
            });
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage_key",
                reason: "must not be empty".into(),
            });
        }
        if self.variant_markers.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: "variant_markers",
                reason: "markers must not be empty".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_max_cards(mut self, max: u32) -> Self {
        self.max_cards = max;
        self
    }

    #[must_use]
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    #[must_use]
    pub fn with_default_format(mut self, format: Format) -> Self {
        self.default_format = format;
        self
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
