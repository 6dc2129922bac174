//! Persisted deck record.
//!
//! The client-local store holds the in-progress deck as JSON:
//!
//! ```json
//! { "version": 1, "name": "Knights", "format": "RE",
//!   "cards": [{ "cardId": "BASE-001", "quantity": 3 }] }
//! ```
//!
//! Records written before the version tag existed are read as version 1.
//! Records from a newer writer are refused rather than guessed at, as are
//! entries with more copies than any ban list allows.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Format, MAX_QUOTA};
use crate::core::error::PersistenceError;
use crate::deck::Deck;

/// Version written by this build.
pub const RECORD_VERSION: u32 = 1;

fn legacy_version() -> u32 {
    1
}

/// One persisted deck line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCard {
    pub card_id: CardId,
    pub quantity: u32,
}

/// Wire shape of a locally stored deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDeck {
    #[serde(default = "legacy_version")]
    pub version: u32,
    pub name: String,
    pub format: Format,
    #[serde(default)]
    pub cards: Vec<PersistedCard>,
}

impl PersistedDeck {
    #[must_use]
    pub fn from_deck(deck: &Deck) -> Self {
        Self {
            version: RECORD_VERSION,
            name: deck.name.clone(),
            format: deck.format,
            cards: deck
                .entries()
                .map(|e| PersistedCard {
                    card_id: e.card_id.clone(),
                    quantity: e.quantity,
                })
                .collect(),
        }
    }

    /// Convert back to a deck. Zero quantities are dropped and repeated
    /// identifiers merged.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        Deck::from_entries(
            self.name,
            self.format,
            self.cards.into_iter().map(|c| (c.card_id, c.quantity)),
        )
    }
}

/// Serialize a deck to its stored JSON form.
pub fn encode(deck: &Deck) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&PersistedDeck::from_deck(deck))?)
}

/// Parse a stored deck.
pub fn decode(raw: &str) -> Result<Deck, PersistenceError> {
    let record: PersistedDeck = serde_json::from_str(raw)?;
    if record.version > RECORD_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: record.version,
            supported: RECORD_VERSION,
        });
    }
    let max = u32::from(MAX_QUOTA);
    if let Some(card) = record.cards.iter().find(|c| c.quantity > max) {
        return Err(PersistenceError::QuantityOutOfRange {
            card: card.card_id.clone(),
            quantity: card.quantity,
            max,
        });
    }
    Ok(record.into_deck())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Deck {
        Deck::from_entries(
            "Knights",
            Format::Rl,
            vec![(CardId::new("BASE-001"), 3), (CardId::new("GOLD-1"), 1)],
        )
    }

    #[test]
    fn test_round_trip() {
        let deck = sample();
        let decoded = decode(&encode(&deck).unwrap()).unwrap();
        assert!(deck.same_contents(&decoded));
    }

    #[test]
    fn test_wire_shape() {
        let value: serde_json::Value = serde_json::from_str(&encode(&sample()).unwrap()).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["name"], "Knights");
        assert_eq!(value["format"], "RL");
        assert_eq!(value["cards"][0]["cardId"], "BASE-001");
        assert_eq!(value["cards"][0]["quantity"], 3);
    }

    #[test]
    fn test_legacy_record_without_version() {
        let raw = r#"{"name":"Old","format":"LI","cards":[{"cardId":"A","quantity":2}]}"#;
        let deck = decode(raw).unwrap();

        assert_eq!(deck.name, "Old");
        assert_eq!(deck.format, Format::Li);
        assert_eq!(deck.quantity_of(&CardId::new("A")), 2);
    }

    #[test]
    fn test_newer_version_refused() {
        let raw = r#"{"version":2,"name":"New","format":"RE","cards":[]}"#;
        assert!(matches!(
            decode(raw),
            Err(PersistenceError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn test_decode_normalizes_entries() {
        let raw = r#"{"version":1,"name":"","format":"RE","cards":[
            {"cardId":"A","quantity":0},
            {"cardId":"B","quantity":1},
            {"cardId":"B","quantity":2}
        ]}"#;
        let deck = decode(raw).unwrap();

        assert_eq!(deck.len(), 1);
        assert_eq!(deck.quantity_of(&CardId::new("B")), 3);
    }

    #[test]
    fn test_oversized_quantity_refused() {
        let raw = r#"{"version":1,"name":"","format":"RE","cards":[
            {"cardId":"A","quantity":4294967295},
            {"cardId":"B","quantity":1}
        ]}"#;
        assert!(matches!(
            decode(raw),
            Err(PersistenceError::QuantityOutOfRange { quantity: u32::MAX, max: 3, .. })
        ));

        let at_cap = r#"{"version":1,"name":"","format":"RE","cards":[{"cardId":"A","quantity":3}]}"#;
        assert_eq!(decode(at_cap).unwrap().total_cards(), 3);
    }

    #[test]
    fn test_malformed_record() {
        assert!(matches!(decode("{not json"), Err(PersistenceError::Json(_))));
        assert!(matches!(
            decode(r#"{"name":"x","format":"XX"}"#),
            Err(PersistenceError::Json(_))
        ));
    }
}
