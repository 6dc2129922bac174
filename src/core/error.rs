//! Error types.
//!
//! Expected deck-building rejections are not errors: they are reported as
//! `Rejection` values inside explicit outcomes. The error enums here cover
//! the catalog boundary, configuration and the persistence collaborators.

use thiserror::Error;

use crate::cards::{CardId, Format};

/// Why an add was refused. Never fatal; the deck is left unchanged.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),

    #[error("deck is full ({limit} cards)")]
    DeckFull { limit: u32 },

    #[error("card {card} is banned in {format}")]
    Banned { card: CardId, format: Format },

    #[error("card {card} already at its cap of {cap} in {format}")]
    QuotaExceeded { card: CardId, format: Format, cap: u8 },
}

/// Catalog construction errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("card {0} already registered")]
    DuplicateCard(CardId),

    #[error("variant {variant} references unknown base {base}")]
    UnknownBase { variant: CardId, base: CardId },

    #[error("variant {variant} references {base}, which is itself a variant")]
    NestedVariant { variant: CardId, base: CardId },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Client-local store failures.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("local store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed deck record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("deck record version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("deck record holds {quantity} copies of {card}, more than the {max} any format allows")]
    QuantityOutOfRange { card: CardId, quantity: u32, max: u32 },

    #[error("local store unavailable: {0}")]
    Unavailable(String),
}

/// Remote deck source failures.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("remote deck source unreachable: {0}")]
    Unreachable(String),

    #[error("remote deck source timed out")]
    Timeout,

    #[error("remote deck payload rejected: {0}")]
    InvalidPayload(String),
}
