//! # ccg-deckbuilder
//!
//! Deck construction engine for a collectible card game with three
//! formats (RE, RL, LI), per-format ban lists, unique cards and
//! alternate-art printings.
//!
//! ## Design Principles
//!
//! 1. **Explicit outcomes**: Illegal adds are expected, not exceptional.
//!    Every mutation returns an outcome (`Added` / `Rejected(reason)`) and
//!    leaves the deck untouched when it refuses.
//!
//! 2. **Owned state**: The deck being edited lives in a `DeckEditor` (or a
//!    `DeckWorkspace` adding persistence). No global state; several decks
//!    can be edited side by side.
//!
//! 3. **Catalog at the boundary**: Card data comes through the
//!    `CardDirectory` trait. Variants are a tagged `CardIdentity`; the
//!    identifier string convention is only a fallback of `CardRegistry`.
//!
//! ## Modules
//!
//! - `cards`: Card definitions, formats/quotas, the card directory
//! - `rules`: Add legality and whole-deck audits
//! - `deck`: Deck data, substitution map, the editor
//! - `stats`: Deck statistics
//! - `persistence`: Guest-deck storage and sign-in reconciliation
//! - `workspace`: Editor + persistence, the UI-facing surface
//! - `core`: Configuration and error types
//! - `logging`: tracing subscriber setup

pub mod core;
pub mod cards;
pub mod rules;
pub mod deck;
pub mod stats;
pub mod persistence;
pub mod workspace;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    DeckConfig, MAX_DECK_CARDS,
    ConfigError, DirectoryError, PersistenceError, Rejection, RemoteError,
};

pub use crate::cards::{
    CardId, CardType, CardIdentity, CardDefinition,
    Format, Quotas, CardDirectory, CardRegistry,
};

pub use crate::rules::{DeckRules, Violation};

pub use crate::deck::{
    Deck, DeckEntry, DeckEditor, SubstitutionMap,
    AddOutcome, RemoveOutcome, ReplaceOutcome,
};

pub use crate::stats::{compute_stats, DeckStatistics};

pub use crate::persistence::{
    LocalPersistenceBridge, Reconciliation,
    LocalStore, MemoryStore, FileStore,
    RemoteDeckSource, NoRemote, Session,
};

pub use crate::workspace::DeckWorkspace;
pub use crate::logging::LoggingConfig;
