//! Core engine types: configuration and errors.
//!
//! Games and clients configure the engine via `DeckConfig` rather than
//! modifying the rules code.

pub mod config;
pub mod error;

pub use config::{DeckConfig, DEFAULT_STORAGE_KEY, MAX_DECK_CARDS};
pub use error::{ConfigError, DirectoryError, PersistenceError, Rejection, RemoteError};
