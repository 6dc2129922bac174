//! Deck persistence: guest decks in a client-local store, migrated into a
//! session on sign-in.
//!
//! ## Key Types
//!
//! - `LocalPersistenceBridge`: Persists guest decks, reconciles on sign-in
//! - `LocalStore`: Key/value store (`MemoryStore`, `FileStore`)
//! - `RemoteDeckSource`: Async port to the remote deck service
//! - `PersistedDeck`: Versioned JSON record

pub mod bridge;
pub mod record;
pub mod remote;
pub mod store;

pub use bridge::{LocalPersistenceBridge, Reconciliation};
pub use record::{decode, encode, PersistedCard, PersistedDeck, RECORD_VERSION};
pub use remote::{NoRemote, RemoteDeckSource, Session};
pub use store::{FileStore, LocalStore, MemoryStore};
