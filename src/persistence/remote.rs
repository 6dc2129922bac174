//! Remote deck source port.
//!
//! Remote save/load belongs to an external service. The bridge only ever
//! performs one read through this port, when a session starts.

use async_trait::async_trait;

use crate::core::error::RemoteError;
use crate::deck::Deck;

/// An authenticated user session.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Source of a user's saved in-progress deck.
///
/// Implementations impose their own timeouts; the engine waits for
/// whatever the future resolves to.
#[async_trait]
pub trait RemoteDeckSource: Send + Sync {
    /// The deck the user was last editing, if any.
    async fn fetch_active_deck(&self, session: &Session) -> Result<Option<Deck>, RemoteError>;
}

/// Remote source for clients without one. Never has a deck.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRemote;

#[async_trait]
impl RemoteDeckSource for NoRemote {
    async fn fetch_active_deck(&self, _session: &Session) -> Result<Option<Deck>, RemoteError> {
        Ok(None)
    }
}
