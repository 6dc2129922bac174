//! Local persistence bridge.
//!
//! While no user is signed in, the deck is written to the client-local
//! store after every change so a guest does not lose work. When a session
//! starts the pending local deck is migrated into it once: a non-empty
//! pending deck is adopted and the local copy deleted. Without one, the
//! user's remote deck is read instead, falling back to the current deck
//! if the remote read fails.
//!
//! Store failures never reach the caller: they are logged and the engine
//! carries on in memory.

use tracing::{debug, info, warn};

use super::record;
use super::remote::{RemoteDeckSource, Session};
use super::store::LocalStore;
use crate::core::config::DeckConfig;
use crate::core::error::PersistenceError;
use crate::deck::Deck;

/// What a sign-in did to the active deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reconciliation {
    /// The guest deck from the local store became the active deck.
    AdoptedLocal(Deck),
    /// The user's remote deck became the active deck.
    AdoptedRemote(Deck),
    /// The active deck stays as it is.
    Unchanged,
}

/// Writes guest decks locally and migrates them on sign-in.
#[derive(Debug)]
pub struct LocalPersistenceBridge<S: LocalStore> {
    store: S,
    key: String,
    default_name: String,
    session: Option<Session>,
}

impl<S: LocalStore> LocalPersistenceBridge<S> {
    #[must_use]
    pub fn new(store: S, config: &DeckConfig) -> Self {
        Self {
            store,
            key: config.storage_key.clone(),
            default_name: config.default_name.clone(),
            session: None,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Record a changed deck.
    ///
    /// Only guests are persisted locally. A blank deck (no cards, default
    /// name) is not written; any older pending deck is deleted instead.
    pub fn persist(&mut self, deck: &Deck) {
        if self.session.is_some() {
            return;
        }

        let result = if deck.is_empty() && deck.name == self.default_name {
            self.store.remove(&self.key)
        } else {
            record::encode(deck).and_then(|raw| self.store.write(&self.key, &raw))
        };

        match result {
            Ok(()) => debug!(key = %self.key, cards = deck.total_cards(), "guest deck persisted"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to persist guest deck"),
        }
    }

    /// Read the pending guest deck without consuming it.
    #[must_use]
    pub fn pending(&self) -> Option<Deck> {
        match self.read_pending() {
            Ok(deck) => deck,
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring unreadable guest deck");
                None
            }
        }
    }

    /// Start a session, migrating the guest deck into it.
    ///
    /// Only the transition from no session to a session reconciles; signing
    /// in again while signed in just swaps the session.
    pub async fn sign_in<R>(&mut self, session: Session, remote: &R) -> Reconciliation
    where
        R: RemoteDeckSource + ?Sized,
    {
        if self.session.replace(session.clone()).is_some() {
            debug!(user = %session.user_id, "session already active, nothing to reconcile");
            return Reconciliation::Unchanged;
        }

        if let Some(deck) = self.pending().filter(|d| !d.is_empty()) {
            if let Err(e) = self.store.remove(&self.key) {
                warn!(key = %self.key, error = %e, "failed to clear migrated guest deck");
            }
            info!(
                user = %session.user_id,
                cards = deck.total_cards(),
                "adopted guest deck into session"
            );
            return Reconciliation::AdoptedLocal(deck);
        }

        match remote.fetch_active_deck(&session).await {
            Ok(Some(deck)) => {
                info!(user = %session.user_id, cards = deck.total_cards(), "loaded remote deck");
                Reconciliation::AdoptedRemote(deck)
            }
            Ok(None) => {
                debug!(user = %session.user_id, "no remote deck");
                Reconciliation::Unchanged
            }
            Err(e) => {
                warn!(user = %session.user_id, error = %e, "remote deck unavailable, keeping local deck");
                Reconciliation::Unchanged
            }
        }
    }

    /// End the session. Later changes are persisted locally again.
    pub fn sign_out(&mut self) -> Option<Session> {
        self.session.take()
    }

    fn read_pending(&self) -> Result<Option<Deck>, PersistenceError> {
        self.store
            .read(&self.key)?
            .map(|raw| record::decode(&raw))
            .transpose()
    }
}
