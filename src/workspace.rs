//! The deck workspace: what a client UI talks to.
//!
//! `DeckWorkspace` owns the deck editor and the persistence bridge, and
//! persists the deck after every change that actually altered it.

use crate::cards::{CardDirectory, CardId, Format};
use crate::core::config::DeckConfig;
use crate::deck::{AddOutcome, Deck, DeckEditor, RemoveOutcome, ReplaceOutcome};
use crate::persistence::{LocalPersistenceBridge, LocalStore, Reconciliation, RemoteDeckSource, Session};
use crate::rules::Violation;
use crate::stats::DeckStatistics;

/// Deck editor wired to local persistence.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::cards::{CardDefinition, CardId, CardRegistry, CardType};
/// use ccg_deckbuilder::core::DeckConfig;
/// use ccg_deckbuilder::persistence::MemoryStore;
/// use ccg_deckbuilder::DeckWorkspace;
///
/// let registry = CardRegistry::from_cards(vec![
///     CardDefinition::new("BASE-001", "Knight", CardType::Ally).with_cost(2),
/// ]).unwrap();
///
/// let mut workspace = DeckWorkspace::open(&registry, MemoryStore::new(), &DeckConfig::default());
/// workspace.add_card(&CardId::new("BASE-001"));
///
/// assert_eq!(workspace.current_stats().total_cost, 2);
/// assert!(workspace.pending_local_deck().is_some());
/// ```
#[derive(Debug)]
pub struct DeckWorkspace<D: CardDirectory, S: LocalStore> {
    editor: DeckEditor<D>,
    bridge: LocalPersistenceBridge<S>,
}

impl<D: CardDirectory, S: LocalStore> DeckWorkspace<D, S> {
    /// Open a guest workspace, resuming any deck left in the local store.
    #[must_use]
    pub fn open(directory: D, store: S, config: &DeckConfig) -> Self {
        let mut editor = DeckEditor::from_config(directory, config);
        let bridge = LocalPersistenceBridge::new(store, config);
        if let Some(deck) = bridge.pending() {
            editor.load(deck);
        }
        Self { editor, bridge }
    }

    #[must_use]
    pub fn editor(&self) -> &DeckEditor<D> {
        &self.editor
    }

    #[must_use]
    pub fn bridge(&self) -> &LocalPersistenceBridge<S> {
        &self.bridge
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.editor.deck()
    }

    /// The guest deck waiting in the local store, if any.
    #[must_use]
    pub fn pending_local_deck(&self) -> Option<Deck> {
        self.bridge.pending()
    }

    // === Queries ===

    #[must_use]
    pub fn current_stats(&self) -> &DeckStatistics {
        self.editor.current_stats()
    }

    #[must_use]
    pub fn current_variant<'a>(&'a self, base: &'a CardId) -> &'a CardId {
        self.editor.current_variant(base)
    }

    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        self.editor.violations()
    }

    // === Mutations ===

    pub fn add_card(&mut self, card_id: &CardId) -> AddOutcome {
        let outcome = self.editor.add_card(card_id);
        if outcome.is_added() {
            self.persist();
        }
        outcome
    }

    pub fn remove_card(&mut self, card_id: &CardId) -> RemoveOutcome {
        let outcome = self.editor.remove_card(card_id);
        if matches!(outcome, RemoveOutcome::Removed { .. }) {
            self.persist();
        }
        outcome
    }

    pub fn replace_card(&mut self, old: &CardId, new: &CardId) -> ReplaceOutcome {
        let outcome = self.editor.replace_card(old, new);
        if matches!(outcome, ReplaceOutcome::Replaced { .. }) {
            self.persist();
        }
        outcome
    }

    pub fn clear(&mut self) {
        self.editor.clear();
        self.persist();
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.editor.rename(name);
        self.persist();
    }

    pub fn set_format(&mut self, format: Format) {
        self.editor.set_format(format);
        self.persist();
    }

    // === Session ===

    /// Start a session and load whichever deck the bridge reconciles.
    pub async fn sign_in<R>(&mut self, session: Session, remote: &R) -> Reconciliation
    where
        R: RemoteDeckSource + ?Sized,
    {
        let outcome = self.bridge.sign_in(session, remote).await;
        match &outcome {
            Reconciliation::AdoptedLocal(deck) | Reconciliation::AdoptedRemote(deck) => {
                self.editor.load(deck.clone());
            }
            Reconciliation::Unchanged => {}
        }
        outcome
    }

    /// End the session; the deck stays open as a guest deck.
    pub fn sign_out(&mut self) -> Option<Session> {
        self.bridge.sign_out()
    }

    fn persist(&mut self) {
        self.bridge.persist(self.editor.deck());
    }
}
