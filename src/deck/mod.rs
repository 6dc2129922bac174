//! Deck composition.
//!
//! ## Key Types
//!
//! - `Deck`: Name, format and ordered card entries
//! - `DeckEntry`: One card identifier with its quantity
//! - `SubstitutionMap`: Active alternate art per canonical card
//! - `DeckEditor`: Applies add/remove/replace under the deck rules

pub mod editor;
pub mod model;
pub mod substitution;

pub use editor::{AddOutcome, DeckEditor, RemoveOutcome, ReplaceOutcome};
pub use model::{Deck, DeckEntry};
pub use substitution::SubstitutionMap;
