//! Card catalog: definitions, formats and the directory boundary.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog identifier of a card or alternate art
//! - `CardDefinition`: Immutable card data (type, cost, quotas, identity)
//! - `CardIdentity`: Canonical card or variant of one
//! - `Format` / `Quotas`: Deck formats and per-format ban-list values
//! - `CardDirectory`: Read-only catalog consumed by the deck engine
//! - `CardRegistry`: In-memory `CardDirectory`

pub mod definition;
pub mod format;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardIdentity, CardType};
pub use format::{Format, Quotas, MAX_QUOTA};
pub use registry::{CardDirectory, CardRegistry, DEFAULT_VARIANT_MARKER};
