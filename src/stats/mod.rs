//! Deck statistics: totals, cost curve and per-type/edition/race counts.

pub mod aggregator;

pub use aggregator::{compute_stats, DeckStatistics};
