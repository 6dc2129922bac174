//! Deck formats and per-format quotas.
//!
//! Every card carries one quota (its ban-list value) per format. A quota
//! of 0 bans the card in that format; 1..=3 caps the number of copies.

use serde::{Deserialize, Serialize};

/// Highest quota a card can carry in any format.
pub const MAX_QUOTA: u8 = 3;

/// Deck-construction rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Format {
    #[default]
    #[serde(rename = "RE")]
    Re,
    #[serde(rename = "RL")]
    Rl,
    #[serde(rename = "LI")]
    Li,
}

impl Format {
    /// All formats, in ban-list column order.
    pub const ALL: [Format; 3] = [Format::Re, Format::Rl, Format::Li];

    /// Short code used in persisted records and configuration.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Format::Re => "RE",
            Format::Rl => "RL",
            Format::Li => "LI",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Ban-list values of a card, one per format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quotas {
    pub re: u8,
    pub rl: u8,
    pub li: u8,
}

impl Quotas {
    /// Create a quota triple. Values above `MAX_QUOTA` are clamped.
    #[must_use]
    pub fn new(re: u8, rl: u8, li: u8) -> Self {
        Self {
            re: re.min(MAX_QUOTA),
            rl: rl.min(MAX_QUOTA),
            li: li.min(MAX_QUOTA),
        }
    }

    /// Same quota in every format.
    #[must_use]
    pub fn uniform(quota: u8) -> Self {
        Self::new(quota, quota, quota)
    }

    /// Quota for a format.
    #[must_use]
    pub const fn get(&self, format: Format) -> u8 {
        match format {
            Format::Re => self.re,
            Format::Rl => self.rl,
            Format::Li => self.li,
        }
    }

    /// Is the card banned in this format?
    #[must_use]
    pub const fn is_banned(&self, format: Format) -> bool {
        self.get(format) == 0
    }
}

impl Default for Quotas {
    fn default() -> Self {
        Self::uniform(MAX_QUOTA)
    }
}
