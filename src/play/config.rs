//! Playout configuration.

use serde::{Deserialize, Serialize};

/// Bounds for `play_match`.
///
/// The limit only guards the driver against endless tie-breaks; it never
/// changes how the tally itself scores a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayoutConfig {
    /// Rounds played before giving up on an undecided match.
    pub max_rounds: u32,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self { max_rounds: 1000 }
    }
}

impl PlayoutConfig {
    /// Set the round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
