//! Hand shapes and their cyclic dominance.
//!
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock. There is
//! no absolute ordering: every shape beats exactly one other shape and is
//! beaten by exactly one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::TallyError;

/// A hand shape a player shows in one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandShape {
    Rock,
    Paper,
    Scissors,
}

impl HandShape {
    /// All shapes in a fixed order.
    pub const ALL: [HandShape; 3] = [HandShape::Rock, HandShape::Paper, HandShape::Scissors];

    /// The shape this one defeats.
    #[must_use]
    pub const fn beating(self) -> Self {
        match self {
            HandShape::Rock => HandShape::Scissors,
            HandShape::Paper => HandShape::Rock,
            HandShape::Scissors => HandShape::Paper,
        }
    }

    /// The shape that defeats this one.
    #[must_use]
    pub const fn beaten_by(self) -> Self {
        match self {
            HandShape::Rock => HandShape::Paper,
            HandShape::Paper => HandShape::Scissors,
            HandShape::Scissors => HandShape::Rock,
        }
    }

    /// Does this shape defeat `other`? Always false for equal shapes.
    #[must_use]
    pub fn beats(self, other: HandShape) -> bool {
        self.beating() == other
    }

    /// Capitalized display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HandShape::Rock => "Rock",
            HandShape::Paper => "Paper",
            HandShape::Scissors => "Scissors",
        }
    }
}

impl std::fmt::Display for HandShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses full names or single-letter abbreviations, ignoring case and
/// surrounding whitespace.
impl FromStr for HandShape {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(HandShape::Rock),
            "paper" | "p" => Ok(HandShape::Paper),
            "scissors" | "s" => Ok(HandShape::Scissors),
            _ => Err(TallyError::InvalidInput(format!("unknown hand shape '{}'", s.trim()))),
        }
    }
}
