//! The decided result of a concluded match.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Winner and final score of a match.
///
/// A concluded match always has a winner: regulation ties force extra
/// rounds until one player leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Player,
    pub score_player1: u32,
    pub score_player2: u32,
    pub rounds_played: u32,
}

impl MatchResult {
    /// The player who lost the match.
    #[must_use]
    pub const fn loser(&self) -> Player {
        self.winner.opponent()
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }

    /// Final score of `player`.
    #[must_use]
    pub const fn score(&self, player: Player) -> u32 {
        match player {
            Player::P1 => self.score_player1,
            Player::P2 => self.score_player2,
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounds = if self.rounds_played == 1 { "round" } else { "rounds" };
        write!(
            f,
            "{} wins {}-{} after {} {}",
            self.winner,
            self.score(self.winner),
            self.score(self.loser()),
            self.rounds_played,
            rounds
        )
    }
}
