//! Single-round evaluation.

use serde::{Deserialize, Serialize};

use crate::core::{HandShape, Player, TallyError};

/// Score deltas and shapes of one evaluated round.
///
/// Deltas are 0 or 1 and never both 1. Both are 0 only on a draw.
///
/// Deserializing re-evaluates the two hands. Serialized deltas are
/// optional, and input whose deltas disagree with the hands is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RoundRecord")]
pub struct RoundResult {
    hand_player1: HandShape,
    hand_player2: HandShape,
    score_player1: u32,
    score_player2: u32,
}

impl RoundResult {
    /// Points player 1 earned this round.
    #[must_use]
    pub const fn score_player1(&self) -> u32 {
        self.score_player1
    }

    /// Points player 2 earned this round.
    #[must_use]
    pub const fn score_player2(&self) -> u32 {
        self.score_player2
    }

    /// Shape player 1 showed.
    #[must_use]
    pub const fn hand_player1(&self) -> HandShape {
        self.hand_player1
    }

    /// Shape player 2 showed.
    #[must_use]
    pub const fn hand_player2(&self) -> HandShape {
        self.hand_player2
    }

    /// Shape shown by `player`.
    #[must_use]
    pub const fn hand(&self, player: Player) -> HandShape {
        match player {
            Player::P1 => self.hand_player1,
            Player::P2 => self.hand_player2,
        }
    }

    /// Round winner, `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match (self.score_player1, self.score_player2) {
            (1, 0) => Some(Player::P1),
            (0, 1) => Some(Player::P2),
            _ => None,
        }
    }

    /// Did both players show the same shape?
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.hand_player1 == self.hand_player2
    }
}

/// Serialized form of a round, checked against `evaluate` on load.
#[derive(Deserialize)]
struct RoundRecord {
    hand_player1: HandShape,
    hand_player2: HandShape,
    #[serde(default)]
    score_player1: Option<u32>,
    #[serde(default)]
    score_player2: Option<u32>,
}

impl TryFrom<RoundRecord> for RoundResult {
    type Error = TallyError;

    fn try_from(record: RoundRecord) -> Result<Self, Self::Error> {
        let round = evaluate(record.hand_player1, record.hand_player2);
        let agrees = |stored: Option<u32>, computed: u32| stored.map_or(true, |s| s == computed);

        if agrees(record.score_player1, round.score_player1)
            && agrees(record.score_player2, round.score_player2)
        {
            Ok(round)
        } else {
            Err(TallyError::InvalidInput(format!(
                "round deltas do not match {} vs {}",
                round.hand_player1, round.hand_player2
            )))
        }
    }
}

/// Evaluate one round.
///
/// Equal shapes score nothing. Otherwise the player whose shape dominates
/// the other's scores one point.
#[must_use]
pub fn evaluate(p1: HandShape, p2: HandShape) -> RoundResult {
    RoundResult {
        hand_player1: p1,
        hand_player2: p2,
        score_player1: u32::from(p1.beats(p2)),
        score_player2: u32::from(p2.beats(p1)),
    }
}
