//! The match tally value type.

use im::Vector;
use log::{debug, trace};
use serde::Serialize;

use super::continuation::next_remaining_rounds;
use crate::core::{HandShape, Player, Result, RoundCount, TallyError};
use crate::rules::{evaluate, MatchResult, RoundResult};

/// Logical state of a tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MatchState {
    /// Rounds remain to be played.
    InProgress,
    /// The match is decided. Terminal.
    Concluded,
}

/// Immutable snapshot of a best-of-N match.
///
/// Uses an `im` vector for the round history, so each `update` shares
/// structure with the previous tally instead of copying it.
///
/// ```
/// use rps_tally::{HandShape, MatchTally};
///
/// let start = MatchTally::new(1)?;
/// let next = start.update(HandShape::Rock, HandShape::Rock)?;
///
/// // A drawn best-of-1 needs a tie-break round.
/// assert_eq!(next.remaining_rounds(), 1);
/// // The starting tally is unchanged.
/// assert_eq!(start.rounds_played(), 0);
/// # Ok::<(), rps_tally::TallyError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchTally {
    configured_rounds: RoundCount,
    remaining_rounds: u32,
    score_player1: u32,
    score_player2: u32,
    rounds_played: u32,
    history: Vector<RoundResult>,
}

impl MatchTally {
    /// Start a match of `rounds` rounds.
    ///
    /// Fails with `InvalidConfiguration` unless `rounds` is 1, 3, 5 or 7.
    pub fn new(rounds: i64) -> Result<Self> {
        Ok(Self::with_rounds(RoundCount::new(rounds)?))
    }

    /// Start a match from an already validated round count.
    #[must_use]
    pub fn with_rounds(rounds: RoundCount) -> Self {
        Self {
            configured_rounds: rounds,
            remaining_rounds: rounds.get(),
            score_player1: 0,
            score_player2: 0,
            rounds_played: 0,
            history: Vector::new(),
        }
    }

    // === Scores ===

    /// Cumulative score of player 1.
    #[must_use]
    pub fn score_player1(&self) -> u32 {
        self.score_player1
    }

    /// Cumulative score of player 2.
    #[must_use]
    pub fn score_player2(&self) -> u32 {
        self.score_player2
    }

    /// Cumulative score of `player`.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::P1 => self.score_player1,
            Player::P2 => self.score_player2,
        }
    }

    /// Player currently ahead, `None` when the scores are level.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        match self.score_player1.cmp(&self.score_player2) {
            std::cmp::Ordering::Greater => Some(Player::P1),
            std::cmp::Ordering::Less => Some(Player::P2),
            std::cmp::Ordering::Equal => None,
        }
    }

    // === Rounds ===

    /// Rounds still to play. `0` means the match has concluded.
    #[must_use]
    pub fn remaining_rounds(&self) -> u32 {
        self.remaining_rounds
    }

    /// Round count the match was configured with.
    #[must_use]
    pub fn configured_rounds(&self) -> RoundCount {
        self.configured_rounds
    }

    /// Rounds played so far, including tie-break rounds.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Every round played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundResult> {
        &self.history
    }

    /// Most recent round, if any.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundResult> {
        self.history.last()
    }

    // === Hands ===

    /// Shape player 1 showed in the latest round.
    pub fn hand_player1(&self) -> Result<HandShape> {
        self.hand(Player::P1)
    }

    /// Shape player 2 showed in the latest round.
    pub fn hand_player2(&self) -> Result<HandShape> {
        self.hand(Player::P2)
    }

    /// Shape `player` showed in the latest round.
    ///
    /// Fails with `NoRoundsPlayedYet` before the first round.
    pub fn hand(&self, player: Player) -> Result<HandShape> {
        self.last_round()
            .map(|round| round.hand(player))
            .ok_or(TallyError::NoRoundsPlayedYet)
    }

    // === Progression ===

    /// `Concluded` once no rounds remain, `InProgress` before that.
    #[must_use]
    pub fn state(&self) -> MatchState {
        if self.remaining_rounds == 0 {
            MatchState::Concluded
        } else {
            MatchState::InProgress
        }
    }

    /// Has the match been decided?
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.state() == MatchState::Concluded
    }

    /// Final result, `None` while the match is in progress.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        if !self.is_concluded() {
            return None;
        }
        self.leader().map(|winner| MatchResult {
            winner,
            score_player1: self.score_player1,
            score_player2: self.score_player2,
            rounds_played: self.rounds_played(),
        })
    }

    /// Play one round and return the resulting tally.
    ///
    /// Fails with `MatchAlreadyConcluded` on a concluded tally, and with
    /// `RoundCountOverflow` if the round counter cannot advance. `self` is
    /// never modified.
    pub fn update(&self, p1: HandShape, p2: HandShape) -> Result<Self> {
        if self.is_concluded() {
            return Err(TallyError::MatchAlreadyConcluded);
        }

        let rounds_played = self
            .rounds_played
            .checked_add(1)
            .ok_or(TallyError::RoundCountOverflow)?;

        let round = evaluate(p1, p2);
        let score_player1 = self.score_player1 + round.score_player1();
        let score_player2 = self.score_player2 + round.score_player2();
        let remaining_rounds =
            next_remaining_rounds(self.remaining_rounds, score_player1, score_player2);

        let mut history = self.history.clone();
        history.push_back(round);

        trace!(
            "round {}: {} vs {} -> {}-{}, {} remaining",
            rounds_played,
            p1,
            p2,
            score_player1,
            score_player2,
            remaining_rounds
        );

        if self.remaining_rounds == 1 && remaining_rounds == 1 {
            debug!("scores level at {}-{}, forcing a tie-break round", score_player1, score_player2);
        } else if remaining_rounds == 0 && self.remaining_rounds > 1 {
            debug!(
                "match decided early at {}-{} with {} round(s) unplayed",
                score_player1,
                score_player2,
                self.remaining_rounds - 1
            );
        }

        Ok(Self {
            configured_rounds: self.configured_rounds,
            remaining_rounds,
            score_player1,
            score_player2,
            rounds_played,
            history,
        })
    }
}
