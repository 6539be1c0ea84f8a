//! Driving a tally to conclusion.

use log::{debug, warn};

use super::config::PlayoutConfig;
use super::source::HandSource;
use crate::core::{Player, Result, TallyError};
use crate::tally::MatchTally;

/// Play rounds from `tally` until the match concludes.
///
/// Both sources choose against the same tally before each round. Returns
/// the concluded tally; every round played is available through
/// `history()`.
///
/// Fails with `MatchAlreadyConcluded` if `tally` is already concluded, and
/// with `PlayoutLimitReached` once `config.max_rounds` rounds have been
/// played without a decision.
///
/// ```
/// use rps_tally::{play_match, MatchTally, PlayoutConfig, RandomHands};
///
/// let (mut p1, mut p2) = RandomHands::pair(42);
/// let tally = MatchTally::new(5)?;
/// let done = play_match(&tally, &mut p1, &mut p2, &PlayoutConfig::default())?;
///
/// assert!(done.is_concluded());
/// assert!(done.result().is_some());
/// # Ok::<(), rps_tally::TallyError>(())
/// ```
pub fn play_match<A, B>(
    tally: &MatchTally,
    mut player1: A,
    mut player2: B,
    config: &PlayoutConfig,
) -> Result<MatchTally>
where
    A: HandSource,
    B: HandSource,
{
    if tally.is_concluded() {
        return Err(TallyError::MatchAlreadyConcluded);
    }

    debug!(
        "playout start: {}, {} round(s) remaining, limit {}",
        tally.configured_rounds(),
        tally.remaining_rounds(),
        config.max_rounds
    );

    let mut current = tally.clone();
    let mut played = 0u32;

    while !current.is_concluded() {
        if played >= config.max_rounds {
            warn!(
                "playout limit of {} rounds reached at {}-{}",
                config.max_rounds,
                current.score_player1(),
                current.score_player2()
            );
            return Err(TallyError::PlayoutLimitReached { rounds: played });
        }

        let hand1 = player1.next_hand(&current, Player::P1);
        let hand2 = player2.next_hand(&current, Player::P2);
        current = current.update(hand1, hand2)?;
        played += 1;
    }

    if let Some(result) = current.result() {
        debug!("playout end: {}", result);
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HandShape::*;
    use crate::play::{CounterLastHand, ScriptedHands};

    #[test]
    fn test_scripted_sweep() {
        let tally = MatchTally::new(5).unwrap();
        let p1 = ScriptedHands::new([Paper]).unwrap();
        let p2 = ScriptedHands::new([Rock]).unwrap();

        let done = play_match(&tally, p1, p2, &PlayoutConfig::default()).unwrap();
        assert_eq!(done.rounds_played(), 3);
        assert_eq!(done.result().unwrap().winner, Player::P1);
        // Input tally untouched
        assert_eq!(tally.rounds_played(), 0);
    }

    #[test]
    fn test_endless_ties_hit_limit() {
        let tally = MatchTally::new(1).unwrap();
        let p1 = ScriptedHands::new([Rock]).unwrap();
        let p2 = ScriptedHands::new([Rock]).unwrap();
        let config = PlayoutConfig::default().with_max_rounds(50);

        assert_eq!(
            play_match(&tally, p1, p2, &config),
            Err(TallyError::PlayoutLimitReached { rounds: 50 })
        );
    }

    #[test]
    fn test_concluded_tally_rejected() {
        let tally = MatchTally::new(1).unwrap().update(Rock, Scissors).unwrap();
        let result = play_match(
            &tally,
            CounterLastHand::default(),
            CounterLastHand::default(),
            &PlayoutConfig::default(),
        );
        assert_eq!(result, Err(TallyError::MatchAlreadyConcluded));
    }

    #[test]
    fn test_sources_by_mutable_reference() {
        let tally = MatchTally::new(3).unwrap();
        let mut p1 = ScriptedHands::new([Scissors]).unwrap();
        let mut p2 = ScriptedHands::new([Paper]).unwrap();

        play_match(&tally, &mut p1, &mut p2, &PlayoutConfig::default()).unwrap();
        assert_eq!(p1.played(), 2);
        assert_eq!(p2.played(), 2);
    }
}
