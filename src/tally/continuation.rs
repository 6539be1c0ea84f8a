//! The rule deciding how many rounds remain after each round.

/// Remaining rounds after a round is played.
///
/// `remaining` is the count before the round, the scores are the
/// cumulative scores after it. With `left = remaining - 1`:
///
/// 1. Regulation over and scores level: one more round (`1`).
/// 2. The higher score exceeds `left` and the scores differ: the match is
///    decided (`0`). This compares the score itself with `left`, not the
///    margin, so a one-point lead can end a match with rounds unplayed.
/// 3. Otherwise: `left`.
///
/// Rule 1 can repeat indefinitely if every extra round is drawn.
///
/// ```
/// use rps_tally::next_remaining_rounds;
///
/// assert_eq!(next_remaining_rounds(1, 0, 0), 1); // tie-break
/// assert_eq!(next_remaining_rounds(2, 2, 0), 0); // 2 > 1 left
/// assert_eq!(next_remaining_rounds(3, 1, 0), 2); // keep playing
/// ```
#[must_use]
pub fn next_remaining_rounds(remaining: u32, score_player1: u32, score_player2: u32) -> u32 {
    let left = remaining.saturating_sub(1);

    if left == 0 && score_player1 == score_player2 {
        return 1;
    }

    if score_player1.max(score_player2) > left && score_player1 != score_player2 {
        return 0;
    }

    left
}
