//! Hand sources: anything that picks a shape for a seat each round.

use crate::core::{HandShape, Player, Result, ShapeRng, TallyError};
use crate::tally::MatchTally;

/// Picks the shape a player shows in the next round.
///
/// Both seats are asked against the same tally before the round is
/// played, so a source never sees the opponent's current choice.
pub trait HandSource {
    fn next_hand(&mut self, tally: &MatchTally, seat: Player) -> HandShape;
}

impl<S: HandSource + ?Sized> HandSource for &mut S {
    fn next_hand(&mut self, tally: &MatchTally, seat: Player) -> HandShape {
        (**self).next_hand(tally, seat)
    }
}

impl<S: HandSource + ?Sized> HandSource for Box<S> {
    fn next_hand(&mut self, tally: &MatchTally, seat: Player) -> HandShape {
        (**self).next_hand(tally, seat)
    }
}

/// Uniformly random shapes from a deterministic RNG.
#[derive(Clone, Debug)]
pub struct RandomHands {
    rng: ShapeRng,
}

impl RandomHands {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ShapeRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: ShapeRng) -> Self {
        Self { rng }
    }

    /// Two independent sources derived from one seed, one per seat.
    #[must_use]
    pub fn pair(seed: u64) -> (Self, Self) {
        let mut root = ShapeRng::new(seed);
        let p1 = root.fork();
        let p2 = root.fork();
        (Self::from_rng(p1), Self::from_rng(p2))
    }

    #[must_use]
    pub fn rng(&self) -> &ShapeRng {
        &self.rng
    }
}

impl HandSource for RandomHands {
    fn next_hand(&mut self, _tally: &MatchTally, _seat: Player) -> HandShape {
        self.rng.gen_shape()
    }
}

/// Replays a fixed script of shapes, starting over when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedHands {
    script: Vec<HandShape>,
    cursor: usize,
}

impl ScriptedHands {
    /// Fails with `InvalidInput` if `script` is empty.
    pub fn new(script: impl IntoIterator<Item = HandShape>) -> Result<Self> {
        let script: Vec<_> = script.into_iter().collect();
        if script.is_empty() {
            return Err(TallyError::InvalidInput("hand script is empty".into()));
        }
        Ok(Self { script, cursor: 0 })
    }

    /// Parse a whitespace- or comma-separated script such as `"r, p, s"`.
    pub fn parse(script: &str) -> Result<Self> {
        let shapes = script
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<HandShape>>>()?;
        Self::new(shapes)
    }

    /// Number of shapes handed out so far.
    #[must_use]
    pub fn played(&self) -> usize {
        self.cursor
    }
}

impl HandSource for ScriptedHands {
    fn next_hand(&mut self, _tally: &MatchTally, _seat: Player) -> HandShape {
        let shape = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        shape
    }
}

/// Plays the shape that beats the opponent's previous hand.
///
/// Opens with `opening` when no round has been played yet.
#[derive(Clone, Copy, Debug)]
pub struct CounterLastHand {
    opening: HandShape,
}

impl CounterLastHand {
    #[must_use]
    pub fn new(opening: HandShape) -> Self {
        Self { opening }
    }
}

impl Default for CounterLastHand {
    fn default() -> Self {
        Self::new(HandShape::Rock)
    }
}

impl HandSource for CounterLastHand {
    fn next_hand(&mut self, tally: &MatchTally, seat: Player) -> HandShape {
        tally
            .hand(seat.opponent())
            .map(HandShape::beaten_by)
            .unwrap_or(self.opening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HandShape::*;

    fn fresh() -> MatchTally {
        MatchTally::new(3).unwrap()
    }

    #[test]
    fn test_random_hands_deterministic() {
        let tally = fresh();
        let mut a = RandomHands::new(9);
        let mut b = RandomHands::new(9);
        for _ in 0..20 {
            assert_eq!(a.next_hand(&tally, Player::P1), b.next_hand(&tally, Player::P1));
        }
    }

    #[test]
    fn test_random_pair_streams_differ() {
        let tally = fresh();
        let (mut p1, mut p2) = RandomHands::pair(5);
        let s1: Vec<_> = (0..30).map(|_| p1.next_hand(&tally, Player::P1)).collect();
        let s2: Vec<_> = (0..30).map(|_| p2.next_hand(&tally, Player::P2)).collect();
        assert_ne!(s1, s2);
    }

    #[test]
    fn test_scripted_cycles() {
        let tally = fresh();
        let mut source = ScriptedHands::new([Rock, Paper]).unwrap();
        let shapes: Vec<_> = (0..5).map(|_| source.next_hand(&tally, Player::P1)).collect();
        assert_eq!(shapes, vec![Rock, Paper, Rock, Paper, Rock]);
        assert_eq!(source.played(), 5);
    }

    #[test]
    fn test_scripted_rejects_empty() {
        assert!(matches!(
            ScriptedHands::new(Vec::new()),
            Err(TallyError::InvalidInput(_))
        ));
        assert!(ScriptedHands::parse(" , ").is_err());
    }

    #[test]
    fn test_scripted_parse() {
        let tally = fresh();
        let mut source = ScriptedHands::parse("rock, p s").unwrap();
        let shapes: Vec<_> = (0..3).map(|_| source.next_hand(&tally, Player::P2)).collect();
        assert_eq!(shapes, vec![Rock, Paper, Scissors]);

        assert!(matches!(
            ScriptedHands::parse("rock, lizard"),
            Err(TallyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_counter_last_hand() {
        let mut source = CounterLastHand::default();
        let tally = fresh();
        assert_eq!(source.next_hand(&tally, Player::P1), Rock);

        let tally = tally.update(Rock, Scissors).unwrap();
        // Player 2 showed Scissors, so player 1 counters with Rock
        assert_eq!(source.next_hand(&tally, Player::P1), Rock);
        // Player 1 showed Rock, so player 2 counters with Paper
        assert_eq!(source.next_hand(&tally, Player::P2), Paper);
    }

    #[test]
    fn test_boxed_source() {
        let tally = fresh();
        let mut boxed: Box<dyn HandSource> = Box::new(CounterLastHand::new(Scissors));
        assert_eq!(boxed.next_hand(&tally, Player::P2), Scissors);
    }
}
