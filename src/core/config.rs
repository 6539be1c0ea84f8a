//! Match configuration.
//!
//! A match is configured with an odd number of rounds between 1 and 7.
//! `RoundCount` validates that once, so the tally never re-checks it.

use serde::{Deserialize, Serialize};

use super::error::TallyError;

/// Validated number of configured rounds: 1, 3, 5 or 7.
///
/// ```
/// use rps_tally::RoundCount;
///
/// let best_of_five = RoundCount::new(5).unwrap();
/// assert_eq!(best_of_five.get(), 5);
/// assert_eq!(best_of_five.majority(), 3);
///
/// assert!(RoundCount::new(4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct RoundCount(u32);

impl RoundCount {
    /// Every valid round count.
    pub const ALL: [RoundCount; 4] = [RoundCount(1), RoundCount(3), RoundCount(5), RoundCount(7)];

    /// Largest configurable round count.
    pub const MAX: u32 = 7;

    /// Validate a requested round count.
    pub fn new(rounds: i64) -> Result<Self, TallyError> {
        if (1..=Self::MAX as i64).contains(&rounds) && rounds % 2 == 1 {
            Ok(Self(rounds as u32))
        } else {
            Err(TallyError::InvalidConfiguration { rounds })
        }
    }

    /// Get the raw round count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Round wins that always take the match in regulation.
    ///
    /// A lower score can end the match earlier once it exceeds the rounds
    /// left, e.g. 3-2 with two rounds left in a best of 7.
    #[must_use]
    pub const fn majority(self) -> u32 {
        self.0 / 2 + 1
    }
}

impl TryFrom<i64> for RoundCount {
    type Error = TallyError;

    fn try_from(rounds: i64) -> Result<Self, Self::Error> {
        Self::new(rounds)
    }
}

impl From<RoundCount> for u32 {
    fn from(rounds: RoundCount) -> Self {
        rounds.0
    }
}

impl std::fmt::Display for RoundCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "best of {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_counts() {
        for rounds in [1, 3, 5, 7] {
            let count = RoundCount::new(rounds).unwrap();
            assert_eq!(count.get() as i64, rounds);
        }
        assert_eq!(RoundCount::ALL.map(RoundCount::get), [1, 3, 5, 7]);
    }

    #[test]
    fn test_invalid_counts() {
        for rounds in [-1, 0, 2, 4, 6, 8, 9, i64::MIN, i64::MAX] {
            assert_eq!(
                RoundCount::new(rounds),
                Err(TallyError::InvalidConfiguration { rounds })
            );
        }
    }

    #[test]
    fn test_majority() {
        let majorities: Vec<_> = RoundCount::ALL.iter().map(|r| r.majority()).collect();
        assert_eq!(majorities, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", RoundCount::new(3).unwrap()), "best of 3");
    }

    #[test]
    fn test_serde_validates() {
        let count: RoundCount = serde_json::from_str("5").unwrap();
        assert_eq!(count.get(), 5);
        assert_eq!(serde_json::to_string(&count).unwrap(), "5");

        assert!(serde_json::from_str::<RoundCount>("4").is_err());
        assert!(serde_json::from_str::<RoundCount>("-3").is_err());
    }
}
