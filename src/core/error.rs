//! Error type shared by every fallible operation in the crate.
//!
//! All variants describe caller sequencing or input mistakes. None of them
//! is transient, and raising one never modifies the tally involved.

use thiserror::Error;

/// Errors raised by tally construction, updates and queries.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TallyError {
    /// Configured round count is not one of 1, 3, 5 or 7.
    #[error("invalid number of rounds {rounds}: must be 1, 3, 5 or 7")]
    InvalidConfiguration { rounds: i64 },

    /// `update` was called on a tally whose match has already concluded.
    #[error("the match has already concluded")]
    MatchAlreadyConcluded,

    /// A hand was requested before any round was played.
    #[error("no rounds have been played yet")]
    NoRoundsPlayedYet,

    /// The round counter would exceed `u32::MAX`.
    #[error("round counter overflowed")]
    RoundCountOverflow,

    /// Unrecognized hand shape text or an otherwise unusable input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The playout driver hit its round limit before the match concluded.
    #[error("playout stopped after {rounds} rounds without a winner")]
    PlayoutLimitReached { rounds: u32 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TallyError::InvalidConfiguration { rounds: 4 };
        assert_eq!(err.to_string(), "invalid number of rounds 4: must be 1, 3, 5 or 7");

        assert_eq!(
            TallyError::MatchAlreadyConcluded.to_string(),
            "the match has already concluded"
        );
        assert_eq!(
            TallyError::InvalidInput("lizard".into()).to_string(),
            "invalid input: lizard"
        );
        assert_eq!(TallyError::RoundCountOverflow.to_string(), "round counter overflowed");
        assert_eq!(
            TallyError::PlayoutLimitReached { rounds: 10 }.to_string(),
            "playout stopped after 10 rounds without a winner"
        );
    }
}
