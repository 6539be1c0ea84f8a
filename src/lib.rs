//! # rps-tally
//!
//! Scoring engine for best-of-N rock/paper/scissors matches between two
//! players.
//!
//! ## Design Principles
//!
//! 1. **Immutable Tallies**: `MatchTally::update` never mutates. Every
//!    round produces a fresh tally and any earlier tally stays valid.
//!
//! 2. **Validated Configuration**: Round counts are checked once, at
//!    construction, and carried as `RoundCount` afterwards.
//!
//! 3. **No I/O**: Prompting and rendering belong to the caller. The crate
//!    only evaluates rounds and decides whether the match goes on.
//!
//! ## Example
//!
//! ```
//! use rps_tally::{HandShape, MatchTally};
//!
//! let tally = MatchTally::new(3)?;
//! let tally = tally.update(HandShape::Rock, HandShape::Scissors)?;
//! let tally = tally.update(HandShape::Paper, HandShape::Rock)?;
//!
//! // Player 1's score exceeds the rounds left, so round 3 is skipped.
//! assert_eq!(tally.remaining_rounds(), 0);
//! assert_eq!(tally.score_player1(), 2);
//! # Ok::<(), rps_tally::TallyError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: Hand shapes, players, round-count configuration, errors, RNG
//! - `rules`: Round evaluation and match results
//! - `tally`: The immutable match tally and its continuation rule
//! - `play`: Hand sources and a non-interactive playout driver

pub mod core;
pub mod rules;
pub mod tally;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    HandShape, Player,
    RoundCount,
    Result, TallyError,
    ShapeRng, ShapeRngState,
};

pub use crate::rules::{evaluate, MatchResult, RoundResult};

pub use crate::tally::{next_remaining_rounds, MatchState, MatchTally};

pub use crate::play::{
    play_match, PlayoutConfig,
    HandSource, RandomHands, ScriptedHands, CounterLastHand,
};
