//! Round evaluation and match results.
//!
//! - `round`: Scores a single round from the two shapes shown
//! - `outcome`: The decided result of a concluded match

pub mod round;
pub mod outcome;

pub use round::{evaluate, RoundResult};
pub use outcome::MatchResult;
