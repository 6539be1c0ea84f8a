//! Immutable match tally.
//!
//! A `MatchTally` is a snapshot of a match: remaining rounds, scores and
//! the rounds played so far. `update` returns the next snapshot and leaves
//! the current one untouched.
//!
//! ## Lifecycle
//!
//! ```text
//! InProgress --update--> InProgress
//! InProgress --update--> Concluded   (terminal)
//! ```

pub mod continuation;
pub mod match_tally;

pub use continuation::next_remaining_rounds;
pub use match_tally::{MatchState, MatchTally};
