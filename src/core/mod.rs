//! Core types: hand shapes, players, round-count configuration, errors, RNG.
//!
//! Everything here is independent of match progression. The `rules` and
//! `tally` modules build on these types.

pub mod shape;
pub mod player;
pub mod config;
pub mod error;
pub mod rng;

pub use shape::HandShape;
pub use player::Player;
pub use config::RoundCount;
pub use error::{Result, TallyError};
pub use rng::{ShapeRng, ShapeRngState};
