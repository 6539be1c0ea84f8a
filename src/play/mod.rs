//! Non-interactive match playout.
//!
//! `HandSource` is the seam where the caller plugs in whatever picks a
//! player's shape each round. `play_match` drives a tally to conclusion
//! with two sources and performs no I/O.
//!
//! ## Built-in Sources
//!
//! - `RandomHands`: uniform random shapes from a seeded `ShapeRng`
//! - `ScriptedHands`: a fixed, cycling sequence of shapes
//! - `CounterLastHand`: plays whatever beats the opponent's previous shape

pub mod config;
pub mod source;
pub mod playout;

pub use config::PlayoutConfig;
pub use source::{CounterLastHand, HandSource, RandomHands, ScriptedHands};
pub use playout::play_match;
