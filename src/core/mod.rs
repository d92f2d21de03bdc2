//! Engine-wide building blocks.

pub mod rng;

pub use rng::{GameRng, GameRngState};
