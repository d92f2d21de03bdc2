//! Game-state contract for searchable games.
//!
//! Games implement `SearchState` to define:
//! - Legal actions for the current position
//! - How actions modify (and un-modify) the state
//! - Terminal conditions
//!
//! The search engine calls into `SearchState` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{MoveScope, Outcome, SearchState};
