//! # paper-soccer
//!
//! Paper soccer with a generic alpha-beta search engine.
//!
//! ## Design Principles
//!
//! 1. **One mutable state**: search applies a move, recurses, and reverses
//!    it. Positions are never cloned per branch.
//!
//! 2. **Game-agnostic search**: `AlphaBeta` only sees the `SearchState`
//!    contract; paper soccer is one implementation of it.
//!
//! 3. **Heuristic-owned depth**: there is no separate depth limit. The
//!    heuristic decides where the tree is cut.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `rules`: `SearchState` contract and the `MoveScope` guard
//! - `search`: alpha-beta, heuristics and their composition, statistics
//! - `games`: paper soccer board, move generation, heuristics and arena

pub mod core;
pub mod rules;
pub mod search;
pub mod games;

pub use crate::core::{GameRng, GameRngState};

pub use crate::rules::{MoveScope, Outcome, SearchState};

pub use crate::search::{
    AlphaBeta, Estimate, Heuristic, HeuristicBuilder, HeuristicConfig, Scored, SearchError,
    SearchStats, StopPolicy, WeightedHeuristic,
};

pub use crate::games::paper_soccer::{
    Action, BoardConfig, Direction, PaperSoccerState, Point, Side,
};
