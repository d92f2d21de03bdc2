//! Adversarial game-tree search.
//!
//! ## Overview
//!
//! - **Alpha-beta minimax**: `AlphaBeta` searches any `SearchState` for one
//!   fixed side, mutating and restoring a single state instance
//! - **Heuristic-owned cutoffs**: the search descends until the position is
//!   terminal or the heuristic returns `Estimate::Stop`
//! - **Composable heuristics**: `HeuristicBuilder` sums weighted heuristics
//!   into a `WeightedHeuristic`, which is a `Heuristic` itself
//!
//! ## Usage
//!
//! ```rust
//! use paper_soccer::games::paper_soccer::{GoalDistance, Mobility, PaperSoccerState, Side};
//! use paper_soccer::search::{AlphaBeta, HeuristicBuilder};
//!
//! let heuristic = HeuristicBuilder::<PaperSoccerState>::new(2)
//!     .add(GoalDistance::new(2), 0.8)
//!     .add(Mobility::new(2), 0.2)
//!     .build();
//! let mut search = AlphaBeta::new(heuristic, Side::North);
//!
//! let mut state = PaperSoccerState::new(6, 8, 2).unwrap();
//! let action = search.get_move(&mut state).unwrap();
//! println!("North plays {action} after {} nodes", search.stats().nodes);
//! ```

pub mod alphabeta;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod stats;

pub use alphabeta::{AlphaBeta, Scored};
pub use config::HeuristicConfig;
pub use error::SearchError;
pub use heuristic::{Estimate, Heuristic, HeuristicBuilder, StopPolicy, WeightedHeuristic};
pub use stats::SearchStats;
