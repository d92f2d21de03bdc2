//! Paper soccer on a square lattice.
//!
//! Two sides take turns drawing edges between lattice points. A move ends on
//! a fresh point; landing on a point that already has a drawn edge (or a
//! wall) bounces the ball, and the same side keeps moving. Reaching a goal
//! line wins for the side attacking it. A side with no move left loses.
//!
//! - `board`: edge grids, walls and geometry
//! - `movegen`: bounce-chain enumeration
//! - `state`: `PaperSoccerState`, the `SearchState` implementation
//! - `heuristics`: evaluators for alpha-beta
//! - `arena`: engine-versus-engine matches

pub mod action;
pub mod arena;
pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod heuristics;
mod movegen;
pub mod side;
pub mod state;

pub use action::Action;
pub use arena::{play_match, ArenaConfig, MatchEnd, MatchRecord};
pub use board::{Board, BoardView, Line};
pub use config::{BoardConfig, MAX_DIMENSION};
pub use direction::{Direction, Point};
pub use error::{BoardError, MoveError, ParseActionError};
pub use heuristics::{GoalDistance, GoalMouthDistance, Mobility, NoHeuristic, RandomHeuristic};
pub use side::Side;
pub use state::PaperSoccerState;
