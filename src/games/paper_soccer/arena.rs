//! Match runner for two alpha-beta engines.
//!
//! North moves first; the engines alternate on one shared state until the
//! game is decided or the turn cap is reached.

use serde::{Deserialize, Serialize};

use crate::rules::SearchState;
use crate::search::{AlphaBeta, Heuristic, SearchError, SearchStats};

use super::action::Action;
use super::side::Side;
use super::state::PaperSoccerState;

/// Configuration for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Maximum turns before the match is abandoned.
    pub max_turns: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { max_turns: 500 }
    }
}

impl ArenaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn cap.
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEnd {
    /// The ball reached a goal line.
    Goal,
    /// The side to move had no legal action.
    Stalemate,
    /// `max_turns` ran out first.
    TurnLimit,
}

/// A finished match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// `None` only when the turn cap was hit.
    pub winner: Option<Side>,
    pub end: MatchEnd,
    /// Actions in the order they were played, North first.
    pub actions: Vec<Action>,
    /// Search statistics for each action, same order.
    pub stats: Vec<SearchStats>,
}

impl MatchRecord {
    /// Number of turns played.
    pub fn turns(&self) -> usize {
        self.actions.len()
    }

    /// Total nodes searched by `side`.
    pub fn nodes_for(&self, side: Side) -> u64 {
        self.stats
            .iter()
            .enumerate()
            .filter(|(turn, _)| Side::to_move_after(*turn) == side)
            .map(|(_, stats)| stats.nodes)
            .sum()
    }
}

/// Play `state` out between two engines.
///
/// `state` must be a fresh game or one where North is to move; it is left in
/// its final position. Search errors abort the match.
///
/// # Panics
///
/// Panics if the engines do not play North and South respectively.
pub fn play_match<HN, HS>(
    state: &mut PaperSoccerState,
    north: &mut AlphaBeta<PaperSoccerState, HN>,
    south: &mut AlphaBeta<PaperSoccerState, HS>,
    config: &ArenaConfig,
) -> Result<MatchRecord, SearchError>
where
    HN: Heuristic<PaperSoccerState>,
    HS: Heuristic<PaperSoccerState>,
{
    assert_eq!(north.perspective(), Side::North, "north engine plays the wrong side");
    assert_eq!(south.perspective(), Side::South, "south engine plays the wrong side");

    let mut actions = Vec::new();
    let mut stats = Vec::new();

    for _ in 0..config.max_turns {
        if let Some(winner) = state.winner() {
            let end = if state.is_in_goal() {
                MatchEnd::Goal
            } else {
                MatchEnd::Stalemate
            };
            return Ok(MatchRecord {
                winner: Some(winner),
                end,
                actions,
                stats,
            });
        }

        let (action, turn_stats) = match state.side_to_move() {
            Side::North => (north.get_move(state)?, north.stats().clone()),
            Side::South => (south.get_move(state)?, south.stats().clone()),
        };
        state.apply_move(&action);
        actions.push(action);
        stats.push(turn_stats);
    }

    // The last move may have decided the game.
    let winner = state.winner();
    let end = match winner {
        Some(_) if state.is_in_goal() => MatchEnd::Goal,
        Some(_) => MatchEnd::Stalemate,
        None => MatchEnd::TurnLimit,
    };
    Ok(MatchRecord {
        winner,
        end,
        actions,
        stats,
    })
}
