//! Paper soccer evaluators.
//!
//! Each evaluator stops at its own `stop_depth` when used alone. Inside a
//! `FixedDepth` composition those verdicts are ignored and only the weighted
//! utilities matter.
//!
//! Utilities are kept within `[-1, 1]` so weights stay comparable.

use crate::core::GameRng;
use crate::rules::SearchState;
use crate::search::{Estimate, Heuristic};

use super::direction::Point;
use super::side::Side;
use super::state::PaperSoccerState;

/// Goal line row that `side` scores on.
fn target_row(state: &PaperSoccerState, side: Side) -> i32 {
    match side {
        Side::North => state.board().south_goal_row(),
        Side::South => state.board().north_goal_row(),
    }
}

/// Never stops and reports zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHeuristic;

impl Heuristic<PaperSoccerState> for NoHeuristic {
    fn evaluate(&mut self, _state: &mut PaperSoccerState, _depth: u32, _perspective: Side) -> Estimate {
        Estimate::Continue(0.0)
    }
}

/// Uniform noise in `[0, 1)` from an injected generator.
#[derive(Clone, Debug)]
pub struct RandomHeuristic {
    rng: GameRng,
    stop_depth: u32,
}

impl RandomHeuristic {
    pub fn new(rng: GameRng, stop_depth: u32) -> Self {
        Self { rng, stop_depth }
    }
}

impl Heuristic<PaperSoccerState> for RandomHeuristic {
    fn evaluate(&mut self, _state: &mut PaperSoccerState, depth: u32, _perspective: Side) -> Estimate {
        Estimate::new(depth >= self.stop_depth, self.rng.next_f64())
    }
}

/// Vertical progress: how much closer the ball is to the opponent's goal
/// line than to one's own.
#[derive(Clone, Copy, Debug)]
pub struct GoalDistance {
    stop_depth: u32,
}

impl GoalDistance {
    pub fn new(stop_depth: u32) -> Self {
        Self { stop_depth }
    }
}

impl Heuristic<PaperSoccerState> for GoalDistance {
    fn evaluate(&mut self, state: &mut PaperSoccerState, depth: u32, perspective: Side) -> Estimate {
        let y = state.position().y;
        let to_target = (y - target_row(state, perspective)).abs();
        let to_own = (y - target_row(state, perspective.opponent())).abs();
        let span = state.board().north_goal_row() - state.board().south_goal_row();

        let utility = f64::from(to_own - to_target) / f64::from(span);
        Estimate::new(depth >= self.stop_depth, utility)
    }
}

/// Chebyshev distance to the nearest vertex of the opponent's goal mouth,
/// compared with the distance to one's own.
#[derive(Clone, Copy, Debug)]
pub struct GoalMouthDistance {
    stop_depth: u32,
}

impl GoalMouthDistance {
    pub fn new(stop_depth: u32) -> Self {
        Self { stop_depth }
    }

    fn distance(state: &PaperSoccerState, from: Point, row: i32) -> i32 {
        let mouth = state.board().goal_mouth();
        let dx = if from.x < *mouth.start() {
            mouth.start() - from.x
        } else if from.x > *mouth.end() {
            from.x - mouth.end()
        } else {
            0
        };
        dx.max((from.y - row).abs())
    }
}

impl Heuristic<PaperSoccerState> for GoalMouthDistance {
    fn evaluate(&mut self, state: &mut PaperSoccerState, depth: u32, perspective: Side) -> Estimate {
        let ball = state.position();
        let to_target = Self::distance(state, ball, target_row(state, perspective));
        let to_own = Self::distance(state, ball, target_row(state, perspective.opponent()));

        let config = state.board().config();
        let scale = f64::from(config.width + config.height + 2);
        let utility = (f64::from(to_own - to_target) / scale).clamp(-1.0, 1.0);
        Estimate::new(depth >= self.stop_depth, utility)
    }
}

/// Freedom of movement: many options are good for the side to move.
///
/// The action count `n` is squashed to `n / (n + 8)` and counted for the
/// perspective when it is to move, against it otherwise.
#[derive(Clone, Copy, Debug)]
pub struct Mobility {
    stop_depth: u32,
}

impl Mobility {
    pub fn new(stop_depth: u32) -> Self {
        Self { stop_depth }
    }
}

impl Heuristic<PaperSoccerState> for Mobility {
    fn evaluate(&mut self, state: &mut PaperSoccerState, depth: u32, perspective: Side) -> Estimate {
        let n = state.available_actions().len() as f64;
        let freedom = n / (n + 8.0);
        let utility = if state.side_to_move() == perspective {
            freedom
        } else {
            -freedom
        };
        Estimate::new(depth >= self.stop_depth, utility)
    }
}
