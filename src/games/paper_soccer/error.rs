//! Paper soccer error types.

use super::direction::{Direction, Point};

/// Rejected board dimensions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Goal and board width must have the same parity so the goal is centred.
    #[error("goal width {goal_width} and board width {width} differ in parity")]
    AsymmetricGoal { width: u32, goal_width: u32 },

    #[error("goal width {goal_width} exceeds board width {width}")]
    GoalTooWide { width: u32, goal_width: u32 },

    #[error("board {width}x{height} with goal {goal_width} is too small")]
    TooSmall {
        width: u32,
        height: u32,
        goal_width: u32,
    },

    #[error("board {width}x{height} exceeds the maximum dimension {max}")]
    TooLarge { width: u32, height: u32, max: u32 },
}

/// An action that cannot be applied to the current board.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The action has no directions to walk.
    #[error("action has no directions")]
    EmptyAction,
    /// Step `step` of the action would cross an edge that is already drawn.
    #[error("step {step} ({direction} from {from}) crosses an occupied edge")]
    EdgeOccupied {
        step: usize,
        from: Point,
        direction: Direction,
    },
}

/// Text that does not describe an action.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("action has no directions")]
    Empty,

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
}
