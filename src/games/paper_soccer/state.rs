//! Paper soccer game state.
//!
//! ## PaperSoccerState
//!
//! Complete game state:
//! - Board (edge occupancy, including permanent walls)
//! - Ball position
//! - Action history, used to reverse the latest move exactly
//!
//! The state is mutated and rolled back in place during search; it is never
//! cloned per branch.

use serde::{Deserialize, Serialize};

use crate::rules::{Outcome, SearchState};

use super::action::Action;
use super::board::{Board, BoardView};
use super::config::BoardConfig;
use super::direction::{Direction, Point};
use super::error::{BoardError, MoveError};
use super::movegen;
use super::side::Side;

/// Paper soccer position plus the history that produced it.
///
/// ## Example
///
/// ```
/// use paper_soccer::games::paper_soccer::{PaperSoccerState, Side};
/// use paper_soccer::rules::SearchState;
///
/// let mut state = PaperSoccerState::new(6, 8, 2).unwrap();
/// assert_eq!(state.side_to_move(), Side::North);
///
/// let actions = state.available_actions();
/// assert_eq!(actions.len(), 8);
///
/// state.apply_move(&actions[0]);
/// assert_eq!(state.side_to_move(), Side::South);
/// state.reverse_last_move();
/// assert!(state.history().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaperSoccerState {
    board: Board,
    position: Point,
    history: Vec<Action>,
}

impl PaperSoccerState {
    /// Create a new game with the ball at the centre of the field.
    pub fn new(width: u32, height: u32, goal_width: u32) -> Result<Self, BoardError> {
        Self::from_config(&BoardConfig::new(width, height, goal_width))
    }

    /// Create a new game from a board configuration.
    pub fn from_config(config: &BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let board = Board::new(*config);
        let position = board.center();
        Ok(Self {
            board,
            position,
            history: Vec::new(),
        })
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the ball's vertex.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Actions applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Side whose turn it is. North moves first.
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        Side::to_move_after(self.history.len())
    }

    /// Check if the ball is on a goal line.
    #[must_use]
    pub fn is_in_goal(&self) -> bool {
        self.board.is_goal_line(self.position)
    }

    /// Side that scored, if the ball is on a goal line.
    #[must_use]
    pub fn goal_scorer(&self) -> Option<Side> {
        if self.position.y == self.board.south_goal_row() {
            Some(Side::North)
        } else if self.position.y == self.board.north_goal_row() {
            Some(Side::South)
        } else {
            None
        }
    }

    /// Winner of a finished game, `None` while it goes on.
    ///
    /// A goal wins for the side attacking that goal, whoever moved the ball
    /// there. A side to move with no legal action loses.
    pub fn winner(&mut self) -> Option<Side> {
        if let Some(scorer) = self.goal_scorer() {
            return Some(scorer);
        }
        if !movegen::has_action(&mut self.board, self.position) {
            return Some(self.side_to_move().opponent());
        }
        None
    }

    /// Apply `action` if it is non-empty and every edge along it is free.
    ///
    /// On error the state is left untouched. Only edge occupancy is checked,
    /// not whether `action` is one of `available_actions`.
    pub fn try_apply_move(&mut self, action: &Action) -> Result<(), MoveError> {
        let directions = action.directions();
        if directions.is_empty() {
            return Err(MoveError::EmptyAction);
        }
        for (step, &direction) in directions.iter().enumerate() {
            if self.board.is_occupied(self.position, direction) {
                let from = self.position;
                self.retrace(&directions[..step]);
                return Err(MoveError::EdgeOccupied {
                    step,
                    from,
                    direction,
                });
            }
            self.board.set(self.position, direction, true);
            self.position = self.position.step(direction);
        }
        self.history.push(action.clone());
        Ok(())
    }

    /// Walk `directions` backwards from the current position, erasing each
    /// edge.
    fn retrace(&mut self, directions: &[Direction]) {
        for &direction in directions.iter().rev() {
            self.position = self.position.step(direction.opposite());
            debug_assert!(self.board.is_occupied(self.position, direction));
            self.board.set(self.position, direction, false);
        }
    }

    /// ASCII view of the board with the ball.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            board: &self.board,
            ball: self.position,
        }
    }
}

impl SearchState for PaperSoccerState {
    type Action = Action;
    type Side = Side;

    fn is_finished(&mut self, perspective: Side) -> Outcome {
        match self.winner() {
            Some(winner) if winner == perspective => Outcome::Terminal(f64::INFINITY),
            Some(_) => Outcome::Terminal(f64::NEG_INFINITY),
            None => Outcome::Continue,
        }
    }

    fn available_actions(&mut self) -> Vec<Action> {
        movegen::bounce_chains(&mut self.board, self.position)
    }

    /// # Panics
    ///
    /// Panics if the action crosses an occupied edge.
    fn apply_move(&mut self, action: &Action) {
        if let Err(err) = self.try_apply_move(action) {
            panic!("cannot apply {action}: {err}");
        }
    }

    fn reverse_last_move(&mut self) {
        let Some(action) = self.history.pop() else {
            panic!("reverse_last_move called with empty history");
        };
        self.retrace(action.directions());
    }
}
