//! Game-state capability contract consumed by the search.
//!
//! Games implement `SearchState` to expose:
//! - Legal actions for the current position
//! - Reversible move application
//! - Terminal detection from a given side's point of view
//!
//! The search never clones a state. It mutates one instance and rolls it
//! back, so `apply_move`/`reverse_last_move` must be exact inverses.

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

/// Result of asking a state whether it is finished.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// The game goes on.
    Continue,
    /// The game is over. Utility is signed for the asking perspective:
    /// `f64::INFINITY` for a win, `f64::NEG_INFINITY` for a loss.
    Terminal(f64),
}

impl Outcome {
    /// Check if the position is terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Terminal(_))
    }

    /// Terminal utility, `None` if the game continues.
    #[must_use]
    pub fn utility(&self) -> Option<f64> {
        match *self {
            Outcome::Continue => None,
            Outcome::Terminal(u) => Some(u),
        }
    }
}

/// Capability contract for reversible two-player game states.
///
/// ## Implementation Notes
///
/// - `is_finished`: must report stalemate (no actions) as terminal
/// - `available_actions`: may use scratch mutation internally but must leave
///   the state exactly as it found it
/// - `apply_move`: pushes onto the history
/// - `reverse_last_move`: pops the history; panics when it is empty
pub trait SearchState {
    /// One full turn.
    type Action: Clone + Debug;

    /// The viewpoint a utility is expressed in.
    type Side: Copy + Debug + PartialEq;

    /// Check whether the position is terminal, from `perspective`'s view.
    fn is_finished(&mut self, perspective: Self::Side) -> Outcome;

    /// Enumerate all legal actions from the current position.
    fn available_actions(&mut self) -> Vec<Self::Action>;

    /// Apply an action and push it onto the history.
    fn apply_move(&mut self, action: &Self::Action);

    /// Undo the most recently applied action.
    ///
    /// # Panics
    ///
    /// Panics if no action has been applied.
    fn reverse_last_move(&mut self);
}

/// An applied move that is reversed when the scope ends.
///
/// Derefs to the state so the search can descend through it. Because the
/// reversal lives in `Drop`, it also runs when the descent exits early with
/// an error.
///
/// ```
/// use paper_soccer::games::paper_soccer::PaperSoccerState;
/// use paper_soccer::rules::{MoveScope, SearchState};
///
/// let mut state = PaperSoccerState::new(6, 8, 2).unwrap();
/// let before = state.clone();
/// let action = state.available_actions()[0].clone();
/// {
///     let scoped = MoveScope::apply(&mut state, &action);
///     assert_eq!(scoped.history().len(), 1);
/// }
/// assert_eq!(state, before);
/// ```
pub struct MoveScope<'a, S: SearchState> {
    state: &'a mut S,
}

impl<'a, S: SearchState> MoveScope<'a, S> {
    /// Apply `action` to `state` for the lifetime of the returned guard.
    pub fn apply(state: &'a mut S, action: &S::Action) -> Self {
        state.apply_move(action);
        Self { state }
    }
}

impl<S: SearchState> Deref for MoveScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.state
    }
}

impl<S: SearchState> DerefMut for MoveScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.state
    }
}

impl<S: SearchState> Drop for MoveScope<'_, S> {
    fn drop(&mut self) {
        self.state.reverse_last_move();
    }
}
