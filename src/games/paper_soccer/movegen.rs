//! Bounce-chain enumeration.
//!
//! From the ball's vertex every free edge starts a candidate action. If the
//! edge lands on a goal line or on a vertex with no drawn edges, the turn
//! ends there. Otherwise the ball bounces: the edge is drawn temporarily and
//! the walk continues from the landing vertex.
//!
//! The walk is a depth-first search on an explicit stack, so long chains do
//! not grow the call stack. Each frame draws its edge when it is opened and
//! erases it when it is closed, which leaves the board exactly as it was
//! once the walk returns (or stops early).

use smallvec::SmallVec;
use std::ops::ControlFlow;

use super::action::Action;
use super::board::Board;
use super::direction::{Direction, Point};

/// A pending bounce: the ball reached `landing` by moving in `direction`.
struct Frame {
    landing: Point,
    direction: Direction,
    /// Set once the edge is drawn and the children are pushed.
    opened: bool,
}

/// Walk every action from `origin`, calling `visit` with the chain so far
/// and the final direction of each one.
///
/// Single-step completions at a vertex are reported in compass order when
/// that vertex is opened; bounce continuations are explored in compass
/// order too. Returning `ControlFlow::Break` stops the walk.
pub(crate) fn walk<F>(board: &mut Board, origin: Point, mut visit: F) -> ControlFlow<()>
where
    F: FnMut(&[Direction], Direction) -> ControlFlow<()>,
{
    let mut stack: Vec<Frame> = Vec::new();
    let mut path: SmallVec<[Direction; 16]> = SmallVec::new();

    let mut flow = open(board, origin, &path, &mut stack, &mut visit);

    while flow.is_continue() {
        let Some(top) = stack.last_mut() else {
            break;
        };
        let (landing, direction) = (top.landing, top.direction);
        let from = landing.step(direction.opposite());

        if top.opened {
            board.set(from, direction, false);
            stack.pop();
            path.pop();
        } else {
            top.opened = true;
            debug_assert!(!board.is_occupied(from, direction));
            board.set(from, direction, true);
            path.push(direction);
            flow = open(board, landing, &path, &mut stack, &mut visit);
        }
    }

    if flow.is_break() {
        // Erase whatever the open frames still have drawn.
        for frame in stack.iter().rev().filter(|f| f.opened) {
            let from = frame.landing.step(frame.direction.opposite());
            board.set(from, frame.direction, false);
        }
    }
    flow
}

/// Report completions from `vertex` and push its bounces.
fn open<F>(
    board: &Board,
    vertex: Point,
    path: &[Direction],
    stack: &mut Vec<Frame>,
    visit: &mut F,
) -> ControlFlow<()>
where
    F: FnMut(&[Direction], Direction) -> ControlFlow<()>,
{
    let first = stack.len();
    for direction in board.free_directions(vertex) {
        let landing = vertex.step(direction);
        if board.is_goal_line(landing) || !board.is_bounce(landing) {
            if visit(path, direction).is_break() {
                return ControlFlow::Break(());
            }
        } else {
            stack.push(Frame {
                landing,
                direction,
                opened: false,
            });
        }
    }
    // Intentional: bounces are explored in compass order, not last-pushed first.
    stack[first..].reverse();
    ControlFlow::Continue(())
}

/// All actions from `origin`.
pub(crate) fn bounce_chains(board: &mut Board, origin: Point) -> Vec<Action> {
    let mut actions = Vec::new();
    let _ = walk(board, origin, |path, last| {
        actions.push(Action::chain(path, last));
        ControlFlow::Continue(())
    });
    actions
}

/// Check if any action exists from `origin`, stopping at the first one.
pub(crate) fn has_action(board: &mut Board, origin: Point) -> bool {
    walk(board, origin, |_, _| ControlFlow::Break(())).is_break()
}
