//! Minimax search with alpha-beta pruning.
//!
//! Two mutually recursive evaluators, `max_value` and `min_value`, walk the
//! game tree depth-first on a single mutable state. Every descent goes
//! through a `MoveScope`, so the state is restored before the loop moves on,
//! on cutoffs, and on errors alike.
//!
//! The perspective is fixed per engine. Which evaluator runs at a node is
//! decided by recursion role only, never by asking the state whose turn it is.

use std::marker::PhantomData;
use std::time::Instant;

use crate::rules::{MoveScope, Outcome, SearchState};

use super::error::{Result, SearchError};
use super::heuristic::{Estimate, Heuristic};
use super::stats::SearchStats;

/// A value together with the action that achieves it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scored<A> {
    /// Minimax value from the engine's perspective.
    pub value: f64,
    /// Chosen action.
    pub action: A,
}

/// Result of evaluating one node. Leaves carry no action.
struct Node<A> {
    value: f64,
    action: Option<A>,
}

impl<A> Node<A> {
    fn leaf(value: f64) -> Self {
        Self { value, action: None }
    }

    fn branch(value: f64, action: A) -> Self {
        Self {
            value,
            action: Some(action),
        }
    }
}

/// Alpha-beta search engine playing one side.
///
/// Generic over any `SearchState` and any `Heuristic` for it. The heuristic
/// alone decides where the tree is cut; there is no separate depth limit.
pub struct AlphaBeta<S: SearchState, H: Heuristic<S>> {
    heuristic: H,
    perspective: S::Side,
    stats: SearchStats,
    _state: PhantomData<fn(&mut S)>,
}

impl<S: SearchState, H: Heuristic<S>> AlphaBeta<S, H> {
    /// Create an engine that picks moves for `perspective`.
    pub fn new(heuristic: H, perspective: S::Side) -> Self {
        Self {
            heuristic,
            perspective,
            stats: SearchStats::default(),
            _state: PhantomData,
        }
    }

    /// The side this engine plays.
    pub fn perspective(&self) -> S::Side {
        self.perspective
    }

    /// Statistics from the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Mutable access to the heuristic, e.g. to reseed it between games.
    pub fn heuristic_mut(&mut self) -> &mut H {
        &mut self.heuristic
    }

    /// Choose the best action for the engine's side.
    ///
    /// `state` is left exactly as it was passed in.
    pub fn get_move(&mut self, state: &mut S) -> Result<S::Action> {
        self.search(state).map(|scored| scored.action)
    }

    /// Choose the best action and report its value.
    pub fn search(&mut self, state: &mut S) -> Result<Scored<S::Action>> {
        let start = Instant::now();
        self.stats.reset();

        let root = self.max_value(state, f64::NEG_INFINITY, f64::INFINITY, 0);
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let root = root?;
        match root.action {
            Some(action) => Ok(Scored {
                value: root.value,
                action,
            }),
            None if state.is_finished(self.perspective).is_terminal() => {
                Err(SearchError::TerminalRoot)
            }
            None => Err(SearchError::RootCutoff),
        }
    }

    /// Terminal or heuristic leaf, `None` if the node must be expanded.
    fn leaf(&mut self, state: &mut S, depth: u32) -> Option<Node<S::Action>> {
        self.stats.enter(depth);

        if let Outcome::Terminal(utility) = state.is_finished(self.perspective) {
            self.stats.terminal_nodes += 1;
            return Some(Node::leaf(utility));
        }

        match self.heuristic.evaluate(state, depth + 1, self.perspective) {
            Estimate::Stop(utility) => {
                self.stats.heuristic_cutoffs += 1;
                Some(Node::leaf(utility))
            }
            Estimate::Continue(_) => None,
        }
    }

    fn max_value(
        &mut self,
        state: &mut S,
        mut alpha: f64,
        beta: f64,
        depth: u32,
    ) -> Result<Node<S::Action>> {
        if let Some(leaf) = self.leaf(state, depth) {
            return Ok(leaf);
        }

        let mut best: Option<Node<S::Action>> = None;
        for action in state.available_actions() {
            let value = {
                let mut scope = MoveScope::apply(state, &action);
                self.min_value(&mut scope, alpha, beta, depth + 1)?.value
            };

            // The first candidate is taken unconditionally; later ones only
            // when strictly better, so ties go to the earliest action.
            if best.as_ref().map_or(true, |b| value > b.value) {
                best = Some(Node::branch(value, action.clone()));
            }
            alpha = alpha.max(value);
            if value >= beta {
                self.stats.prunes += 1;
                return Ok(Node::branch(value, action));
            }
        }

        best.ok_or(SearchError::NoLegalActions { depth })
    }

    fn min_value(
        &mut self,
        state: &mut S,
        alpha: f64,
        mut beta: f64,
        depth: u32,
    ) -> Result<Node<S::Action>> {
        if let Some(leaf) = self.leaf(state, depth) {
            return Ok(leaf);
        }

        let mut best: Option<Node<S::Action>> = None;
        for action in state.available_actions() {
            let value = {
                let mut scope = MoveScope::apply(state, &action);
                self.max_value(&mut scope, alpha, beta, depth + 1)?.value
            };

            if best.as_ref().map_or(true, |b| value < b.value) {
                best = Some(Node::branch(value, action.clone()));
            }
            beta = beta.min(value);
            if value <= alpha {
                self.stats.prunes += 1;
                return Ok(Node::branch(value, action));
            }
        }

        best.ok_or(SearchError::NoLegalActions { depth })
    }
}
