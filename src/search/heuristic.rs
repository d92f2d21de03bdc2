//! Heuristic evaluation and weighted composition.
//!
//! A heuristic owns the cutoff policy: the search has no depth limit of its
//! own and stops descending exactly where the heuristic says `Stop`.
//!
//! - `Heuristic`: the evaluator trait (implemented for closures)
//! - `WeightedHeuristic`: weighted sum of sub-heuristics, itself a `Heuristic`
//! - `HeuristicBuilder`: accumulates `(heuristic, weight)` pairs

use serde::{Deserialize, Serialize};

use crate::rules::SearchState;

use super::config::HeuristicConfig;

/// A heuristic's verdict at a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Estimate {
    /// Stop descending here and use this utility.
    Stop(f64),
    /// Keep searching. The utility is still reported so compositions can
    /// sum it.
    Continue(f64),
}

impl Estimate {
    /// The estimated utility, whatever the verdict.
    #[must_use]
    pub fn utility(&self) -> f64 {
        match *self {
            Estimate::Stop(u) | Estimate::Continue(u) => u,
        }
    }

    /// Check if the heuristic asks the search to stop.
    #[must_use]
    pub fn is_stop(&self) -> bool {
        matches!(self, Estimate::Stop(_))
    }

    /// Build from a stop flag and utility.
    #[must_use]
    pub fn new(stop: bool, utility: f64) -> Self {
        if stop {
            Estimate::Stop(utility)
        } else {
            Estimate::Continue(utility)
        }
    }
}

/// Evaluator for non-terminal positions.
///
/// `depth` counts plies from the search root, starting at 1 for the root
/// itself. Implementations may call `available_actions` on the state, which
/// is why it is passed mutably, but must leave it unchanged.
pub trait Heuristic<S: SearchState> {
    /// Evaluate `state` from `perspective`'s point of view.
    fn evaluate(&mut self, state: &mut S, depth: u32, perspective: S::Side) -> Estimate;
}

impl<S, F> Heuristic<S> for F
where
    S: SearchState,
    F: FnMut(&mut S, u32, S::Side) -> Estimate,
{
    fn evaluate(&mut self, state: &mut S, depth: u32, perspective: S::Side) -> Estimate {
        self(state, depth, perspective)
    }
}

/// How a composed heuristic decides to stop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopPolicy {
    /// Stop when the node depth equals the configured depth. Sub-heuristic
    /// verdicts are ignored.
    #[default]
    FixedDepth,
    /// Stop only when every sub-heuristic says stop.
    Unanimous,
}

/// Weighted sum of heuristics.
///
/// Every sub-heuristic is evaluated at the same node and the utilities are
/// summed as `utility * weight`.
pub struct WeightedHeuristic<S: SearchState> {
    parts: Vec<(Box<dyn Heuristic<S>>, f64)>,
    depth: u32,
    stop_policy: StopPolicy,
}

impl<S: SearchState> WeightedHeuristic<S> {
    /// Number of (non-zero weight) sub-heuristics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if there are no sub-heuristics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl<S: SearchState> Heuristic<S> for WeightedHeuristic<S> {
    fn evaluate(&mut self, state: &mut S, depth: u32, perspective: S::Side) -> Estimate {
        let mut sum = 0.0;
        let mut all_stop = true;
        for (heuristic, weight) in &mut self.parts {
            let estimate = heuristic.evaluate(state, depth, perspective);
            all_stop &= estimate.is_stop();
            sum += estimate.utility() * *weight;
        }

        let stop = match self.stop_policy {
            StopPolicy::FixedDepth => depth == self.depth,
            StopPolicy::Unanimous => all_stop,
        };
        Estimate::new(stop, sum)
    }
}

/// Builder for `WeightedHeuristic`.
///
/// ## Example
///
/// ```
/// use paper_soccer::games::paper_soccer::{GoalDistance, PaperSoccerState, Side};
/// use paper_soccer::search::{Estimate, Heuristic, HeuristicBuilder};
///
/// let mut heuristic = HeuristicBuilder::<PaperSoccerState>::new(2)
///     .add(GoalDistance::new(2), 0.8)
///     .add(|_: &mut PaperSoccerState, _: u32, _: Side| Estimate::Continue(1.0), 0.5)
///     .build();
///
/// let mut state = PaperSoccerState::new(6, 8, 2).unwrap();
/// let estimate = heuristic.evaluate(&mut state, 2, Side::North);
/// assert!(estimate.is_stop());
/// assert_eq!(estimate.utility(), 0.5);
/// ```
pub struct HeuristicBuilder<S: SearchState> {
    parts: Vec<(Box<dyn Heuristic<S>>, f64)>,
    depth: u32,
    stop_policy: StopPolicy,
}

impl<S: SearchState> Default for HeuristicBuilder<S> {
    fn default() -> Self {
        Self::from_config(&HeuristicConfig::default())
    }
}

impl<S: SearchState> HeuristicBuilder<S> {
    /// Create a builder that stops at `depth`.
    pub fn new(depth: u32) -> Self {
        Self {
            parts: Vec::new(),
            depth,
            stop_policy: StopPolicy::FixedDepth,
        }
    }

    /// Create a builder from a configuration.
    pub fn from_config(config: &HeuristicConfig) -> Self {
        Self::new(config.depth).stop_policy(config.stop_policy)
    }

    /// Add a weighted heuristic. Zero weights are dropped.
    pub fn add<H: Heuristic<S> + 'static>(mut self, heuristic: H, weight: f64) -> Self {
        if weight != 0.0 {
            self.parts.push((Box::new(heuristic), weight));
        }
        self
    }

    /// Set the stop policy.
    pub fn stop_policy(mut self, policy: StopPolicy) -> Self {
        self.stop_policy = policy;
        self
    }

    /// Finish composing.
    pub fn build(self) -> WeightedHeuristic<S> {
        WeightedHeuristic {
            parts: self.parts,
            depth: self.depth,
            stop_policy: self.stop_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Outcome;

    struct Dummy;

    impl SearchState for Dummy {
        type Action = u8;
        type Side = bool;

        fn is_finished(&mut self, _perspective: bool) -> Outcome {
            Outcome::Continue
        }

        fn available_actions(&mut self) -> Vec<u8> {
            vec![0]
        }

        fn apply_move(&mut self, _action: &u8) {}

        fn reverse_last_move(&mut self) {}
    }

    fn constant(stop: bool, utility: f64) -> impl FnMut(&mut Dummy, u32, bool) -> Estimate {
        move |_, _, _| Estimate::new(stop, utility)
    }

    #[test]
    fn test_estimate_accessors() {
        assert_eq!(Estimate::Stop(2.0).utility(), 2.0);
        assert!(Estimate::Stop(2.0).is_stop());
        assert!(!Estimate::Continue(1.0).is_stop());
        assert_eq!(Estimate::new(true, 3.0), Estimate::Stop(3.0));
    }

    #[test]
    fn test_weighted_sum() {
        let mut h = HeuristicBuilder::<Dummy>::new(5)
            .add(constant(false, 2.0), 0.5)
            .add(constant(false, 4.0), 0.25)
            .build();

        let estimate = h.evaluate(&mut Dummy, 1, true);
        assert_eq!(estimate, Estimate::Continue(2.0));
    }

    #[test]
    fn test_zero_weight_skipped() {
        let h = HeuristicBuilder::<Dummy>::new(2)
            .add(constant(false, 1.0), 0.0)
            .add(constant(false, 1.0), 1.0)
            .build();
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_fixed_depth_ignores_sub_verdicts() {
        let mut h = HeuristicBuilder::<Dummy>::new(3).add(constant(true, 1.0), 1.0).build();

        assert!(!h.evaluate(&mut Dummy, 2, true).is_stop());
        assert!(h.evaluate(&mut Dummy, 3, true).is_stop());
        assert!(!h.evaluate(&mut Dummy, 4, true).is_stop());
    }

    #[test]
    fn test_unanimous_stop() {
        let mut split = HeuristicBuilder::<Dummy>::new(1)
            .stop_policy(StopPolicy::Unanimous)
            .add(constant(true, 1.0), 1.0)
            .add(constant(false, 1.0), 1.0)
            .build();
        assert_eq!(split.evaluate(&mut Dummy, 1, true), Estimate::Continue(2.0));

        let mut agreed = HeuristicBuilder::<Dummy>::new(1)
            .stop_policy(StopPolicy::Unanimous)
            .add(constant(true, 1.0), 1.0)
            .add(constant(true, 3.0), -1.0)
            .build();
        assert_eq!(agreed.evaluate(&mut Dummy, 9, true), Estimate::Stop(-2.0));
    }

    #[test]
    fn test_nested_composition() {
        let inner = HeuristicBuilder::<Dummy>::new(2).add(constant(false, 1.0), 2.0).build();
        let mut outer = HeuristicBuilder::<Dummy>::new(2).add(inner, 3.0).build();

        assert_eq!(outer.evaluate(&mut Dummy, 2, false), Estimate::Stop(6.0));
    }

    #[test]
    fn test_from_config() {
        let config = HeuristicConfig::default().with_depth(4);
        let mut h = HeuristicBuilder::<Dummy>::from_config(&config).build();
        assert!(h.is_empty());
        assert_eq!(h.evaluate(&mut Dummy, 4, true), Estimate::Stop(0.0));
    }
}
