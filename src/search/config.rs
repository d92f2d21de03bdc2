//! Heuristic composition configuration.

use serde::{Deserialize, Serialize};

use super::heuristic::StopPolicy;

/// Configuration for a composed heuristic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Depth at which a `FixedDepth` composition stops (root is depth 1).
    pub depth: u32,

    /// How the composition decides to stop.
    pub stop_policy: StopPolicy,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            stop_policy: StopPolicy::FixedDepth,
        }
    }
}

impl HeuristicConfig {
    /// Set the stop depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the stop policy.
    pub fn with_stop_policy(mut self, policy: StopPolicy) -> Self {
        self.stop_policy = policy;
        self
    }
}
