//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `get_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered (including terminal and cut-off nodes).
    pub nodes: u64,

    /// Nodes that were terminal positions.
    pub terminal_nodes: u64,

    /// Nodes where the heuristic stopped the descent.
    pub heuristic_cutoffs: u64,

    /// Alpha or beta cutoffs (siblings pruned).
    pub prunes: u64,

    /// Deepest ply entered, root is 0.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record entering a node at `depth`.
    pub(crate) fn enter(&mut self, depth: u32) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of entered nodes that were leaves (terminal or cut off).
    #[must_use]
    pub fn leaf_ratio(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            (self.terminal_nodes + self.heuristic_cutoffs) as f64 / self.nodes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.prunes, 0);
        assert_eq!(stats.nodes_per_second(), 0.0);
        assert_eq!(stats.leaf_ratio(), 0.0);
    }

    #[test]
    fn test_enter_tracks_depth() {
        let mut stats = SearchStats::new();
        stats.enter(0);
        stats.enter(3);
        stats.enter(1);
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes = 1000;
        stats.time_us = 500_000;
        assert!((stats.nodes_per_second() - 2000.0).abs() < 0.01);
    }

    #[test]
    fn test_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 10;
        stats.prunes = 4;
        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_serialization() {
        let stats = SearchStats {
            nodes: 12,
            terminal_nodes: 1,
            heuristic_cutoffs: 8,
            prunes: 2,
            max_depth: 2,
            time_us: 99,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, deserialized);
    }
}
