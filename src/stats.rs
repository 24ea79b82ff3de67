//! Bookkeeping for one call to [`Planner::search`](crate::Planner::search).
//!
//! The planner resets these counters at the start of every decision, so they
//! never describe more than a single tree.

use std::fmt::Write;
use std::time::Duration;

/// Counters gathered while growing one search tree
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Select/expand/rollout/backpropagate rounds completed
    pub iterations: usize,

    /// Wall time of the whole search
    pub total_time: Duration,

    /// Nodes in the arena, root included
    pub tree_size: usize,

    /// Depth of the deepest expanded node (the root is 0)
    pub max_depth: usize,

    pub rollout_moves: usize,

    /// Rollouts cut off by `max_rollout_moves` with the game still running
    pub truncated_rollouts: usize,
}

impl SearchStatistics {
    /// Counters for a tree holding only its root
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            total_time: Duration::ZERO,
            tree_size: 1,
            max_depth: 0,
            rollout_moves: 0,
            truncated_rollouts: 0,
        }
    }

    /// Mean number of moves played per rollout, 0 before any iteration
    pub fn avg_rollout_length(&self) -> f64 {
        match self.iterations {
            0 => 0.0,
            n => self.rollout_moves as f64 / n as f64,
        }
    }

    pub fn iterations_per_second(&self) -> f64 {
        let secs = self.total_time.as_secs_f64();
        if secs > 0.0 {
            self.iterations as f64 / secs
        } else {
            0.0
        }
    }

    /// Multi-line report for logs and the demo
    pub fn summary(&self) -> String {
        let mut out = String::from("Search report\n");
        let rows: [(&str, String); 7] = [
            ("Iterations", self.iterations.to_string()),
            ("Tree size", format!("{} nodes", self.tree_size)),
            ("Deepest node", self.max_depth.to_string()),
            (
                "Rollout moves",
                format!(
                    "{} ({:.1} per rollout)",
                    self.rollout_moves,
                    self.avg_rollout_length()
                ),
            ),
            ("Truncated rollouts", self.truncated_rollouts.to_string()),
            ("Elapsed", format!("{:.3}s", self.total_time.as_secs_f64())),
            (
                "Throughput",
                format!("{:.1} iterations/s", self.iterations_per_second()),
            ),
        ];
        for (label, value) in rows {
            // Writing into a String cannot fail
            let _ = writeln!(out, "  {}: {}", label, value);
        }
        out
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
