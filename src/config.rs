//! Configuration options for the planner
//!
//! This module defines the parameters that control a single decision. A
//! configuration is a plain value handed to the planner, so independent
//! decisions never share settings.

use std::f64::consts::SQRT_2;

use crate::{PlannerError, Result};

/// Configuration for the planner
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use planet_mcts::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_iterations(50)
///     .with_randomize(false)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of simulations to run per decision
    ///
    /// The search always runs exactly this many iterations.
    pub iterations: usize,

    /// Exploration constant for UCB1
    ///
    /// The default of sqrt(2) gives the `sqrt(2 * ln(N) / n)` exploration term.
    pub exploration_constant: f64,

    /// Maximum depth of the search tree
    ///
    /// Off by default. When set, nodes at this depth are never expanded and
    /// simulations run from them directly.
    pub max_depth: Option<usize>,

    /// Whether expansion and rollouts pick moves at random
    ///
    /// When false the first available move is always taken, which makes the
    /// search reproducible regardless of the random source.
    pub randomize: bool,

    /// Maximum number of moves played in a single rollout
    ///
    /// A rollout that hits the cap has no winner. `None` plays every rollout
    /// until the game is finished.
    pub max_rollout_moves: Option<usize>,

    /// Seed for the planner's random source
    ///
    /// `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            iterations: 10,
            exploration_constant: SQRT_2,
            max_depth: None,
            randomize: true,
            max_rollout_moves: None,
            seed: None,
        }
    }
}

impl PlannerConfig {
    /// Sets the number of iterations per decision
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the maximum tree depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Removes the tree depth limit
    pub fn without_max_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Sets whether moves are chosen at random
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Caps the length of each rollout
    pub fn with_max_rollout_moves(mut self, moves: usize) -> Self {
        self.max_rollout_moves = Some(moves);
        self
    }

    /// Seeds the random source
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the configuration can drive a search
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(PlannerError::InvalidConfiguration(format!(
                "exploration constant must be a non-negative number, got {}",
                self.exploration_constant
            )));
        }

        if self.max_rollout_moves == Some(0) {
            return Err(PlannerError::InvalidConfiguration(
                "rollout cap must allow at least one move".to_string(),
            ));
        }

        Ok(())
    }
}
