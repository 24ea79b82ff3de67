//! # planet-mcts
//!
//! A Monte Carlo Tree Search (MCTS) planner for turn-based planet conquest
//! games: planets hold garrisons, fleets fly between them, and each turn a
//! player may launch one attack or pass.
//!
//! Given the current game state the planner chooses at most one attack
//! (source planet → destination planet). It runs a small, fixed number of
//! simulations, so move generation prunes hard: only attacks that outnumber
//! the target more than two to one, that are not already underway, and that
//! do not strip a planet under attack are considered.
//!
//! ## Basic Usage
//!
//! ```
//! use planet_mcts::{decide, GameState, Move, PlanetId, PlannerConfig};
//!
//! // A single-turn game: whoever moves first wins.
//! #[derive(Clone)]
//! struct Duel {
//!     garrisons: Vec<u64>,
//!     owners: Vec<u8>,
//!     done: bool,
//! }
//!
//! impl GameState for Duel {
//!     type Player = u8;
//!     type Fleet = (PlanetId, PlanetId);
//!
//!     fn planets(&self) -> Vec<PlanetId> {
//!         (0..self.garrisons.len()).map(PlanetId).collect()
//!     }
//!     fn planets_of(&self, player: &u8) -> Vec<PlanetId> {
//!         self.planets().into_iter().filter(|p| self.owners[p.0] == *player).collect()
//!     }
//!     fn garrison(&self, planet: PlanetId) -> u64 {
//!         self.garrisons[planet.0]
//!     }
//!     fn fleets(&self) -> Vec<(PlanetId, PlanetId)> {
//!         Vec::new()
//!     }
//!     fn whose_turn(&self) -> u8 {
//!         1
//!     }
//!     fn is_finished(&self) -> bool {
//!         self.done
//!     }
//!     fn winner(&self) -> Option<u8> {
//!         self.done.then_some(1)
//!     }
//!     fn apply_move(&self, _mv: &Move) -> planet_mcts::Result<Self> {
//!         Ok(Duel { done: true, ..self.clone() })
//!     }
//! }
//!
//! fn main() -> planet_mcts::Result<()> {
//!     let state = Duel { garrisons: vec![10, 3], owners: vec![1, 2], done: false };
//!
//!     let config = PlannerConfig::default().with_iterations(10).with_seed(1);
//!     let chosen = decide(&state, &config)?;
//!
//!     assert_eq!(chosen, Some(Move::attack(0, 1)));
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! Each iteration runs four phases:
//!
//! 1. **Selection**: starting from the root, descend through fully expanded
//!    nodes using UCB1.
//! 2. **Expansion**: if the game is not over, expand one untried move.
//! 3. **Rollout**: play random sensible moves until the game is finished.
//! 4. **Backpropagation**: walk back to the root, crediting a win to every
//!    node whose player won the rollout.
//!
//! When the iterations are spent, the most visited root child is chosen and
//! checked once more against the current garrisons before it is returned.

pub mod config;
pub mod decision;
pub mod game_state;
pub mod mcts;
pub mod movegen;
pub mod policy;
pub mod stats;
pub mod tree;
pub mod utils;

pub use config::PlannerConfig;
pub use decision::select_move;
pub use game_state::{Fleet, GameState, Move, PlanetId, Player};
pub use mcts::{decide, Planner};
pub use movegen::{analyze_fleets, generate_moves, FleetAnalysis};
pub use policy::{RolloutPolicy, SelectionPolicy};
pub use stats::SearchStatistics;
pub use tree::{NodeId, SearchNode, SearchTree};

/// Error types for the planner
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// A move outside the legal set was applied or expanded
    #[error("Invalid move: {0}")]
    InvalidMove(Move),

    /// The game state reported data the planner cannot reconcile
    #[error("Inconsistent game state: {0}")]
    InconsistentState(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
