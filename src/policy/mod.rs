//! Policies for different phases of the search
//!
//! - Selection policies: How to choose which child to descend into
//! - Rollout policies: How to play out games from a node

pub mod selection;
pub mod simulation;

pub use selection::{SelectionPolicy, UCB1Policy};
pub use simulation::{HeuristicRollout, RandomRollout, Rollout, RolloutPolicy};
