//! Utility functions for the planner
//!
//! Small numeric and sampling helpers shared by the selection policy, the
//! rollout policy and the engine.

use rand::{Rng, RngCore};

/// Calculates the exploitation term for UCB1
///
/// Unvisited nodes count as one visit so the term is always defined.
pub fn exploitation_term(wins: u64, visits: u64) -> f64 {
    wins as f64 / visits.max(1) as f64
}

/// Calculates the exploration term for UCB1
///
/// Unvisited children count as one visit, which gives them the largest
/// exploration bonus of all their siblings.
pub fn exploration_term(parent_visits: u64, child_visits: u64, exploration_constant: f64) -> f64 {
    let ln_parent = (parent_visits.max(1) as f64).ln();
    exploration_constant * (ln_parent / child_visits.max(1) as f64).sqrt()
}

/// Calculates the UCB1 value for a node
pub fn ucb1_value(wins: u64, visits: u64, parent_visits: u64, exploration_constant: f64) -> f64 {
    exploitation_term(wins, visits) + exploration_term(parent_visits, visits, exploration_constant)
}

/// Safely calculates the win rate from wins and visits
///
/// Returns 0.0 if no visits have occurred.
pub fn win_rate(wins: u64, visits: u64) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    wins as f64 / visits as f64
}

/// Picks an index into a list of `len` candidates
///
/// Uniform when `randomize` is set, otherwise always the first candidate.
/// Returns `None` for an empty list.
pub fn choose_index(len: usize, randomize: bool, rng: &mut dyn RngCore) -> Option<usize> {
    match len {
        0 => None,
        _ if randomize => Some(rng.gen_range(0..len)),
        _ => Some(0),
    }
}
