//! Selection policies for the planner
//!
//! Selection policies decide which child to descend into during the
//! selection phase, balancing exploration and exploitation.

use crate::{
    tree::{NodeId, SearchTree},
    utils::ucb1_value,
};

/// Trait for policies that select nodes to explore
pub trait SelectionPolicy<P> {
    /// Selects a child of `node`, or `None` if it has no children
    fn select_child(&self, tree: &SearchTree<P>, node: NodeId) -> Option<NodeId>;

    /// Create a boxed clone of this policy
    fn clone_box(&self) -> Box<dyn SelectionPolicy<P>>;
}

/// Upper Confidence Bound 1 (UCB1) selection policy
///
/// Scores every child with
///
/// ```text
/// UCB1 = wins / max(1, visits) + C * sqrt(ln(parent_visits) / max(1, visits))
/// ```
///
/// With the default `C = sqrt(2)` this is the familiar
/// `sqrt(2 * ln(N) / n)` exploration term. Children that were never visited
/// are treated as visited once, which gives them the largest exploration
/// bonus. Ties go to the last child with the best score.
#[derive(Debug, Clone)]
pub struct UCB1Policy {
    /// Exploration constant that controls the balance between exploration and exploitation.
    pub exploration_constant: f64,
}

impl UCB1Policy {
    /// Creates a new UCB1 policy with the given exploration constant
    pub fn new(exploration_constant: f64) -> Self {
        UCB1Policy {
            exploration_constant,
        }
    }
}

impl Default for UCB1Policy {
    fn default() -> Self {
        Self::new(std::f64::consts::SQRT_2)
    }
}

impl<P: Clone + PartialEq + 'static> SelectionPolicy<P> for UCB1Policy {
    fn select_child(&self, tree: &SearchTree<P>, node: NodeId) -> Option<NodeId> {
        let parent_visits = tree.node(node).visits;
        let mut best: Option<(NodeId, f64)> = None;

        for (id, child) in tree.children(node) {
            let score = ucb1_value(
                child.wins,
                child.visits,
                parent_visits,
                self.exploration_constant,
            );

            match best {
                Some((_, best_score)) if score < best_score => {}
                _ => best = Some((id, score)),
            }
        }

        best.map(|(id, _)| id)
    }

    fn clone_box(&self) -> Box<dyn SelectionPolicy<P>> {
        Box::new(self.clone())
    }
}

// Implement SelectionPolicy for Box<dyn SelectionPolicy>
impl<P> SelectionPolicy<P> for Box<dyn SelectionPolicy<P>> {
    fn select_child(&self, tree: &SearchTree<P>, node: NodeId) -> Option<NodeId> {
        (**self).select_child(tree, node)
    }

    fn clone_box(&self) -> Box<dyn SelectionPolicy<P>> {
        (**self).clone_box()
    }
}
