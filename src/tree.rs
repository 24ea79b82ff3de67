//! Tree data structures for the planner
//!
//! The search tree is an arena: every node lives in a single `Vec` owned by
//! [`SearchTree`] and refers to its parent and children by [`NodeId`]. Child
//! ids are the owning edges; the parent id is only ever used to walk back up
//! during backpropagation. Dropping the tree releases every node at once.

use std::fmt;

use crate::{
    game_state::{GameState, Move},
    movegen::generate_moves,
    PlannerError, Result,
};

/// Index of a node inside a [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.0)
    }
}

/// A node in the search tree
///
/// Statistics are scored from the point of view of `player`, the player who
/// played `mv` to reach this node.
#[derive(Debug, Clone)]
pub struct SearchNode<P> {
    /// The move that led to this node (None for the root)
    pub mv: Option<Move>,

    /// Parent of this node (None for the root)
    pub parent: Option<NodeId>,

    /// Children in the order they were expanded
    pub children: Vec<NodeId>,

    /// Moves that have not yet been expanded into children
    pub untried_moves: Vec<Move>,

    /// Number of simulations that passed through this node
    pub visits: u64,

    /// Number of those simulations won by `player`
    pub wins: u64,

    /// Player who made the move to reach this node
    /// For the root node, this is the player to move
    pub player: P,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,
}

impl<P> SearchNode<P> {
    /// Returns true once every move from this node has a child
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Records one simulation result
    pub fn update(&mut self, won: bool) {
        self.visits += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Returns the fraction of simulations won
    pub fn win_rate(&self) -> f64 {
        crate::utils::win_rate(self.wins, self.visits)
    }
}

/// Arena holding every node explored during one decision
#[derive(Debug, Clone)]
pub struct SearchTree<P> {
    nodes: Vec<SearchNode<P>>,
}

impl<P: Clone + PartialEq> SearchTree<P> {
    /// Creates a tree containing only the root for `state`
    pub fn new<S: GameState<Player = P>>(state: &S) -> Self {
        let root = SearchNode {
            mv: None,
            parent: None,
            children: Vec::new(),
            untried_moves: generate_moves(state),
            visits: 0,
            wins: 0,
            player: state.whose_turn(),
            depth: 0,
        };

        SearchTree { nodes: vec![root] }
    }

    /// Id of the root node
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the node with the given id
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &SearchNode<P> {
        &self.nodes[id.0]
    }

    /// Mutable access to the node with the given id
    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode<P> {
        &mut self.nodes[id.0]
    }

    /// Returns the number of nodes in the tree, root included
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over the children of `id`
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SearchNode<P>)> + '_ {
        self.nodes[id.0]
            .children
            .iter()
            .map(move |&child| (child, &self.nodes[child.0]))
    }

    /// Expands `parent` with the child reached by `mv`
    ///
    /// `mv` must be one of the parent's untried moves and `parent_state` must
    /// be the state at `parent`. Returns the new child's id together with the
    /// state it represents.
    pub fn add_child<S: GameState<Player = P>>(
        &mut self,
        parent: NodeId,
        mv: Move,
        parent_state: &S,
    ) -> Result<(NodeId, S)> {
        let position = self.nodes[parent.0]
            .untried_moves
            .iter()
            .position(|untried| *untried == mv)
            .ok_or(PlannerError::InvalidMove(mv))?;

        let next_state = parent_state.apply_move(&mv)?;
        self.nodes[parent.0].untried_moves.remove(position);

        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(SearchNode {
            mv: Some(mv),
            parent: Some(parent),
            children: Vec::new(),
            untried_moves: generate_moves(&next_state),
            visits: 0,
            wins: 0,
            player: parent_state.whose_turn(),
            depth,
        });
        self.nodes[parent.0].children.push(id);

        Ok((id, next_state))
    }

    /// Records a finished simulation on `leaf` and every ancestor up to the root
    ///
    /// A node is credited with a win when `winner` is its player of record.
    pub fn backpropagate(&mut self, leaf: NodeId, winner: Option<&P>) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = &mut self.nodes[id.0];
            let won = winner.map_or(false, |w| *w == node.player);
            node.update(won);
            current = node.parent;
        }
    }

    /// Returns the deepest depth reached in the tree
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Returns a visualization of the search tree
    pub fn visualize(&self) -> String {
        let mut result = String::new();
        self.visualize_node(self.root(), &mut result);
        result
    }

    /// Helper method to visualize a node and its children
    fn visualize_node(&self, id: NodeId, output: &mut String) {
        let node = self.node(id);
        let indent = "  ".repeat(node.depth);
        let move_str = match &node.mv {
            Some(mv) => mv.to_string(),
            None => "Root".to_string(),
        };

        output.push_str(&format!(
            "{}{} (visits: {}, wins: {}, untried: {})\n",
            indent,
            move_str,
            node.visits,
            node.wins,
            node.untried_moves.len()
        ));

        for &child in &node.children {
            self.visualize_node(child, output);
        }
    }
}
