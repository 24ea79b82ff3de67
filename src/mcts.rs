//! Main implementation of the planner's tree search
//!
//! This module contains the search loop, orchestrating the four phases of
//! selection, expansion, rollout, and backpropagation, and the [`decide`]
//! entry point that turns a game state into at most one move.

use std::time::Instant;

use log::{debug, trace};
use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::{
    config::PlannerConfig,
    decision::select_move,
    game_state::{GameState, Move},
    policy::{
        selection::{SelectionPolicy, UCB1Policy},
        simulation::{RandomRollout, RolloutPolicy},
    },
    stats::SearchStatistics,
    tree::{NodeId, SearchTree},
    utils::choose_index,
    PlannerError, Result,
};

/// Chooses a move for the player to move in `state`
///
/// Builds a fresh planner from `config`, searches, and returns the chosen
/// move. `Ok(None)` means the planner declines to move.
///
/// # Example
///
/// ```no_run
/// # fn run<S: planet_mcts::GameState + 'static>(state: &S) -> planet_mcts::Result<()> {
/// use planet_mcts::{decide, PlannerConfig};
///
/// match decide(state, &PlannerConfig::default())? {
///     Some(mv) => println!("playing {}", mv),
///     None => println!("holding position"),
/// }
/// # Ok(())
/// # }
/// ```
pub fn decide<S: GameState + 'static>(state: &S, config: &PlannerConfig) -> Result<Option<Move>> {
    Planner::new(config.clone())?.decide(state)
}

/// The planner: a Monte Carlo Tree Search over attack moves
///
/// A planner can be reused for many decisions. Each call to
/// [`Planner::search`] or [`Planner::decide`] grows a brand new tree; nothing
/// but the random source carries over between calls.
pub struct Planner<S: GameState> {
    /// Configuration for the search
    config: PlannerConfig,

    /// Statistics gathered during the last search
    statistics: SearchStatistics,

    /// Policy for selecting nodes during the selection phase
    selection_policy: Box<dyn SelectionPolicy<S::Player>>,

    /// Policy for playing games out during the rollout phase
    rollout_policy: Box<dyn RolloutPolicy<S>>,

    /// Source of randomness for expansion and rollouts
    rng: Box<dyn RngCore>,
}

impl<S: GameState + 'static> Planner<S> {
    /// Creates a planner with UCB1 selection and uniform random rollouts
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;

        let selection_policy: Box<dyn SelectionPolicy<S::Player>> =
            Box::new(UCB1Policy::new(config.exploration_constant));

        let rollout_policy: Box<dyn RolloutPolicy<S>> = Box::new(
            RandomRollout::new()
                .with_randomize(config.randomize)
                .with_max_moves(config.max_rollout_moves),
        );

        let rng: Box<dyn RngCore> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };

        Ok(Planner {
            config,
            statistics: SearchStatistics::new(),
            selection_policy,
            rollout_policy,
            rng,
        })
    }

    /// Sets the selection policy to use
    pub fn with_selection_policy<P: SelectionPolicy<S::Player> + 'static>(
        mut self,
        policy: P,
    ) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Sets the rollout policy to use
    pub fn with_rollout_policy<P: RolloutPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.rollout_policy = Box::new(policy);
        self
    }

    /// Replaces the random source
    pub fn with_rng<R: RngCore + 'static>(mut self, rng: R) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Returns the configuration this planner runs with
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Searches from `state` and returns the move to play, if any
    pub fn decide(&mut self, state: &S) -> Result<Option<Move>> {
        let tree = self.search(state)?;
        let chosen = select_move(&tree, state)?;

        match &chosen {
            Some(mv) => debug!("decided on {}", mv),
            None => debug!("declining to move"),
        }

        Ok(chosen)
    }

    /// Runs the configured number of iterations from `root_state`
    ///
    /// Returns the searched tree. `root_state` itself is never modified.
    pub fn search(&mut self, root_state: &S) -> Result<SearchTree<S::Player>> {
        self.statistics = SearchStatistics::new();
        let start_time = Instant::now();

        let mut tree = SearchTree::new(root_state);

        for i in 0..self.config.iterations {
            self.execute_iteration(&mut tree, root_state)?;
            self.statistics.iterations = i + 1;
        }

        self.statistics.total_time = start_time.elapsed();
        self.statistics.tree_size = tree.size();
        self.statistics.max_depth = tree.max_depth();

        debug!(
            "searched {} iterations, {} nodes, depth {}",
            self.statistics.iterations, self.statistics.tree_size, self.statistics.max_depth
        );

        Ok(tree)
    }

    /// Execute a single iteration of the search
    fn execute_iteration(&mut self, tree: &mut SearchTree<S::Player>, root_state: &S) -> Result<()> {
        // 1. Selection phase
        let (selected, state) = self.selection(tree, root_state)?;

        // 2. Expansion phase
        let (expanded, state) = self.expansion(tree, selected, state)?;

        // 3. Rollout phase
        let rollout = self.rollout_policy.simulate(state, &mut *self.rng)?;
        self.statistics.rollout_moves += rollout.moves_played;
        if !rollout.state.is_finished() {
            self.statistics.truncated_rollouts += 1;
        }

        // 4. Backpropagation phase
        let winner = if rollout.state.is_finished() {
            rollout.state.winner()
        } else {
            None
        };
        trace!(
            "{} expanded, rollout of {} moves, winner {:?}",
            expanded,
            rollout.moves_played,
            winner
        );
        tree.backpropagate(expanded, winner.as_ref());

        Ok(())
    }

    /// Selection phase: descend through fully expanded nodes
    fn selection(&self, tree: &SearchTree<S::Player>, root_state: &S) -> Result<(NodeId, S)> {
        let mut current = tree.root();
        let mut state = root_state.clone();

        loop {
            let node = tree.node(current);
            if !node.is_fully_expanded() || node.is_leaf() {
                break;
            }

            let child = match self.selection_policy.select_child(tree, current) {
                Some(child) => child,
                None => break,
            };

            let mv = tree.node(child).mv.ok_or_else(|| {
                PlannerError::InconsistentState(format!("{} has no move", child))
            })?;
            state = state.apply_move(&mv)?;
            current = child;
        }

        Ok((current, state))
    }

    /// Expansion phase: add one child for an untried move
    ///
    /// Finished states, and nodes at the depth limit when one is set, are
    /// returned unchanged.
    fn expansion(
        &mut self,
        tree: &mut SearchTree<S::Player>,
        node: NodeId,
        state: S,
    ) -> Result<(NodeId, S)> {
        if state.is_finished() {
            return Ok((node, state));
        }

        let depth = tree.node(node).depth;
        if self.config.max_depth.map_or(false, |max| depth >= max) {
            return Ok((node, state));
        }

        let untried = &tree.node(node).untried_moves;
        let index = match choose_index(untried.len(), self.config.randomize, &mut *self.rng) {
            Some(index) => index,
            None => return Ok((node, state)),
        };
        let mv = untried[index];

        tree.add_child(node, mv, &state)
    }

    /// Returns the statistics of the last search
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}
