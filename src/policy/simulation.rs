//! Rollout policies for the planner
//!
//! A rollout plays a game forward from a state, with moves picked by the
//! policy, until the game is finished. The finished state's winner is what
//! gets backpropagated.

use rand::RngCore;

use crate::{
    game_state::{GameState, Move},
    movegen::generate_moves,
    utils::choose_index,
    PlannerError, Result,
};

/// Where a rollout ended
#[derive(Debug, Clone)]
pub struct Rollout<S> {
    /// The last state reached; finished unless a move cap was hit
    pub state: S,

    /// Number of moves played during the rollout
    pub moves_played: usize,
}

/// Trait for policies that play games out
pub trait RolloutPolicy<S: GameState> {
    /// Plays from `state` until the game is finished
    fn simulate(&self, state: S, rng: &mut dyn RngCore) -> Result<Rollout<S>>;

    /// Create a boxed clone of this policy
    fn clone_box(&self) -> Box<dyn RolloutPolicy<S>>;
}

/// Uniform random rollout policy
///
/// Generates the sensible moves at each step and plays one of them uniformly
/// at random. With `randomize` off the first generated move is always played.
#[derive(Debug, Clone)]
pub struct RandomRollout {
    /// Pick moves at random rather than always the first one
    pub randomize: bool,

    /// Stop after this many moves even if the game is not finished
    pub max_moves: Option<usize>,
}

impl RandomRollout {
    /// Creates a new random rollout policy
    pub fn new() -> Self {
        RandomRollout {
            randomize: true,
            max_moves: None,
        }
    }

    /// Sets whether moves are picked at random
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Caps the number of moves per rollout
    pub fn with_max_moves(mut self, max_moves: Option<usize>) -> Self {
        self.max_moves = max_moves;
        self
    }
}

impl Default for RandomRollout {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState + 'static> RolloutPolicy<S> for RandomRollout {
    fn simulate(&self, state: S, rng: &mut dyn RngCore) -> Result<Rollout<S>> {
        let randomize = self.randomize;
        play_out(state, self.max_moves, |_, moves| {
            choose_index(moves.len(), randomize, &mut *rng)
        })
    }

    fn clone_box(&self) -> Box<dyn RolloutPolicy<S>> {
        Box::new(self.clone())
    }
}

/// Heuristic rollout policy
///
/// The heuristic receives the current state and the generated moves and
/// returns the index of the move to play.
#[derive(Clone)]
pub struct HeuristicRollout<F> {
    heuristic: F,
    max_moves: Option<usize>,
}

impl<F> HeuristicRollout<F> {
    /// Creates a new heuristic rollout with the given move picker
    pub fn new(heuristic: F) -> Self {
        HeuristicRollout {
            heuristic,
            max_moves: None,
        }
    }

    /// Caps the number of moves per rollout
    pub fn with_max_moves(mut self, max_moves: Option<usize>) -> Self {
        self.max_moves = max_moves;
        self
    }
}

impl<F> std::fmt::Debug for HeuristicRollout<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeuristicRollout")
            .field("max_moves", &self.max_moves)
            .finish()
    }
}

impl<S, F> RolloutPolicy<S> for HeuristicRollout<F>
where
    S: GameState + 'static,
    F: Fn(&S, &[Move]) -> usize + Clone + 'static,
{
    fn simulate(&self, state: S, _rng: &mut dyn RngCore) -> Result<Rollout<S>> {
        play_out(state, self.max_moves, |state, moves| {
            Some((self.heuristic)(state, moves))
        })
    }

    fn clone_box(&self) -> Box<dyn RolloutPolicy<S>> {
        Box::new(self.clone())
    }
}

// Implement RolloutPolicy for Box<dyn RolloutPolicy>
impl<S: GameState> RolloutPolicy<S> for Box<dyn RolloutPolicy<S>> {
    fn simulate(&self, state: S, rng: &mut dyn RngCore) -> Result<Rollout<S>> {
        (**self).simulate(state, rng)
    }

    fn clone_box(&self) -> Box<dyn RolloutPolicy<S>> {
        (**self).clone_box()
    }
}

/// Shared rollout loop: generate, pick, apply until finished or capped
fn play_out<S, F>(mut state: S, max_moves: Option<usize>, mut pick: F) -> Result<Rollout<S>>
where
    S: GameState,
    F: FnMut(&S, &[Move]) -> Option<usize>,
{
    let mut moves_played = 0;

    while !state.is_finished() {
        if max_moves.map_or(false, |cap| moves_played >= cap) {
            break;
        }

        let moves = generate_moves(&state);
        let mv = pick(&state, &moves[..])
            .and_then(|index| moves.get(index))
            .copied()
            .ok_or_else(|| {
                PlannerError::InconsistentState("rollout policy picked no move".to_string())
            })?;

        state = state.apply_move(&mv)?;
        moves_played += 1;
    }

    Ok(Rollout {
        state,
        moves_played,
    })
}
