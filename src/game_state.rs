//! Traits defining the game state consumed by the planner.
//!
//! The planner never looks inside a game. Everything it needs (planets,
//! garrisons, fleets in flight, whose turn it is, who won) is read through the
//! [`GameState`] trait, and successor states are produced with
//! [`GameState::apply_move`].

use std::fmt::{self, Debug};

use crate::Result;

/// Identifier of a planet
///
/// Planets are always compared by identifier, never by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanetId(pub usize);

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single decision: send an attack from one planet to another, or pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Launch a fleet from `source` towards `target`
    Attack {
        /// Planet the fleet leaves from
        source: PlanetId,
        /// Planet the fleet is sent to
        target: PlanetId,
    },

    /// Do nothing this turn
    ///
    /// Passing is always available, so a player is never left without a move.
    Pass,
}

impl Move {
    /// Shorthand for an attack between two planet ids
    pub fn attack(source: usize, target: usize) -> Self {
        Move::Attack {
            source: PlanetId(source),
            target: PlanetId(target),
        }
    }

    /// Returns true for the pass move
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Attack { source, target } => write!(f, "{} -> {}", source, target),
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// Trait for players in a game
pub trait Player: Clone + Debug + PartialEq {}

impl Player for usize {}
impl Player for u8 {}
impl Player for i32 {}
impl Player for char {}
impl Player for String {}

/// A fleet currently travelling between two planets
pub trait Fleet {
    /// Planet the fleet was launched from
    fn source(&self) -> PlanetId;

    /// Planet the fleet is heading to
    fn target(&self) -> PlanetId;
}

impl Fleet for (PlanetId, PlanetId) {
    fn source(&self) -> PlanetId {
        self.0
    }

    fn target(&self) -> PlanetId {
        self.1
    }
}

/// Trait defining the game state interface required by the planner
///
/// `Clone` must produce an independent deep copy. The planner clones the
/// caller's state before exploring and never mutates it.
pub trait GameState: Clone {
    /// The type of players in this game
    type Player: Player;

    /// The type of in-flight fleets reported by [`GameState::fleets`]
    type Fleet: Fleet;

    /// Returns every planet on the map
    fn planets(&self) -> Vec<PlanetId>;

    /// Returns the planets currently owned by `player`
    fn planets_of(&self, player: &Self::Player) -> Vec<PlanetId>;

    /// Returns the number of ships stationed at `planet`
    fn garrison(&self, planet: PlanetId) -> u64;

    /// Returns the fleets currently in flight
    fn fleets(&self) -> Vec<Self::Fleet>;

    /// Returns the player whose turn it is
    fn whose_turn(&self) -> Self::Player;

    /// Returns true once the game has ended
    fn is_finished(&self) -> bool;

    /// Returns the winner of a finished game
    ///
    /// Only meaningful when [`GameState::is_finished`] is true. Unfinished
    /// games and draws report `None`.
    fn winner(&self) -> Option<Self::Player>;

    /// Returns the state that follows from playing `mv`
    ///
    /// The receiver must not be modified. Implementations should report a move
    /// that is not legal in this state as [`crate::PlannerError::InvalidMove`].
    fn apply_move(&self, mv: &Move) -> Result<Self>;
}
