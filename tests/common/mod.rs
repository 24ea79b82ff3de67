//! A small planet conquest game used by the tests, benchmark and demo.
//!
//! Two players (1 and 2) take turns. An attack sends all but one ship from
//! the source; a fleet that outnumbers the target's garrison captures it.
//! Every planet owned by the player who just moved grows by one ship. The
//! game ends when a player holds no planets or the move limit is reached, in
//! which case the larger total garrison wins.

#![allow(dead_code)]

use planet_mcts::{GameState, Move, PlanetId, PlannerError};

#[derive(Clone, Debug, PartialEq)]
pub struct Skirmish {
    pub owners: Vec<Option<u8>>,
    pub garrisons: Vec<u64>,
    pub fleets: Vec<(PlanetId, PlanetId)>,
    pub turn: u8,
    pub moves_played: usize,
    pub max_moves: usize,
}

impl Skirmish {
    pub fn new(max_moves: usize) -> Self {
        Skirmish {
            owners: Vec::new(),
            garrisons: Vec::new(),
            fleets: Vec::new(),
            turn: 1,
            moves_played: 0,
            max_moves,
        }
    }

    pub fn planet(mut self, owner: Option<u8>, garrison: u64) -> Self {
        self.owners.push(owner);
        self.garrisons.push(garrison);
        self
    }

    pub fn fleet(mut self, source: usize, target: usize) -> Self {
        self.fleets.push((PlanetId(source), PlanetId(target)));
        self
    }

    pub fn to_move(mut self, player: u8) -> Self {
        self.turn = player;
        self
    }

    /// Player 1 holds planet 0 with 10 ships, player 2 holds planet 1 with 3
    pub fn ten_versus_three() -> Self {
        Skirmish::new(6).planet(Some(1), 10).planet(Some(2), 3)
    }

    fn total_garrison(&self, player: u8) -> u64 {
        self.owners
            .iter()
            .zip(&self.garrisons)
            .filter(|(owner, _)| **owner == Some(player))
            .map(|(_, garrison)| *garrison)
            .sum()
    }

    fn holds_planets(&self, player: u8) -> bool {
        self.owners.iter().any(|owner| *owner == Some(player))
    }

    fn opponent(&self) -> u8 {
        3 - self.turn
    }
}

impl GameState for Skirmish {
    type Player = u8;
    type Fleet = (PlanetId, PlanetId);

    fn planets(&self) -> Vec<PlanetId> {
        (0..self.owners.len()).map(PlanetId).collect()
    }

    fn planets_of(&self, player: &u8) -> Vec<PlanetId> {
        self.owners
            .iter()
            .enumerate()
            .filter(|(_, owner)| **owner == Some(*player))
            .map(|(id, _)| PlanetId(id))
            .collect()
    }

    fn garrison(&self, planet: PlanetId) -> u64 {
        self.garrisons[planet.0]
    }

    fn fleets(&self) -> Vec<(PlanetId, PlanetId)> {
        self.fleets.clone()
    }

    fn whose_turn(&self) -> u8 {
        self.turn
    }

    fn is_finished(&self) -> bool {
        self.moves_played >= self.max_moves || !self.holds_planets(1) || !self.holds_planets(2)
    }

    fn winner(&self) -> Option<u8> {
        if !self.holds_planets(1) {
            return Some(2);
        }
        if !self.holds_planets(2) {
            return Some(1);
        }
        if self.moves_played < self.max_moves {
            return None;
        }

        let (first, second) = (self.total_garrison(1), self.total_garrison(2));
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(1),
            std::cmp::Ordering::Less => Some(2),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn apply_move(&self, mv: &Move) -> planet_mcts::Result<Self> {
        let mut next = self.clone();

        if let Move::Attack { source, target } = *mv {
            let (s, t) = (source.0, target.0);
            if s >= self.owners.len()
                || t >= self.owners.len()
                || self.owners[s] != Some(self.turn)
                || self.garrisons[s] <= 1
            {
                return Err(PlannerError::InvalidMove(*mv));
            }

            let ships = next.garrisons[s] - 1;
            next.garrisons[s] = 1;
            if next.owners[t] == Some(self.turn) {
                next.garrisons[t] += ships;
            } else if ships > next.garrisons[t] {
                next.owners[t] = Some(self.turn);
                next.garrisons[t] = ships - next.garrisons[t];
            } else {
                next.garrisons[t] -= ships;
            }
        }

        for (owner, garrison) in next.owners.iter().zip(next.garrisons.iter_mut()) {
            if *owner == Some(self.turn) {
                *garrison += 1;
            }
        }

        next.fleets.clear();
        next.moves_played += 1;
        next.turn = self.opponent();
        Ok(next)
    }
}
