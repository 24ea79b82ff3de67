//! Turning a finished search into a move.
//!
//! The most visited child of the root wins (visit counts are steadier than
//! win rates over a few iterations). The chosen attack is then checked once
//! more against the root state: if half the source garrison would not beat
//! the target's garrison, the planner declines to move.

use log::debug;

use crate::{
    game_state::{GameState, Move},
    tree::{NodeId, SearchTree},
    PlannerError, Result,
};

/// Returns the root child with the most visits
///
/// Ties go to the child expanded last. `None` when the root has no children.
pub fn most_visited_child<P: Clone + PartialEq>(tree: &SearchTree<P>) -> Option<NodeId> {
    let mut best: Option<(NodeId, u64)> = None;

    for (id, child) in tree.children(tree.root()) {
        match best {
            Some((_, visits)) if child.visits < visits => {}
            _ => best = Some((id, child.visits)),
        }
    }

    best.map(|(id, _)| id)
}

/// Picks the move to play from a searched tree
///
/// `root_state` must be the state the search started from. Returns `None`
/// when the best child passes, when nothing was expanded, or when the attack
/// fails the garrison check against `root_state`.
pub fn select_move<S: GameState>(
    tree: &SearchTree<S::Player>,
    root_state: &S,
) -> Result<Option<Move>> {
    let best = match most_visited_child(tree) {
        Some(id) => tree.node(id),
        None => return Ok(None),
    };

    let (source, target) = match best.mv {
        Some(Move::Attack { source, target }) => (source, target),
        Some(Move::Pass) | None => return Ok(None),
    };

    let planets = root_state.planets();
    for planet in [source, target] {
        if !planets.contains(&planet) {
            return Err(PlannerError::InconsistentState(format!(
                "planet {} is not on the map",
                planet
            )));
        }
    }

    let source_garrison = root_state.garrison(source);
    let target_garrison = root_state.garrison(target);

    // Same as source / 2 <= target, without rounding
    if source_garrison <= target_garrison.saturating_mul(2) {
        debug!(
            "rejecting {} -> {}: garrison {} cannot overwhelm {}",
            source, target, source_garrison, target_garrison
        );
        return Ok(None);
    }

    Ok(best.mv)
}
