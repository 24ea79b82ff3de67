//! Move generation with attack pruning.
//!
//! The search budget is a handful of iterations per decision, so the branching
//! factor has to stay small. Only attacks that can plausibly win are offered:
//! the source must hold more than twice the target's garrison, must not
//! already have a fleet underway to the same target, and must not be under
//! attack itself.

use log::trace;

use crate::game_state::{Fleet, GameState, Move, PlanetId};

/// A source planet must hold more than this multiple of the target's garrison
pub const CONQUEST_RATIO: u64 = 2;

/// What the fleets in flight say about a candidate attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetAnalysis {
    /// A fleet from the source to the destination is already underway
    pub exists_already: bool,

    /// Some fleet is heading towards the source planet
    pub incoming: bool,
}

/// Inspects the in-flight fleets for an attack from `source` to `destination`
pub fn analyze_fleets<S: GameState>(
    state: &S,
    source: PlanetId,
    destination: PlanetId,
) -> FleetAnalysis {
    let mut analysis = FleetAnalysis::default();

    for fleet in state.fleets() {
        if fleet.source() == source && fleet.target() == destination {
            analysis.exists_already = true;
        }
        if fleet.target() == source {
            analysis.incoming = true;
        }
    }

    analysis
}

/// Enumerates the sensible moves for the player to move
///
/// The result is never empty: when no attack survives the pruning the single
/// move [`Move::Pass`] is returned.
pub fn generate_moves<S: GameState>(state: &S) -> Vec<Move> {
    let mine = state.planets_of(&state.whose_turn());
    let all = state.planets();

    let mut moves = Vec::new();
    for &source in &mine {
        let garrison = state.garrison(source);
        if garrison <= 1 {
            continue;
        }

        for &target in &all {
            let analysis = analyze_fleets(state, source, target);
            if analysis.incoming {
                // The source is under attack, keep every ship at home
                break;
            }

            let needed = state.garrison(target).saturating_mul(CONQUEST_RATIO);
            if garrison > needed && !analysis.exists_already {
                moves.push(Move::Attack { source, target });
            }
        }
    }

    if moves.is_empty() {
        moves.push(Move::Pass);
    }

    trace!("generated {} moves", moves.len());
    moves
}
