//! Skirmish example for the planner
//!
//! Two planners play a small planet conquest game against each other.
//! Run with `RUST_LOG=debug` to see every decision the planner makes.

#[path = "../tests/common/mod.rs"]
mod common;

use common::Skirmish;
use planet_mcts::{GameState, Move, Planner, PlannerConfig};

fn main() {
    // Initialize logging
    env_logger::init();

    println!("Planner Skirmish Example");
    println!("========================");
    println!();

    let mut game = Skirmish::new(30)
        .planet(Some(1), 25)
        .planet(Some(2), 25)
        .planet(None, 2)
        .planet(None, 4)
        .planet(None, 6)
        .planet(None, 3);

    // Player 1 thinks a little harder than player 2
    let mut first = Planner::new(PlannerConfig::default().with_iterations(50))
        .expect("default configuration is valid");
    let mut second = Planner::new(PlannerConfig::default())
        .expect("default configuration is valid");

    // Main game loop
    while !game.is_finished() {
        let planner = if game.whose_turn() == 1 {
            &mut first
        } else {
            &mut second
        };

        let chosen = match planner.decide(&game) {
            Ok(chosen) => chosen,
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        };

        let mv = chosen.unwrap_or(Move::Pass);
        println!(
            "Turn {:>2}: player {} plays {} ({})",
            game.moves_played + 1,
            game.whose_turn(),
            mv,
            display_map(&game)
        );

        game = match game.apply_move(&mv) {
            Ok(next) => next,
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        };
    }

    println!();
    println!("Final map: {}", display_map(&game));

    // Report the result
    match game.winner() {
        Some(winner) => println!("Player {} wins!", winner),
        None => println!("The game is a draw!"),
    }
}

/// One `owner:garrison` pair per planet
fn display_map(game: &Skirmish) -> String {
    game.owners
        .iter()
        .zip(&game.garrisons)
        .map(|(owner, garrison)| match owner {
            Some(player) => format!("P{}:{}", player, garrison),
            None => format!("--:{}", garrison),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
