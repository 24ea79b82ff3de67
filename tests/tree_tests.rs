mod common;

use common::Skirmish;
use planet_mcts::{GameState, Move, PlannerError, SearchTree};

#[test]
fn test_root_node() {
    let state = Skirmish::ten_versus_three();
    let tree = SearchTree::new(&state);

    let root = tree.node(tree.root());
    assert!(root.mv.is_none());
    assert!(root.parent.is_none());
    assert!(root.is_leaf());
    assert!(!root.is_fully_expanded());
    assert_eq!(root.untried_moves, vec![Move::attack(0, 1)]);
    assert_eq!(root.player, 1);
    assert_eq!(root.depth, 0);
    assert_eq!(tree.size(), 1);
}

#[test]
fn test_add_child_moves_untried_into_children() {
    let state = Skirmish::ten_versus_three();
    let mut tree = SearchTree::new(&state);
    let root = tree.root();

    let (child, child_state) = tree.add_child(root, Move::attack(0, 1), &state).unwrap();

    assert!(tree.node(root).is_fully_expanded());
    assert_eq!(tree.node(root).children, vec![child]);
    assert_eq!(tree.size(), 2);

    let node = tree.node(child);
    assert_eq!(node.mv, Some(Move::attack(0, 1)));
    assert_eq!(node.parent, Some(root));
    assert_eq!(node.depth, 1);
    // Statistics are kept for the player who made the move
    assert_eq!(node.player, 1);
    assert_eq!(child_state.whose_turn(), 2);
    assert_eq!(node.untried_moves, planet_mcts::generate_moves(&child_state));

    // The parent state is untouched
    assert_eq!(state, Skirmish::ten_versus_three());
}

#[test]
fn test_add_child_rejects_move_that_is_not_untried() {
    let state = Skirmish::ten_versus_three();
    let mut tree = SearchTree::new(&state);
    let root = tree.root();

    let result = tree.add_child(root, Move::attack(1, 0), &state);
    assert_eq!(result.err(), Some(PlannerError::InvalidMove(Move::attack(1, 0))));

    tree.add_child(root, Move::attack(0, 1), &state).unwrap();
    let again = tree.add_child(root, Move::attack(0, 1), &state);
    assert!(matches!(again, Err(PlannerError::InvalidMove(_))));
    assert_eq!(tree.size(), 2);
}

#[test]
fn test_update_keeps_wins_below_visits() {
    let state = Skirmish::ten_versus_three();
    let mut tree = SearchTree::new(&state);
    let root = tree.root();

    for round in 0..25 {
        tree.node_mut(root).update(round % 3 == 0);
        let node = tree.node(root);
        assert!(node.wins <= node.visits);
    }

    let node = tree.node(root);
    assert_eq!(node.visits, 25);
    assert_eq!(node.wins, 9);
    assert!((node.win_rate() - 9.0 / 25.0).abs() < 1e-9);
}

#[test]
fn test_backpropagate_walks_to_root() {
    let state = Skirmish::new(8)
        .planet(Some(1), 10)
        .planet(Some(2), 10)
        .planet(None, 1);
    let mut tree = SearchTree::new(&state);
    let root = tree.root();

    let (first, first_state) = tree.add_child(root, Move::attack(0, 2), &state).unwrap();
    let second_move = tree.node(first).untried_moves[0];
    let (second, _) = tree.add_child(first, second_move, &first_state).unwrap();

    assert_eq!(tree.node(first).player, 1);
    assert_eq!(tree.node(second).player, 2);

    tree.backpropagate(second, Some(&2));
    tree.backpropagate(second, Some(&1));
    tree.backpropagate(first, None);

    assert_eq!(tree.node(second).visits, 2);
    assert_eq!(tree.node(second).wins, 1);
    assert_eq!(tree.node(first).visits, 3);
    assert_eq!(tree.node(first).wins, 1);
    assert_eq!(tree.node(root).visits, 3);
    assert_eq!(tree.node(root).wins, 1);
    assert_eq!(tree.max_depth(), 2);
}
