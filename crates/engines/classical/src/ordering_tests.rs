use super::*;
use chess_core::{Board, Coordinate, MoveFactory};

fn sq(s: &str) -> Coordinate {
    Coordinate::from_algebraic(s).unwrap()
}

#[test]
fn test_mvv_lva_prefers_cheap_attackers_on_rich_victims() {
    // Pawn and queen can both take the rook on d5.
    let board = Board::from_fen("4k3/8/8/3r4/4P3/8/8/3QK3 w - - 0 1").unwrap();
    let pawn_takes = MoveFactory::create_move(&board, sq("e4"), sq("d5"));
    let queen_takes = MoveFactory::create_move(&board, sq("d1"), sq("d5"));
    let quiet = MoveFactory::create_move(&board, sq("e4"), sq("e5"));

    assert_eq!(mvv_lva(&pawn_takes), CAPTURE_BASE + 500 - 100);
    assert_eq!(mvv_lva(&queen_takes), CAPTURE_BASE + 500 - 900);
    assert_eq!(mvv_lva(&quiet), 0);
    assert_eq!(mvv_lva(&Move::Null), 0);
    assert!(mvv_lva(&queen_takes) > mvv_lva(&quiet));
}

#[test]
fn test_root_ordering_puts_checks_first() {
    let board = Board::from_fen("4k3/8/8/3r4/4P3/8/8/R3K3 w - - 0 1").unwrap();
    let mut moves = board.current_player().legal_moves().to_vec();
    order_root(&board, &mut moves, MoveOrdering::Heuristic);

    assert!(gives_check(&board, &moves[0]));
    // The capture comes right after every checking move.
    let first_non_check = moves.iter().position(|m| !gives_check(&board, m)).unwrap();
    assert_eq!(
        moves[first_non_check],
        MoveFactory::create_move(&board, sq("e4"), sq("d5"))
    );
}

#[test]
fn test_castles_come_before_captures_below_the_root() {
    let board = Board::from_fen("4k3/8/8/8/7n/8/8/4K2R w K - 0 1").unwrap();
    let mut moves = board.current_player().legal_moves().to_vec();
    order_deep(&mut moves, MoveOrdering::Heuristic);
    assert!(moves[0].is_castle());
    assert!(moves[1].is_attack());
}

#[test]
fn test_shuffle_keeps_generation_order() {
    let board = Board::from_fen("4k3/8/8/3r4/4P3/8/8/R3K3 w - - 0 1").unwrap();
    let generated = board.current_player().legal_moves().to_vec();
    let mut moves = generated.clone();
    order_root(&board, &mut moves, MoveOrdering::Shuffle);
    assert_eq!(moves, generated);
    order_deep(&mut moves, MoveOrdering::Shuffle);
    assert_eq!(moves, generated);
}

#[test]
fn test_ordering_is_stable_for_equal_keys() {
    let board = Board::standard();
    let generated = board.current_player().legal_moves().to_vec();
    let mut moves = generated.clone();
    order_deep(&mut moves, MoveOrdering::Heuristic);
    assert_eq!(moves, generated);
}
