use super::*;
use crate::AlphaBeta;
use chess_core::{move_to_uci, MoveOrdering};

#[test]
fn test_minimax_finds_mate_in_one() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1").unwrap();
    let result = MiniMax::new().execute(&board, &SearchLimits::depth(2));
    assert_eq!(move_to_uci(result.best_move), "e1e8");
}

#[test]
fn test_minimax_returns_null_on_stalemate() {
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let result = MiniMax::new().execute(&board, &SearchLimits::depth(2));
    assert!(result.best_move.is_null());
    assert_eq!(result.score, evaluate(&board, 2));
}

#[test]
fn test_pruning_visits_fewer_nodes_with_same_answer() {
    let board = Board::standard();
    let limits = SearchLimits::depth(3).with_ordering(MoveOrdering::Shuffle);
    let full = MiniMax::new().execute(&board, &limits);
    let pruned = AlphaBeta::new().execute(&board, &limits);

    assert_eq!(full.best_move, pruned.best_move);
    assert_eq!(full.score, pruned.score);
    assert!(pruned.stats.nodes < full.stats.nodes);
    assert_eq!(full.stats.cutoffs, 0);
}
