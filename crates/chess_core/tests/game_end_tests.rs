//! Checkmate and stalemate detection.
//!
//! Repetition and the fifty-move rule need game history, which callers own,
//! so only the position-local endings are covered here.

use chess_core::Board;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    let b = board("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    let black = b.current_player();
    assert!(black.is_in_stalemate());
    assert!(!black.is_in_checkmate());
    assert!(!black.is_in_check());
    // Pseudo-legal candidates exist; none of them is playable.
    assert!(!black.legal_moves().is_empty());
    assert!(black.playable_moves().is_empty());
}

#[test]
fn test_stalemate_king_and_pawn() {
    let b = board("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(b.current_player().is_in_stalemate());
}

#[test]
fn test_not_stalemate_when_a_pawn_can_move() {
    let b = board("k7/2K5/1Q6/8/8/8/7p/8 b - - 0 1");
    assert!(!b.current_player().is_in_stalemate());
}

// =============================================================================
// Checkmate
// =============================================================================

#[test]
fn test_back_rank_mate() {
    let b = board("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    let black = b.current_player();
    assert!(black.is_in_check());
    assert!(black.is_in_checkmate());
    assert!(!black.is_in_stalemate());
}

#[test]
fn test_smothered_mate() {
    let b = board("6rk/5Npp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(b.current_player().is_in_checkmate());
}

#[test]
fn test_check_that_can_be_blocked_is_not_mate() {
    let b = board("R5k1/5ppp/8/8/8/8/3r4/6K1 b - - 0 1");
    let black = b.current_player();
    assert!(black.is_in_check());
    assert!(!black.is_in_checkmate());
}

#[test]
fn test_checker_can_be_captured() {
    let b = board("6k1/5pQp/8/8/8/8/8/6K1 b - - 0 1");
    let black = b.current_player();
    assert!(black.is_in_check());
    assert!(!black.is_in_checkmate());
}

#[test]
fn test_only_side_to_move_is_judged() {
    // White is mated; black's predicates stay quiet.
    let b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(b.white_player().is_in_checkmate());
    assert!(!b.black_player().is_in_check());
    assert!(!b.black_player().is_in_checkmate());
    assert!(!b.black_player().is_in_stalemate());
}
