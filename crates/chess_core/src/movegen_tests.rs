use super::*;

fn castles(board: &Board) -> Vec<Move> {
    board
        .current_player()
        .legal_moves()
        .iter()
        .copied()
        .filter(|m| m.is_castle())
        .collect()
}

fn moves_of(board: &Board, square: &str) -> Vec<Move> {
    let at = Coordinate::from_algebraic(square).unwrap();
    board.piece_at(at).unwrap().pseudo_legal_moves(board)
}

#[test]
fn test_startpos_moves() {
    let board = Board::standard();
    // Starting position has 20 legal moves
    assert_eq!(board.current_player().legal_moves().len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    assert_eq!(board.current_player().playable_moves().len(), 48);
}

#[test]
fn test_slider_stops_at_ally_and_captures_enemy() {
    let board = Board::from_fen("4k3/8/3P4/8/3R1p2/8/8/4K3 w - - 0 1").unwrap();
    let moves = moves_of(&board, "d4");
    assert_eq!(moves.len(), 9);
    let attacks: Vec<&Move> = moves.iter().filter(|m| m.is_attack()).collect();
    assert_eq!(attacks.len(), 1);
    assert_eq!(attacks[0].destination(), Coordinate::from_algebraic("f4"));
}

#[test]
fn test_knight_in_corner() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
    assert_eq!(moves_of(&board, "a1").len(), 2);
}

#[test]
fn test_pawn_jump_needs_both_tiles_empty() {
    let blocked_far = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
    let moves = moves_of(&blocked_far, "e2");
    assert_eq!(moves.len(), 1);
    assert!(matches!(moves[0], Move::Quiet { .. }));

    let blocked_near = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
    assert!(moves_of(&blocked_near, "e2").is_empty());
}

#[test]
fn test_pawn_off_home_rank_cannot_jump() {
    let board = Board::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1").unwrap();
    let moves = moves_of(&board, "e3");
    assert_eq!(moves.len(), 1);
    assert!(!moves.iter().any(|m| matches!(m, Move::PawnJump { .. })));
}

#[test]
fn test_pawn_diagonals_are_capture_only() {
    let board = Board::from_fen("4k3/8/8/8/8/3p4/4P3/4K3 w - - 0 1").unwrap();
    let moves = moves_of(&board, "e2");
    // e3, e4 and the capture on d3; f3 is empty so nothing there
    assert_eq!(moves.len(), 3);
    assert_eq!(moves.iter().filter(|m| m.is_attack()).count(), 1);
}

#[test]
fn test_last_rank_moves_are_promotions() {
    let board = Board::from_fen("r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = moves_of(&board, "b7");
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.is_promotion()));
    assert_eq!(moves.iter().filter(|m| m.is_attack()).count(), 1);
}

#[test]
fn test_both_castles_available() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let castles = castles(&board);
    assert_eq!(castles.len(), 2);
    assert!(castles.iter().any(|m| matches!(
        m,
        Move::Castle {
            side: CastleSide::KingSide,
            ..
        }
    )));
}

#[test]
fn test_attacked_transit_square_blocks_castle() {
    // Black rook on the open f-file covers f1.
    let board = Board::from_fen("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1").unwrap();
    let castles = castles(&board);
    assert_eq!(castles.len(), 1);
    assert!(matches!(
        castles[0],
        Move::Castle {
            side: CastleSide::QueenSide,
            ..
        }
    ));
}

#[test]
fn test_attacked_b_file_does_not_block_queen_side() {
    let board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert_eq!(castles(&board).len(), 2);
}

#[test]
fn test_no_castling_out_of_check() {
    let board = Board::from_fen("4k3/4r3/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(board.current_player().is_in_check());
    assert!(castles(&board).is_empty());
}

#[test]
fn test_moved_rook_cannot_castle() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1").unwrap();
    let castles = castles(&board);
    assert_eq!(castles.len(), 1);
    assert!(matches!(
        castles[0],
        Move::Castle {
            side: CastleSide::QueenSide,
            ..
        }
    ));
}

#[test]
fn test_occupied_transit_blocks_castle() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").unwrap();
    assert!(castles(&board).is_empty());
}
