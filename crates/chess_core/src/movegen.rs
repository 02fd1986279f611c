use crate::{
    board::Board,
    moves::{CastleSide, Move},
    piece::Piece,
    types::*,
};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// File the king must stand on to castle.
pub const KING_HOME_FILE: i8 = 4;

/// Pseudo-legal moves of every piece of `alliance`, in tile order.
/// Castling is generated separately because it needs the opponent's attacks.
pub fn pseudo_legal_moves(board: &Board, alliance: Alliance) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for piece in &board.side(alliance).pieces {
        piece_moves_into(piece, board, &mut out);
    }
    out
}

/// Generate the moves of a single piece into the provided buffer.
pub fn piece_moves_into(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => gen_pawn(piece, board, out),
        PieceKind::Knight => gen_step(piece, board, out, &KNIGHT_OFFSETS),
        PieceKind::Bishop => gen_slider(piece, board, out, &DIAGONALS),
        PieceKind::Rook => gen_slider(piece, board, out, &ORTHOGONALS),
        PieceKind::Queen => {
            gen_slider(piece, board, out, &DIAGONALS);
            gen_slider(piece, board, out, &ORTHOGONALS);
        }
        PieceKind::King => gen_step(piece, board, out, &KING_OFFSETS),
    }
}

fn gen_pawn(pawn: &Piece, board: &Board, out: &mut Vec<Move>) {
    let alliance = pawn.alliance;
    let dir = alliance.direction();

    // forward 1, then the jump from the home rank
    let one = pawn.coordinate.offset(0, dir);
    if one.is_on_board() && !board.is_occupied(one) {
        push_pawn_move(pawn, one, None, out);

        if pawn.coordinate.y == alliance.pawn_rank() {
            let two = one.offset(0, dir);
            if two.is_on_board() && !board.is_occupied(two) {
                out.push(Move::PawnJump {
                    piece: *pawn,
                    to: two,
                });
            }
        }
    }

    // captures + en-passant
    for dx in [-1, 1] {
        let to = pawn.coordinate.offset(dx, dir);
        if !to.is_on_board() {
            continue;
        }
        match board.piece_at(to) {
            Some(target) if target.alliance != alliance => {
                push_pawn_move(pawn, to, Some(*target), out);
            }
            Some(_) => {}
            None => {
                if let Some(ep) = board.en_passant_pawn() {
                    if ep.alliance != alliance && ep.coordinate == pawn.coordinate.offset(dx, 0) {
                        out.push(Move::EnPassant {
                            piece: *pawn,
                            to,
                            captured: *ep,
                        });
                    }
                }
            }
        }
    }
}

/// Push a pawn step or capture, wrapping it as a promotion on the last rank.
fn push_pawn_move(pawn: &Piece, to: Coordinate, captured: Option<Piece>, out: &mut Vec<Move>) {
    if to.y == pawn.alliance.promotion_rank() {
        out.push(Move::Promotion {
            piece: *pawn,
            to,
            captured,
            promote_to: PieceKind::Queen,
        });
        return;
    }
    out.push(match captured {
        Some(captured) => Move::Attack {
            piece: *pawn,
            to,
            captured,
        },
        None => Move::Quiet { piece: *pawn, to },
    });
}

/// One square per offset: knights and kings.
fn gen_step(piece: &Piece, board: &Board, out: &mut Vec<Move>, offsets: &[(i8, i8)]) {
    for &(dx, dy) in offsets {
        let to = piece.coordinate.offset(dx, dy);
        if to.is_on_board() {
            step_to(piece, board, to, out);
        }
    }
}

fn gen_slider(piece: &Piece, board: &Board, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dx, dy) in dirs {
        let mut to = piece.coordinate.offset(dx, dy);
        while to.is_on_board() {
            if !step_to(piece, board, to, out) {
                break;
            }
            to = to.offset(dx, dy);
        }
    }
}

/// Emit the move onto `to` if allowed. Returns true when the tile was empty,
/// meaning a slider may keep going.
fn step_to(piece: &Piece, board: &Board, to: Coordinate, out: &mut Vec<Move>) -> bool {
    match board.piece_at(to) {
        None => {
            out.push(Move::Quiet { piece: *piece, to });
            true
        }
        Some(target) => {
            if target.alliance != piece.alliance {
                out.push(Move::Attack {
                    piece: *piece,
                    to,
                    captured: *target,
                });
            }
            false
        }
    }
}

/// Castling moves available to `alliance`: zero, one or two.
///
/// King and rook must both be unmoved on their home squares, the tiles
/// between them empty, and neither the king's tile nor any tile it crosses
/// attacked by the opponent.
pub fn castle_moves(board: &Board, alliance: Alliance, in_check: bool) -> Vec<Move> {
    let mut out = Vec::new();
    let king = board.side(alliance).king;
    let rank = alliance.home_rank();
    if in_check || !king.first_move || king.coordinate != Coordinate::new(KING_HOME_FILE, rank) {
        return out;
    }

    let enemy = alliance.opposite();
    for side in CastleSide::BOTH {
        let rook = match board.piece_at(Coordinate::new(side.rook_file(), rank)) {
            Some(r) if r.kind == PieceKind::Rook && r.alliance == alliance && r.first_move => *r,
            _ => continue,
        };
        if side
            .empty_files()
            .iter()
            .any(|&x| board.is_occupied(Coordinate::new(x, rank)))
        {
            continue;
        }
        if side
            .safe_files()
            .iter()
            .any(|&x| board.is_attacked(Coordinate::new(x, rank), enemy))
        {
            continue;
        }
        out.push(Move::Castle {
            king,
            to: Coordinate::new(side.king_to_file(), rank),
            rook,
            rook_to: Coordinate::new(side.rook_to_file(), rank),
            side,
        });
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
