//! Material, mobility and king-safety evaluation.

use chess_core::{Board, PieceKind, Player};

/// Flat bonus when the opponent is in check.
pub const CHECK_BONUS: i32 = 50;
/// Base bonus for mating the opponent, scaled by [`depth_bonus`].
pub const CHECKMATE_BONUS: i32 = 10_000;
/// Bonus once a side has castled.
pub const CASTLE_BONUS: i32 = 60;

/// Scores the board from white's point of view: white's terms minus black's.
///
/// `depth` is the search depth still remaining when the board was reached,
/// so a mate found with more depth left (a faster mate) scores higher.
///
/// Returns a score in centipawns:
/// - Positive = good for white
/// - Negative = good for black
pub fn evaluate(board: &Board, depth: u8) -> i32 {
    score_player(board.white_player(), depth) - score_player(board.black_player(), depth)
}

fn score_player(player: Player<'_>, depth: u8) -> i32 {
    material(player) + mobility(player) + check(player) + checkmate(player, depth) + castled(player)
}

/// Sum of piece values, king excluded.
fn material(player: Player<'_>) -> i32 {
    player
        .active_pieces()
        .iter()
        .filter(|p| p.kind != PieceKind::King)
        .map(|p| p.value())
        .sum()
}

fn mobility(player: Player<'_>) -> i32 {
    player.legal_moves().len() as i32
}

fn check(player: Player<'_>) -> i32 {
    if player.opponent().is_in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

fn checkmate(player: Player<'_>, depth: u8) -> i32 {
    if player.opponent().is_in_checkmate() {
        CHECKMATE_BONUS * depth_bonus(depth)
    } else {
        0
    }
}

fn castled(player: Player<'_>) -> i32 {
    if player.is_castled() {
        CASTLE_BONUS
    } else {
        0
    }
}

pub fn depth_bonus(depth: u8) -> i32 {
    if depth == 0 {
        1
    } else {
        100 * depth as i32
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
