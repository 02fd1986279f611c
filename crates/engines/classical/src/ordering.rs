//! Move ordering for alpha-beta. Ordering only changes how much gets
//! pruned, never the result.

use std::cmp::Reverse;

use chess_core::{Board, Move, MoveOrdering};

/// Base score that lifts every capture above every quiet move.
const CAPTURE_BASE: i32 = 10_000;

/// Most valuable victim, least valuable aggressor. Zero for non-captures.
pub fn mvv_lva(mv: &Move) -> i32 {
    match (mv.captured(), mv.moved_piece()) {
        (Some(victim), Some(attacker)) => CAPTURE_BASE + victim.value() - attacker.value(),
        _ => 0,
    }
}

/// Whether playing `mv` on `board` leaves the opponent in check.
pub fn gives_check(board: &Board, mv: &Move) -> bool {
    mv.execute(board)
        .map(|next| next.current_player().is_in_check())
        .unwrap_or(false)
}

/// Root ordering: checks, then castles, then MVV-LVA, all descending.
/// Equal keys keep generation order.
pub fn order_root(board: &Board, moves: &mut [Move], ordering: MoveOrdering) {
    if ordering == MoveOrdering::Shuffle {
        return;
    }
    moves.sort_by_cached_key(|mv| Reverse((gives_check(board, mv), mv.is_castle(), mvv_lva(mv))));
}

/// Ordering below the root: castles, then MVV-LVA.
pub fn order_deep(moves: &mut [Move], ordering: MoveOrdering) {
    if ordering == MoveOrdering::Shuffle {
        return;
    }
    moves.sort_by_key(|mv| Reverse((mv.is_castle(), mvv_lva(mv))));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
