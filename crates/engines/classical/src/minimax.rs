//! Exhaustive minimax without pruning, ordering or extensions.
//!
//! Far too slow for play; kept as the yardstick alpha-beta is checked against.

use std::time::Instant;

use chess_core::{Board, Move, SearchLimits, SearchResult, SearchStats, SearchStrategy};
use tracing::debug;

use crate::eval::evaluate;
use crate::search::is_end_game;

#[derive(Debug, Clone, Copy, Default)]
pub struct MiniMax;

impl MiniMax {
    pub fn new() -> Self {
        Self
    }
}

impl SearchStrategy for MiniMax {
    /// Only `limits.depth` is honoured.
    fn execute(&self, board: &Board, limits: &SearchLimits) -> SearchResult {
        let start = Instant::now();
        let player = board.current_player();
        let white = player.alliance().is_white();
        let mut stats = SearchStats::default();

        let mut best: Option<(Move, i32)> = None;
        for &mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if !transition.is_done() {
                continue;
            }
            stats.nodes += 1;
            let value = minimax(
                transition.board(),
                limits.depth.saturating_sub(1),
                &mut stats,
            );
            let improves = match best {
                None => true,
                Some((_, best_value)) if white => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if improves {
                best = Some((mv, value));
            }
        }

        let (best_move, score) = match best {
            Some(found) => found,
            None => {
                stats.evaluated_boards += 1;
                (Move::Null, evaluate(board, limits.depth))
            }
        };
        stats.elapsed = start.elapsed();
        debug!(best = %best_move, score, nodes = stats.nodes, "minimax finished");

        SearchResult {
            best_move,
            score,
            depth: limits.depth,
            stats,
        }
    }

    fn name(&self) -> &str {
        "MiniMax"
    }
}

fn minimax(board: &Board, depth: u8, stats: &mut SearchStats) -> i32 {
    if depth == 0 || is_end_game(board) {
        stats.evaluated_boards += 1;
        return evaluate(board, depth);
    }

    let player = board.current_player();
    let values = player.legal_moves().iter().filter_map(|&mv| {
        let transition = player.make_move(mv);
        transition.is_done().then(|| {
            stats.nodes += 1;
            minimax(transition.board(), depth - 1, stats)
        })
    });
    let best = if player.alliance().is_white() {
        values.max()
    } else {
        values.min()
    };
    // A position that is not over always has a playable move.
    best.unwrap_or_else(|| evaluate(board, depth))
}

#[cfg(test)]
#[path = "minimax_tests.rs"]
mod minimax_tests;
