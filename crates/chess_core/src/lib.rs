pub mod board;
pub mod fen;
pub mod layouts;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod piece;
pub mod player;
pub mod time_control;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use fen::FenError;
pub use layouts::*;
pub use moves::*;
pub use perft::{perft, perft_divide};
pub use piece::Piece;
pub use player::Player;
pub use time_control::*;
pub use types::*;
pub use uci::*;

use std::time::Duration;

// =============================================================================
// Search strategy trait, implemented by alpha-beta and minimax
// =============================================================================

/// Counters collected while searching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards visited by the recursion, root excluded
    pub nodes: u64,
    /// Leaves handed to the evaluator
    pub evaluated_boards: u64,
    /// Branches cut off because the alpha/beta window closed
    pub cutoffs: u64,
    /// Times a quiescence extension fired
    pub quiescence_extensions: u64,
    pub elapsed: Duration,
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found, [`Move::Null`] when the side to move has none
    pub best_move: Move,
    /// Evaluator score of the best line, positive favours white
    pub score: i32,
    /// Nominal search depth
    pub depth: u8,
    pub stats: SearchStats,
}

/// A way of picking a move for the side to move.
///
/// Searches are pure with respect to the board: they only read it and the
/// boards derived from it, so one board may feed several searches at once.
pub trait SearchStrategy {
    /// Search `board` within `limits`.
    ///
    /// Never fails. With no legal move the result carries [`Move::Null`];
    /// callers tell mate from stalemate through the player predicates.
    fn execute(&self, board: &Board, limits: &SearchLimits) -> SearchResult;

    /// Returns the strategy's name for logs and the driver
    fn name(&self) -> &str;
}
