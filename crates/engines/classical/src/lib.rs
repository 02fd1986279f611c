//! Classical Chess Engine
//!
//! Alpha-beta search over immutable boards with a material, mobility and
//! king-safety evaluator.

mod config;
mod eval;
mod minimax;
mod ordering;
mod search;

use chess_core::{Board, SearchLimits, SearchResult, SearchStrategy};

/// Classical chess engine: alpha-beta under a fixed set of limits.
///
/// This engine uses:
/// - Min/max alpha-beta search with fail-hard pruning
/// - Checks, castles and MVV-LVA ordering
/// - Quiescence extension bounded by a per-root-move time budget
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    limits: SearchLimits,
    search: AlphaBeta,
}

impl ClassicalEngine {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            search: AlphaBeta::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.to_limits())
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn limits_mut(&mut self) -> &mut SearchLimits {
        &mut self.limits
    }

    /// Search `board` with the engine's limits.
    pub fn search(&self, board: &Board) -> SearchResult {
        self.search.execute(board, &self.limits)
    }

    /// Search with an explicit depth, other limits unchanged.
    pub fn search_depth(&self, board: &Board, depth: u8) -> SearchResult {
        let limits = SearchLimits {
            depth,
            ..self.limits.clone()
        };
        self.search.execute(board, &limits)
    }

    pub fn name(&self) -> &str {
        "Classical v2.0"
    }

    pub fn author(&self) -> &str {
        "ML-chess"
    }
}

pub use config::{ConfigError, EngineConfig};
pub use eval::{evaluate, CASTLE_BONUS, CHECKMATE_BONUS, CHECK_BONUS};
pub use minimax::MiniMax;
pub use ordering::{mvv_lva, order_deep, order_root};
pub use search::{AlphaBeta, QUIESCENCE_THRESHOLD};
