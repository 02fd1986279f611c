//! Alpha-beta search with a time-bounded quiescence extension.
//!
//! White maximises and black minimises the evaluator score. Both extremizers
//! fail hard: once the window closes the bound is returned instead of the
//! exact value, which never changes the move picked at the root.

use std::time::{Duration, Instant};

use chess_core::{
    Board, Move, MoveOrdering, QuiescenceClock, SearchLimits, SearchResult, SearchStats,
    SearchStrategy,
};
use tracing::{debug, info};

use crate::eval::evaluate;
use crate::ordering::{order_deep, order_root};

/// Activity above which the ply before the depth cutoff is extended.
pub const QUIESCENCE_THRESHOLD: u32 = 2;
/// Trailing moves of a line inspected for captures.
const ACTIVITY_WINDOW: usize = 4;
/// Depth handed to a node whose extension fired.
const EXTENSION_PLIES: u8 = 2;

/// Alpha-beta pruning with move ordering and quiescence extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl AlphaBeta {
    pub fn new() -> Self {
        Self
    }
}

/// State threaded through one search.
struct SearchContext {
    stats: SearchStats,
    /// Restarted for every root move
    clock: QuiescenceClock,
    /// Moves from the root down to the current node
    line: Vec<Move>,
    ordering: MoveOrdering,
}

impl SearchContext {
    fn new(limits: &SearchLimits) -> Self {
        Self {
            stats: SearchStats::default(),
            clock: QuiescenceClock::exhausted(),
            line: Vec::with_capacity(limits.depth as usize + 8),
            ordering: limits.ordering,
        }
    }

    /// Depth for the child `successor` of a node searched at `depth`.
    ///
    /// One ply before the cutoff, a lively line (check, recent captures)
    /// is searched two plies further while the clock allows it.
    fn next_depth(&mut self, successor: &Board, depth: u8) -> u8 {
        if depth != 1 {
            return depth.saturating_sub(1);
        }
        if self.activity(successor) > QUIESCENCE_THRESHOLD && self.clock.allows_extension() {
            self.stats.quiescence_extensions += 1;
            return EXTENSION_PLIES;
        }
        0
    }

    /// +2 when the side to move in `successor` is in check, +1 per capture
    /// among the last few moves of the line (the move into `successor` included).
    fn activity(&self, successor: &Board) -> u32 {
        let check = if successor.current_player().is_in_check() {
            2
        } else {
            0
        };
        let captures = self
            .line
            .iter()
            .rev()
            .take(ACTIVITY_WINDOW)
            .filter(|mv| mv.is_attack())
            .count() as u32;
        check + captures
    }

    /// Value of the root move `mv` leading to `next`. Every root move gets a
    /// fresh quiescence clock of `budget`.
    fn search_root_move(
        &mut self,
        mv: Move,
        next: &Board,
        depth: u8,
        highest: i32,
        lowest: i32,
        budget: Duration,
    ) -> i32 {
        self.stats.nodes += 1;
        self.clock = QuiescenceClock::start(budget);
        self.line.push(mv);
        let depth = self.next_depth(next, depth);
        let value = if next.mover().is_white() {
            max(next, depth, highest, lowest, self)
        } else {
            min(next, depth, highest, lowest, self)
        };
        self.line.pop();
        value
    }

    fn evaluate(&mut self, board: &Board, depth: u8) -> i32 {
        self.stats.evaluated_boards += 1;
        evaluate(board, depth)
    }
}

impl SearchStrategy for AlphaBeta {
    fn execute(&self, board: &Board, limits: &SearchLimits) -> SearchResult {
        let start = Instant::now();
        let player = board.current_player();
        let white = player.alliance().is_white();

        let mut moves = player.legal_moves().to_vec();
        order_root(board, &mut moves, limits.ordering);
        let budget = limits.per_root_move_budget(moves.len());

        let mut ctx = SearchContext::new(limits);
        let mut best_move = Move::Null;
        let mut highest = i32::MIN;
        let mut lowest = i32::MAX;

        for mv in moves {
            let transition = player.make_move(mv);
            if !transition.is_done() {
                continue;
            }
            let next = transition.board();
            let nodes_before = ctx.stats.nodes;
            let value = ctx.search_root_move(mv, next, limits.depth, highest, lowest, budget);

            if limits.diagnostics {
                info!(
                    mv = %mv,
                    value,
                    nodes = ctx.stats.nodes - nodes_before,
                    quiescence_ms = ctx.clock.elapsed().as_millis() as u64,
                    "root move searched"
                );
            }

            if white && value > highest {
                highest = value;
                best_move = mv;
            } else if !white && value < lowest {
                lowest = value;
                best_move = mv;
            }
        }

        let score = match (best_move.is_null(), white) {
            (true, _) => ctx.evaluate(board, limits.depth),
            (false, true) => highest,
            (false, false) => lowest,
        };
        ctx.stats.elapsed = start.elapsed();

        if limits.diagnostics {
            info!(
                strategy = self.name(),
                best = %best_move,
                score,
                depth = limits.depth,
                nodes = ctx.stats.nodes,
                evaluated = ctx.stats.evaluated_boards,
                cutoffs = ctx.stats.cutoffs,
                extensions = ctx.stats.quiescence_extensions,
                elapsed_ms = ctx.stats.elapsed.as_millis() as u64,
                "search finished"
            );
        } else {
            debug!(best = %best_move, score, nodes = ctx.stats.nodes, "search finished");
        }

        SearchResult {
            best_move,
            score,
            depth: limits.depth,
            stats: ctx.stats,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}

/// Mate or stalemate for the side to move.
pub(crate) fn is_end_game(board: &Board) -> bool {
    let player = board.current_player();
    player.is_in_checkmate() || player.is_in_stalemate()
}

/// Best score white can force below `board`, within (`highest`, `lowest`).
fn max(board: &Board, depth: u8, highest: i32, lowest: i32, ctx: &mut SearchContext) -> i32 {
    if depth == 0 || is_end_game(board) {
        return ctx.evaluate(board, depth);
    }

    let player = board.current_player();
    let mut moves = player.legal_moves().to_vec();
    order_deep(&mut moves, ctx.ordering);

    let mut current_highest = highest;
    for mv in moves {
        let transition = player.make_move(mv);
        if !transition.is_done() {
            continue;
        }
        let next = transition.board();
        ctx.stats.nodes += 1;
        ctx.line.push(mv);
        let next_depth = ctx.next_depth(next, depth);
        let value = min(next, next_depth, current_highest, lowest, ctx);
        ctx.line.pop();

        current_highest = current_highest.max(value);
        if current_highest >= lowest {
            ctx.stats.cutoffs += 1;
            return lowest;
        }
    }
    current_highest
}

/// Best score black can force below `board`, within (`highest`, `lowest`).
fn min(board: &Board, depth: u8, highest: i32, lowest: i32, ctx: &mut SearchContext) -> i32 {
    if depth == 0 || is_end_game(board) {
        return ctx.evaluate(board, depth);
    }

    let player = board.current_player();
    let mut moves = player.legal_moves().to_vec();
    order_deep(&mut moves, ctx.ordering);

    let mut current_lowest = lowest;
    for mv in moves {
        let transition = player.make_move(mv);
        if !transition.is_done() {
            continue;
        }
        let next = transition.board();
        ctx.stats.nodes += 1;
        ctx.line.push(mv);
        let next_depth = ctx.next_depth(next, depth);
        let value = max(next, next_depth, highest, current_lowest, ctx);
        ctx.line.pop();

        current_lowest = current_lowest.min(value);
        if current_lowest <= highest {
            ctx.stats.cutoffs += 1;
            return highest;
        }
    }
    current_lowest
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
