//! Search limits and the quiescence stopwatch.
//!
//! The base search always runs to its fixed depth. The only clock involved
//! bounds how long quiescence extensions may keep firing under one root move.

use std::time::{Duration, Instant};

/// Whether moves are reordered to make pruning more effective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Checks and castles first at the root, then MVV-LVA.
    #[default]
    Heuristic,
    /// Generation order. Meant for randomized layouts where the
    /// heuristics say nothing.
    Shuffle,
}

/// Parameters of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLimits {
    /// Nominal search depth in plies
    pub depth: u8,
    /// Total time quiescence extensions may use, split evenly over root moves
    pub quiescence_budget: Duration,
    pub ordering: MoveOrdering,
    /// Log a line per root move and a summary
    pub diagnostics: bool,
}

impl SearchLimits {
    /// Create limits with only a depth: no quiescence, heuristic ordering.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            quiescence_budget: Duration::ZERO,
            ordering: MoveOrdering::Heuristic,
            diagnostics: false,
        }
    }

    pub fn with_quiescence(mut self, budget: Duration) -> Self {
        self.quiescence_budget = budget;
        self
    }

    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Share of the quiescence budget granted to each root move.
    pub fn per_root_move_budget(&self, root_moves: usize) -> Duration {
        let n = u32::try_from(root_moves.max(1)).unwrap_or(u32::MAX);
        self.quiescence_budget / n
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4).with_quiescence(Duration::from_millis(1000))
    }
}

/// Stopwatch for the quiescence extensions below one root move.
///
/// Once the budget has run out it stays exhausted, so no further extension
/// fires anywhere in that subtree.
#[derive(Debug, Clone)]
pub struct QuiescenceClock {
    start: Instant,
    budget: Duration,
    exhausted: bool,
}

impl QuiescenceClock {
    pub fn start(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
            exhausted: false,
        }
    }

    /// A clock that never allows an extension.
    pub fn exhausted() -> Self {
        Self {
            start: Instant::now(),
            budget: Duration::ZERO,
            exhausted: true,
        }
    }

    /// True while budget remains. Checks the clock and latches when it runs out.
    pub fn allows_extension(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if self.start.elapsed() >= self.budget {
            self.exhausted = true;
            return false;
        }
        true
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn remaining(&self) -> Duration {
        if self.exhausted {
            Duration::ZERO
        } else {
            self.budget.saturating_sub(self.elapsed())
        }
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
