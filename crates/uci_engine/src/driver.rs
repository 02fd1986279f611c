//! UCI command handling over a history of immutable boards.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chess_core::{move_to_uci, position_from_uci, Board, MoveOrdering, Scenario};
use classical_engine::{ClassicalEngine, EngineConfig};
use tracing::{info, warn};

const MAX_DEPTH: u8 = 8;

pub struct Driver {
    engine: ClassicalEngine,
    /// Boards from the set-up position to the current one, oldest first
    history: Vec<Board>,
}

impl Driver {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            engine: ClassicalEngine::from_config(config),
            history: vec![Board::standard()],
        }
    }

    pub fn current(&self) -> &Board {
        // The history always holds at least its start board.
        &self.history[self.history.len() - 1]
    }

    /// Handle one line of input. Returns `false` once the engine should exit.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(true);
        };

        match command {
            "uci" => {
                let limits = self.engine.limits();
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
                    limits.depth
                )?;
                writeln!(
                    out,
                    "option name QuiescenceMs type spin default {} min 0 max 60000",
                    limits.quiescence_budget.as_millis()
                )?;
                writeln!(
                    out,
                    "option name Ordering type check default {}",
                    limits.ordering == MoveOrdering::Heuristic
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(args),
            "ucinewgame" => self.history = vec![Board::standard()],
            "position" => match position_from_uci(args) {
                Ok(history) => self.history = history,
                Err(e) => warn!(error = %e, "ignoring position command"),
            },
            "scenario" => match args.first().map(|name| name.parse::<Scenario>()) {
                Some(Ok(scenario)) => self.load_scenario(scenario),
                Some(Err(e)) => warn!(error = %e, "ignoring scenario command"),
                None => warn!("scenario needs a name"),
            },
            "go" => {
                let depth = args
                    .iter()
                    .position(|&a| a == "depth")
                    .and_then(|i| args.get(i + 1))
                    .and_then(|d| d.parse::<u8>().ok())
                    .map(|d| d.clamp(1, MAX_DEPTH));
                let board = self.current();
                let result = match depth {
                    Some(d) => self.engine.search_depth(board, d),
                    None => self.engine.search(board),
                };
                info!(
                    best = %result.best_move,
                    score = result.score,
                    nodes = result.stats.nodes,
                    elapsed_ms = result.stats.elapsed.as_millis() as u64,
                    "go"
                );
                writeln!(
                    out,
                    "info depth {} score cp {} nodes {}",
                    result.depth,
                    self.mover_relative(result.score),
                    result.stats.nodes
                )?;
                writeln!(out, "bestmove {}", move_to_uci(result.best_move))?;
            }
            "d" => {
                let board = self.current();
                write!(out, "{board}")?;
                writeln!(out, "fen {}", board.to_fen())?;
            }
            "quit" => return Ok(false),
            other => warn!(command = other, "unknown command"),
        }
        out.flush()?;
        Ok(true)
    }

    /// `setoption name <Name> value <v>`
    fn set_option(&mut self, args: &[&str]) {
        let name = args
            .iter()
            .position(|&a| a == "name")
            .and_then(|i| args.get(i + 1));
        let value = args
            .iter()
            .position(|&a| a == "value")
            .and_then(|i| args.get(i + 1));
        let (Some(&name), Some(&value)) = (name, value) else {
            warn!(?args, "malformed setoption");
            return;
        };

        let limits = self.engine.limits_mut();
        match (name, value) {
            ("Depth", v) => match v.parse::<u8>() {
                Ok(d) => limits.depth = d.clamp(1, MAX_DEPTH),
                Err(_) => warn!(value = v, "bad depth"),
            },
            ("QuiescenceMs", v) => match v.parse::<u64>() {
                Ok(ms) => limits.quiescence_budget = Duration::from_millis(ms),
                Err(_) => warn!(value = v, "bad quiescence budget"),
            },
            ("Ordering", v) => {
                limits.ordering = if v.eq_ignore_ascii_case("true") {
                    MoveOrdering::Heuristic
                } else {
                    MoveOrdering::Shuffle
                }
            }
            (other, _) => warn!(option = other, "unknown option"),
        }
    }

    /// Start from a scenario board, with the move ordering that suits it.
    fn load_scenario(&mut self, scenario: Scenario) {
        self.history = vec![scenario.board()];
        self.engine.limits_mut().ordering = if scenario.wants_ordering() {
            MoveOrdering::Heuristic
        } else {
            MoveOrdering::Shuffle
        };
        info!(%scenario, "scenario loaded");
    }

    /// UCI scores are from the side to move's point of view.
    fn mover_relative(&self, score: i32) -> i32 {
        if self.current().mover().is_white() {
            score
        } else {
            -score
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
