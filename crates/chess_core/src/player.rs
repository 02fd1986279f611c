//! Per-alliance view over a [`Board`]: legal moves, check predicates and
//! move validation.

use tracing::debug;

use crate::{
    board::Board,
    moves::{Move, MoveStatus, MoveTransition},
    piece::Piece,
    types::Alliance,
};

/// One side of a board. Cheap to create; all state lives in the board.
#[derive(Clone, Copy, Debug)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, alliance: Alliance) -> Self {
        Self { board, alliance }
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.alliance.opposite())
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        &self.board.side(self.alliance).pieces
    }

    pub fn king(&self) -> Piece {
        self.board.side(self.alliance).king
    }

    /// Pseudo-legal moves plus castling. King safety is checked when a move
    /// is made, so some of these may come back `LeavesKingInCheck`.
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.board.side(self.alliance).legal_moves
    }

    /// Moves that actually go through, in generation order.
    pub fn playable_moves(&self) -> Vec<Move> {
        self.legal_moves()
            .iter()
            .copied()
            .filter(|&mv| self.make_move(mv).is_done())
            .collect()
    }

    pub fn is_in_check(&self) -> bool {
        self.board.side(self.alliance).in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_castled(&self) -> bool {
        self.board.side(self.alliance).castled
    }

    /// Whether any candidate move leaves the king safe. Tries each move in
    /// turn; the answer is cached on the board after the first call.
    pub fn has_escape_moves(&self) -> bool {
        *self
            .board
            .side(self.alliance)
            .escape
            .get_or_init(|| self.legal_moves().iter().any(|&mv| self.make_move(mv).is_done()))
    }

    /// Attempt `mv` for this player.
    ///
    /// Moves outside the legal set come back `IllegalMove`. A move that would
    /// leave this player's king attacked comes back `LeavesKingInCheck`, and
    /// the successor it produced is dropped.
    pub fn make_move(&self, mv: Move) -> MoveTransition<'a> {
        let Some(&generated) = self.legal_moves().iter().find(|&&m| m == mv) else {
            return MoveTransition::rejected(self.board, mv, MoveStatus::IllegalMove);
        };
        // Play the generated variant, keeping the caller's promotion choice.
        let mv = match mv {
            Move::Promotion { promote_to, .. } => generated.with_promotion(promote_to),
            _ => generated,
        };

        let successor = match mv.execute(self.board) {
            Ok(board) => board,
            Err(e) => {
                debug!(%mv, error = %e, "move could not be executed");
                return MoveTransition::rejected(self.board, mv, MoveStatus::IllegalMove);
            }
        };

        if successor.player(self.alliance).is_in_check() {
            return MoveTransition::rejected(self.board, mv, MoveStatus::LeavesKingInCheck);
        }
        MoveTransition::done(self.board, successor, mv)
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
