//! Move variants, their execution into successor boards, and the result of
//! attempting a move.

use std::fmt;

use tracing::debug;

use crate::{
    board::{Board, BoardError},
    piece::Piece,
    types::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    pub fn rook_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }
    pub fn king_to_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }
    pub fn rook_to_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }
    /// Files between king and rook that must be empty.
    pub fn empty_files(self) -> &'static [i8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }
    /// Files the king passes over or lands on; none may be attacked.
    pub fn safe_files(self) -> &'static [i8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[2, 3],
        }
    }
}

/// Every kind of move the rules produce.
///
/// Two moves compare equal when they move the same piece (coordinate,
/// alliance and kind) to the same destination; the chosen promotion type and
/// capture details do not take part.
#[derive(Clone, Copy, Debug)]
pub enum Move {
    Quiet {
        piece: Piece,
        to: Coordinate,
    },
    Attack {
        piece: Piece,
        to: Coordinate,
        captured: Piece,
    },
    PawnJump {
        piece: Piece,
        to: Coordinate,
    },
    EnPassant {
        piece: Piece,
        to: Coordinate,
        captured: Piece,
    },
    /// A pawn move onto the last rank. `captured` tells whether the
    /// underlying move was quiet or an attack.
    Promotion {
        piece: Piece,
        to: Coordinate,
        captured: Option<Piece>,
        promote_to: PieceKind,
    },
    Castle {
        king: Piece,
        to: Coordinate,
        rook: Piece,
        rook_to: Coordinate,
        side: CastleSide,
    },
    /// Sentinel for "no such move". Never legal.
    Null,
}

impl Move {
    pub fn moved_piece(&self) -> Option<Piece> {
        match *self {
            Move::Quiet { piece, .. }
            | Move::Attack { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::EnPassant { piece, .. }
            | Move::Promotion { piece, .. } => Some(piece),
            Move::Castle { king, .. } => Some(king),
            Move::Null => None,
        }
    }

    pub fn origin(&self) -> Option<Coordinate> {
        self.moved_piece().map(|p| p.coordinate)
    }

    pub fn destination(&self) -> Option<Coordinate> {
        match *self {
            Move::Quiet { to, .. }
            | Move::Attack { to, .. }
            | Move::PawnJump { to, .. }
            | Move::EnPassant { to, .. }
            | Move::Promotion { to, .. }
            | Move::Castle { to, .. } => Some(to),
            Move::Null => None,
        }
    }

    pub fn captured(&self) -> Option<Piece> {
        match *self {
            Move::Attack { captured, .. } | Move::EnPassant { captured, .. } => Some(captured),
            Move::Promotion { captured, .. } => captured,
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.captured().is_some()
    }
    pub fn is_castle(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::Promotion { .. })
    }
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// The move a promotion wraps: quiet or attack, onto the last rank.
    pub fn base(&self) -> Move {
        match *self {
            Move::Promotion {
                piece,
                to,
                captured: Some(captured),
                ..
            } => Move::Attack {
                piece,
                to,
                captured,
            },
            Move::Promotion {
                piece,
                to,
                captured: None,
                ..
            } => Move::Quiet { piece, to },
            other => other,
        }
    }

    pub fn with_promotion(self, kind: PieceKind) -> Move {
        match self {
            Move::Promotion {
                piece,
                to,
                captured,
                ..
            } => Move::Promotion {
                piece,
                to,
                captured,
                promote_to: kind,
            },
            other => other,
        }
    }

    /// Ask `chooser` for the promotion type when this is a promotion;
    /// any other move comes back untouched and the chooser is not called.
    /// A choice outside [`PieceKind::PROMOTIONS`] keeps the current type.
    pub fn resolve_promotion<C>(self, chooser: &mut C) -> Move
    where
        C: PromotionChooser + ?Sized,
    {
        if !self.is_promotion() {
            return self;
        }
        let kind = chooser.choose_type(&PieceKind::PROMOTIONS);
        if PieceKind::PROMOTIONS.contains(&kind) {
            self.with_promotion(kind)
        } else {
            debug!(?kind, "ignoring invalid promotion choice");
            self
        }
    }

    /// Build the board that results from playing this move on `board`.
    ///
    /// The source board is left untouched. In the successor it is the
    /// opponent of the moved piece to move, and an en-passant pawn is set
    /// only after a pawn jump.
    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        let piece = self.moved_piece().ok_or(BoardError::NullMove)?;
        let to = self.destination().ok_or(BoardError::NullMove)?;
        let captured = self.captured().map(|c| c.coordinate);
        let castle_rook = match self {
            Move::Castle { rook, .. } => Some(rook.coordinate),
            _ => None,
        };

        let mut builder = Board::builder();
        for p in board.all_pieces() {
            let c = p.coordinate;
            if c == piece.coordinate || Some(c) == captured || Some(c) == castle_rook {
                continue;
            }
            builder = builder.place(*p);
        }

        let landed = match *self {
            Move::Promotion { promote_to, .. } => Piece::moved(promote_to, piece.alliance, to),
            _ => piece.move_to(to),
        };
        builder = builder.place(landed);

        if let Move::Castle { rook, rook_to, .. } = *self {
            builder = builder.place(rook.move_to(rook_to)).castled(piece.alliance);
        }
        for alliance in Alliance::BOTH {
            if board.player(alliance).is_castled() {
                builder = builder.castled(alliance);
            }
        }
        if let Move::PawnJump { .. } = self {
            builder = builder.en_passant(landed);
        }

        builder.mover(piece.alliance.opposite()).try_build()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        match (self.moved_piece(), other.moved_piece()) {
            (Some(a), Some(b)) => a.same_identity(&b) && self.destination() == other.destination(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Null => f.write_str("--"),
            Move::Castle {
                side: CastleSide::KingSide,
                ..
            } => f.write_str("O-O"),
            Move::Castle {
                side: CastleSide::QueenSide,
                ..
            } => f.write_str("O-O-O"),
            Move::Promotion { promote_to, .. } => {
                write!(f, "{}={}", self.base(), promote_to.symbol())
            }
            Move::Quiet { piece, to } | Move::PawnJump { piece, to } => {
                if piece.kind == PieceKind::Pawn {
                    write!(f, "{to}")
                } else {
                    write!(f, "{}{to}", piece.kind.symbol())
                }
            }
            Move::Attack { piece, to, .. } | Move::EnPassant { piece, to, .. } => {
                if piece.kind == PieceKind::Pawn {
                    write!(f, "{}x{to}", piece.coordinate.file_char())
                } else {
                    write!(f, "{}x{to}", piece.kind.symbol())
                }
            }
        }
    }
}

/// Callback through which the outside world picks a promotion type.
pub trait PromotionChooser {
    fn choose_type(&mut self, available: &[PieceKind]) -> PieceKind;
}

impl<F> PromotionChooser for F
where
    F: FnMut(&[PieceKind]) -> PieceKind,
{
    fn choose_type(&mut self, available: &[PieceKind]) -> PieceKind {
        self(available)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesKingInCheck,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// Outcome of [`crate::Player::make_move`].
///
/// Only a `Done` transition carries a successor; every other status hands
/// back the board the move was attempted on.
#[derive(Debug)]
pub struct MoveTransition<'a> {
    original: &'a Board,
    successor: Option<Board>,
    mv: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn done(original: &'a Board, successor: Board, mv: Move) -> Self {
        Self {
            original,
            successor: Some(successor),
            mv,
            status: MoveStatus::Done,
        }
    }

    pub(crate) fn rejected(original: &'a Board, mv: Move, status: MoveStatus) -> Self {
        Self {
            original,
            successor: None,
            mv,
            status,
        }
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }
    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }
    pub fn transition_move(&self) -> Move {
        self.mv
    }

    /// The successor when `Done`, otherwise the unchanged original.
    pub fn board(&self) -> &Board {
        self.successor.as_ref().unwrap_or(self.original)
    }

    pub fn into_board(self) -> Board {
        match self.successor {
            Some(b) => b,
            None => self.original.clone(),
        }
    }
}

/// Resolves a pair of coordinates into the move the side to move can make.
pub struct MoveFactory;

impl MoveFactory {
    /// The current player's move from `from` to `to`, or [`Move::Null`]
    /// when no such move exists.
    pub fn create_move(board: &Board, from: Coordinate, to: Coordinate) -> Move {
        board
            .current_player()
            .legal_moves()
            .iter()
            .find(|m| m.origin() == Some(from) && m.destination() == Some(to))
            .copied()
            .unwrap_or(Move::Null)
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
