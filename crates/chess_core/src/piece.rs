use std::fmt;

use crate::{board::Board, moves::Move, movegen, types::*};

/// An immutable piece on a tile.
///
/// `first_move` is set until the piece has moved once; castling and the
/// pawn jump depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub alliance: Alliance,
    pub coordinate: Coordinate,
    pub first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    pub fn new(kind: PieceKind, alliance: Alliance, coordinate: Coordinate) -> Self {
        Self {
            kind,
            alliance,
            coordinate,
            first_move: true,
        }
    }

    pub fn moved(kind: PieceKind, alliance: Alliance, coordinate: Coordinate) -> Self {
        Self {
            kind,
            alliance,
            coordinate,
            first_move: false,
        }
    }

    /// The same piece relocated to `to`, with the first-move flag cleared.
    pub fn move_to(self, to: Coordinate) -> Self {
        Self {
            coordinate: to,
            first_move: false,
            ..self
        }
    }

    pub fn value(&self) -> i32 {
        self.kind.value()
    }

    /// Moves allowed by this piece's pattern and the board occupancy,
    /// ignoring the safety of its own king. Castling is not included.
    pub fn pseudo_legal_moves(&self, board: &Board) -> Vec<Move> {
        let mut out = Vec::with_capacity(16);
        movegen::piece_moves_into(self, board, &mut out);
        out
    }

    /// Identity used for move equality: where it stands, whose it is, what it is.
    pub fn same_identity(&self, other: &Piece) -> bool {
        self.coordinate == other.coordinate
            && self.alliance == other.alliance
            && self.kind == other.kind
    }
}

impl fmt::Display for Piece {
    /// FEN letter: upper case for white, lower case for black.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.kind.symbol();
        match self.alliance {
            Alliance::White => write!(f, "{c}"),
            Alliance::Black => write!(f, "{}", c.to_ascii_lowercase()),
        }
    }
}
