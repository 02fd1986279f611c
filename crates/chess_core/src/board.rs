use std::fmt;
use std::sync::OnceLock;

use thiserror::Error;

use crate::{moves::Move, movegen, piece::Piece, player::Player, types::*};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no {0} king")]
    MissingKing(Alliance),
    #[error("board has more than one {0} king")]
    MultipleKings(Alliance),
    #[error("piece placed off the board at {0}")]
    OffBoard(Coordinate),
    #[error("the null move cannot be executed")]
    NullMove,
}

/// A view of one tile: its coordinate and whatever stands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    coordinate: Coordinate,
    piece: Option<Piece>,
}

impl Tile {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }
    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }
}

/// Everything derived for one alliance when a board is built.
#[derive(Clone, Debug)]
pub(crate) struct Side {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) king: Piece,
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
    pub(crate) castled: bool,
    /// Lazily computed "has at least one move that does not leave the king
    /// attacked".
    pub(crate) escape: OnceLock<bool>,
}

/// Immutable board snapshot.
///
/// Construction derives each side's pseudo-legal moves plus castling, the
/// king and the in-check flag, so players are cheap views over the board.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: [Option<Piece>; NUM_TILES],
    sides: [Side; 2],
    mover: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl Board {
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn tile(&self, c: Coordinate) -> Tile {
        Tile {
            coordinate: c,
            piece: self.piece_at(c).copied(),
        }
    }

    /// All 64 tiles, rank-major from a1.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().enumerate().map(|(i, p)| Tile {
            coordinate: Coordinate::from_index(i),
            piece: *p,
        })
    }

    pub fn piece_at(&self, c: Coordinate) -> Option<&Piece> {
        c.index().and_then(|i| self.tiles[i].as_ref())
    }

    pub fn is_occupied(&self, c: Coordinate) -> bool {
        self.piece_at(c).is_some()
    }

    pub fn mover(&self) -> Alliance {
        self.mover
    }

    /// The pawn that jumped two ranks on the previous move, if any.
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance)
    }
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.mover)
    }
    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }
    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    pub(crate) fn side(&self, alliance: Alliance) -> &Side {
        &self.sides[alliance.idx()]
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.sides.iter().flat_map(|s| s.pieces.iter())
    }

    /// Whether any piece of `by` attacks `target` by its movement pattern.
    pub fn is_attacked(&self, target: Coordinate, by: Alliance) -> bool {
        let owned = |c: Coordinate, kinds: &[PieceKind]| {
            self.piece_at(c)
                .is_some_and(|pc| pc.alliance == by && kinds.contains(&pc.kind))
        };

        // A pawn attacks diagonally forward, so look one rank behind the target.
        let dy = -by.direction();
        if owned(target.offset(-1, dy), &[PieceKind::Pawn])
            || owned(target.offset(1, dy), &[PieceKind::Pawn])
        {
            return true;
        }

        if movegen::KNIGHT_OFFSETS
            .iter()
            .any(|&(dx, dy)| owned(target.offset(dx, dy), &[PieceKind::Knight]))
        {
            return true;
        }

        if movegen::KING_OFFSETS
            .iter()
            .any(|&(dx, dy)| owned(target.offset(dx, dy), &[PieceKind::King]))
        {
            return true;
        }

        let rays: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
            (&movegen::DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
            (&movegen::ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, kinds) in rays {
            for &(dx, dy) in dirs {
                let mut c = target.offset(dx, dy);
                while c.is_on_board() {
                    if let Some(pc) = self.piece_at(c) {
                        if pc.alliance == by && kinds.contains(&pc.kind) {
                            return true;
                        }
                        break;
                    }
                    c = c.offset(dx, dy);
                }
            }
        }

        false
    }
}

impl PartialEq for Board {
    /// Same placement, mover, en-passant pawn and castled flags.
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
            && self.mover == other.mover
            && self.en_passant_pawn == other.en_passant_pawn
            && self.sides[0].castled == other.sides[0].castled
            && self.sides[1].castled == other.sides[1].castled
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            for x in 0..BOARD_SIZE {
                match self.piece_at(Coordinate::new(x, y)) {
                    Some(p) => write!(f, "{:>3}", p.to_string())?,
                    None => write!(f, "{:>3}", '-')?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Accumulates placements and flags for a new [`Board`].
///
/// A later placement on an occupied coordinate replaces the earlier one.
#[derive(Clone, Debug)]
pub struct Builder {
    placements: Vec<Piece>,
    mover: Alliance,
    en_passant_pawn: Option<Piece>,
    castled: [bool; 2],
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            placements: Vec::with_capacity(32),
            mover: Alliance::White,
            en_passant_pawn: None,
            castled: [false; 2],
        }
    }

    pub fn place(mut self, piece: Piece) -> Self {
        self.placements.push(piece);
        self
    }

    pub fn mover(mut self, alliance: Alliance) -> Self {
        self.mover = alliance;
        self
    }

    pub fn en_passant(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub fn castled(mut self, alliance: Alliance) -> Self {
        self.castled[alliance.idx()] = true;
        self
    }

    /// Build the board, failing unless each alliance has exactly one king.
    pub fn try_build(self) -> Result<Board, BoardError> {
        let mut tiles = [None; NUM_TILES];
        for p in &self.placements {
            let idx = p.coordinate.index().ok_or(BoardError::OffBoard(p.coordinate))?;
            tiles[idx] = Some(*p);
        }

        let side = |alliance: Alliance| -> Result<Side, BoardError> {
            let pieces: Vec<Piece> = tiles
                .iter()
                .flatten()
                .filter(|p| p.alliance == alliance)
                .copied()
                .collect();
            let mut kings = pieces.iter().filter(|p| p.kind == PieceKind::King);
            let king = *kings.next().ok_or(BoardError::MissingKing(alliance))?;
            if kings.next().is_some() {
                return Err(BoardError::MultipleKings(alliance));
            }
            Ok(Side {
                pieces,
                king,
                legal_moves: Vec::new(),
                in_check: false,
                castled: self.castled[alliance.idx()],
                escape: OnceLock::new(),
            })
        };
        let sides = [side(Alliance::White)?, side(Alliance::Black)?];

        // Only a pawn actually standing where it claims to is worth remembering.
        let en_passant_pawn = self.en_passant_pawn.filter(|ep| {
            ep.kind == PieceKind::Pawn
                && ep.alliance != self.mover
                && ep
                    .coordinate
                    .index()
                    .and_then(|i| tiles[i])
                    .is_some_and(|p| p.same_identity(ep))
        });

        let mut board = Board {
            tiles,
            sides,
            mover: self.mover,
            en_passant_pawn,
        };

        let pseudo = Alliance::BOTH.map(|a| movegen::pseudo_legal_moves(&board, a));
        for alliance in Alliance::BOTH {
            let king_at = board.side(alliance).king.coordinate;
            let in_check = pseudo[alliance.opposite().idx()]
                .iter()
                .any(|m| m.destination() == Some(king_at));
            board.sides[alliance.idx()].in_check = in_check;
        }
        for alliance in Alliance::BOTH {
            let in_check = board.side(alliance).in_check;
            let mut moves = pseudo[alliance.idx()].clone();
            moves.extend(movegen::castle_moves(&board, alliance, in_check));
            board.sides[alliance.idx()].legal_moves = moves;
        }

        Ok(board)
    }

    /// Build the board.
    ///
    /// # Panics
    /// If either alliance lacks a king (or has two), or a piece lies off the
    /// board. Use [`Builder::try_build`] for untrusted placements.
    pub fn build(self) -> Board {
        match self.try_build() {
            Ok(board) => board,
            Err(e) => panic!("invalid board: {e}"),
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
