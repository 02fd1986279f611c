//! Forsyth-Edwards Notation, used by tests and the driver to set up boards.

use thiserror::Error;

use crate::{
    board::{Board, BoardError},
    layouts::STANDARD_BACK_RANK,
    movegen::KING_HOME_FILE,
    moves::CastleSide,
    piece::Piece,
    types::*,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("rank {0} does not describe exactly 8 files")]
    RankWidth(usize),
    #[error("invalid side to move '{0}'")]
    InvalidSide(String),
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),
    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl Board {
    /// Parse a FEN string. Move counters are accepted and ignored.
    ///
    /// First-move flags are reconstructed: a king or rook is unmoved when a
    /// matching castling right is listed, any other piece when it stands on
    /// its standard starting square.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }
        let (board_part, stm_part, castle_part, ep_part) = (parts[0], parts[1], parts[2], parts[3]);

        let mover = match stm_part {
            "w" => Alliance::White,
            "b" => Alliance::Black,
            other => return Err(FenError::InvalidSide(other.to_string())),
        };

        let mut rights: Vec<(Alliance, CastleSide)> = Vec::with_capacity(4);
        if castle_part != "-" {
            for c in castle_part.chars() {
                rights.push(match c {
                    'K' => (Alliance::White, CastleSide::KingSide),
                    'Q' => (Alliance::White, CastleSide::QueenSide),
                    'k' => (Alliance::Black, CastleSide::KingSide),
                    'q' => (Alliance::Black, CastleSide::QueenSide),
                    _ => return Err(FenError::InvalidCastling(c)),
                });
            }
        }
        let unmoved = |kind: PieceKind, alliance: Alliance, at: Coordinate| -> bool {
            match kind {
                PieceKind::Pawn => at.y == alliance.pawn_rank(),
                PieceKind::King => {
                    at == Coordinate::new(KING_HOME_FILE, alliance.home_rank())
                        && rights.iter().any(|&(a, _)| a == alliance)
                }
                PieceKind::Rook => rights.iter().any(|&(a, side)| {
                    a == alliance && at == Coordinate::new(side.rook_file(), alliance.home_rank())
                }),
                _ => at.y == alliance.home_rank() && STANDARD_BACK_RANK[at.x as usize] == kind,
            }
        };

        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut builder = Board::builder().mover(mover);
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    if file >= BOARD_SIZE {
                        return Err(FenError::RankWidth(rank as usize + 1));
                    }
                    let kind = PieceKind::from_symbol(ch).ok_or(FenError::InvalidPiece(ch))?;
                    let alliance = if ch.is_uppercase() {
                        Alliance::White
                    } else {
                        Alliance::Black
                    };
                    let at = Coordinate::new(file, rank);
                    let mut piece = Piece::new(kind, alliance, at);
                    piece.first_move = unmoved(kind, alliance, at);
                    builder = builder.place(piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth(rank as usize + 1));
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth(rank as usize + 1));
            }
        }

        if ep_part != "-" {
            let target = Coordinate::from_algebraic(ep_part)
                .ok_or_else(|| FenError::InvalidEnPassant(ep_part.to_string()))?;
            // The pawn that jumped stands one step past the target square.
            let jumper = mover.opposite();
            let at = target.offset(0, jumper.direction());
            builder = builder.en_passant(Piece::moved(PieceKind::Pawn, jumper, at));
        }

        Ok(builder.try_build()?)
    }

    /// FEN for this board. Move counters are not tracked and always read `0 1`.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for y in (0..BOARD_SIZE).rev() {
            let mut empty = 0;
            for x in 0..BOARD_SIZE {
                match self.piece_at(Coordinate::new(x, y)) {
                    Some(p) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push_str(&p.to_string());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if y > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(if self.mover().is_white() { 'w' } else { 'b' });

        out.push(' ');
        let mut castling = String::new();
        for alliance in Alliance::BOTH {
            let king = self.player(alliance).king();
            let home = alliance.home_rank();
            if !king.first_move || king.coordinate != Coordinate::new(KING_HOME_FILE, home) {
                continue;
            }
            for side in CastleSide::BOTH {
                let rook_ready = self
                    .piece_at(Coordinate::new(side.rook_file(), home))
                    .is_some_and(|r| {
                        r.kind == PieceKind::Rook && r.alliance == alliance && r.first_move
                    });
                if rook_ready {
                    let c = match side {
                        CastleSide::KingSide => 'K',
                        CastleSide::QueenSide => 'Q',
                    };
                    castling.push(if alliance.is_white() { c } else { c.to_ascii_lowercase() });
                }
            }
        }
        out.push_str(if castling.is_empty() { "-" } else { &castling });

        out.push(' ');
        match self.en_passant_pawn() {
            Some(p) => out.push_str(&p.coordinate.offset(0, -p.alliance.direction()).to_string()),
            None => out.push('-'),
        }
        out.push_str(" 0 1");
        out
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
