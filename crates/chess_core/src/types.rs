use std::fmt;

pub const BOARD_SIZE: i8 = 8;
pub const NUM_TILES: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    pub const BOTH: [Alliance; 2] = [Alliance::White, Alliance::Black];

    pub fn opposite(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    /// Rank delta of a single pawn step.
    pub fn direction(self) -> i8 {
        match self {
            Alliance::White => 1,
            Alliance::Black => -1,
        }
    }
    /// Rank holding the king and rooks at the start.
    pub fn home_rank(self) -> i8 {
        match self {
            Alliance::White => 0,
            Alliance::Black => 7,
        }
    }
    pub fn pawn_rank(self) -> i8 {
        match self {
            Alliance::White => 1,
            Alliance::Black => 6,
        }
    }
    pub fn promotion_rank(self) -> i8 {
        match self {
            Alliance::White => 7,
            Alliance::Black => 0,
        }
    }

    pub fn is_white(self) -> bool {
        self == Alliance::White
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => f.write_str("White"),
            Alliance::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may be promoted to, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Value in centipawns. The king is never captured, so it carries a
    /// sentinel that dwarfs all material.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    /// Upper-case letter used in FEN and algebraic notation.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_symbol(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A tile position. `x` is the file (0 = a), `y` the rank (0 = rank 1).
///
/// Coordinates are plain values; nothing stops one from pointing off the
/// board, so callers check [`Coordinate::is_on_board`] where it matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i8,
    pub y: i8,
}

impl Coordinate {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    pub fn offset(self, dx: i8, dy: i8) -> Coordinate {
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// Tile index, rank-major from a1.
    pub fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some((self.y as usize) * 8 + self.x as usize)
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Coordinate {
        Coordinate::new((idx % 8) as i8, (idx / 8) as i8)
    }

    pub fn from_algebraic(c: &str) -> Option<Coordinate> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Coordinate::new((f - b'a') as i8, (r - b'1') as i8))
    }

    pub fn file_char(self) -> char {
        (b'a' + self.x as u8) as char
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", self.file_char(), (b'1' + self.y as u8) as char)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
