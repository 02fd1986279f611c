//! Named starting layouts.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{board::Board, piece::Piece, types::*};

pub const STANDARD_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard starting position, white to move.
    pub fn standard() -> Board {
        from_back_rank(&STANDARD_BACK_RANK)
    }

    /// A start with the back rank shuffled, mirrored for both sides.
    /// Castling only exists when king and rooks happen to land at home.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Board {
        let mut rank = STANDARD_BACK_RANK;
        rank.shuffle(rng);
        from_back_rank(&rank)
    }
}

fn from_back_rank(rank: &[PieceKind; 8]) -> Board {
    let mut builder = Board::builder();
    for alliance in Alliance::BOTH {
        for (x, &kind) in rank.iter().enumerate() {
            let x = x as i8;
            builder = builder
                .place(Piece::new(kind, alliance, Coordinate::new(x, alliance.home_rank())))
                .place(Piece::new(
                    PieceKind::Pawn,
                    alliance,
                    Coordinate::new(x, alliance.pawn_rank()),
                ));
        }
    }
    builder.mover(Alliance::White).build()
}

/// Scenario boards selectable by name, e.g. from the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    Standard,
    Shuffled,
    /// Kings and all sixteen pawns.
    PawnEndgame,
    /// Kings, rooks and pawns: every castle is available after a few pawn moves.
    CastlingDrill,
    /// One pawn each, a step away from promoting.
    PromotionRace,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Standard,
        Scenario::Shuffled,
        Scenario::PawnEndgame,
        Scenario::CastlingDrill,
        Scenario::PromotionRace,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Standard => "standard",
            Scenario::Shuffled => "shuffled",
            Scenario::PawnEndgame => "pawn-endgame",
            Scenario::CastlingDrill => "castling-drill",
            Scenario::PromotionRace => "promotion-race",
        }
    }

    /// Heuristic move ordering is meaningless on shuffled layouts.
    pub fn wants_ordering(self) -> bool {
        self != Scenario::Shuffled
    }

    pub fn board(self) -> Board {
        self.board_with(&mut rand::thread_rng())
    }

    pub fn board_with<R: Rng + ?Sized>(self, rng: &mut R) -> Board {
        match self {
            Scenario::Standard => Board::standard(),
            Scenario::Shuffled => Board::shuffled(rng),
            Scenario::PawnEndgame => kings_with(&[]),
            Scenario::CastlingDrill => kings_with(&[PieceKind::Rook]),
            Scenario::PromotionRace => Board::builder()
                .place(Piece::new(PieceKind::King, Alliance::White, Coordinate::new(2, 2)))
                .place(Piece::moved(PieceKind::Pawn, Alliance::White, Coordinate::new(0, 6)))
                .place(Piece::new(PieceKind::King, Alliance::Black, Coordinate::new(5, 5)))
                .place(Piece::moved(PieceKind::Pawn, Alliance::Black, Coordinate::new(7, 1)))
                .mover(Alliance::White)
                .build(),
        }
    }
}

/// Kings on their home squares, full pawn ranks, and `extra` on their
/// standard back-rank files.
fn kings_with(extra: &[PieceKind]) -> Board {
    let mut builder = Board::builder();
    for alliance in Alliance::BOTH {
        for (x, &kind) in STANDARD_BACK_RANK.iter().enumerate() {
            let x = x as i8;
            if kind == PieceKind::King || extra.contains(&kind) {
                builder =
                    builder.place(Piece::new(kind, alliance, Coordinate::new(x, alliance.home_rank())));
            }
            builder = builder.place(Piece::new(
                PieceKind::Pawn,
                alliance,
                Coordinate::new(x, alliance.pawn_rank()),
            ));
        }
    }
    builder.mover(Alliance::White).build()
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown scenario '{s}'"))
    }
}

#[cfg(test)]
#[path = "layouts_tests.rs"]
mod layouts_tests;
