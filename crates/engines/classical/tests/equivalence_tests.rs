//! Alpha-beta must agree with exhaustive minimax: pruning changes how many
//! boards are visited, never the answer.

use rayon::prelude::*;

use chess_core::{Board, MoveOrdering, SearchLimits, SearchStrategy};
use classical_engine::{AlphaBeta, MiniMax};

const POSITIONS: &[(&str, u8)] = &[
    ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 3),
    ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2),
    ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3),
    ("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2", 3),
    ("4k3/1P6/8/8/3pP3/8/8/4K3 b - e3 0 1", 3),
    ("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", 2),
];

#[test]
fn test_alpha_beta_matches_minimax_in_natural_order() {
    POSITIONS.par_iter().for_each(|&(fen, depth)| {
        let board = Board::from_fen(fen).unwrap();
        let limits = SearchLimits::depth(depth).with_ordering(MoveOrdering::Shuffle);
        let full = MiniMax::new().execute(&board, &limits);
        let pruned = AlphaBeta::new().execute(&board, &limits);
        assert_eq!(full.best_move, pruned.best_move, "{fen}");
        assert_eq!(full.score, pruned.score, "{fen}");
        assert!(pruned.stats.nodes <= full.stats.nodes, "{fen}");
    });
}

#[test]
fn test_ordering_keeps_the_minimax_score() {
    POSITIONS.par_iter().for_each(|&(fen, depth)| {
        let board = Board::from_fen(fen).unwrap();
        let limits = SearchLimits::depth(depth);
        let full = MiniMax::new().execute(&board, &limits);
        let ordered = AlphaBeta::new().execute(&board, &limits);
        assert_eq!(full.score, ordered.score, "{fen}");
    });
}

#[test]
fn test_one_board_feeds_concurrent_searches() {
    let board = Board::standard();
    let results: Vec<_> = (0..4)
        .into_par_iter()
        .map(|_| AlphaBeta::new().execute(&board, &SearchLimits::depth(2)))
        .collect();
    assert!(results
        .windows(2)
        .all(|w| w[0].best_move == w[1].best_move && w[0].score == w[1].score));
}
