use tracing::warn;

use crate::{
    board::Board,
    fen::FenError,
    moves::{Move, MoveFactory},
    types::*,
};

/// Long algebraic notation as UCI expects it, `0000` for the null move.
pub fn move_to_uci(mv: Move) -> String {
    let (Some(from), Some(to)) = (mv.origin(), mv.destination()) else {
        return "0000".to_string();
    };
    let mut s = format!("{from}{to}");
    if let Move::Promotion { promote_to, .. } = mv {
        s.push(promote_to.symbol().to_ascii_lowercase());
    }
    s
}

/// Parse `e2e4` / `e7e8n` against the side to move. Anything that does not
/// name one of its moves comes back as [`Move::Null`].
pub fn parse_uci_move(board: &Board, txt: &str) -> Move {
    if txt.len() < 4 || !txt.is_ascii() {
        return Move::Null;
    }
    let (Some(from), Some(to)) = (
        Coordinate::from_algebraic(&txt[0..2]),
        Coordinate::from_algebraic(&txt[2..4]),
    ) else {
        return Move::Null;
    };

    let mv = MoveFactory::create_move(board, from, to);
    match txt[4..].chars().next().and_then(PieceKind::from_symbol) {
        Some(kind) => mv.resolve_promotion(&mut |_: &[PieceKind]| kind),
        None => mv,
    }
}

/// Replay `position startpos|fen <fen> [moves ...]` into a board history,
/// oldest first. Moves that fail to parse or to apply are skipped.
pub fn position_from_uci(args: &[&str]) -> Result<Vec<Board>, FenError> {
    let mut i = 0;
    let start = match args.first() {
        Some(&"fen") => {
            let end = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
            let fen = args[1..end].join(" ");
            i = end;
            Board::from_fen(&fen)?
        }
        Some(&"startpos") => {
            i = 1;
            Board::standard()
        }
        _ => Board::standard(),
    };

    let mut history = vec![start];
    if args.get(i) == Some(&"moves") {
        for txt in &args[i + 1..] {
            let Some(current) = history.last() else { break };
            let mv = parse_uci_move(current, txt);
            let transition = current.current_player().make_move(mv);
            if !transition.is_done() {
                warn!(
                    mv = %txt,
                    parsed = %transition.transition_move(),
                    status = ?transition.status(),
                    "skipping move"
                );
                continue;
            }
            let next = transition.into_board();
            history.push(next);
        }
    }
    Ok(history)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
