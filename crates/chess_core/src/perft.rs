use crate::{board::Board, moves::Move};

/// Pure perft node count.
/// Counts all positions reachable by moves that go through, down to `depth`.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let player = board.current_player();
    let mut nodes = 0u64;
    for &mv in player.legal_moves() {
        let transition = player.make_move(mv);
        if !transition.is_done() {
            continue;
        }
        nodes += if depth == 1 {
            1
        } else {
            perft(transition.board(), depth - 1)
        };
    }
    nodes
}

/// Per-root-move breakdown of [`perft`], in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(Move, u64)> {
    let player = board.current_player();
    player
        .legal_moves()
        .iter()
        .filter_map(|&mv| {
            let transition = player.make_move(mv);
            transition
                .is_done()
                .then(|| (mv, perft(transition.board(), depth.saturating_sub(1))))
        })
        .collect()
}
