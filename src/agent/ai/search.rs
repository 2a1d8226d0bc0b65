// Depth-limited minimax with alpha-beta pruning and position caching
//
// The search explores by mutating the shared board in place: every placement
// is matched by exactly one clear before control returns, on every exit path
// (normal return and pruning break alike). A cached score short-circuits a
// node only when it was computed at the requested depth or deeper.

use crate::game_repr::{Board, Coord, Marker};

use super::evaluation::evaluate;
use super::move_ordering::generate_candidates;
use super::transposition_table::TranspositionTable;

/// Score of a position the searching side has won. Forced wins found closer
/// to the root score higher because the remaining depth is added on top.
pub const WIN_SCORE: i32 = 10_000;

/// Reference search depth - the single tunable trading strength for latency.
pub const DEFAULT_DEPTH: u8 = 3;

/// Result of a completed move search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen cell, or `None` when the board offers no playable cell.
    pub best_move: Option<Coord>,
    /// Minimax score of the chosen cell from the searching side's view.
    pub score: i32,
    /// Number of search nodes visited.
    pub nodes_searched: u64,
}

/// Find the best move for `marker` on the current board.
///
/// Clears the position cache first if it has outgrown its bound, then
/// searches every root candidate one ply down with the opponent to move,
/// threading a running alpha across the root siblings. Stops early once a
/// candidate reaches the immediate-win threshold. The board is returned in
/// the exact state it was given.
pub fn find_best_move(
    board: &mut Board,
    marker: Marker,
    max_depth: u8,
    tt: &mut TranspositionTable,
) -> SearchResult {
    // The cache is dropped wholesale, never evicted entry by entry.
    if tt.is_over_capacity() {
        tt.clear();
    }

    let candidates = generate_candidates(board, marker);
    if candidates.is_empty() {
        return SearchResult {
            best_move: None,
            score: 0,
            nodes_searched: 0,
        };
    }

    let depth = max_depth.max(1) - 1;
    let mut alpha = i32::MIN + 1;
    let beta = i32::MAX;
    let mut best_score = i32::MIN + 1;
    let mut best_move = None;
    let mut nodes = 0u64;

    for mv in candidates {
        board.place(mv, marker);
        let score = minimax(board, marker, depth, alpha, beta, false, tt, &mut nodes);
        board.clear(mv);

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(best_score);

        // A forced win needs no further root siblings.
        if best_score >= WIN_SCORE {
            break;
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        nodes_searched: nodes,
    }
}

/// Minimax with alpha-beta pruning over the candidate moves.
///
/// Scores the position from `marker`'s perspective with `depth` plies of
/// search remaining; `maximizing` tells whose turn it is. Results are cached
/// by position fingerprint together with the depth they were computed at.
#[allow(clippy::too_many_arguments)]
pub fn minimax(
    board: &mut Board,
    marker: Marker,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    tt: &mut TranspositionTable,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let hash = TranspositionTable::fingerprint(board);
    if let Some(entry) = tt.probe(hash) {
        // A shallower result is never valid for a deeper query.
        if entry.depth >= depth {
            return entry.score;
        }
    }

    match board.winner() {
        Some(w) if w == marker => return WIN_SCORE + depth as i32,
        Some(_) => return -WIN_SCORE - depth as i32,
        None => {}
    }
    if board.is_draw() {
        return 0;
    }

    if depth == 0 {
        let score = evaluate(board, marker);
        tt.store(hash, 0, score);
        return score;
    }

    let candidates = generate_candidates(board, marker);
    let mover = if maximizing { marker } else { marker.opposite() };

    let best = if maximizing {
        let mut best = i32::MIN + 1;
        for mv in candidates {
            board.place(mv, mover);
            let score = minimax(board, marker, depth - 1, alpha, beta, false, tt, nodes);
            board.clear(mv);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // beta cutoff
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in candidates {
            board.place(mv, mover);
            let score = minimax(board, marker, depth - 1, alpha, beta, true, tt, nodes);
            board.clear(mv);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break; // alpha cutoff
            }
        }
        best
    };

    tt.store(hash, depth, best);
    best
}
