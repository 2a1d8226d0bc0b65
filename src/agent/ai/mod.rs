// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the five-in-a-row AI using depth-limited minimax
// with alpha-beta pruning.
//
// Key features:
// - Deterministic (same position with an empty cache always gives same move)
// - Heuristically ordered, size-bounded candidate generation to keep the
//   branching factor small
// - Transposition table keyed by a Zobrist fingerprint of the markers,
//   depth-gated on lookup
// - Window-based static evaluation at the depth limit

mod evaluation;
mod minimax_player;
mod move_ordering;
mod search;
mod transposition_table;

pub use minimax_player::{Difficulty, MinimaxPlayer};

// Re-export useful types
pub use evaluation::evaluate;
pub use move_ordering::{generate_candidates, score_move, MAX_CANDIDATES};
pub use search::{find_best_move, minimax, SearchResult, DEFAULT_DEPTH, WIN_SCORE};
pub use transposition_table::TranspositionTable;
