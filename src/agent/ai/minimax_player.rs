//! MinimaxPlayer - five-in-a-row AI using minimax with alpha-beta pruning.
//!
//! Implements the [`Player`] trait and delegates move selection to the search
//! module's [`find_best_move`], keeping the player interface separate from
//! the search algorithm. The player owns its transposition table, the only
//! state that survives between turns; everything else is recreated per call.
//!
//! # Difficulty levels
//!
//! - **Easy**: depth 1, orders candidates and picks the best-looking one
//! - **Medium**: depth 2, sees the opponent's direct reply
//! - **Hard**: depth 3, the reference strength/latency trade-off

use crate::agent::player::Player;
use crate::game_repr::{Board, Coord, Marker};

use super::search::{find_best_move, DEFAULT_DEPTH};
use super::transposition_table::TranspositionTable;

/// AI difficulty levels that map to search depth.
///
/// Depth is the single tunable trading strength for latency: one more ply
/// multiplies the work by roughly the candidate bound. There is no deadline
/// or timeout contract - a search runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Depth 1: near-instant, tactically blind beyond one ply.
    Easy,
    /// Depth 2: sees immediate threats and replies.
    Medium,
    /// Depth 3: the reference default.
    Hard,
}

impl Difficulty {
    /// Maximum search depth in plies for this difficulty level.
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => DEFAULT_DEPTH,
        }
    }

    /// Display name for this difficulty level.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// AI player that uses minimax with alpha-beta pruning.
///
/// Deterministic: the same position with an empty cache always yields the
/// same move. Stateless across calls apart from the position cache, which is
/// kept between turns so transpositions from earlier searches can still be
/// reused, and dropped wholesale once it outgrows its bound.
pub struct MinimaxPlayer {
    marker: Marker,
    difficulty: Difficulty,
    name: String,
    tt: TranspositionTable,
}

impl MinimaxPlayer {
    /// Create a new MinimaxPlayer with custom difficulty and name.
    pub fn new(marker: Marker, difficulty: Difficulty, name: String) -> Self {
        Self {
            marker,
            difficulty,
            name,
            tt: TranspositionTable::new(),
        }
    }

    /// Create a player with the given difficulty and an auto-generated name.
    pub fn with_difficulty(marker: Marker, difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(marker, difficulty, name)
    }

    /// Create a player with the reference default difficulty (Hard).
    pub fn new_default(marker: Marker) -> Self {
        Self::with_difficulty(marker, Difficulty::Hard)
    }

    /// Current difficulty level.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change the difficulty for future searches.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty.name());
        }
    }

    /// Number of positions currently cached.
    pub fn cache_len(&self) -> usize {
        self.tt.len()
    }
}

impl Player for MinimaxPlayer {
    /// Select the next move by depth-limited alpha-beta search.
    ///
    /// Blocks for the full duration of the search; duration grows with board
    /// development and the configured depth. Returns `None` only when the
    /// board has no playable cell.
    fn get_move(&mut self, board: &mut Board) -> Option<Coord> {
        let result = find_best_move(board, self.marker, self.difficulty.max_depth(), &mut self.tt);

        log::debug!(
            "[{}] searched {} nodes, score {}, cache {} entries ({:.0}% hits), move {:?}",
            self.name,
            result.nodes_searched,
            result.score,
            self.tt.len(),
            self.tt.hit_rate() * 100.0,
            result.best_move,
        );

        result.best_move
    }

    fn marker(&self) -> Marker {
        self.marker
    }

    fn name(&self) -> &str {
        &self.name
    }
}
