//! Player trait and associated types for automated game agents.
//!
//! This module provides the core abstraction for entities that can pick the
//! next cell to occupy. Different player types (minimax AI, uniform-random
//! baseline, a future learning agent) implement the [`Player`] trait so the
//! session layer and the offline simulator can treat them polymorphically.
//!
//! # Synchronous design
//!
//! `get_move()` is intentionally synchronous: the AI blocks for the full
//! duration of its search and the caller simply waits for the result. There
//! are no suspension points, no cancellation, and no I/O inside a move
//! computation. Artificial "thinking" delays belong to the caller.

use crate::game_repr::{Board, Coord, Marker};

/// Result of a completed game, as tallied by the simulator harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Player X completed a five-in-a-row line.
    XWins,
    /// Player O completed a five-in-a-row line.
    OWins,
    /// The board filled up without a winning line.
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning marker.
    pub fn from_winner(winner: Marker) -> Self {
        match winner {
            Marker::X => GameResult::XWins,
            Marker::O => GameResult::OWins,
        }
    }
}

/// Trait for entities that can provide moves.
///
/// # Contract
///
/// - `get_move()` must return a cell that is currently playable on the board
///   it was given, or `None` when no playable cell exists (a full board is a
///   normal outcome, not an error).
/// - The board is handed over mutably so the AI can explore by reversible
///   place/clear mutation, but no *net* mutation may remain when the call
///   returns. A caller receiving a non-playable cell or a mutated board has
///   found an engine bug.
pub trait Player {
    /// Request the next move from this player.
    ///
    /// Blocks until a move is available. Returns `None` if the board has no
    /// playable cell.
    fn get_move(&mut self, board: &mut Board) -> Option<Coord>;

    /// The marker this player places.
    fn marker(&self) -> Marker;

    /// Display name, used by the simulator and in logs.
    fn name(&self) -> &str {
        "Player"
    }
}
