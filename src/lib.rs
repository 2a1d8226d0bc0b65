//! Caro engine - a search-based decision engine for N×N five-in-a-row.
//!
//! The crate is split in two layers:
//! - [`game_repr`]: the board representation and its derived queries
//!   (occupancy, legality, win/draw detection).
//! - [`agent`]: players implementing the shared [`agent::Player`] contract,
//!   including the minimax AI with alpha-beta pruning and position caching.
//!
//! The engine is single-threaded and synchronous: one `get_move` call blocks
//! until a move (or "no move" on a full board) is produced. Presentation,
//! input handling and session state belong to the caller.

pub mod agent;
pub mod game_repr;
