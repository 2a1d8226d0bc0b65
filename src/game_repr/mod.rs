//! Game state representation: markers, coordinates and the board grid.

pub mod board;

pub use board::{Board, Coord, Marker, DIRECTIONS, WIN_LENGTH};
