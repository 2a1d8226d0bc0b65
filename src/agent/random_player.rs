//! Uniform-random baseline player.
//!
//! Picks uniformly among all playable cells. Useful as the weak side of the
//! offline win-rate harness and as a sanity opponent in tests.

use crate::agent::player::Player;
use crate::game_repr::{Board, Coord, Marker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Player that chooses a uniformly random playable cell.
pub struct RandomPlayer {
    marker: Marker,
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    /// Create a random player seeded from the OS entropy source.
    pub fn new(marker: Marker) -> Self {
        Self::from_seed(marker, rand::thread_rng().gen())
    }

    /// Create a random player with a fixed seed, for reproducible runs.
    pub fn from_seed(marker: Marker, seed: u64) -> Self {
        Self {
            marker,
            rng: StdRng::seed_from_u64(seed),
            name: format!("Random ({marker})"),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &mut Board) -> Option<Coord> {
        let legal: Vec<Coord> = board.playable_cells().collect();
        if legal.is_empty() {
            None
        } else {
            Some(legal[self.rng.gen_range(0..legal.len())])
        }
    }

    fn marker(&self) -> Marker {
        self.marker
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_playable_cell() {
        let mut board = Board::new(9);
        board.place(Coord::new(4, 4), Marker::X);

        let mut player = RandomPlayer::from_seed(Marker::O, 7);
        for _ in 0..20 {
            let mv = player.get_move(&mut board).expect("board has room");
            assert!(board.is_playable(mv.row, mv.col));
        }
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let mut board = Board::new(9);
        for row in 0..9 {
            for col in 0..9 {
                let marker = if (col + 2 * row) % 4 < 2 {
                    Marker::X
                } else {
                    Marker::O
                };
                board.place(Coord::new(row, col), marker);
            }
        }
        let mut player = RandomPlayer::from_seed(Marker::O, 7);
        assert_eq!(player.get_move(&mut board), None);
    }

    #[test]
    fn test_seeded_player_is_reproducible() {
        let mut board_a = Board::new(9);
        let mut board_b = Board::new(9);
        let mut a = RandomPlayer::from_seed(Marker::X, 42);
        let mut b = RandomPlayer::from_seed(Marker::X, 42);
        for _ in 0..10 {
            assert_eq!(a.get_move(&mut board_a), b.get_move(&mut board_b));
        }
    }
}
