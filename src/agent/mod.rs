pub mod player;
pub use player::{GameResult, Player};

pub mod random_player;
pub use random_player::RandomPlayer;

pub mod ai;
pub use ai::{Difficulty, MinimaxPlayer, SearchResult, TranspositionTable};
