// Offline win-rate harness
//
// Drives the minimax AI against the uniform-random baseline for a number of
// games and tallies win/loss/draw, contract violations and slow moves.
// Run with: cargo run --release --bin simulate [games]
// Verbose per-game logging: RUST_LOG=debug cargo run --release --bin simulate

use std::time::{Duration, Instant};

use caro_engine::agent::{Difficulty, GameResult, MinimaxPlayer, Player, RandomPlayer};
use caro_engine::game_repr::{Board, Marker};

const BOARD_SIZE: usize = 9;
const DEFAULT_GAMES: usize = 20;

/// Moves slower than this are tallied; there is no timeout contract, the
/// count just surfaces misconfigured depth/width early.
const SLOW_MOVE_THRESHOLD: Duration = Duration::from_secs(5);

#[derive(Debug, Default)]
struct Tally {
    ai_wins: usize,
    ai_losses: usize,
    draws: usize,
    invalid_moves: usize,
    slow_moves: usize,
    moves_played: usize,
    slowest_move: Duration,
}

/// Play one game, X moving first, and return its result.
///
/// `None` means the game was aborted because a player broke the move
/// contract (returned a non-playable cell) - an engine bug, not an outcome.
fn play_game(
    x_player: &mut dyn Player,
    o_player: &mut dyn Player,
    tally: &mut Tally,
) -> Option<GameResult> {
    let mut board = Board::new(BOARD_SIZE);
    let mut side = Marker::X;

    loop {
        let player: &mut dyn Player = match side {
            Marker::X => &mut *x_player,
            Marker::O => &mut *o_player,
        };

        let started = Instant::now();
        let mv = player.get_move(&mut board);
        let elapsed = started.elapsed();

        tally.slowest_move = tally.slowest_move.max(elapsed);
        if elapsed > SLOW_MOVE_THRESHOLD {
            log::warn!("{} took {elapsed:.2?} for one move", player.name());
            tally.slow_moves += 1;
        }

        let Some(mv) = mv else {
            // No playable cell left: the game is a draw.
            return Some(GameResult::Draw);
        };

        if !board.is_playable(mv.row, mv.col) {
            log::error!("{} returned non-playable cell {mv}", player.name());
            tally.invalid_moves += 1;
            return None;
        }

        board.place(mv, side);
        tally.moves_played += 1;
        log::debug!("{} plays {mv}", player.name());

        if let Some(winner) = board.winner() {
            return Some(GameResult::from_winner(winner));
        }
        if board.is_draw() {
            return Some(GameResult::Draw);
        }

        side = side.opposite();
    }
}

fn main() {
    env_logger::init();

    let games: usize = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("games must be a number"))
        .unwrap_or(DEFAULT_GAMES);

    println!("Simulating {games} games: minimax (X) vs random (O) on {BOARD_SIZE}x{BOARD_SIZE}");
    println!();

    let mut tally = Tally::default();
    let started = Instant::now();

    for game in 0..games {
        // Fresh players per game: no cache carries over between games, and
        // the random side gets a distinct, reproducible seed.
        let mut ai = MinimaxPlayer::with_difficulty(Marker::X, Difficulty::Hard);
        let mut random = RandomPlayer::from_seed(Marker::O, game as u64);

        match play_game(&mut ai, &mut random, &mut tally) {
            Some(GameResult::XWins) => {
                tally.ai_wins += 1;
                log::info!("game {game}: AI wins");
            }
            Some(GameResult::OWins) => {
                tally.ai_losses += 1;
                log::info!("game {game}: random wins");
            }
            Some(GameResult::Draw) => {
                tally.draws += 1;
                log::info!("game {game}: draw");
            }
            None => log::info!("game {game}: aborted on contract violation"),
        }
    }

    let elapsed = started.elapsed();
    let finished = tally.ai_wins + tally.ai_losses + tally.draws;

    println!("=== Results ===");
    println!("AI wins:        {}", tally.ai_wins);
    println!("AI losses:      {}", tally.ai_losses);
    println!("Draws:          {}", tally.draws);
    println!("Invalid moves:  {}", tally.invalid_moves);
    println!("Slow moves:     {}", tally.slow_moves);
    println!();
    if finished > 0 {
        println!(
            "Win rate:       {:.1}%",
            tally.ai_wins as f64 / finished as f64 * 100.0
        );
    }
    println!("Moves played:   {}", tally.moves_played);
    println!("Slowest move:   {:.2?}", tally.slowest_move);
    println!(
        "Total time:     {:.2?} ({:.2?} per game)",
        elapsed,
        elapsed / games.max(1) as u32
    );
}
