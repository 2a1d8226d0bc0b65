// Static position evaluation
//
// Scores a board from one player's perspective without search, by sliding a
// length-5 window along every row, column and diagonal. A window only
// contributes for a side when the opposing marker is absent from it; windows
// with more than two empty cells are skipped as too undeveloped to matter.
// (This deliberately undercounts isolated early-game markers, which score 0
// instead of 1 - kept to match the established playing strength.)

use crate::game_repr::{Board, Marker, DIRECTIONS, WIN_LENGTH};

/// Contribution of a clean window indexed by how many own markers it holds.
/// A full window is a won game and belongs to the search's terminal scores,
/// not the evaluator.
const WINDOW_VALUES: [i32; WIN_LENGTH + 1] = [0, 1, 10, 50, 500, 0];

/// Windows holding more than this many empty cells are skipped.
const MAX_EMPTIES: usize = 2;

/// Evaluate the board from `marker`'s perspective.
///
/// Returns the sum over all length-5 windows of the side's contribution minus
/// the opponent's. Positive means `marker` stands better. The magnitudes stay
/// well below the terminal win/loss scores used by the search.
pub fn evaluate(board: &Board, marker: Marker) -> i32 {
    let n = board.size() as isize;
    let len = WIN_LENGTH as isize;
    let opponent = marker.opposite();
    let mut score = 0;

    for (dr, dc) in DIRECTIONS {
        for row in 0..n {
            for col in 0..n {
                let end_r = row + dr * (len - 1);
                let end_c = col + dc * (len - 1);
                if end_r < 0 || end_r >= n || end_c < 0 || end_c >= n {
                    continue;
                }

                let mut own = 0usize;
                let mut theirs = 0usize;
                let mut empties = 0usize;
                for k in 0..len {
                    let r = (row + dr * k) as usize;
                    let c = (col + dc * k) as usize;
                    match board.marker_at(r, c) {
                        Some(m) if m == marker => own += 1,
                        Some(_) => theirs += 1,
                        None => empties += 1,
                    }
                }

                if empties > MAX_EMPTIES {
                    continue;
                }
                // A side only scores in windows free of the other side.
                if theirs == 0 {
                    score += WINDOW_VALUES[own];
                }
                if own == 0 {
                    score -= WINDOW_VALUES[theirs];
                }
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Coord;

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(9);
        assert_eq!(evaluate(&board, Marker::X), 0);
    }

    #[test]
    fn test_isolated_marker_scores_zero() {
        // Every window through a lone marker has four empties and is
        // skipped as undeveloped; the known early-game undercount.
        let mut board = Board::new(9);
        board.place(Coord::new(4, 4), Marker::X);
        assert_eq!(evaluate(&board, Marker::X), 0);
    }

    #[test]
    fn test_three_in_a_row_counts_covering_windows() {
        let mut board = Board::new(9);
        for col in 2..5 {
            board.place(Coord::new(4, col), Marker::X);
        }
        // Horizontal windows starting at columns 0, 1 and 2 contain all
        // three markers with two empties: 3 x 50. Every other window has
        // more than two empties and is skipped.
        assert_eq!(evaluate(&board, Marker::X), 150);
        assert_eq!(evaluate(&board, Marker::O), -150);
    }

    #[test]
    fn test_opposing_marker_voids_window() {
        let mut board = Board::new(9);
        for col in 2..5 {
            board.place(Coord::new(4, col), Marker::X);
        }
        board.place(Coord::new(4, 5), Marker::O);
        // Windows at columns 1 and 2 now contain the O and contribute
        // nothing; only the window at column 0 still scores 50 for X.
        // The lone O never sits in an X-free window with <= 2 empties.
        assert_eq!(evaluate(&board, Marker::X), 50);
    }

    #[test]
    fn test_four_in_a_row_dominates() {
        let mut board = Board::new(9);
        for col in 2..6 {
            board.place(Coord::new(4, col), Marker::O);
        }
        let score = evaluate(&board, Marker::O);
        assert!(score >= 500, "four in a row should score high, got {score}");
    }

    #[test]
    fn test_symmetry_between_perspectives() {
        let mut board = Board::new(9);
        board.place(Coord::new(4, 4), Marker::X);
        board.place(Coord::new(4, 5), Marker::X);
        board.place(Coord::new(2, 2), Marker::O);
        board.place(Coord::new(3, 2), Marker::O);
        board.place(Coord::new(4, 2), Marker::O);
        assert_eq!(evaluate(&board, Marker::X), -evaluate(&board, Marker::O));
    }
}
