// Candidate generation with heuristic ordering
//
// Produces the ordered, size-bounded move list the search branches over.
// Bounding the branching factor is the dominant lever on feasible depth; the
// cost is that an unscored but globally better move can be excluded, an
// accepted approximation.

use crate::game_repr::{Board, Coord, Marker, DIRECTIONS, WIN_LENGTH};
use smallvec::SmallVec;

/// Upper bound on the number of candidates handed to the search.
pub const MAX_CANDIDATES: usize = 20;

/// Chebyshev radius around occupied cells that forms the frontier.
const FRONTIER_RADIUS: usize = 2;

/// One-ply score awarded when the candidate wins the game outright.
const IMMEDIATE_WIN: i32 = 10_000;

/// One-ply score awarded when the candidate denies the opponent's win.
const IMMEDIATE_BLOCK: i32 = 9_000;

/// A candidate cell with its one-ply ordering score.
#[derive(Debug, Clone, Copy)]
struct ScoredMove {
    coord: Coord,
    score: i32,
}

/// Generate the ordered, bounded candidate list for the side playing `marker`.
///
/// 1. On an empty board, only the center cell.
/// 2. Otherwise the frontier: every playable cell within Chebyshev distance
///    2 of any occupied cell, collected in row-major order.
/// 3. An empty frontier falls back to the full playable set.
/// 4. Candidates are scored one ply deep and stable-sorted descending, so
///    equal scores keep their row-major enumeration order - tie-breaking
///    never depends on unordered-container iteration.
/// 5. The list is truncated to the [`MAX_CANDIDATES`] best.
///
/// The board is borrowed mutably because scoring explores by placing and
/// clearing markers; it is restored before the function returns.
pub fn generate_candidates(board: &mut Board, marker: Marker) -> SmallVec<[Coord; MAX_CANDIDATES]> {
    if board.is_empty() {
        let center = board.size() / 2;
        let mut only = SmallVec::new();
        only.push(Coord::new(center, center));
        return only;
    }

    let mut frontier: SmallVec<[Coord; 64]> = board
        .playable_cells()
        .filter(|&c| near_occupied(board, c))
        .collect();

    if frontier.is_empty() {
        frontier = board.playable_cells().collect();
    }

    let mut scored: SmallVec<[ScoredMove; 64]> = frontier
        .into_iter()
        .map(|coord| ScoredMove {
            coord,
            score: score_move(board, coord, marker),
        })
        .collect();

    // Stable sort: ties stay in row-major order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    scored
        .into_iter()
        .take(MAX_CANDIDATES)
        .map(|sm| sm.coord)
        .collect()
}

/// Whether any occupied cell lies within the frontier radius of `coord`.
fn near_occupied(board: &Board, coord: Coord) -> bool {
    let n = board.size();
    let row_lo = coord.row.saturating_sub(FRONTIER_RADIUS);
    let row_hi = (coord.row + FRONTIER_RADIUS).min(n - 1);
    let col_lo = coord.col.saturating_sub(FRONTIER_RADIUS);
    let col_hi = (coord.col + FRONTIER_RADIUS).min(n - 1);

    for row in row_lo..=row_hi {
        for col in col_lo..=col_hi {
            if board.marker_at(row, col).is_some() {
                return true;
            }
        }
    }
    false
}

/// Score a candidate cell one ply deep, without search.
///
/// The cell is tried with the player's own marker and then the opponent's.
/// An immediate win short-circuits to a terminal score (10 000 for self,
/// 9 000 for denying the opponent); otherwise threats created by each marker
/// are summed, with defensive contributions weighted at 0.9.
pub fn score_move(board: &mut Board, coord: Coord, marker: Marker) -> i32 {
    let mut score = 0;

    for side in [marker, marker.opposite()] {
        board.place(coord, side);

        if board.winner() == Some(side) {
            board.clear(coord);
            return if side == marker {
                IMMEDIATE_WIN
            } else {
                IMMEDIATE_BLOCK
            };
        }

        let threats = count_threats(board, coord, side);
        if side == marker {
            score += threats;
        } else {
            // 0.9x defensive weight; threat values are multiples of 10,
            // so this stays exact in integers.
            score += threats * 9 / 10;
        }

        board.clear(coord);
    }

    score
}

/// Count the threats a marker at `coord` participates in.
///
/// For each of the four axis directions, extend from the cell both ways:
/// count the contiguous same-marker run through it and whether an empty cell
/// bounds the run within four steps on either side. Award 1 000 for a run of
/// four or more, 100 for a run of three with at least one open end, 10 for a
/// run of two with two open ends.
fn count_threats(board: &Board, coord: Coord, marker: Marker) -> i32 {
    let n = board.size() as isize;
    let row = coord.row as isize;
    let col = coord.col as isize;
    let mut score = 0;

    for (dr, dc) in DIRECTIONS {
        let mut count = 1; // the cell itself
        let mut open_ends = 0;

        for sign in [1isize, -1] {
            for step in 1..WIN_LENGTH as isize {
                let r = row + dr * sign * step;
                let c = col + dc * sign * step;
                if r < 0 || r >= n || c < 0 || c >= n {
                    break;
                }
                match board.marker_at(r as usize, c as usize) {
                    Some(m) if m == marker => count += 1,
                    Some(_) => break,
                    None => {
                        open_ends += 1;
                        break;
                    }
                }
            }
        }

        if count >= 4 {
            score += 1_000;
        } else if count == 3 && open_ends >= 1 {
            score += 100;
        } else if count == 2 && open_ends >= 2 {
            score += 10;
        }
    }

    score
}
