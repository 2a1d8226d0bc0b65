// Board representation for N×N five-in-a-row.
//
// A cell holds an Option<Marker>; playability is derived from occupancy
// (None = playable) rather than stored as a separate flag, so the two can
// never disagree. The board is mutated in place by the search through
// place/clear pairs and is never observed mid-mutation by another component.

use std::fmt;

/// Number of identical markers in an unbroken line required to win.
pub const WIN_LENGTH: usize = 5;

/// The four axis directions a winning line can run along:
/// horizontal, vertical, main diagonal, anti-diagonal.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The symbol occupying a cell - one of the two players.
///
/// An empty cell is represented as `Option<Marker>::None` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// The other player's marker.
    pub fn opposite(&self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Index used by the Zobrist key tables (0 for X, 1 for O).
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Marker::X => 0,
            Marker::O => 1,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

/// A board coordinate (row, column), zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N×N grid of cells stored row-major.
///
/// Exclusively mutated by whoever currently holds the turn; the search
/// explores by placing a marker, recursing and clearing it again, restoring
/// the board before control returns to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Marker>>,
    stones: usize,
}

impl Board {
    /// Create an empty board of the given side length.
    ///
    /// The side length must be at least [`WIN_LENGTH`], otherwise no game
    /// could ever be won.
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= WIN_LENGTH, "board too small to ever win");
        Self {
            size,
            cells: vec![None; size * size],
            stones: 0,
        }
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of occupied cells.
    #[inline]
    pub fn stones(&self) -> usize {
        self.stones
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Marker at (row, col), or `None` for an empty cell. O(1).
    #[inline]
    pub fn marker_at(&self, row: usize, col: usize) -> Option<Marker> {
        self.cells[self.idx(row, col)]
    }

    /// Whether a marker may be placed at (row, col). O(1).
    ///
    /// Always the negation of "occupied" - there is no independent flag.
    #[inline]
    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        self.cells[self.idx(row, col)].is_none()
    }

    /// Place a marker on an empty cell.
    ///
    /// Every `place` performed while exploring must be matched by exactly one
    /// [`Board::clear`] before control returns, on every exit path; a missed
    /// clear corrupts the board for sibling branches.
    pub fn place(&mut self, coord: Coord, marker: Marker) {
        let i = self.idx(coord.row, coord.col);
        debug_assert!(self.cells[i].is_none(), "place on occupied cell {coord}");
        self.cells[i] = Some(marker);
        self.stones += 1;
    }

    /// Remove the marker from an occupied cell, undoing a previous `place`.
    pub fn clear(&mut self, coord: Coord) {
        let i = self.idx(coord.row, coord.col);
        debug_assert!(self.cells[i].is_some(), "clear of empty cell {coord}");
        self.cells[i] = None;
        self.stones -= 1;
    }

    /// True when no cell is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones == 0
    }

    /// True when every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Iterate all playable cells in row-major order.
    pub fn playable_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.is_none().then(|| Coord::new(i / size, i % size))
        })
    }

    /// Iterate all occupied cells with their markers in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coord, Marker)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|m| (Coord::new(i / size, i % size), m))
        })
    }

    /// Scan every length-5 window along the four axis directions and return
    /// the marker filling an all-same, non-empty window, or `None`.
    pub fn winner(&self) -> Option<Marker> {
        let n = self.size as isize;
        let len = WIN_LENGTH as isize;

        for (dr, dc) in DIRECTIONS {
            for row in 0..n {
                for col in 0..n {
                    // Only windows that fit entirely on the board.
                    let end_r = row + dr * (len - 1);
                    let end_c = col + dc * (len - 1);
                    if end_r < 0 || end_r >= n || end_c < 0 || end_c >= n {
                        continue;
                    }
                    let first = self.marker_at(row as usize, col as usize);
                    if first.is_none() {
                        continue;
                    }
                    let filled = (1..len).all(|k| {
                        let r = (row + dr * k) as usize;
                        let c = (col + dc * k) as usize;
                        self.marker_at(r, c) == first
                    });
                    if filled {
                        return first;
                    }
                }
            }
        }
        None
    }

    /// True iff no cell is playable and nobody has won.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.marker_at(row, col) {
                    Some(m) => write!(f, "{m}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
