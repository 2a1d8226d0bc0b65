use crate::game_repr::Board;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Largest board side length the Zobrist key table covers.
pub const MAX_BOARD_SIZE: usize = 32;

/// How many cached positions are allowed before the whole cache is dropped.
///
/// The cache is cleared in one go at the start of a move search once it grows
/// past this bound; there is no per-entry eviction.
pub const MAX_CACHE_ENTRIES: usize = 100_000;

/// Zobrist hashing constants for board positions.
///
/// Zobrist hashing assigns a random 64-bit number to every (cell, marker)
/// combination; a position's fingerprint is the XOR of the numbers for its
/// occupied cells. Identical marker layouts therefore fingerprint identically
/// regardless of the order the markers were placed in (transposition
/// equivalence). The fingerprint depends on the markers alone - there is no
/// side-to-move component.
struct ZobristKeys {
    /// [cell][marker] - row-major cells for boards up to MAX_BOARD_SIZE.
    cells: Vec<[u64; 2]>,
}

impl ZobristKeys {
    /// Generate Zobrist keys using a seeded random number generator.
    /// This ensures the keys are random but reproducible across runs.
    fn generate() -> Self {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        // Fixed seed for reproducibility
        let mut rng = StdRng::seed_from_u64(0x9a3c_51f7_22d0_8b41);

        let mut cells = vec![[0u64; 2]; MAX_BOARD_SIZE * MAX_BOARD_SIZE];
        for cell in &mut cells {
            for key in cell {
                *key = rng.gen();
            }
        }

        Self { cells }
    }
}

/// Global Zobrist keys - initialized once using LazyLock.
static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::generate);

/// Entry in the transposition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    /// Search depth remaining when this position was scored.
    pub depth: u8,
    /// Minimax score computed for the position.
    pub score: i32,
}

/// Transposition table mapping position fingerprints to cached scores.
///
/// A stored score may only short-circuit a query when the stored depth is at
/// least the requested depth; a shallow result is never valid for a deeper
/// query. The depth gate lives in [`CacheEntry`] consumers (the search), the
/// table itself just stores and retrieves.
///
/// Lookup order never influences move selection - ordering comes only from
/// the candidate generator's explicit heuristic sort.
pub struct TranspositionTable {
    table: HashMap<u64, CacheEntry>,
    /// Statistics: number of successful probes
    pub hits: u64,
    /// Statistics: number of failed probes
    pub misses: u64,
}

impl TranspositionTable {
    /// Create an empty transposition table.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Compute the Zobrist fingerprint of a position.
    ///
    /// Uniquely determined by the full row-major sequence of markers.
    pub fn fingerprint(board: &Board) -> u64 {
        debug_assert!(board.size() <= MAX_BOARD_SIZE);
        let mut hash = 0u64;
        for (coord, marker) in board.occupied_cells() {
            let cell = coord.row * board.size() + coord.col;
            hash ^= ZOBRIST.cells[cell][marker.index()];
        }
        hash
    }

    /// Probe the table for a fingerprint, updating hit/miss statistics.
    pub fn probe(&mut self, hash: u64) -> Option<CacheEntry> {
        match self.table.get(&hash) {
            Some(entry) => {
                self.hits += 1;
                Some(*entry)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a score for a fingerprint, overwriting any previous entry.
    pub fn store(&mut self, hash: u64, depth: u8, score: i32) {
        self.table.insert(hash, CacheEntry { depth, score });
    }

    /// True once the table has outgrown [`MAX_CACHE_ENTRIES`].
    pub fn is_over_capacity(&self) -> bool {
        self.table.len() > MAX_CACHE_ENTRIES
    }

    /// Drop every entry and reset the statistics.
    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Current number of cached positions.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Hit rate (0.0 to 1.0) over the probes since the last clear.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Coord, Marker};

    #[test]
    fn test_fingerprint_is_stable() {
        let mut board = Board::new(9);
        board.place(Coord::new(4, 4), Marker::X);
        board.place(Coord::new(3, 3), Marker::O);

        let h1 = TranspositionTable::fingerprint(&board);
        let h2 = TranspositionTable::fingerprint(&board);
        assert_eq!(h1, h2);
        assert_ne!(h1, 0);
    }

    #[test]
    fn test_fingerprint_ignores_move_order() {
        let mut a = Board::new(9);
        a.place(Coord::new(4, 4), Marker::X);
        a.place(Coord::new(2, 6), Marker::O);
        a.place(Coord::new(5, 5), Marker::X);

        let mut b = Board::new(9);
        b.place(Coord::new(5, 5), Marker::X);
        b.place(Coord::new(4, 4), Marker::X);
        b.place(Coord::new(2, 6), Marker::O);

        assert_eq!(
            TranspositionTable::fingerprint(&a),
            TranspositionTable::fingerprint(&b)
        );
    }

    #[test]
    fn test_fingerprint_distinguishes_marker() {
        let mut a = Board::new(9);
        a.place(Coord::new(4, 4), Marker::X);
        let mut b = Board::new(9);
        b.place(Coord::new(4, 4), Marker::O);

        assert_ne!(
            TranspositionTable::fingerprint(&a),
            TranspositionTable::fingerprint(&b)
        );
    }

    #[test]
    fn test_place_clear_restores_fingerprint() {
        let mut board = Board::new(9);
        board.place(Coord::new(4, 4), Marker::X);
        let before = TranspositionTable::fingerprint(&board);

        board.place(Coord::new(4, 5), Marker::O);
        assert_ne!(TranspositionTable::fingerprint(&board), before);
        board.clear(Coord::new(4, 5));
        assert_eq!(TranspositionTable::fingerprint(&board), before);
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new();
        tt.store(0xDEAD_BEEF, 3, 150);

        let entry = tt.probe(0xDEAD_BEEF).expect("entry stored");
        assert_eq!(entry.depth, 3);
        assert_eq!(entry.score, 150);
        assert_eq!(tt.hits, 1);

        assert_eq!(tt.probe(0xFEED_FACE), None);
        assert_eq!(tt.misses, 1);
        assert_eq!(tt.hit_rate(), 0.5);
    }

    #[test]
    fn test_store_overwrites() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 0, 10);
        tt.store(1, 2, 20);
        assert_eq!(tt.probe(1), Some(CacheEntry { depth: 2, score: 20 }));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 1, 1);
        tt.probe(1);
        tt.probe(2);
        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.hits, 0);
        assert_eq!(tt.misses, 0);
    }

    #[test]
    fn test_capacity_bound() {
        let mut tt = TranspositionTable::new();
        assert!(!tt.is_over_capacity());
        for hash in 0..=(MAX_CACHE_ENTRIES as u64) {
            tt.store(hash, 0, 0);
        }
        assert!(tt.is_over_capacity());
    }
}
