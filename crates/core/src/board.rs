//! Board module - the fixed 10x20 grid, score, and terminal flag.
//!
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to bottom.
//! The board is created once per session and mutated only by locking pieces
//! and clearing full rows; the game-over flag freezes it without discarding
//! its history.

use arrayvec::ArrayVec;

use blockfall_types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, LINE_SCORES};

use crate::piece::Piece;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Upper bound on rows cleared by one call (every row full).
const MAX_CLEARED: usize = BOARD_HEIGHT as usize;

/// The game board with its score and terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    score: u32,
    game_over: bool,
}

impl Board {
    /// Create a new empty board with score 0.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            score: 0,
            game_over: false,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Enter the terminal state. Used by the session when a freshly spawned
    /// piece is immediately illegal; `lock` sets the flag on its own when a
    /// piece never fully entered the visible board.
    pub fn mark_game_over(&mut self) {
        self.game_over = true;
    }

    /// Get cell at position (x, y); None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Commit a piece's cells permanently into the grid.
    ///
    /// Cells with rows inside the visible board are written with the piece's
    /// kind tag. Any occupied cell still above row 0 means the piece never
    /// fully entered the board: the game-over flag is set and nothing is
    /// written for that cell.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 && y < BOARD_HEIGHT as i8 {
                self.set(x, y, Some(piece.kind));
            } else if y < 0 {
                self.game_over = true;
            }
        }
    }

    /// Remove every full row and award points for the batch.
    ///
    /// Scans bottom to top; removing a row shifts all rows above it down by
    /// one and inserts an empty row at the top, then re-examines the same row
    /// index (a shifted-down row may itself be full). Returns the cleared row
    /// indices in clear order. Points come from the fixed table, clamped at
    /// the 4-line bonus.
    pub fn clear_lines(&mut self) -> ArrayVec<u8, MAX_CLEARED> {
        let mut cleared = ArrayVec::new();
        let width = BOARD_WIDTH as usize;

        let mut y = BOARD_HEIGHT as usize;
        while y > 0 {
            y -= 1;
            if !self.is_row_full(y) {
                continue;
            }
            cleared.push(y as u8);
            for row in (1..=y).rev() {
                let src = (row - 1) * width;
                self.cells.copy_within(src..src + width, row * width);
            }
            for cell in &mut self.cells[..width] {
                *cell = None;
            }
            // re-check the same row after the pull-down
            y += 1;
        }

        self.score += LINE_SCORES[cleared.len().min(4)];
        cleared
    }

    /// Count currently-full rows without mutating anything. This is the
    /// clear-check the adversarial selector scores hypothetical locks with.
    pub fn clearable_lines(&self) -> usize {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.is_row_full(y))
            .count()
    }

    /// Write the grid as u8 occupancy tags (0 empty, 1..=7 kind tags).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = match self.cells[y * BOARD_WIDTH as usize + x] {
                    Some(kind) => kind.tag(),
                    None => 0,
                };
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::{PieceKind, Rotation};

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    #[test]
    fn index_rejects_out_of_bounds() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn new_board_is_empty_with_zero_score() {
        let board = Board::new();
        assert_eq!(board.score(), 0);
        assert!(!board.game_over());
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                assert_eq!(board.get(x, y), Some(None));
            }
        }
    }

    #[test]
    fn lock_writes_kind_tags_into_visible_rows() {
        let mut board = Board::new();
        let piece = Piece {
            kind: PieceKind::O,
            rotation: Rotation::North,
            x: 3,
            y: 10,
        };
        board.lock(&piece);
        assert_eq!(board.get(4, 10), Some(Some(PieceKind::O)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::O)));
        assert_eq!(board.get(4, 11), Some(Some(PieceKind::O)));
        assert_eq!(board.get(5, 11), Some(Some(PieceKind::O)));
        assert!(!board.game_over());
    }

    #[test]
    fn lock_above_the_top_sets_game_over_without_writing() {
        let mut board = Board::new();
        // O mask occupies mini-grid rows 0 and 1; anchor y = -2 keeps all
        // cells above row 0.
        let piece = Piece {
            kind: PieceKind::O,
            rotation: Rotation::North,
            x: 3,
            y: -2,
        };
        board.lock(&piece);
        assert!(board.game_over());
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                assert_eq!(board.get(x, y), Some(None));
            }
        }
    }

    #[test]
    fn lock_straddling_the_top_keeps_the_visible_cells() {
        let mut board = Board::new();
        // Vertical I with anchor y = -2: mask rows 0..4 give cells at
        // y = -2..2, so two land above the top and two inside.
        let piece = Piece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            x: 0,
            y: -2,
        };
        board.lock(&piece);
        assert!(board.game_over());
        assert_eq!(board.get(2, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(2, 1), Some(Some(PieceKind::I)));
    }

    #[test]
    fn clear_lines_awards_the_fixed_table() {
        for (lines, points) in [(1usize, 100u32), (2, 300), (3, 500), (4, 800)] {
            let mut board = Board::new();
            for i in 0..lines {
                fill_row(&mut board, (BOARD_HEIGHT as usize - 1 - i) as i8);
            }
            let cleared = board.clear_lines();
            assert_eq!(cleared.len(), lines);
            assert_eq!(board.score(), points);
        }
    }

    #[test]
    fn clear_lines_clamps_counts_above_four_to_the_tetris_bonus() {
        let mut board = Board::new();
        for y in 14..20 {
            fill_row(&mut board, y);
        }
        let cleared = board.clear_lines();
        assert_eq!(cleared.len(), 6);
        assert_eq!(board.score(), 800);
    }

    #[test]
    fn clear_lines_shifts_rows_down_preserving_order() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(0, 17, Some(PieceKind::T));
        board.set(1, 18, Some(PieceKind::L));

        let cleared = board.clear_lines();
        assert_eq!(cleared.len(), 1);
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 19), Some(Some(PieceKind::L)));
        assert_eq!(board.get(0, 17), Some(None));
    }

    #[test]
    fn clear_lines_handles_separated_full_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 15);
        fill_row(&mut board, 19);
        board.set(0, 14, Some(PieceKind::J));
        board.set(0, 17, Some(PieceKind::S));

        let cleared = board.clear_lines();
        assert_eq!(cleared.len(), 2);
        // J was above both full rows, S above only the bottom one.
        assert_eq!(board.get(0, 16), Some(Some(PieceKind::J)));
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::S)));
    }

    #[test]
    fn clear_lines_rechecks_rows_that_shift_into_place() {
        // Two adjacent full rows: after the lower one is removed the upper
        // one shifts into the same index and must be caught there.
        let mut board = Board::new();
        fill_row(&mut board, 18);
        fill_row(&mut board, 19);
        let cleared = board.clear_lines();
        assert_eq!(cleared.len(), 2);
        assert_eq!(cleared.as_slice(), [19, 19]);
    }

    #[test]
    fn clear_lines_is_idempotent() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(4, 18, Some(PieceKind::Z));

        assert_eq!(board.clear_lines().len(), 1);
        let score_after_first = board.score();
        assert_eq!(board.clear_lines().len(), 0);
        assert_eq!(board.score(), score_after_first);
    }

    #[test]
    fn clearable_lines_counts_without_mutating() {
        let mut board = Board::new();
        fill_row(&mut board, 18);
        fill_row(&mut board, 19);
        let before = board.clone();
        assert_eq!(board.clearable_lines(), 2);
        assert_eq!(board, before);
    }

    #[test]
    fn write_u8_grid_uses_one_based_kind_tags() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(9, 19, Some(PieceKind::Z));

        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[19][9], 7);
        assert_eq!(grid[10][5], 0);
    }
}
