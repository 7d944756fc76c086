//! Board module - manages the game grid
//!
//! The board is a 10x40 grid where each cell is empty or filled with a piece kind.
//! Rows 0-19 are the hidden spawn buffer, rows 20-39 the visible playfield.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..39 (top to bottom), col ranges 0..9.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 40 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if !Self::in_bounds(row, col) {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Reset every cell to empty.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Get the cell at (row, col).
    ///
    /// Returns `None` if out of bounds, `Some(None)` for an empty cell.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the cell at (row, col).
    ///
    /// Out-of-bounds writes are ignored; returns whether the cell was written.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Position is inside the grid.
    pub fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < BOARD_HEIGHT as i8 && col >= 0 && col < BOARD_WIDTH as i8
    }

    /// Position is inside the grid and holds no block.
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Write the four given coordinates with `kind`'s colour.
    ///
    /// Coordinates must already be validated by the caller; nothing is checked
    /// beyond the silent bounds clamp of [`Board::set`].
    pub fn lock(&mut self, cells: &[(i8, i8); 4], kind: PieceKind) {
        for &(row, col) in cells {
            self.set(row, col, Some(kind));
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are scanned bottom to top. A full row is overwritten by shifting
    /// everything above it down by one, the top row is cleared, and the same row
    /// index is examined again since it now holds the row from above.
    pub fn clear_lines(&mut self) -> u32 {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut row = BOARD_HEIGHT as usize;

        while row > 0 {
            let current = row - 1;
            if !self.is_row_full(current) {
                row -= 1;
                continue;
            }

            cleared += 1;
            // copy_within handles the overlapping ranges
            self.cells.copy_within(0..current * width, width);
            self.cells[..width].fill(None);
        }

        cleared
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        let width = BOARD_WIDTH as usize;
        let start = row.min(BOARD_HEIGHT as usize - 1) * width;
        &self.cells[start..start + width]
    }

    /// Write the grid as colour ids (0 = empty, 1-7 = piece colours).
    pub fn write_color_grid(
        &self,
        out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        for (dst, src) in out
            .iter_mut()
            .zip(self.cells.chunks_exact(BOARD_WIDTH as usize))
        {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.map(|kind| kind.color_id()).unwrap_or(0);
            }
        }
    }

    /// Create from a list of rows for testing; missing rows at the top are empty.
    ///
    /// Each string is one row, `.` for empty and a piece letter for filled.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let top = BOARD_HEIGHT as usize - rows.len();
        for (i, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'I' => Some(PieceKind::I),
                    'O' => Some(PieceKind::O),
                    'T' => Some(PieceKind::T),
                    'S' => Some(PieceKind::S),
                    'Z' => Some(PieceKind::Z),
                    'J' => Some(PieceKind::J),
                    'L' => Some(PieceKind::L),
                    _ => None,
                };
                board.set((top + i) as i8, col as i8, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
