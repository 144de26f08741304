//! Board module - the settled-cell grid
//!
//! The board is a 10x24 grid where each cell is empty or holds a color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..23
//! (bottom to top). Row 0 is the floor. Everything outside the grid is wall:
//! reads there return `None` and writes are rejected.

use arrayvec::ArrayVec;

use crate::types::{Cell, GameColor, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};

/// Row indices at which a sweep collapsed a row, in sweep order
pub type CollapsedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 24 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x), row 0 first
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if position lies outside the grid
    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn cell_at(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set_cell(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and filled
    ///
    /// Out-of-grid positions are not occupied; callers that treat walls as
    /// solid check bounds themselves.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.cell_at(x, y), Some(Some(_)))
    }

    /// Cells of one row, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|cells| cells.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Remove a row by shifting every row above it down by one
    ///
    /// Row `y + 1` becomes row `y`, and so on up to the top. The top row is
    /// not cleared afterwards: its content ends up in both of the two topmost
    /// rows.
    pub fn collapse_row(&mut self, y: usize) {
        let height = BOARD_HEIGHT as usize;
        if y >= height {
            return;
        }
        let width = BOARD_WIDTH as usize;
        // copy_within handles the overlapping ranges
        self.cells
            .copy_within((y + 1) * width..height * width, y * width);
    }

    /// Collapse full rows in a single bottom-up pass
    ///
    /// Each row index is checked once. After a collapse the row that moved
    /// into that index is not re-checked until the next sweep, so two
    /// stacked full rows take two sweeps to disappear.
    pub fn sweep_and_clear(&mut self) -> CollapsedRows {
        let mut collapsed = CollapsedRows::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                self.collapse_row(y);
                collapsed.push(y);
            }
        }
        collapsed
    }

    /// Write cells with one color (used when freezing a piece)
    ///
    /// Positions outside the grid are skipped. Returns how many were written.
    pub fn write_cells(&mut self, positions: &[(i8, i8)], color: GameColor) -> usize {
        positions
            .iter()
            .filter(|&&(x, y)| self.set_cell(x, y, Some(color)))
            .count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over filled cells as `(x, y, color)`, bottom row first
    pub fn filled_cells(&self) -> impl Iterator<Item = (u8, u8, GameColor)> + '_ {
        let width = BOARD_WIDTH as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|color| ((i % width) as u8, (i / width) as u8, color))
        })
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Create from rows listed bottom-up for testing; missing rows stay empty
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[[Cell; BOARD_WIDTH as usize]]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                board.set_cell(x as i8, y as i8, *cell);
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
