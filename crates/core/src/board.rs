//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid where each cell is empty or holds the
//! color of the piece that settled there. Dimensions are fixed at construction.
//! Uses a flat vector (row-major) allocated once for cache locality.
//! Coordinates: (x, y) where x runs left to right and y runs top to bottom.

use crate::error::CoreError;
use crate::types::{Cell, PieceColor};

/// The game board using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u16,
    rows: u16,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Zero columns or rows cannot hold any piece and are rejected.
    pub fn new(cols: u16, rows: u16) -> Result<Self, CoreError> {
        if cols == 0 || rows == 0 {
            return Err(CoreError::InvalidDimensions { cols, rows });
        }
        Ok(Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u16 {
        self.cols
    }

    /// Get height of the board
    pub fn height(&self) -> u16 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows as usize {
            return None;
        }
        let width = self.cols as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Fill every cell of row `y` with `color`
    pub fn fill_row(&mut self, y: usize, color: PieceColor) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        let width = self.cols as usize;
        let start = y * width;
        self.cells[start..start + width].fill(Some(color));
        true
    }

    /// Clear all full rows and return how many were removed
    ///
    /// Equivalent to removing each full row in ascending index order and
    /// inserting an empty row at the top: surviving rows keep their order and
    /// drop by the number of full rows below them. Implemented as a bottom-up
    /// two-pointer compaction with no allocation.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = self.cols as usize;
        let mut cleared = 0u32;
        let mut write_y = self.rows as usize;

        // Scan from bottom to top
        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
