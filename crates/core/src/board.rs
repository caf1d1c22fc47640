//! Board module - manages the game grid
//!
//! The board is a `rows x columns` grid where each cell can be empty or filled with a
//! piece kind. Cells live in one flat row-major vector for cache locality; the
//! dimensions are fixed once the board is built.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom).

use crate::error::{EngineError, Result};
use crate::pieces::offset;
use crate::types::{cell_tag, Cell, PieceKind, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION};

/// The game board - flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    columns: u16,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Fails if either dimension is zero or larger than [`MAX_DIMENSION`].
    pub fn new(rows: u16, columns: u16) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(EngineError::InvalidDimensions { rows, columns });
        }
        if rows > MAX_DIMENSION || columns > MAX_DIMENSION {
            return Err(EngineError::DimensionTooLarge {
                rows,
                columns,
                max: MAX_DIMENSION,
            });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![None; rows as usize * columns as usize],
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.columns as usize) + (x as usize))
    }

    /// Flat cell range of row `y`, `None` if the row is off the board
    #[inline]
    fn row_range(&self, y: i16) -> Option<std::ops::Range<usize>> {
        if y < 0 || y >= self.rows as i16 {
            return None;
        }
        let width = self.columns as usize;
        let y = y as usize;
        Some(y * width..(y + 1) * width)
    }

    /// Number of rows
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || x >= self.columns as i16 || y < 0 || y >= self.rows as i16
    }

    /// Check if a row is completely filled
    pub fn is_line_full(&self, y: i16) -> bool {
        self.row_range(y)
            .is_some_and(|range| self.cells[range].iter().all(|cell| cell.is_some()))
    }

    /// Empty every cell of a row without shifting anything
    /// Returns false if the row is out of bounds
    pub fn clear_line(&mut self, y: i16) -> bool {
        let Some(range) = self.row_range(y) else {
            return false;
        };
        self.cells[range].fill(None);
        true
    }

    /// Remove every full row, shifting the rows above it down.
    ///
    /// Scans top to bottom. Each full row is emptied and rotated to the top of the
    /// board, so every row above it moves down by one and the relative order of the
    /// surviving rows is preserved. Returns the cleared row indices as they were
    /// before the clear, top to bottom.
    pub fn clear_full_rows(&mut self) -> Vec<i16> {
        let width = self.columns as usize;
        let mut cleared = Vec::new();

        for y in 0..self.rows as i16 {
            if self.is_line_full(y) {
                self.clear_line(y);
                // Rows 0..=y: the emptied row moves to the top, the rest slide down.
                self.cells[..(y as usize + 1) * width].rotate_right(width);
                cleared.push(y);
            }
        }

        cleared
    }

    /// Write each `(x, y, kind)` into the board
    ///
    /// Out-of-bounds cells are skipped. Returns the number of cells written.
    pub fn stamp(&mut self, minos: impl IntoIterator<Item = (i16, i16, PieceKind)>) -> usize {
        minos
            .into_iter()
            .filter(|&(x, y, kind)| self.set(x, y, Some(kind)))
            .count()
    }

    /// Check that every offset lands on an in-bounds, empty cell
    pub fn fits(&self, offsets: &[(i16, i16)], x: i16, y: i16) -> bool {
        offsets
            .iter()
            .all(|&(dx, dy)| offset(x, y, dx, dy).is_some_and(|(cx, cy)| self.is_valid(cx, cy)))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns as usize)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Export the board as a grid of color tags (`0` = empty)
    pub fn to_tag_grid(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|&cell| cell_tag(cell)).collect())
            .collect()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with `kind`
    pub fn fill_line(&mut self, y: i16, kind: PieceKind) -> bool {
        let Some(range) = self.row_range(y) else {
            return false;
        };
        self.cells[range].fill(Some(kind));
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cells: vec![None; DEFAULT_ROWS as usize * DEFAULT_COLUMNS as usize],
        }
    }
}
