//! Arena module - the playfield grid
//!
//! The arena is a `width x height` grid of cell ids (0 = empty).
//! Cells live in a flat row-major vector for cache locality; rows are never
//! added or removed, only cleared and shifted, so the dimensions are fixed for
//! the lifetime of the arena.
//! Coordinates: (x, y) where x grows to the right and y grows downwards.

use crate::pieces::PieceMatrix;
use crate::types::{Cell, EMPTY};

/// The playfield grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Arena {
    /// Create an empty arena. Dimensions are clamped to at least one cell.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
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

    /// Within bounds and empty.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(EMPTY))
    }

    /// Whether any occupied cell of `matrix`, placed with its top-left corner
    /// at (x, y), lands on an occupied cell or outside the arena.
    ///
    /// Every side of the arena counts as occupied, including the top.
    pub fn collide(&self, matrix: &PieceMatrix, x: i32, y: i32) -> bool {
        matrix
            .occupied()
            .any(|(dx, dy, _)| !self.is_free(x + dx, y + dy))
    }

    /// Write every occupied cell of `matrix` into the arena (overwrite).
    /// Cells that fall outside the arena are skipped.
    pub fn merge(&mut self, matrix: &PieceMatrix, x: i32, y: i32) {
        for (dx, dy, cell) in matrix.occupied() {
            self.set(x + dx, y + dy, cell);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|&cell| cell != EMPTY))
    }

    /// Clear a row and shift all rows above it down by one.
    /// The freed top row ends up empty.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height {
            return;
        }

        let width = self.width;

        // copy_within handles overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(EMPTY);
    }

    /// Clear every full row and return how many were cleared.
    ///
    /// Rows are scanned bottom to top. After a clear the same row index is
    /// examined again, because the row that was above it has just moved into
    /// its place; this clears stacked full rows in a single pass.
    pub fn sweep(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.height;

        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Borrow one row.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire arena
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Fill a whole row with `cell`. Returns false if `y` is out of bounds.
    pub fn fill_row(&mut self, y: usize, cell: Cell) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width].fill(cell);
        true
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }
}
