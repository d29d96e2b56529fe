//! Pieces module - tetromino catalog and matrix rotation
//!
//! Each tetromino is stored as a square matrix of cell ids. Rotation is a
//! transpose followed by a row or column reversal, which is only a true
//! quarter turn on a square matrix. That is why the I piece is a padded 4x4
//! and not a 1x4 bar: the square bounding box is part of the catalog, and the
//! [`PieceMatrix`] constructors only accept square input.

use crate::types::{Cell, RotationDirection, Tetromino, EMPTY};

/// Side of the largest bounding box in the catalog (the I piece).
pub const MAX_PIECE_SIZE: usize = 4;

/// A square piece matrix, `size x size`, stored in a fixed 4x4 block.
///
/// Cells outside the `size x size` window are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMatrix {
    size: usize,
    cells: [[Cell; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

impl PieceMatrix {
    /// 2x2 matrix.
    pub const fn square2(rows: [[Cell; 2]; 2]) -> Self {
        let mut cells = [[EMPTY; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        let mut y = 0;
        while y < 2 {
            let mut x = 0;
            while x < 2 {
                cells[y][x] = rows[y][x];
                x += 1;
            }
            y += 1;
        }
        Self { size: 2, cells }
    }

    /// 3x3 matrix.
    pub const fn square3(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [[EMPTY; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        let mut y = 0;
        while y < 3 {
            let mut x = 0;
            while x < 3 {
                cells[y][x] = rows[y][x];
                x += 1;
            }
            y += 1;
        }
        Self { size: 3, cells }
    }

    /// 4x4 matrix.
    pub const fn square4(rows: [[Cell; 4]; 4]) -> Self {
        Self {
            size: 4,
            cells: rows,
        }
    }

    /// Side length (the matrix is always square).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at column `x`, row `y`. Outside the matrix reads as empty.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.size || y >= self.size {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// Rows from top to bottom, each `size` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells[..self.size].iter().map(|row| &row[..self.size])
    }

    /// Occupied cells as `(x, y, id)` in piece-local coordinates.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != EMPTY)
                .map(move |(x, &cell)| (x as i32, y as i32, cell))
        })
    }

    /// Rotate a quarter turn in place.
    ///
    /// Transpose, then reverse every row (clockwise) or the row order
    /// (counter-clockwise).
    pub fn rotate(&mut self, direction: RotationDirection) {
        let n = self.size;
        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[x][y];
                self.cells[x][y] = self.cells[y][x];
                self.cells[y][x] = tmp;
            }
        }

        match direction {
            RotationDirection::Clockwise => {
                for row in &mut self.cells[..n] {
                    row[..n].reverse();
                }
            }
            RotationDirection::CounterClockwise => self.cells[..n].reverse(),
        }
    }

    /// Copy into nested vectors (for snapshots).
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

const T_SHAPE: PieceMatrix = PieceMatrix::square3([[0, 0, 0], [1, 1, 1], [0, 1, 0]]);

const O_SHAPE: PieceMatrix = PieceMatrix::square2([[2, 2], [2, 2]]);

const L_SHAPE: PieceMatrix = PieceMatrix::square3([[0, 3, 0], [0, 3, 0], [0, 3, 3]]);

const J_SHAPE: PieceMatrix = PieceMatrix::square3([[0, 4, 0], [0, 4, 0], [4, 4, 0]]);

const I_SHAPE: PieceMatrix = PieceMatrix::square4([
    [0, 5, 0, 0],
    [0, 5, 0, 0],
    [0, 5, 0, 0],
    [0, 5, 0, 0],
]);

const S_SHAPE: PieceMatrix = PieceMatrix::square3([[0, 6, 6], [6, 6, 0], [0, 0, 0]]);

const Z_SHAPE: PieceMatrix = PieceMatrix::square3([[7, 7, 0], [0, 7, 7], [0, 0, 0]]);

/// Spawn orientation of a piece kind. Returns a fresh copy.
pub fn get_shape(kind: Tetromino) -> PieceMatrix {
    match kind {
        Tetromino::T => T_SHAPE,
        Tetromino::O => O_SHAPE,
        Tetromino::L => L_SHAPE,
        Tetromino::J => J_SHAPE,
        Tetromino::I => I_SHAPE,
        Tetromino::S => S_SHAPE,
        Tetromino::Z => Z_SHAPE,
    }
}

/// Spawn column for a piece: centered with integer division.
pub fn spawn_x(arena_width: usize, piece_size: usize) -> i32 {
    (arena_width / 2) as i32 - (piece_size / 2) as i32
}
