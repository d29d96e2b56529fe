//! Player module - the active falling piece
//!
//! A [`Player`] is a piece matrix plus its offset into arena coordinates.
//! All movement is checked against an [`Arena`]; a rejected step leaves the
//! piece exactly where it was.

use tracing::debug;

use crate::arena::Arena;
use crate::pieces::{get_shape, spawn_x, PieceMatrix};
use crate::types::{RotationDirection, Tetromino};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub kind: Tetromino,
    pub matrix: PieceMatrix,
    pub x: i32,
    pub y: i32,
}

impl Player {
    /// Create a piece in spawn orientation at (x, y).
    pub fn new(kind: Tetromino, x: i32, y: i32) -> Self {
        Self {
            kind,
            matrix: get_shape(kind),
            x,
            y,
        }
    }

    /// Create a piece at the top of an arena, horizontally centered.
    pub fn spawn(kind: Tetromino, arena_width: usize) -> Self {
        let matrix = get_shape(kind);
        Self {
            kind,
            matrix,
            x: spawn_x(arena_width, matrix.size()),
            y: 0,
        }
    }

    /// Whether the piece overlaps the stack or leaves the arena.
    pub fn collides(&self, arena: &Arena) -> bool {
        arena.collide(&self.matrix, self.x, self.y)
    }

    /// Shift by (dx, dy); reverts and returns false if the new position collides.
    pub fn try_shift(&mut self, arena: &Arena, dx: i32, dy: i32) -> bool {
        self.x += dx;
        self.y += dy;
        if self.collides(arena) {
            self.x -= dx;
            self.y -= dy;
            return false;
        }
        true
    }

    /// Rotate with a horizontal kick search.
    ///
    /// After rotating, while the piece collides it is displaced by a growing
    /// zig-zag offset (+1, -2, +3, -4, ... applied cumulatively, so the tried
    /// columns are +1, -1, +2, ... from the start). Once the next offset
    /// exceeds the matrix width the rotation is undone, the column restored,
    /// and false is returned. Only positive offsets are bounded, and the
    /// bound is checked after a displacement is applied but before it is
    /// tested, so the last applied displacement is never tried.
    pub fn rotate(&mut self, arena: &Arena, direction: RotationDirection) -> bool {
        let origin_x = self.x;
        let width = self.matrix.size() as i32;
        let mut offset: i32 = 1;

        self.matrix.rotate(direction);
        while self.collides(arena) {
            self.x += offset;
            offset = -(offset + offset.signum());
            if offset > width {
                self.matrix.rotate(direction.reverse());
                self.x = origin_x;
                debug!(kind = ?self.kind, x = origin_x, "rotation rejected");
                return false;
            }
        }

        true
    }

    /// Write the piece into the arena.
    pub fn merge_into(&self, arena: &mut Arena) {
        arena.merge(&self.matrix, self.x, self.y);
    }
}
