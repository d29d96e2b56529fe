//! Snapshot module - plain, serializable view of a session
//!
//! Renderers read a snapshot once per frame instead of borrowing the
//! session. `Session::snapshot_into` refills an existing snapshot and reuses
//! its row allocations.

use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::types::{Cell, EMPTY};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    /// Cell id of the piece kind
    pub id: Cell,
    /// Current orientation, square, top row first
    pub matrix: Vec<Vec<Cell>>,
    pub x: i32,
    pub y: i32,
}

impl From<&Player> for ActiveSnapshot {
    fn from(value: &Player) -> Self {
        Self {
            id: value.kind.id(),
            matrix: value.matrix.to_rows(),
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub width: usize,
    pub height: usize,
    /// Settled cells, top row first
    pub arena: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub running: bool,
    pub drop_counter_ms: u32,
}

impl SessionSnapshot {
    /// Settled cell at (x, y), or empty when out of bounds.
    pub fn arena_cell(&self, x: usize, y: usize) -> Cell {
        self.arena
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(EMPTY)
    }

    /// Cell as a renderer would paint it: the active piece over the arena.
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        if let Some(active) = &self.active {
            let local_x = x as i64 - active.x as i64;
            let local_y = y as i64 - active.y as i64;
            if local_x >= 0 && local_y >= 0 {
                let piece_cell = active
                    .matrix
                    .get(local_y as usize)
                    .and_then(|row| row.get(local_x as usize))
                    .copied()
                    .unwrap_or(EMPTY);
                if piece_cell != EMPTY {
                    return piece_cell;
                }
            }
        }
        self.arena_cell(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_overlays_active_piece() {
        let snap = SessionSnapshot {
            width: 4,
            height: 4,
            arena: vec![vec![0; 4], vec![0; 4], vec![0; 4], vec![3, 3, 3, 0]],
            active: Some(ActiveSnapshot {
                id: 2,
                matrix: vec![vec![2, 2], vec![2, 2]],
                x: 1,
                y: 1,
            }),
            ..SessionSnapshot::default()
        };

        assert_eq!(snap.cell_at(0, 0), 0);
        assert_eq!(snap.cell_at(1, 1), 2);
        assert_eq!(snap.cell_at(2, 2), 2);
        assert_eq!(snap.cell_at(0, 3), 3);
        assert_eq!(snap.cell_at(3, 3), 0);
        assert_eq!(snap.arena_cell(9, 9), 0);
    }
}
