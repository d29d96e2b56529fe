//! Arena tests - grid, collision and row sweeping

use arena_tetris::core::{get_shape, Arena};
use arena_tetris::types::{Tetromino, EMPTY};

#[test]
fn test_arena_new_empty() {
    let arena = Arena::new(12, 20);
    assert_eq!(arena.width(), 12);
    assert_eq!(arena.height(), 20);
    assert_eq!(arena.rows().count(), 20);
    assert!(arena.rows().all(|row| row.len() == 12));
    assert_eq!(arena.occupied_count(), 0);
}

#[test]
fn test_arena_get_out_of_bounds() {
    let arena = Arena::new(12, 20);

    assert_eq!(arena.get(-1, 0), None);
    assert_eq!(arena.get(0, -1), None);
    assert_eq!(arena.get(12, 0), None);
    assert_eq!(arena.get(0, 20), None);
    assert_eq!(arena.get(11, 19), Some(EMPTY));
}

#[test]
fn test_sweep_ignores_almost_full_row() {
    let mut arena = Arena::new(12, 20);
    for x in 0..11 {
        arena.set(x, 19, 3);
    }

    assert_eq!(arena.sweep(), 0);
    assert_eq!(arena.occupied_count(), 11);
}

#[test]
fn test_sweep_full_bottom_row() {
    let mut arena = Arena::new(12, 20);
    arena.fill_row(19, 5);
    arena.set(4, 18, 2);

    assert_eq!(arena.sweep(), 1);

    // The cleared row reappears empty at the top; the rest shifted down.
    assert!(arena.row(0).unwrap().iter().all(|&c| c == EMPTY));
    assert_eq!(arena.get(4, 19), Some(2));
    assert_eq!(arena.occupied_count(), 1);
    assert_eq!(arena.width(), 12);
    assert_eq!(arena.height(), 20);
}

#[test]
fn test_sweep_non_adjacent_rows() {
    let mut arena = Arena::new(6, 8);
    arena.fill_row(7, 1);
    arena.set(0, 6, 2);
    arena.fill_row(5, 1);
    arena.set(3, 4, 7);

    assert_eq!(arena.sweep(), 2);

    // Row 6 moves down by one cleared row, row 4 by two.
    assert_eq!(arena.get(0, 7), Some(2));
    assert_eq!(arena.get(3, 6), Some(7));
    assert_eq!(arena.occupied_count(), 2);
    assert_eq!(arena.rows().count(), 8);
}

#[test]
fn test_sweep_whole_arena() {
    let mut arena = Arena::new(4, 4);
    for y in 0..4 {
        arena.fill_row(y, 6);
    }

    assert_eq!(arena.sweep(), 4);
    assert_eq!(arena.occupied_count(), 0);
}

#[test]
fn test_collide_bounds() {
    let arena = Arena::new(12, 20);
    let o = get_shape(Tetromino::O);

    assert!(!arena.collide(&o, 0, 0));
    assert!(!arena.collide(&o, 10, 18));
    assert!(arena.collide(&o, -1, 0));
    assert!(arena.collide(&o, 11, 0));
    assert!(arena.collide(&o, 0, 19));
    // Above the arena counts as outside too.
    assert!(arena.collide(&o, 0, -1));
}

#[test]
fn test_collide_ignores_empty_matrix_cells() {
    let arena = Arena::new(12, 20);
    // T's top row is empty, so it may hang above the arena.
    let t = get_shape(Tetromino::T);
    assert!(!arena.collide(&t, 0, -1));
}

#[test]
fn test_collide_with_stack_and_merge() {
    let mut arena = Arena::new(12, 20);
    let o = get_shape(Tetromino::O);

    arena.merge(&o, 5, 18);
    assert_eq!(arena.get(5, 18), Some(2));
    assert_eq!(arena.get(6, 19), Some(2));
    assert_eq!(arena.occupied_count(), 4);

    assert!(arena.collide(&o, 5, 17));
    assert!(arena.collide(&o, 6, 17));
    assert!(!arena.collide(&o, 5, 16));
    assert!(!arena.collide(&o, 7, 18));
}
