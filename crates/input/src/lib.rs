//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The session
//! decides whether an action is honored; this crate only translates keys.

pub mod map;

pub use arena_tetris_types as types;

pub use map::{map_key, should_quit};
