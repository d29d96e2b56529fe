//! Terminal front end for the arena game.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit,
//! so every arena cell maps to an exact run of terminal columns
//! (2 chars wide per cell by default).

pub mod fb;
pub mod game_view;
pub mod notices;
pub mod renderer;

pub use arena_tetris_core as core;
pub use arena_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_color, GameView, Viewport};
pub use notices::{NoticeView, Notices};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
